//! Each representation is modeled with its own type and every conversion
//! between two of them passes through [`Rgb`]:
//!
//! ```rust
//! use colorway::{Hex, DEFAULT_PRECISION};
//! let hsv = Hex::new("#11c380")?   // parse the hex string.
//!     .to_rgb()                    // convert to rgb.
//!     .to_hsv(DEFAULT_PRECISION);  // convert to hsv.
//! assert_eq!(hsv.hue(), 157);
//! # Ok::<(), colorway::Error>(())
//! ```
//!
//! This module holds the math shared by the cylindrical notations: the
//! chroma/hue analysis of an RGB color and the hue sector synthesis that turns
//! a hue, chroma and level back into RGB channels.

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    math::clamp,
    Hex, Hsl, Hsv, Ral, Rgb,
};

/// Chroma, hue and extremes of an RGB color with channels normalized to
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ChromaHue {
    pub max: Component,
    pub min: Component,
    pub chroma: Component,
    /// Hue in degrees within `[0, 360)`. Zero when there is no chroma.
    pub hue: Component,
}

impl ChromaHue {
    /// The largest normalized channel, also known as value or brightness.
    pub fn value(&self) -> Component {
        self.max
    }
}

/// Calculate the chroma and hue of a color along with its min and max
/// channels.
pub(crate) fn chroma_hue(rgb: &Rgb) -> ChromaHue {
    let [red, green, blue]: [Component; 3] = (*rgb).into();

    let max = red.max(green).max(blue);
    let min = red.min(green).min(blue);
    let chroma = max - min;

    let mut hue = if chroma == 0.0 {
        0.0
    } else if max == red {
        60.0 * ((green - blue) / chroma).rem_euclid(6.0)
    } else if max == green {
        60.0 * ((blue - red) / chroma + 2.0)
    } else {
        60.0 * ((red - green) / chroma + 4.0)
    };

    if hue < 0.0 {
        hue += 360.0;
    }

    ChromaHue {
        max,
        min,
        chroma,
        hue,
    }
}

/// How the channel offset is derived from the level component when a
/// cylindrical color is turned back into RGB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Offset {
    /// HSL: `lightness - chroma / 2`.
    Lightness,
    /// HSV: `value - chroma`.
    Value,
}

/// Pick the unordered RGB triple for the hue sector `hue_normalized` falls
/// into. `hue_normalized` is the hue divided by 60 degrees.
///
/// A normalized hue of exactly 6 (360 degrees) belongs to the last sector.
pub(crate) fn hue_sector(
    hue_normalized: Component,
    chroma: Component,
    second_max: Component,
) -> Result<(Component, Component, Component)> {
    if !(0.0..=6.0).contains(&hue_normalized) {
        return Err(Error::OutOfDomain(hue_normalized));
    }

    let sector = hue_normalized.floor().min(5.0) as u8;

    let (c, x) = (chroma, second_max);
    Ok(match sector {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    })
}

/// Shift the sector triple by the offset and scale it up to 8-bit channels.
pub(crate) fn finalize(
    (red, green, blue): (Component, Component, Component),
    level: Component,
    chroma: Component,
    offset: Offset,
) -> Rgb {
    let m = match offset {
        Offset::Lightness => level - chroma / 2.0,
        Offset::Value => level - chroma,
    };

    let channel = |c: Component| clamp(((c + m) * 255.0).round(), 0.0, 255.0);

    Rgb::new(channel(red), channel(green), channel(blue))
}

/// Convert a hue in degrees with the given chroma and level (lightness or
/// value) to RGB.
pub(crate) fn hue_to_rgb(
    hue: u16,
    chroma: Component,
    level: Component,
    offset: Offset,
) -> Result<Rgb> {
    let hue_normalized = Component::from(hue) / 60.0;
    let h_mod_2 = hue_normalized - 2.0 * (hue_normalized / 2.0).floor();
    let second_max = chroma * (1.0 - (h_mod_2 - 1.0).abs());

    let components = hue_sector(hue_normalized, chroma, second_max)?;

    Ok(finalize(components, level, chroma, offset))
}

/// Implemented by every representation that can be turned into [`Rgb`].
pub trait ToRgb {
    /// Convert the color to RGB. Fails only for representations that can
    /// hold colors without an RGB equivalent, like unknown RAL codes.
    fn try_to_rgb(&self) -> Result<Rgb>;
}

impl ToRgb for Rgb {
    fn try_to_rgb(&self) -> Result<Rgb> {
        Ok(*self)
    }
}

impl ToRgb for Hex {
    fn try_to_rgb(&self) -> Result<Rgb> {
        Ok(self.to_rgb())
    }
}

impl ToRgb for Hsl {
    fn try_to_rgb(&self) -> Result<Rgb> {
        self.to_rgb()
    }
}

impl ToRgb for Hsv {
    fn try_to_rgb(&self) -> Result<Rgb> {
        self.to_rgb()
    }
}

impl ToRgb for Ral {
    fn try_to_rgb(&self) -> Result<Rgb> {
        self.to_rgb()
    }
}

impl ToRgb for Color {
    fn try_to_rgb(&self) -> Result<Rgb> {
        self.to_rgb()
    }
}

impl Color {
    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        match self {
            Color::Rgb(rgb) => Ok(*rgb),
            Color::Hex(hex) => Ok(hex.to_rgb()),
            Color::Hsl(hsl) => hsl.to_rgb(),
            Color::Hsv(hsv) => hsv.to_rgb(),
            Color::Ral(ral) => ral.to_rgb(),
        }
    }

    /// Convert this color from its current representation to the specified
    /// one. `precision` is the number of decimal digits used when the target
    /// is HSL or HSV. Converting to [`Space::Ral`] picks the closest color in
    /// the RAL table.
    pub fn to_space(&self, space: Space, precision: u32) -> Result<Self> {
        if self.space() == space {
            return Ok(self.clone());
        }

        // RAL colors are stored as hex strings, so skip the detour.
        if let (Color::Ral(ral), Space::Hex) = (self, space) {
            return Ok(ral.to_hex()?.into());
        }

        let rgb = self.to_rgb()?;

        Ok(match space {
            Space::Rgb => rgb.into(),
            Space::Hex => rgb.to_hex().into(),
            Space::Hsl => rgb.to_hsl(precision).into(),
            Space::Hsv => rgb.to_hsv(precision).into(),
            Space::Ral => Ral::find_closest(&rgb)?
                .ok_or(Error::EmptyPalette)?
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, DEFAULT_PRECISION};

    #[test]
    fn chroma_hue_of_primaries() {
        let red = chroma_hue(&Rgb::new(255, 0, 0));
        assert_component_eq!(red.hue, 0.0);
        assert_component_eq!(red.chroma, 1.0);

        let green = chroma_hue(&Rgb::new(0, 255, 0));
        assert_component_eq!(green.hue, 120.0);

        let blue = chroma_hue(&Rgb::new(0, 0, 255));
        assert_component_eq!(blue.hue, 240.0);

        let fuchsia = chroma_hue(&Rgb::new(255, 0, 255));
        assert_component_eq!(fuchsia.hue, 300.0);
    }

    #[test]
    fn hue_is_zero_if_there_is_no_chroma() {
        for gray in [0, 51, 128, 255] {
            let analysis = chroma_hue(&Rgb::new(gray, gray, gray));
            assert_component_eq!(analysis.chroma, 0.0);
            assert_component_eq!(analysis.hue, 0.0);
            assert_component_eq!(analysis.value(), Component::from(gray as u8) / 255.0);
        }
    }

    #[test]
    fn hue_stays_positive_when_blue_exceeds_green() {
        // max is red, green < blue.
        let analysis = chroma_hue(&Rgb::new(255, 0, 128));
        assert!(analysis.hue > 300.0 && analysis.hue < 360.0);
    }

    #[test]
    fn hue_sectors() {
        let (c, x) = (1.0, 0.5);
        assert_eq!(hue_sector(0.5, c, x), Ok((c, x, 0.0)));
        assert_eq!(hue_sector(1.5, c, x), Ok((x, c, 0.0)));
        assert_eq!(hue_sector(2.5, c, x), Ok((0.0, c, x)));
        assert_eq!(hue_sector(3.5, c, x), Ok((0.0, x, c)));
        assert_eq!(hue_sector(4.5, c, x), Ok((x, 0.0, c)));
        assert_eq!(hue_sector(5.5, c, x), Ok((c, 0.0, x)));
    }

    #[test]
    fn sector_boundaries_belong_to_the_upper_sector() {
        let (c, x) = (1.0, 0.25);
        assert_eq!(hue_sector(0.0, c, x), Ok((c, x, 0.0)));
        assert_eq!(hue_sector(1.0, c, x), Ok((x, c, 0.0)));
        assert_eq!(hue_sector(5.0, c, x), Ok((c, 0.0, x)));
    }

    #[test]
    fn full_turn_stays_in_last_sector() {
        assert_eq!(hue_sector(6.0, 1.0, 0.25), Ok((1.0, 0.0, 0.25)));
        assert_eq!(hue_sector(6.0, 1.0, 0.0), hue_sector(0.0, 1.0, 0.0));
        assert_eq!(
            hue_to_rgb(360, 1.0, 0.5, Offset::Lightness),
            hue_to_rgb(0, 1.0, 0.5, Offset::Lightness)
        );
    }

    #[test]
    fn hue_outside_of_sectors_is_rejected() {
        assert_eq!(hue_sector(-0.1, 1.0, 0.0), Err(Error::OutOfDomain(-0.1)));
        assert_eq!(hue_sector(6.5, 1.0, 0.0), Err(Error::OutOfDomain(6.5)));
        assert!(matches!(
            hue_sector(Component::NAN, 1.0, 0.0),
            Err(Error::OutOfDomain(_))
        ));
        assert!(hue_to_rgb(361, 1.0, 0.5, Offset::Value).is_err());
    }

    #[test]
    fn finalize_offsets() {
        // hsl(0, 100%, 50%): chroma 1, offset 0.
        assert_eq!(
            finalize((1.0, 0.0, 0.0), 0.5, 1.0, Offset::Lightness),
            Rgb::new(255, 0, 0)
        );
        // hsv(0, 0%, 100%): chroma 0, offset 1.
        assert_eq!(
            finalize((0.0, 0.0, 0.0), 1.0, 0.0, Offset::Value),
            Rgb::new(255, 255, 255)
        );
    }

    #[test]
    fn test_conversions() {
        let source = Color::from(Hex::new("#11c380").unwrap());

        let rgb = source.to_space(Space::Rgb, DEFAULT_PRECISION).unwrap();
        assert_eq!(rgb, Color::Rgb(Rgb::new(17, 195, 128)));

        let Color::Hsl(hsl) = source.to_space(Space::Hsl, DEFAULT_PRECISION).unwrap() else {
            panic!("expected hsl");
        };
        assert_eq!(hsl.hue(), 157);
        assert_component_eq!(hsl.saturation(), 0.8396);
        assert_component_eq!(hsl.lightness(), 0.4157);

        let Color::Hsv(hsv) = rgb.to_space(Space::Hsv, DEFAULT_PRECISION).unwrap() else {
            panic!("expected hsv");
        };
        assert_eq!(hsv.hue(), 157);
        assert_component_eq!(hsv.saturation(), 0.9128);
        assert_component_eq!(hsv.value(), 0.7647);

        let hex = Color::from(Hsv::new(300, 1.0, 1.0))
            .to_space(Space::Hex, DEFAULT_PRECISION)
            .unwrap();
        assert_eq!(hex, Color::Hex(Hex::new("ff00ff").unwrap()));

        let back = Color::from(Hsl::new(300, 1.0, 0.5))
            .to_space(Space::Rgb, DEFAULT_PRECISION)
            .unwrap();
        assert_eq!(back, Color::Rgb(Rgb::new(255, 0, 255)));
    }

    #[test]
    fn ral_conversions() {
        let ral = Color::from(Ral::new(9004));
        assert_eq!(
            ral.to_space(Space::Hex, DEFAULT_PRECISION).unwrap(),
            Color::Hex(Hex::new("#2F3133").unwrap())
        );

        let nearest = Color::from(Hex::new("#333333").unwrap())
            .to_space(Space::Ral, DEFAULT_PRECISION)
            .unwrap();
        assert_eq!(nearest, Color::Ral(Ral::new(9004)));

        let missing = Color::from(Ral::new(1010));
        assert_eq!(
            missing.to_space(Space::Rgb, DEFAULT_PRECISION),
            Err(Error::LookupMiss(1010))
        );
    }

    #[test]
    fn converting_to_the_same_space_is_a_copy() {
        let hsl = Color::from(Hsl::new(18, 0.34, 0.41));
        assert_eq!(hsl.to_space(Space::Hsl, 0).unwrap(), hsl);
    }
}
