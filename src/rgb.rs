//! Model a color with 8-bit red, green and blue channels.

use std::fmt;

use crate::{
    color::{Component, Numeric},
    convert::chroma_hue,
    math::{clamp, round_to},
    Hex, Hsl, Hsv,
};

colorway_macros::gen_model! {
    /// A color specified with red, green and blue channels in `[0, 255]`.
    ///
    /// This is the pivot all other representations convert through.
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

fn channel(value: impl Into<Numeric>) -> u8 {
    clamp(value.into().value(), 0.0, 255.0) as u8
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels. Each channel
    /// is clamped to `[0, 255]` and truncated to an integer.
    pub fn new(
        red: impl Into<Numeric>,
        green: impl Into<Numeric>,
        blue: impl Into<Numeric>,
    ) -> Self {
        Self {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
        }
    }

    /// Convert the color to a 6 digit lowercase hex string.
    pub fn to_hex(&self) -> Hex {
        Hex::from(*self)
    }

    /// Convert the color to the HSL notation. Saturation and lightness are
    /// rounded to `precision` decimal digits, the hue to whole degrees.
    pub fn to_hsl(&self, precision: u32) -> Hsl {
        let analysis = chroma_hue(self);
        let value = analysis.value();

        if analysis.chroma == 0.0 {
            return Hsl::new(0, 0.0, value);
        }

        let lightness = (analysis.max + analysis.min) / 2.0;
        let saturation = analysis.chroma / (1.0 - (2.0 * value - analysis.chroma - 1.0).abs());

        Hsl::new(
            analysis.hue.round(),
            round_to(saturation, precision),
            round_to(lightness, precision),
        )
    }

    /// Convert the color to the HSV notation. Saturation and value are
    /// rounded to `precision` decimal digits, the hue to whole degrees.
    pub fn to_hsv(&self, precision: u32) -> Hsv {
        let analysis = chroma_hue(self);
        let value = analysis.value();

        if analysis.chroma == 0.0 {
            return Hsv::new(0, 0.0, value);
        }

        let saturation = analysis.chroma / analysis.max;

        Hsv::new(
            analysis.hue.round(),
            round_to(saturation, precision),
            round_to(value, precision),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Normalized channels, as used by the cylindrical notations.
impl From<Rgb> for [Component; 3] {
    fn from(value: Rgb) -> Self {
        [value.red, value.green, value.blue].map(|c| Component::from(c) / 255.0)
    }
}
