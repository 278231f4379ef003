//! Model a color with the HSL notation.

use crate::{
    color::{Component, Numeric},
    convert::{hue_to_rgb, Offset},
    error::Result,
    math::clamp,
    Hex, Hsv, Rgb,
};

/// Percentage [`Hsl::brighten`] and [`Hsl::darken`] are usually called with.
pub const DEFAULT_STEP: Component = 10.0;

colorway_macros::gen_model! {
    /// A color specified with the HSL (hue, saturation, lightness) notation.
    pub struct Hsl {
        /// The hue of the color in whole degrees, within `[0, 360]`.
        hue: u16,
        /// The saturation of the color, within `[0, 1]`.
        saturation: Component,
        /// The lightness of the color, within `[0, 1]`.
        lightness: Component,
    }
}

pub(crate) fn hue(value: impl Into<Numeric>) -> u16 {
    clamp(value.into().value(), 0.0, 360.0) as u16
}

pub(crate) fn unit(value: impl Into<Numeric>) -> Component {
    clamp(value.into().value(), 0.0, 1.0)
}

impl Hsl {
    /// Create a new color in the HSL notation. The hue is clamped to
    /// `[0, 360]` and truncated to whole degrees, saturation and lightness are
    /// clamped to `[0, 1]`.
    pub fn new(
        hue: impl Into<Numeric>,
        saturation: impl Into<Numeric>,
        lightness: impl Into<Numeric>,
    ) -> Self {
        Self {
            hue: self::hue(hue),
            saturation: unit(saturation),
            lightness: unit(lightness),
        }
    }

    /// Return a copy of the color with the lightness raised by `amount`
    /// percent. The lightness never goes past 1.
    pub fn brighten(self, amount: Component) -> Self {
        Self {
            lightness: unit(self.lightness + amount / 100.0),
            ..self
        }
    }

    /// Return a copy of the color with the lightness lowered by `amount`
    /// percent. The lightness never goes below 0.
    pub fn darken(self, amount: Component) -> Self {
        self.brighten(-amount)
    }

    /// Convert this color from the HSL notation to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        hue_to_rgb(self.hue, chroma, self.lightness, Offset::Lightness)
    }

    /// Convert this color to a hex string.
    pub fn to_hex(&self) -> Result<Hex> {
        Ok(self.to_rgb()?.to_hex())
    }

    /// Convert this color to the HSV notation, rounding saturation and value
    /// to `precision` decimal digits.
    pub fn to_hsv(&self, precision: u32) -> Result<Hsv> {
        Ok(self.to_rgb()?.to_hsv(precision))
    }
}
