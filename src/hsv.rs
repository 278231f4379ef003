//! Model a color with the HSV notation.

use crate::{
    color::{Component, Numeric},
    convert::{hue_to_rgb, Offset},
    error::Result,
    hsl::{hue, unit},
    Hex, Hsl, Rgb,
};

colorway_macros::gen_model! {
    /// A color specified with the HSV (hue, saturation, value) notation.
    pub struct Hsv {
        /// The hue of the color in whole degrees, within `[0, 360]`.
        hue: u16,
        /// The saturation of the color, within `[0, 1]`.
        saturation: Component,
        /// The value (brightness) of the color, within `[0, 1]`.
        value: Component,
    }
}

impl Hsv {
    /// Create a new color in the HSV notation. The hue is clamped to
    /// `[0, 360]` and truncated to whole degrees, saturation and value are
    /// clamped to `[0, 1]`.
    pub fn new(
        hue: impl Into<Numeric>,
        saturation: impl Into<Numeric>,
        value: impl Into<Numeric>,
    ) -> Self {
        Self {
            hue: self::hue(hue),
            saturation: unit(saturation),
            value: unit(value),
        }
    }

    /// Convert this color from the HSV notation to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        let chroma = self.value * self.saturation;
        hue_to_rgb(self.hue, chroma, self.value, Offset::Value)
    }

    /// Convert this color to a hex string.
    pub fn to_hex(&self) -> Result<Hex> {
        Ok(self.to_rgb()?.to_hex())
    }

    /// Convert this color to the HSL notation, rounding saturation and
    /// lightness to `precision` decimal digits.
    pub fn to_hsl(&self, precision: u32) -> Result<Hsl> {
        Ok(self.to_rgb()?.to_hsl(precision))
    }
}
