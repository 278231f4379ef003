//! Model a color written as a hexadecimal string.

use std::{fmt, str::FromStr};

use crate::{
    error::{Error, Result},
    Hsl, Hsv, Rgb,
};

/// A color specified as 3 (shorthand) or 6 hexadecimal digits.
///
/// The digits are kept exactly as they were validated, including their case.
/// All math is delegated to [`Rgb`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Hex {
    digits: String,
}

impl Hex {
    /// Parse a hex color. A single leading `#` is optional; the rest must be
    /// exactly 3 or 6 hexadecimal digits in either case.
    pub fn new(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        let valid = matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !valid {
            tracing::debug!(input = hex, "rejected hex color");
            return Err(Error::InvalidFormat(hex.to_string()));
        }

        Ok(Self {
            digits: digits.to_string(),
        })
    }

    /// Return the digits without a leading `#`.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Whether the color is written with 3 digits.
    pub fn is_shorthand(&self) -> bool {
        self.digits.len() == 3
    }

    /// Render the digits, with a leading `#` if `with_hash` is set.
    pub fn to_string_with(&self, with_hash: bool) -> String {
        if with_hash {
            format!("#{}", self.digits)
        } else {
            self.digits.clone()
        }
    }

    fn value(&self) -> u32 {
        self.digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0, |acc, digit| acc << 4 | digit)
    }

    /// Convert the color to RGB. Shorthand digits are doubled, so `#345` is
    /// the same color as `#334455`.
    pub fn to_rgb(&self) -> Rgb {
        let value = self.value();

        if self.is_shorthand() {
            let doubled = |shift: u32| ((value >> shift) & 0xF) as u8 * 0x11;
            Rgb::from([doubled(8), doubled(4), doubled(0)])
        } else {
            Rgb::from([
                (0xFF & (value >> 16)) as u8,
                (0xFF & (value >> 8)) as u8,
                (0xFF & value) as u8,
            ])
        }
    }

    /// Convert the color to the HSL notation, rounding saturation and
    /// lightness to `precision` decimal digits.
    pub fn to_hsl(&self, precision: u32) -> Hsl {
        self.to_rgb().to_hsl(precision)
    }

    /// Convert the color to the HSV notation, rounding saturation and value
    /// to `precision` decimal digits.
    pub fn to_hsv(&self, precision: u32) -> Hsv {
        self.to_rgb().to_hsv(precision)
    }
}

impl From<Rgb> for Hex {
    fn from(value: Rgb) -> Self {
        let (red, green, blue) = value.components();
        Self {
            digits: format!("{:02x}{:02x}{:02x}", red, green, blue),
        }
    }
}

impl FromStr for Hex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Hex {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.digits)
    }
}
