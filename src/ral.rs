//! Model a color from the RAL Classic industrial color table.

use std::{fmt, str::FromStr};

use crate::{
    convert::ToRgb,
    error::{Error, Result},
    palette::{Entry, Palette},
    Hex, Hsl, Hsv, Rgb,
};

/// A color identified by its RAL code, for example `RAL 1000`.
///
/// Any code can be held; codes that are not in the table fail with
/// [`Error::LookupMiss`] as soon as the color is converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ral {
    code: u32,
}

impl Ral {
    /// Create a color with the given RAL code.
    pub fn new(code: u32) -> Self {
        Self { code }
    }

    /// Return the RAL code.
    pub fn code(&self) -> u32 {
        self.code
    }

    fn entry(&self) -> Result<&'static Entry> {
        Palette::ral().lookup(self.code).ok_or_else(|| {
            tracing::debug!(code = self.code, "RAL code not in lookup table");
            Error::LookupMiss(self.code)
        })
    }

    /// Return the hex string the RAL table lists for this color.
    pub fn to_hex(&self) -> Result<Hex> {
        Ok(self.entry()?.hex().clone())
    }

    /// Convert the color to RGB.
    pub fn to_rgb(&self) -> Result<Rgb> {
        Ok(self.entry()?.rgb())
    }

    /// Convert the color to the HSL notation.
    pub fn to_hsl(&self, precision: u32) -> Result<Hsl> {
        Ok(self.to_hex()?.to_hsl(precision))
    }

    /// Convert the color to the HSV notation.
    pub fn to_hsv(&self, precision: u32) -> Result<Hsv> {
        Ok(self.to_hex()?.to_hsv(precision))
    }

    /// Find the RAL color closest to `target`, measured as the Euclidean
    /// distance between RGB channels. Ties go to the lowest code. Returns
    /// `None` only if the table is empty.
    pub fn find_closest(target: &impl ToRgb) -> Result<Option<Ral>> {
        let target = target.try_to_rgb()?;
        Ok(Palette::ral()
            .closest(&target)
            .map(|entry| Ral::new(entry.code())))
    }
}

impl From<u32> for Ral {
    fn from(code: u32) -> Self {
        Self::new(code)
    }
}

/// Parse a RAL code such as `"1000"`, `"RAL 1000"` or `" 1000 "`. The `RAL`
/// prefix is matched case-insensitively.
impl FromStr for Ral {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..3) {
            Some(prefix) if prefix.eq_ignore_ascii_case("ral") => trimmed[3..].trim_start(),
            _ => trimmed,
        };

        digits
            .parse::<u32>()
            .map(Self::new)
            .map_err(|_| Error::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Ral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAL {}", self.code)
    }
}
