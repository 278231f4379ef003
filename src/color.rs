//! A [`Color`] holds a color in any of the supported representations.

use crate::{Hex, Hsl, Hsv, Ral, Rgb};

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all fractional components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all fractional components are stored as.
pub type Component = f32;

/// Number of decimal digits conversions into HSL and HSV round saturation,
/// lightness and value to, unless the caller asks for something else.
pub const DEFAULT_PRECISION: u32 = 4;

/// Any primitive number passed to a color constructor. Constructors take an
/// `impl Into<Numeric>` so that integer and floating point literals can be
/// mixed freely:
/// ```rust
/// use colorway::{Hsl, Rgb};
/// let rgb = Rgb::new(300, -4, 17.9);
/// assert_eq!(rgb.components(), (255, 0, 17));
/// let hsl = Hsl::new(157, 0.84, 0.42);
/// assert_eq!(hsl.hue(), 157);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Numeric(Component);

impl Numeric {
    /// Return the wrapped value. NaN is returned as 0.0.
    pub fn value(self) -> Component {
        if self.0.is_nan() {
            0.0
        } else {
            self.0
        }
    }
}

macro_rules! numeric_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeric {
                fn from(value: $t) -> Self {
                    Self(value as Component)
                }
            }
        )*
    };
}

numeric_from!(u8, u16, u32, i32, i64, f32, f64);

/// The representations a [`Color`] can be stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// 8-bit red, green and blue channels.
    Rgb = 0,
    /// A 3 or 6 digit hexadecimal string.
    Hex = 1,
    /// Hue, saturation and lightness.
    Hsl = 2,
    /// Hue, saturation and value.
    Hsv = 3,
    /// A code from the RAL Classic industrial color table.
    Ral = 4,
}

/// Struct that can hold a color of any representation.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    /// A color with red, green and blue channels.
    Rgb(Rgb),
    /// A color written as a hex string.
    Hex(Hex),
    /// A color in the HSL notation.
    Hsl(Hsl),
    /// A color in the HSV notation.
    Hsv(Hsv),
    /// A color from the RAL table.
    Ral(Ral),
}

impl Color {
    /// Return the representation the color is currently stored in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Hex(_) => Space::Hex,
            Color::Hsl(_) => Space::Hsl,
            Color::Hsv(_) => Space::Hsv,
            Color::Ral(_) => Space::Ral,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Hex> for Color {
    fn from(value: Hex) -> Self {
        Color::Hex(value)
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        Color::Hsl(value)
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        Color::Hsv(value)
    }
}

impl From<Ral> for Color {
    fn from(value: Ral) -> Self {
        Color::Ral(value)
    }
}
