//! colorway models colors as RGB, hex strings, HSL, HSV and RAL codes and
//! converts between them, always through RGB.
//!
//! ```rust
//! use colorway::{Hex, Ral, DEFAULT_PRECISION};
//! let hex = Hex::new("#11c380")?;
//! let hsl = hex.to_hsl(DEFAULT_PRECISION);
//! assert_eq!(hsl.hue(), 157);
//!
//! let ral = Ral::find_closest(&hex)?;
//! assert!(ral.is_some());
//! # Ok::<(), colorway::Error>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod error;
mod hex;
pub mod hsl;
mod hsv;
mod math;
pub mod palette;
mod ral;
mod rgb;


pub use color::{Color, Component, Numeric, Space, DEFAULT_PRECISION};
pub use convert::ToRgb;
pub use error::{Error, Result};
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use math::clamp;
pub use palette::Palette;
pub use ral::Ral;
pub use rgb::Rgb;
