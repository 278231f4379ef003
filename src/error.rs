//! Errors produced by parsing and converting colors.

use crate::Component;

/// Everything that can go wrong while building or converting a color.
///
/// Numeric components that are out of range are never an error, they are
/// clamped. Only text that is not a color and codes that are not in the RAL
/// table are rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// Text that does not describe a color: a hex string without exactly 3
    /// or 6 hexadecimal digits after the optional `#`, or a RAL code that is
    /// not a number.
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),
    /// A RAL code that is not part of the RAL table.
    #[error("RAL {0} is not in the lookup table")]
    LookupMiss(u32),
    /// A nearest color search over a palette without entries.
    #[error("the palette has no entries")]
    EmptyPalette,
    /// A normalized hue outside of the six hue sectors.
    #[error("normalized hue {0} is outside of the range [0, 6]")]
    OutOfDomain(Component),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
