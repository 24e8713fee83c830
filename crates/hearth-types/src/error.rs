//! Error types for unit handling in hearth-types.

use thiserror::Error;

/// Errors raised when resolving or converting temperature units.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnitError {
    /// The requested target unit is not in the recognized set.
    #[error("unsupported temperature unit: {0:?}")]
    UnsupportedUnit(String),

    /// No conversion path between the two named units.
    #[error("cannot convert temperatures from {from:?} to {to:?}")]
    UnsupportedConversion {
        /// Unit the value is expressed in.
        from: String,
        /// Unit the caller asked for.
        to: String,
    },
}

/// Result type alias using hearth-types' UnitError type.
pub type UnitResult<T> = std::result::Result<T, UnitError>;
