//! Error types for JSON parsing.

use thiserror::Error;

/// Result type for JSON parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Error type for JSON parsing.
///
/// Errors carry their kind only. The first error raised anywhere in the
/// descent is returned to the caller unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed literal, unterminated string or container, missing colon,
    /// unexpected byte, or input ending where a value was required.
    #[error("Syntax error")]
    Syntax,

    /// A numeric run was rejected by float conversion.
    #[error("Invalid number")]
    NumberFormat,

    /// An array or object could not grow to hold another entry.
    #[error("Allocation failed")]
    Allocation,
}

impl From<std::collections::TryReserveError> for ParseError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ParseError::Allocation
    }
}

impl From<indexmap::TryReserveError> for ParseError {
    fn from(_: indexmap::TryReserveError) -> Self {
        ParseError::Allocation
    }
}

impl From<std::num::ParseFloatError> for ParseError {
    fn from(_: std::num::ParseFloatError) -> Self {
        ParseError::NumberFormat
    }
}
