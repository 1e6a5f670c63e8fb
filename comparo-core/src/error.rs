//! Error types for comparison operations.
//!
//! Only configuration can fail. Degenerate input (empty strings, no common
//! characters) always yields a well-defined result instead of an error.

use thiserror::Error;

/// Result type alias for comparison operations.
pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Core error types for the comparison engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    /// A tuning parameter is outside its accepted domain
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },
}

impl ComparisonError {
    /// Shorthand for [`ComparisonError::InvalidArgument`].
    #[inline]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ComparisonError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Returns the name of the offending parameter.
    #[inline]
    pub fn parameter(&self) -> &'static str {
        match self {
            ComparisonError::InvalidArgument { name, .. } => name,
        }
    }

    /// Returns an HTTP status code a binding layer can map this error to.
    #[inline]
    pub fn status_code(&self) -> u16 {
        match self {
            ComparisonError::InvalidArgument { .. } => 400,
        }
    }
}
