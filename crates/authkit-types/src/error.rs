//! Error types for model validation and decoding.
//!
//! There are exactly two failure classes: a value that violates the shape a
//! field declares ([`DtoError::InvalidArgument`]) and JSON text that cannot
//! be parsed at all (wrapped [`WireError`]). Nothing in this crate swallows
//! or retries an error; every failure aborts the current conversion and is
//! surfaced to the caller.

use authkit_wire::WireError;
use thiserror::Error;

/// Error raised when boundary data fails its declared contract.
///
/// # Example
///
/// ```
/// use authkit_types::DtoError;
///
/// let err = DtoError::invalid_argument("scopes", "null or an array of strings");
/// assert!(err.is_invalid_argument());
/// assert_eq!(
///     err.to_string(),
///     "invalid value for `scopes`: expected null or an array of strings"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtoError {
    /// A field value, constructor argument, or map value has the wrong
    /// type or shape, or lies outside its declared closed set.
    #[error("invalid value for `{param}`: expected {expected}")]
    InvalidArgument {
        /// Name of the offending parameter or wire key.
        param: String,
        /// Human-readable description of the accepted shape.
        expected: String,
    },

    /// JSON text could not be parsed into the generic map form.
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl DtoError {
    /// Create an invalid-argument error for `param`.
    #[must_use]
    pub fn invalid_argument(param: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            expected: expected.into(),
        }
    }

    /// Check if this is a shape/type violation.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is a JSON syntax failure.
    #[must_use]
    pub fn is_wire(&self) -> bool {
        matches!(self, Self::Wire(_))
    }
}

/// Result type alias for model operations.
pub type DtoResult<T> = Result<T, DtoError>;
