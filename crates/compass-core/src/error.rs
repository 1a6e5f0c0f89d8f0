//! Construction-time validation errors.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Errors raised when constructing core value types from raw input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A requirement identifier was empty or whitespace-only.
    #[error("requirement id must not be empty")]
    EmptyRequirementId,
}
