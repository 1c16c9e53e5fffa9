//! Error types for reference parsing.

use thiserror::Error;

/// Errors that can occur when parsing a reference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// The input was empty.
    #[error("empty reference")]
    Empty,

    /// The input is not of the form `C`, `C.V` or `C:Va`.
    #[error("not a valid reference: {0:?}")]
    Invalid(String),

    /// A range ends before it starts.
    #[error("reference range ends before it starts: {0:?}")]
    Reversed(String),
}
