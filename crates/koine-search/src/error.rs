//! Error types for query evaluation.

use thiserror::Error;

/// Errors that can occur when preparing a query for evaluation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A lexeme pattern is not a valid regular expression once accents are stripped.
    #[error("invalid lexeme pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as written in the query.
        pattern: String,
        /// Underlying regex error.
        source: regex::Error,
    },
}
