//! Error types for morphological decoding.

use thiserror::Error;

use crate::CodeContext;

/// Errors that can occur when decoding morphology codes or parsing grammatical values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    /// No rule in the dialect's table accepts the code.
    #[error("unknown morphology code {code:?} (word {word:?}, index {word_index})")]
    UnknownCode {
        /// The code that failed to decode.
        code: String,
        /// Surface form of the word carrying the code.
        word: String,
        /// Position of the word in its corpus.
        word_index: usize,
    },

    /// A value is not a member of its grammatical category.
    #[error("not a {category}: {value:?}")]
    UnknownValue {
        /// Name of the category (e.g. "case").
        category: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A property name does not name a grammatical category.
    #[error("unknown morphology property: {0:?}")]
    UnknownProperty(String),

    /// A dialect name is not recognized.
    #[error("unknown morphology dialect: {0:?}")]
    UnknownDialect(String),
}

impl MorphError {
    /// Creates an `UnknownCode` error for a code seen in the given context.
    pub(crate) fn unknown_code(code: &str, context: CodeContext<'_>) -> Self {
        Self::UnknownCode {
            code: code.to_string(),
            word: context.word.to_string(),
            word_index: context.word_index,
        }
    }
}
