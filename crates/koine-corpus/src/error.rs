//! Error types for corpus loading.

use std::{io, path::PathBuf};

use koine_morph::MorphError;
use thiserror::Error;

/// Errors that can occur when loading a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Failed to read a corpus file.
    #[error("failed to read corpus file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The corpus is not a JSON array.
    #[error("corpus {corpus} is not a JSON array of word records: {source}")]
    Json {
        /// Name of the corpus.
        corpus: String,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A record lacks a required field.
    #[error("corpus {corpus}, record {position}: missing field {field}")]
    MissingField {
        /// Name of the corpus.
        corpus: String,
        /// Position of the record in the corpus.
        position: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A record has a field of the wrong shape.
    #[error("corpus {corpus}, record {position}: {message}")]
    Format {
        /// Name of the corpus.
        corpus: String,
        /// Position of the record in the corpus.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// A record's `word_index` is not its position.
    #[error("corpus {corpus}, record {position}: word_index is {word_index}")]
    IndexMismatch {
        /// Name of the corpus.
        corpus: String,
        /// Position of the record in the corpus.
        position: usize,
        /// The `word_index` the record carries.
        word_index: usize,
    },

    /// A raw morphology code could not be decoded.
    #[error("corpus {corpus}: {source}")]
    Morph {
        /// Name of the corpus.
        corpus: String,
        /// Underlying decoding error.
        source: MorphError,
    },
}
