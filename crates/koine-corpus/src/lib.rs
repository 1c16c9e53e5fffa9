//! Word-record corpora for koine.
//!
//! A [`Corpus`] is the ordered, immutable word list of one text (the Greek New Testament,
//! the Septuagint). Records are loaded from JSON, validated, and their raw morphology
//! codes decoded once at load time. Searches work over [`WordRef`] cursors, which pair a
//! word with its corpus so that proximity lookups (neighbours, windows, verses) always
//! see the full text, however narrow the search input has become.
//!
//! # Record format
//!
//! Each record is a JSON object with `Book`, `Chapter`, `Verse`, `lexeme` (a string or an
//! array of strings), `word_index` and `morph_code` (a raw code or a pre-decoded
//! attribute map). `word` and `LevinsohnClauseID` are optional.

#![warn(missing_docs)]

mod corpus;
mod error;
mod fold;
mod stats;
mod word;
mod word_ref;

pub use corpus::Corpus;
pub use error::CorpusError;
pub use fold::strip_accents;
pub use stats::{BookStats, CorpusStats};
pub use word::Word;
pub use word_ref::{Window, WordRef, join_text};

/// Cursors over every word of several corpora, one corpus after another.
pub fn concat(corpora: &[Corpus]) -> Vec<WordRef<'_>> {
    corpora.iter().flat_map(Corpus::iter).collect()
}
