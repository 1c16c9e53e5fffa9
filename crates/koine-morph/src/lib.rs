//! Morphology code decoding for Koine Greek corpora.
//!
//! Corpora tag every word with a compact morphology code. Two code dialects are in use:
//!
//! - [`Dialect::Rmac`]: Robinson's position-rigid codes (`N-GSM`, `V-2AAI-3S`), used by the
//!   Greek New Testament corpus.
//! - [`Dialect::MorphCode`]: dotted codes (`N.GSM`, `V.AAI3S`), used by the Septuagint
//!   corpus.
//!
//! Both decode through an ordered rule table into the same sparse [`MorphAttributes`]
//! shape. Decoding is pure and deterministic; the only state is the static rule tables.
//!
//! ```
//! use koine_morph::{Case, CodeContext, Dialect, decode};
//!
//! let context = CodeContext { word: "λόγου", word_index: 0 };
//! let attrs = decode("N-GSM", Dialect::Rmac, context).unwrap();
//! assert_eq!(attrs.case, Some(Case::Genitive));
//! ```

#![warn(missing_docs)]

mod attributes;
mod error;
mod lxx;
mod rmac;
mod rules;
mod vocab;

use std::{fmt, str::FromStr};

pub use attributes::{MorphAttributes, MorphProperty};
pub use error::MorphError;
use serde::{Deserialize, Serialize};
pub use vocab::{Case, Extra, Gender, Mood, Number, PartOfSpeech, Person, Tense, Voice};

/// The word a code belongs to, for error reporting and corpus-specific corrections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeContext<'a> {
    /// Surface form of the word.
    pub word: &'a str,
    /// Position of the word in its source corpus.
    pub word_index: usize,
}

/// A morphology code dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Robinson's Morphological Analysis Codes.
    #[default]
    Rmac,
    /// Dotted Septuagint codes.
    #[serde(alias = "lxx")]
    MorphCode,
}

impl Dialect {
    /// Returns the canonical name of the dialect.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rmac => "rmac",
            Self::MorphCode => "morph-code",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rmac" => Ok(Self::Rmac),
            "morph-code" | "morph_code" | "lxx" => Ok(Self::MorphCode),
            _ => Err(MorphError::UnknownDialect(s.to_string())),
        }
    }
}

/// Decodes a morphology code in the given dialect.
///
/// The first rule whose pattern matches the code decides the result. Codes no rule
/// accepts fail with [`MorphError::UnknownCode`], which names the word and its index.
pub fn decode(
    code: &str,
    dialect: Dialect,
    context: CodeContext<'_>,
) -> Result<MorphAttributes, MorphError> {
    match dialect {
        Dialect::Rmac => rmac::decode(code, context),
        Dialect::MorphCode => lxx::decode(code, context),
    }
}
