//! Corpus loading and lookup.

use std::{fs, path::Path};

use koine_morph::Dialect;
use koine_reference::BookReference;
use serde_json::Value;
use tracing::debug;

use crate::{CorpusError, CorpusStats, Word, WordRef, word::RawWord};

/// The ordered words of one text. Positions are stable for the corpus lifetime.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Name used in errors and output.
    name: String,
    /// Words in order; `words[i].word_index == i`.
    words: Vec<Word>,
    /// Book, chapter and verse limits.
    stats: CorpusStats,
}

impl Corpus {
    /// Loads a corpus from a JSON file.
    pub fn load(name: &str, path: &Path, dialect: Dialect) -> Result<Self, CorpusError> {
        let text = fs::read_to_string(path).map_err(|source| CorpusError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(name, &text, dialect)
    }

    /// Parses a corpus from JSON text: an array of word records.
    ///
    /// Raw morphology codes are decoded in `dialect`; pre-decoded attribute maps are taken
    /// as they are. Every record's `word_index` must equal its position.
    pub fn from_json(name: &str, text: &str, dialect: Dialect) -> Result<Self, CorpusError> {
        let records: Vec<Value> =
            serde_json::from_str(text).map_err(|source| CorpusError::Json {
                corpus: name.to_string(),
                source,
            })?;
        let words = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| word_from_value(name, position, record, dialect))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(corpus = name, words = words.len(), %dialect, "loaded corpus");
        Ok(Self::from_words(name, words))
    }

    /// Builds a corpus from words already in order.
    pub fn from_words(name: &str, words: Vec<Word>) -> Self {
        let stats = CorpusStats::from_words(&words);
        Self {
            name: name.to_string(),
            words,
            stats,
        }
    }

    /// Name of the corpus.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the corpus has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Book and chapter statistics.
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// A cursor at `index`, if it is in range.
    pub fn get(&self, index: usize) -> Option<WordRef<'_>> {
        (index < self.words.len()).then(|| WordRef::new(self, index))
    }

    /// Cursors over every word in order.
    pub fn iter(&self) -> impl Iterator<Item = WordRef<'_>> {
        (0..self.words.len()).map(move |index| WordRef::new(self, index))
    }

    /// The contiguous run of words inside `reference`.
    ///
    /// The run starts at the first word inside the reference and ends before the first
    /// word after it that falls outside. Words without a numeric chapter and verse only
    /// match whole-book references.
    pub fn slice(&self, reference: &BookReference) -> Vec<WordRef<'_>> {
        let inside = |word: &Word| {
            if word.book != reference.book {
                return false;
            }
            match (&reference.reference, word.reference()) {
                (None, _) => true,
                (Some(range), Some(location)) => range.contains_reference(&location),
                (Some(_), None) => false,
            }
        };
        self.iter()
            .skip_while(|word| !inside(word))
            .take_while(|word| inside(word))
            .collect()
    }
}

/// Validates one JSON record and builds its word.
fn word_from_value(
    corpus: &str,
    position: usize,
    record: Value,
    dialect: Dialect,
) -> Result<Word, CorpusError> {
    let Value::Object(fields) = &record else {
        return Err(CorpusError::Format {
            corpus: corpus.to_string(),
            position,
            message: "record is not an object".to_string(),
        });
    };
    if let Some(field) = RawWord::REQUIRED
        .iter()
        .copied()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(CorpusError::MissingField {
            corpus: corpus.to_string(),
            position,
            field,
        });
    }
    let raw: RawWord = serde_json::from_value(record).map_err(|e| CorpusError::Format {
        corpus: corpus.to_string(),
        position,
        message: e.to_string(),
    })?;
    if raw.word_index != position {
        return Err(CorpusError::IndexMismatch {
            corpus: corpus.to_string(),
            position,
            word_index: raw.word_index,
        });
    }
    raw.into_word(dialect).map_err(|source| CorpusError::Morph {
        corpus: corpus.to_string(),
        source,
    })
}
