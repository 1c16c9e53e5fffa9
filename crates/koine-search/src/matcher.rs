//! Lexeme matching.

use koine_corpus::{Word, strip_accents};
use koine_morph::MorphProperty;
use koine_query::LexemeQuery;
use regex::Regex;

use crate::SearchError;

/// A lexeme search ready to test words.
#[derive(Debug, Clone)]
pub struct LexemeMatcher {
    /// Whole-lexeme matcher over accent-stripped text.
    pattern: Regex,
    /// Properties every match must carry.
    filters: Vec<MorphProperty>,
}

impl LexemeMatcher {
    /// Compiles a lexeme search. The pattern is accent-stripped the same way as corpus
    /// lexemes before it is compiled.
    pub fn new(query: &LexemeQuery) -> Result<Self, SearchError> {
        let folded = strip_accents(&query.pattern);
        let pattern = LexemeQuery::matcher(&folded).map_err(|source| SearchError::InvalidPattern {
            pattern: query.pattern.clone(),
            source,
        })?;
        Ok(Self {
            pattern,
            filters: query.filters.clone(),
        })
    }

    /// True if any of the word's lexemes matches and the word carries every filter.
    ///
    /// A filter on a category the word does not have (case on a verb) never matches.
    pub fn matches(&self, word: &Word) -> bool {
        word.folded_lexemes
            .iter()
            .any(|lexeme| self.pattern.is_match(lexeme))
            && self.filters.iter().all(|filter| word.morph.has(*filter))
    }
}
