//! Word records.

use koine_morph::{CodeContext, Dialect, MorphAttributes, MorphError, decode};
use koine_reference::Reference;
use serde::Deserialize;
use serde_json::Value;
use serde_with::{OneOrMany, serde_as};

use crate::strip_accents;

/// One word of a corpus. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Position of the word in its corpus.
    pub word_index: usize,
    /// Book name.
    pub book: String,
    /// Chapter, as written in the corpus.
    pub chapter: String,
    /// Verse, as written in the corpus. May carry a trailing letter (`5a`) or an
    /// alternate numbering after a slash (`12/13`).
    pub verse: String,
    /// Candidate lexical forms, as written in the corpus.
    pub lexemes: Vec<String>,
    /// Candidate lexical forms with accents stripped, parallel to `lexemes`.
    pub folded_lexemes: Vec<String>,
    /// Decoded morphology.
    pub morph: MorphAttributes,
    /// The raw morphology code, when the corpus carried one.
    pub code: Option<String>,
    /// Surface text.
    pub text: String,
    /// Clause identifier, when the corpus carries clause boundaries.
    pub clause: Option<String>,
}

impl Word {
    /// Chapter number, if the chapter is numeric.
    pub fn chapter_number(&self) -> Option<u32> {
        self.chapter.trim().parse().ok()
    }

    /// Verse number with any letter and alternate numbering removed.
    pub fn verse_number(&self) -> Option<u32> {
        let (number, _) = split_verse(&self.verse);
        number.parse().ok()
    }

    /// Verse letter, if the verse carries one.
    pub fn verse_letter(&self) -> Option<char> {
        let (_, letter) = split_verse(&self.verse);
        let mut chars = letter.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Some(c),
            _ => None,
        }
    }

    /// The chapter and verse of this word, if both are numeric.
    pub fn reference(&self) -> Option<Reference> {
        let reference = Reference::verse(self.chapter_number()?, self.verse_number()?);
        Some(match self.verse_letter() {
            Some(letter) => reference.with_letter(letter),
            None => reference,
        })
    }

    /// Lexical forms joined with commas.
    pub fn lexeme(&self) -> String {
        self.lexemes.join(", ")
    }

    /// True if this word lies in the same verse as `other`.
    ///
    /// Verse letters and alternate numbering are ignored, so `5`, `5a` and `5/4` are one
    /// verse. Non-numeric chapters or verses are compared as written.
    pub fn same_verse(&self, other: &Self) -> bool {
        if self.book != other.book {
            return false;
        }
        let numbered = |w: &Self| Some((w.chapter_number()?, w.verse_number()?));
        match (numbered(self), numbered(other)) {
            (Some(here), Some(there)) => here == there,
            _ => self.chapter == other.chapter && self.verse == other.verse,
        }
    }
}

/// Splits a verse string into its digits and its trailing text, dropping any alternate
/// numbering after a slash.
fn split_verse(verse: &str) -> (&str, &str) {
    let primary = verse.split('/').next().unwrap_or_default().trim();
    let end = primary
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(primary.len());
    primary.split_at(end)
}

/// A chapter or verse field, which corpora write as either a string or a number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Numbering {
    /// Written as a string.
    Text(String),
    /// Written as a number.
    Number(u64),
}

impl Numbering {
    /// Returns the field as text.
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

/// A morphology field: a raw code, or attributes decoded by an older generator.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MorphField {
    /// Raw code, to be decoded on load.
    Code(String),
    /// Pre-decoded attributes.
    Decoded(MorphAttributes),
}

/// A word record as serialized in corpus JSON.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RawWord {
    /// Position of the word in its corpus.
    pub word_index: usize,
    /// Book name.
    #[serde(rename = "Book")]
    book: String,
    /// Chapter.
    #[serde(rename = "Chapter")]
    chapter: Numbering,
    /// Verse.
    #[serde(rename = "Verse")]
    verse: Numbering,
    /// One lexeme or a list of candidates.
    #[serde_as(as = "OneOrMany<_>")]
    lexeme: Vec<String>,
    /// Raw or decoded morphology.
    morph_code: MorphField,
    /// Surface text.
    #[serde(default)]
    word: Option<String>,
    /// Clause identifier.
    #[serde(default, rename = "LevinsohnClauseID", alias = "clause")]
    clause: Option<Value>,
}

impl RawWord {
    /// Fields every record must carry.
    pub const REQUIRED: &'static [&'static str] =
        &["Book", "Chapter", "Verse", "lexeme", "word_index", "morph_code"];

    /// Builds a word, decoding a raw morphology code in the given dialect.
    pub fn into_word(self, dialect: Dialect) -> Result<Word, MorphError> {
        let text = self.word.unwrap_or_default();
        let (morph, code) = match self.morph_code {
            MorphField::Decoded(morph) => (morph, None),
            MorphField::Code(code) => {
                let context = CodeContext {
                    word: &text,
                    word_index: self.word_index,
                };
                (decode(&code, dialect, context)?, Some(code))
            }
        };
        let folded_lexemes = self.lexeme.iter().map(|l| strip_accents(l)).collect();
        let clause = self.clause.and_then(|value| match value {
            Value::String(text) => Some(text),
            Value::Null => None,
            other => Some(other.to_string()),
        });
        Ok(Word {
            word_index: self.word_index,
            book: self.book,
            chapter: self.chapter.into_text(),
            verse: self.verse.into_text(),
            lexemes: self.lexeme,
            folded_lexemes,
            morph,
            code,
            text,
            clause,
        })
    }
}

#[cfg(test)]
mod tests {
    use koine_morph::{Case, PartOfSpeech, Voice};
    use serde_json::json;

    use super::*;

    fn word(value: Value, dialect: Dialect) -> Word {
        serde_json::from_value::<RawWord>(value)
            .unwrap()
            .into_word(dialect)
            .unwrap()
    }

    #[test]
    fn decodes_raw_code() {
        let w = word(
            json!({"Book": "John", "Chapter": "1", "Verse": "1", "lexeme": ["λόγος"],
                   "word_index": 0, "morph_code": "N-NSM", "word": "Λόγος"}),
            Dialect::Rmac,
        );
        assert_eq!(w.morph.case, Some(Case::Nominative));
        assert_eq!(w.code.as_deref(), Some("N-NSM"));
        assert_eq!(w.folded_lexemes, vec!["λογος"]);
        assert_eq!(w.text, "Λόγος");
    }

    #[test]
    fn accepts_pre_decoded_morphology_and_single_lexeme() {
        let w = word(
            json!({"Book": "Gen", "Chapter": 1, "Verse": 2, "lexeme": "φέρω",
                   "word_index": 3,
                   "morph_code": {"part_of_speech": "verb", "voice": "middle/passive"}}),
            Dialect::MorphCode,
        );
        assert_eq!(w.morph.part_of_speech, PartOfSpeech::Verb);
        assert_eq!(w.morph.voice, Some(Voice::MiddlePassive));
        assert_eq!(w.code, None);
        assert_eq!(w.lexemes, vec!["φέρω"]);
        assert_eq!(w.chapter, "1");
        assert_eq!(w.verse, "2");
        assert_eq!(w.text, "");
    }

    #[test]
    fn verse_letters_and_alternate_numbering() {
        let mut w = word(
            json!({"Book": "Ps", "Chapter": "9", "Verse": "22/10", "lexeme": ["ἵνα"],
                   "word_index": 0, "morph_code": "C"}),
            Dialect::MorphCode,
        );
        assert_eq!(w.verse_number(), Some(22));
        assert_eq!(w.verse_letter(), None);
        assert_eq!(w.reference(), Some(Reference::verse(9, 22)));

        w.verse = "5a".to_string();
        assert_eq!(w.verse_number(), Some(5));
        assert_eq!(w.reference(), Some(Reference::verse(9, 5).with_letter('a')));
    }

    #[test]
    fn same_verse_ignores_letters_and_alternates() {
        let mut a = word(
            json!({"Book": "Ps", "Chapter": "9", "Verse": "5", "lexeme": ["ἵνα"],
                   "word_index": 0, "morph_code": "C"}),
            Dialect::MorphCode,
        );
        let mut b = a.clone();
        for verse in ["5a", "5/4", " 5 "] {
            b.verse = verse.to_string();
            assert!(a.same_verse(&b), "{verse}");
        }
        b.verse = "6".to_string();
        assert!(!a.same_verse(&b));
        b.book = "Prov".to_string();
        b.verse = "5".to_string();
        assert!(!a.same_verse(&b));

        a.verse = "prologue".to_string();
        b = a.clone();
        assert!(a.same_verse(&b));
        b.verse = "5".to_string();
        assert!(!a.same_verse(&b));
    }

    #[test]
    fn clause_id_is_kept() {
        let w = word(
            json!({"Book": "John", "Chapter": "1", "Verse": "1", "lexeme": ["ἐν"],
                   "word_index": 0, "morph_code": "PREP", "LevinsohnClauseID": "C1"}),
            Dialect::Rmac,
        );
        assert_eq!(w.clause.as_deref(), Some("C1"));
    }

    #[test]
    fn unknown_code_names_the_word() {
        let raw: RawWord = serde_json::from_value(json!({
            "Book": "John", "Chapter": "1", "Verse": "1", "lexeme": ["x"],
            "word_index": 4, "morph_code": "??", "word": "ξ"
        }))
        .unwrap();
        let err = raw.into_word(Dialect::Rmac).unwrap_err();
        assert_eq!(
            err,
            MorphError::UnknownCode {
                code: "??".into(),
                word: "ξ".into(),
                word_index: 4
            }
        );
    }
}
