//! Positional cursors into a corpus.

use std::{fmt, ops::Deref, ptr};

use crate::{Corpus, Word};

/// A word together with the corpus it belongs to.
///
/// Cursors are cheap to copy and give proximity lookups access to the whole corpus,
/// even when the word was reached through a narrowed search input. Two cursors are
/// equal when they point at the same position of the same corpus.
#[derive(Clone, Copy)]
pub struct WordRef<'c> {
    /// Owning corpus.
    corpus: &'c Corpus,
    /// Position in the corpus.
    index: usize,
}

impl<'c> WordRef<'c> {
    /// Creates a cursor. `index` must be in range for `corpus`.
    pub(crate) const fn new(corpus: &'c Corpus, index: usize) -> Self {
        Self { corpus, index }
    }

    /// The owning corpus.
    pub const fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    /// Position in the owning corpus.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The word this cursor points at.
    pub fn word(&self) -> &'c Word {
        &self.corpus.words()[self.index]
    }

    /// Up to `n` words immediately before this one, in corpus order.
    ///
    /// Stops at the start of the corpus and never crosses into another book.
    pub fn preceding(&self, n: usize) -> Vec<Self> {
        let start = self.index.saturating_sub(n);
        (start..self.index)
            .map(|index| Self::new(self.corpus, index))
            .filter(|other| other.book == self.book)
            .collect()
    }

    /// Up to `n` words immediately after this one, in corpus order.
    ///
    /// Stops at the end of the corpus and never crosses into another book.
    pub fn following(&self, n: usize) -> Vec<Self> {
        let end = self.index.saturating_add(n).min(self.corpus.len() - 1);
        (self.index + 1..=end)
            .map(|index| Self::new(self.corpus, index))
            .filter(|other| other.book == self.book)
            .collect()
    }

    /// The words around this one: up to `before` words before it, the word itself and
    /// up to `after` words after it, all in the same book.
    pub fn window(&self, before: usize, after: usize) -> Window<'c> {
        let preceding = self.preceding(before);
        let following = self.following(after);
        let cut_before = preceding.len() < before;
        let cut_after = following.len() < after;
        let mut words = preceding;
        words.push(*self);
        words.extend(following);
        Window {
            words,
            cut_before,
            cut_after,
        }
    }

    /// Every word of the verse containing this one, in corpus order.
    pub fn verse_words(&self) -> Vec<Self> {
        let words = self.corpus.words();
        let here = self.word();
        let start = words[..self.index]
            .iter()
            .rposition(|w| !w.same_verse(here))
            .map_or(0, |i| i + 1);
        let end = words[self.index..]
            .iter()
            .position(|w| !w.same_verse(here))
            .map_or(words.len(), |i| self.index + i);
        (start..end)
            .map(|index| Self::new(self.corpus, index))
            .collect()
    }

    /// Text of the verse containing this word, words joined with spaces.
    pub fn verse_text(&self) -> String {
        join_text(&self.verse_words())
    }

    /// Every word sharing this word's clause, in corpus order; just this word when the
    /// corpus has no clause boundaries.
    pub fn clause_words(&self) -> Vec<Self> {
        let Some(clause) = &self.clause else {
            return vec![*self];
        };
        self.verse_words()
            .into_iter()
            .filter(|w| w.clause.as_ref() == Some(clause))
            .collect()
    }
}

impl Deref for WordRef<'_> {
    type Target = Word;

    fn deref(&self) -> &Word {
        self.word()
    }
}

impl PartialEq for WordRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.corpus, other.corpus) && self.index == other.index
    }
}

impl Eq for WordRef<'_> {}

impl fmt::Debug for WordRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] {:?}", self.corpus.name(), self.index, self.text)
    }
}

/// Joins the surface text of words with single spaces.
pub fn join_text(words: &[WordRef<'_>]) -> String {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A run of words around a centre word.
#[derive(Debug, Clone)]
pub struct Window<'c> {
    /// Words in corpus order, centre included.
    pub words: Vec<WordRef<'c>>,
    /// True if fewer words than asked for were available before the centre.
    pub cut_before: bool,
    /// True if fewer words than asked for were available after the centre.
    pub cut_after: bool,
}

impl fmt::Display for Window<'_> {
    /// Writes the words with `...` on each side that continues past the window.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.cut_before {
            f.write_str("...")?;
        }
        f.write_str(&join_text(&self.words))?;
        if !self.cut_after {
            f.write_str("...")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use koine_morph::Dialect;
    use serde_json::{Value, json};

    use super::*;

    /// Builds a corpus of `(book, verse, clause)` words with text `w0`, `w1`, ...
    fn corpus(words: &[(&str, &str, Option<&str>)]) -> Corpus {
        let records: Vec<Value> = words
            .iter()
            .enumerate()
            .map(|(i, (book, verse, clause))| {
                json!({"Book": book, "Chapter": "1", "Verse": verse, "lexeme": ["x"],
                       "word_index": i, "morph_code": "CONJ", "word": format!("w{i}"),
                       "LevinsohnClauseID": clause})
            })
            .collect();
        Corpus::from_json("t", &Value::Array(records).to_string(), Dialect::Rmac).unwrap()
    }

    fn indices(words: &[WordRef<'_>]) -> Vec<usize> {
        words.iter().map(WordRef::index).collect()
    }

    fn five_in_one_book() -> Corpus {
        corpus(&[("A", "1", None); 5])
    }

    #[test]
    fn preceding_clamps_at_start() {
        let c = five_in_one_book();
        assert_eq!(indices(&c.get(3).unwrap().preceding(2)), vec![1, 2]);
        assert_eq!(indices(&c.get(1).unwrap().preceding(4)), vec![0]);
        assert!(c.get(0).unwrap().preceding(3).is_empty());
        assert!(c.get(3).unwrap().preceding(0).is_empty());
    }

    #[test]
    fn following_clamps_at_end() {
        let c = five_in_one_book();
        assert_eq!(indices(&c.get(1).unwrap().following(2)), vec![2, 3]);
        assert_eq!(indices(&c.get(3).unwrap().following(9)), vec![4]);
        assert!(c.get(4).unwrap().following(1).is_empty());
        assert!(c.get(2).unwrap().following(0).is_empty());
    }

    #[test]
    fn neighbours_stay_in_book() {
        let c = corpus(&[("A", "1", None), ("A", "1", None), ("B", "1", None), ("B", "1", None)]);
        assert_eq!(indices(&c.get(2).unwrap().preceding(2)), Vec::<usize>::new());
        assert_eq!(indices(&c.get(1).unwrap().following(2)), Vec::<usize>::new());
        assert_eq!(indices(&c.get(3).unwrap().preceding(3)), vec![2]);
    }

    #[test]
    fn window_marks_continuation() {
        let c = five_in_one_book();
        let window = c.get(2).unwrap().window(1, 1);
        assert_eq!(indices(&window.words), vec![1, 2, 3]);
        assert_eq!(window.to_string(), "...w1 w2 w3...");

        let edge = c.get(0).unwrap().window(2, 1);
        assert!(edge.cut_before);
        assert!(!edge.cut_after);
        assert_eq!(edge.to_string(), "w0 w1...");
    }

    #[test]
    fn verse_words_span_the_verse() {
        let c = corpus(&[
            ("A", "1", None),
            ("A", "2", None),
            ("A", "2", None),
            ("A", "2", None),
            ("A", "3", None),
        ]);
        assert_eq!(indices(&c.get(2).unwrap().verse_words()), vec![1, 2, 3]);
        assert_eq!(c.get(1).unwrap().verse_text(), "w1 w2 w3");
        assert_eq!(indices(&c.get(0).unwrap().verse_words()), vec![0]);
        assert_eq!(indices(&c.get(4).unwrap().verse_words()), vec![4]);
    }

    #[test]
    fn lettered_verse_parts_share_a_verse() {
        let c = corpus(&[("A", "5", None), ("A", "5a", None), ("A", "5a", None), ("A", "6", None)]);
        assert_eq!(indices(&c.get(0).unwrap().verse_words()), vec![0, 1, 2]);
        assert_eq!(c.get(2).unwrap().verse_text(), "w0 w1 w2");
    }

    #[test]
    fn clause_words_use_clause_ids() {
        let c = corpus(&[
            ("A", "1", Some("c1")),
            ("A", "1", Some("c1")),
            ("A", "1", Some("c2")),
        ]);
        assert_eq!(indices(&c.get(0).unwrap().clause_words()), vec![0, 1]);
        assert_eq!(indices(&c.get(2).unwrap().clause_words()), vec![2]);
        assert_eq!(indices(&five_in_one_book().get(1).unwrap().clause_words()), vec![1]);
    }

    #[test]
    fn equality_is_by_corpus_and_position() {
        let a = five_in_one_book();
        let b = five_in_one_book();
        assert_eq!(a.get(1), a.get(1));
        assert_ne!(a.get(1), a.get(2));
        assert_ne!(a.get(1), b.get(1));
    }
}
