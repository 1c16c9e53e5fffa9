//! Per-book chapter and verse statistics.

use std::collections::BTreeMap;

use crate::Word;

/// Chapter and verse limits of one book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookStats {
    /// Book name.
    pub name: String,
    /// Number of words in the book.
    pub words: usize,
    /// Last verse number of each numbered chapter.
    pub chapter_limits: BTreeMap<u32, u32>,
}

/// Statistics over a whole corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Books in corpus order.
    books: Vec<BookStats>,
}

impl CorpusStats {
    /// Computes statistics for words in corpus order.
    ///
    /// The limit of a chapter is the verse of its last word. Chapters or verses that are
    /// not numeric are left out of the limits but their words are still counted.
    pub fn from_words(words: &[Word]) -> Self {
        let mut books: Vec<BookStats> = Vec::new();
        for word in words {
            let position = match books.iter().position(|b| b.name == word.book) {
                Some(position) => position,
                None => {
                    books.push(BookStats {
                        name: word.book.clone(),
                        words: 0,
                        chapter_limits: BTreeMap::new(),
                    });
                    books.len() - 1
                }
            };
            let book = &mut books[position];
            book.words += 1;
            if let (Some(chapter), Some(verse)) = (word.chapter_number(), word.verse_number()) {
                book.chapter_limits.insert(chapter, verse);
            }
        }
        Self { books }
    }

    /// Books in corpus order.
    pub fn books(&self) -> &[BookStats] {
        &self.books
    }

    /// Book names in corpus order.
    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.iter().map(|b| b.name.as_str())
    }

    /// Statistics for one book.
    pub fn book(&self, name: &str) -> Option<&BookStats> {
        self.books.iter().find(|b| b.name == name)
    }

    /// The last verse of a chapter.
    pub fn chapter_limit(&self, book: &str, chapter: u32) -> Option<u32> {
        self.book(book)?.chapter_limits.get(&chapter).copied()
    }

    /// The last (chapter, verse) of a book.
    pub fn book_limit(&self, book: &str) -> Option<(u32, u32)> {
        let (chapter, verse) = self.book(book)?.chapter_limits.last_key_value()?;
        Some((*chapter, *verse))
    }
}
