//! Book-qualified references.

use std::{fmt, str::FromStr};

use crate::{CompoundReference, Reference, ReferenceError};

/// A reference inside a named book, or the whole book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookReference {
    /// Book name as it appears in the corpus.
    pub book: String,
    /// Location in the book; `None` for the whole book.
    pub reference: Option<CompoundReference>,
}

impl BookReference {
    /// A whole book.
    pub fn whole(book: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            reference: None,
        }
    }

    /// A location in a book.
    pub fn new(book: impl Into<String>, reference: CompoundReference) -> Self {
        Self {
            book: book.into(),
            reference: Some(reference),
        }
    }

    /// True if `other` lies inside this reference.
    ///
    /// Book names must match exactly. A whole book contains everything in it; a located
    /// reference never contains a whole book.
    pub fn contains(&self, other: &Self) -> bool {
        if self.book != other.book {
            return false;
        }
        match (&self.reference, &other.reference) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(outer), Some(inner)) => outer.contains(inner),
        }
    }

    /// True if a single location in `book` lies inside this reference.
    pub fn contains_location(&self, book: &str, location: &Reference) -> bool {
        self.book == book
            && self
                .reference
                .is_none_or(|reference| reference.contains_reference(location))
    }
}

impl FromStr for BookReference {
    type Err = ReferenceError;

    /// Parses `John`, `John 3`, `1 John 2:1-5` or `Song of Songs 1.2`.
    ///
    /// The book name is everything before the last whitespace-separated word, as long as
    /// that word parses as a reference; otherwise the whole input is the book name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ReferenceError::Empty);
        }
        if let Some((book, tail)) = input.rsplit_once(char::is_whitespace)
            && let Ok(reference) = tail.parse::<CompoundReference>()
        {
            return Ok(Self::new(book.trim_end(), reference));
        }
        if input.starts_with(|c: char| c.is_ascii_digit()) && !input.contains(' ') {
            return Err(ReferenceError::Invalid(input.to_string()));
        }
        Ok(Self::whole(input))
    }
}

impl fmt::Display for BookReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            Some(reference) => write!(f, "{} {reference}", self.book),
            None => f.write_str(&self.book),
        }
    }
}
