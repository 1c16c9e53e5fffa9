//! Single chapter or chapter/verse references.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::ReferenceError;

/// A chapter, or a verse within a chapter, optionally narrowed to a lettered part.
///
/// The derived ordering compares `(chapter, verse, letter)` with an absent verse or letter
/// sorting before any present one, so `1 < 1.1 < 1.1a < 1.2`. Containment uses
/// [`Reference::cmp_loose`], under which a chapter-only reference is compared by chapter
/// alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reference {
    /// Chapter number.
    pub chapter: u32,
    /// Verse number; `None` for the whole chapter.
    pub verse: Option<u32>,
    /// Verse part letter, e.g. the `a` of `31.5a`.
    pub letter: Option<char>,
}

impl Reference {
    /// A whole chapter.
    pub const fn chapter(chapter: u32) -> Self {
        Self {
            chapter,
            verse: None,
            letter: None,
        }
    }

    /// A verse in a chapter.
    pub const fn verse(chapter: u32, verse: u32) -> Self {
        Self {
            chapter,
            verse: Some(verse),
            letter: None,
        }
    }

    /// Narrows a verse reference to a lettered part.
    pub const fn with_letter(mut self, letter: char) -> Self {
        self.letter = Some(letter);
        self
    }

    /// True if this reference names a whole chapter.
    pub const fn is_chapter(&self) -> bool {
        self.verse.is_none()
    }

    /// Compares two references, treating a chapter-only reference as chapter precision.
    ///
    /// A missing verse on either side compares by chapter alone, so `3` is loosely equal
    /// to `3.5`. Two verse references compare fully, an absent letter first: `3.5 < 3.5a`.
    pub fn cmp_loose(&self, other: &Self) -> Ordering {
        if self.verse.is_none() || other.verse.is_none() {
            return self.chapter.cmp(&other.chapter);
        }
        self.cmp(other)
    }

    /// True if `other` lies inside this reference.
    ///
    /// A chapter contains all of its verses; an unlettered verse contains its lettered
    /// parts; otherwise a reference only contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        if self.chapter != other.chapter {
            return false;
        }
        match self.verse {
            None => true,
            Some(verse) => {
                other.verse == Some(verse)
                    && self.letter.is_none_or(|letter| other.letter == Some(letter))
            }
        }
    }

    /// Parses the verse part of a reference (`5`, `5a`).
    fn parse_verse(text: &str, input: &str) -> Result<(u32, Option<char>), ReferenceError> {
        let digits_end = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (digits, rest) = text.split_at(digits_end);
        let verse = parse_number(digits, input)?;
        let mut rest = rest.chars();
        match (rest.next(), rest.next()) {
            (None, _) => Ok((verse, None)),
            (Some(letter), None) if letter.is_ascii_lowercase() => Ok((verse, Some(letter))),
            _ => Err(ReferenceError::Invalid(input.to_string())),
        }
    }
}

/// Parses an unsigned decimal number made only of ASCII digits.
fn parse_number(text: &str, input: &str) -> Result<u32, ReferenceError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReferenceError::Invalid(input.to_string()));
    }
    text.parse()
        .map_err(|_| ReferenceError::Invalid(input.to_string()))
}

impl FromStr for Reference {
    type Err = ReferenceError;

    /// Parses `31`, `31.5`, `31:5` or `31.5a`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ReferenceError::Empty);
        }
        match input.split_once(['.', ':']) {
            None => Ok(Self::chapter(parse_number(input, input)?)),
            Some((chapter, verse)) => {
                let chapter = parse_number(chapter, input)?;
                let (verse, letter) = Self::parse_verse(verse, input)?;
                Ok(Self {
                    chapter,
                    verse: Some(verse),
                    letter,
                })
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.chapter)?;
        if let Some(verse) = self.verse {
            write!(f, ".{verse}")?;
        }
        if let Some(letter) = self.letter {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
