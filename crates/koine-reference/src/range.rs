//! Reference ranges.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::{Reference, ReferenceError};

/// A single reference or an inclusive range of references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompoundReference {
    /// First reference in the range.
    pub from: Reference,
    /// Last reference in the range; equal to `from` for a single reference.
    pub to: Reference,
}

impl CompoundReference {
    /// Creates a range. Fails if `to` sorts before `from`.
    pub fn new(from: Reference, to: Reference) -> Result<Self, ReferenceError> {
        if from.cmp_loose(&to) == Ordering::Greater {
            return Err(ReferenceError::Reversed(format!("{from}-{to}")));
        }
        Ok(Self { from, to })
    }

    /// True if this is a range rather than a single reference.
    pub fn is_range(&self) -> bool {
        self.from != self.to
    }

    /// True if `reference` falls within this range.
    pub fn contains_reference(&self, reference: &Reference) -> bool {
        if !self.is_range() {
            return self.from.contains(reference);
        }
        self.from.cmp_loose(reference) != Ordering::Greater
            && reference.cmp_loose(&self.to) != Ordering::Greater
    }

    /// True if `other` falls entirely within this range.
    pub fn contains(&self, other: &Self) -> bool {
        self.contains_reference(&other.from) && self.contains_reference(&other.to)
    }
}

impl From<Reference> for CompoundReference {
    fn from(reference: Reference) -> Self {
        Self {
            from: reference,
            to: reference,
        }
    }
}

impl FromStr for CompoundReference {
    type Err = ReferenceError;

    /// Parses `3`, `3.16`, `3.16-4.2`, `3-4` or `3.16-18`.
    ///
    /// In `3.16-18` the bare end is a verse of the starting chapter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let Some((from, to)) = input.split_once('-') else {
            return input.parse::<Reference>().map(Self::from);
        };
        let from: Reference = from.parse()?;
        let to = to.trim();
        let to = if from.verse.is_some() && !to.contains(['.', ':']) {
            format!("{}.{to}", from.chapter).parse()?
        } else {
            to.parse()?
        };
        Self::new(from, to).map_err(|_| ReferenceError::Reversed(input.to_string()))
    }
}

impl fmt::Display for CompoundReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_range() {
            return write!(f, "{}", self.from);
        }
        write!(f, "{}-", self.from)?;
        if let (Some(_), Some(verse)) = (self.from.verse, self.to.verse)
            && self.from.chapter == self.to.chapter
        {
            write!(f, "{verse}")?;
            if let Some(letter) = self.to.letter {
                write!(f, "{letter}")?;
            }
            return Ok(());
        }
        write!(f, "{}", self.to)
    }
}
