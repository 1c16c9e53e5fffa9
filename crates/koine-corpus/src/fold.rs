//! Accent folding for Greek text.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Removes accents, breathings and other diacritics.
///
/// The text is decomposed (NFD) and every combining mark is dropped, so `λόγος`,
/// `λογος` and `λὸγος` all fold to `λογος`. Case is preserved.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
