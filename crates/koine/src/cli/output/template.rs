//! Result line templates.
//!
//! A template is free text in which placeholder words are replaced for every result:
//!
//! | placeholder  | replaced with                                        |
//! |--------------|------------------------------------------------------|
//! | `book`       | book name                                            |
//! | `chapter`    | chapter                                              |
//! | `verse`      | verse                                                |
//! | `window`     | the words around the match, `...` where text goes on |
//! | `clause`     | the words of the match's clause                      |
//! | `vss_string` | the text of the match's verse                        |
//! | `num_rows`   | the number of results                                |
//! | `parsing`    | the decoded morphology of the match                  |
//! | `word`       | the matched word                                     |
//! | `lexeme`     | its lexical forms                                    |
//!
//! Placeholders are replaced as whole words only, in a single pass, so text that is
//! substituted in is never rescanned.

use std::sync::LazyLock;

use koine_config::OutputSettings;
use koine_corpus::{WordRef, join_text};
use regex::{Captures, Regex};

/// Placeholder words, in the order they are documented.
pub const PLACEHOLDERS: &[&str] = &[
    "book",
    "chapter",
    "verse",
    "window",
    "clause",
    "vss_string",
    "num_rows",
    "parsing",
    "word",
    "lexeme",
];

/// Matches any placeholder as a whole word.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", PLACEHOLDERS.join("|")))
        .expect("placeholder pattern must compile")
});

/// Renders one result line from `settings.format`.
pub fn render(settings: &OutputSettings, hit: &WordRef<'_>, num_rows: usize) -> String {
    PLACEHOLDER
        .replace_all(&settings.format, |caps: &Captures<'_>| {
            substitute(&caps[0], settings, hit, num_rows)
        })
        .into_owned()
}

/// Returns the text for one placeholder.
fn substitute(placeholder: &str, settings: &OutputSettings, hit: &WordRef<'_>, num_rows: usize) -> String {
    match placeholder {
        "book" => hit.book.clone(),
        "chapter" => hit.chapter.clone(),
        "verse" => hit.verse.clone(),
        "window" => hit
            .window(settings.window_before, settings.window_after)
            .to_string(),
        "clause" => join_text(&hit.clause_words()),
        "vss_string" => hit.verse_text(),
        "num_rows" => num_rows.to_string(),
        "parsing" => hit.morph.parsing(),
        "word" => hit.text.clone(),
        "lexeme" => hit.lexeme(),
        other => other.to_string(),
    }
}
