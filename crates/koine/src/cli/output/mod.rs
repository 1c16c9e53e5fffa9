//! Rendering and JSON serialization for CLI output.

mod template;

use std::process::ExitCode;

use koine_config::OutputSettings;
use koine_corpus::WordRef;
use koine_morph::MorphAttributes;
use serde::Serialize;

use self::template::render;

/// ANSI escape codes.
mod colors {
    /// Reset all attributes.
    pub const RESET: &str = "\x1b[0m";
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Dimmed text.
    pub const DIM: &str = "\x1b[2m";
    /// Cyan foreground.
    pub const CYAN: &str = "\x1b[36m";
}

/// Formats text as a header (bold cyan).
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// One search result in JSON output.
#[derive(Serialize)]
struct JsonHit<'a> {
    /// Name of the corpus the word belongs to.
    corpus: &'a str,
    /// Position of the word in its corpus.
    word_index: usize,
    /// Book name.
    book: &'a str,
    /// Chapter.
    chapter: &'a str,
    /// Verse.
    verse: &'a str,
    /// Surface text.
    word: &'a str,
    /// Lexical forms.
    lexemes: &'a [String],
    /// Raw morphology code, if the corpus carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    /// Decoded morphology.
    morph: &'a MorphAttributes,
    /// Text of the containing verse.
    verse_text: String,
}

impl<'a> JsonHit<'a> {
    /// Builds the JSON view of a result.
    fn new(hit: &WordRef<'a>) -> Self {
        let word = hit.word();
        Self {
            corpus: hit.corpus().name(),
            word_index: hit.index(),
            book: &word.book,
            chapter: &word.chapter,
            verse: &word.verse,
            word: &word.text,
            lexemes: &word.lexemes,
            code: word.code.as_deref(),
            morph: &word.morph,
            verse_text: hit.verse_text(),
        }
    }
}

/// JSON output for `koine search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as given.
    query: &'a str,
    /// Number of results.
    total_matches: usize,
    /// Results in search order.
    results: Vec<JsonHit<'a>>,
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints search results as JSON.
pub fn output_json_results(query: &str, hits: &[WordRef<'_>]) -> ExitCode {
    let output = JsonSearchOutput {
        query,
        total_matches: hits.len(),
        results: hits.iter().map(JsonHit::new).collect(),
    };
    print_json(&output)
}

/// Prints one templated line per search result.
pub fn output_text_results(hits: &[WordRef<'_>], settings: &OutputSettings) -> ExitCode {
    for hit in hits {
        println!("{}", render(settings, hit, hits.len()));
    }
    ExitCode::SUCCESS
}
