//! Implementation of `koine books`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use koine_corpus::{Corpus, CorpusStats};
use serde::Serialize;

use crate::cli::{
    args::BooksCommand,
    context::CommandContext,
    output::{dim, header, print_json},
};

/// JSON view of one book.
#[derive(Serialize)]
struct JsonBook<'a> {
    /// Book name.
    name: &'a str,
    /// Number of numbered chapters.
    chapters: usize,
    /// Number of words.
    words: usize,
    /// Last verse of each numbered chapter, in chapter order.
    chapter_limits: Vec<(u32, u32)>,
}

/// JSON view of one corpus.
#[derive(Serialize)]
struct JsonCorpus<'a> {
    /// Corpus name.
    name: &'a str,
    /// Number of words.
    words: usize,
    /// Books in corpus order.
    books: Vec<JsonBook<'a>>,
}

impl<'a> JsonCorpus<'a> {
    /// Builds the JSON view of a corpus.
    fn new(corpus: &'a Corpus) -> Self {
        Self {
            name: corpus.name(),
            words: corpus.len(),
            books: corpus
                .stats()
                .books()
                .iter()
                .map(|book| JsonBook {
                    name: &book.name,
                    chapters: book.chapter_limits.len(),
                    words: book.words,
                    chapter_limits: book.chapter_limits.iter().map(|(c, v)| (*c, *v)).collect(),
                })
                .collect(),
        }
    }
}

/// Lists the books of every corpus.
pub fn run(ctx: &mut CommandContext, cmd: &BooksCommand) -> ExitCode {
    let corpora = match ctx.corpora() {
        Ok(corpora) => corpora,
        Err(code) => return code,
    };

    if cmd.json {
        let output: Vec<_> = corpora.iter().map(JsonCorpus::new).collect();
        return print_json(&output);
    }

    for corpus in corpora {
        println!(
            "{} {}",
            header(corpus.name()),
            dim(&format!("({} words)", corpus.len()))
        );

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec!["Book", "Chapters", "Words", "Ends at"]);
        for book in corpus.stats().books() {
            table.add_row(vec![
                Cell::new(&book.name),
                Cell::new(book.chapter_limits.len().to_string()),
                Cell::new(book.words.to_string()),
                Cell::new(ends_at(corpus.stats(), &book.name)),
            ]);
        }
        println!("{table}");
        println!();
    }

    ExitCode::SUCCESS
}

/// The last chapter and verse of a book, as `chapter:verse`.
fn ends_at(stats: &CorpusStats, book: &str) -> String {
    stats
        .book_limit(book)
        .map(|(chapter, verse)| format!("{chapter}:{verse}"))
        .unwrap_or_default()
}
