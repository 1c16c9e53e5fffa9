//! Implementation of `koine search`.

use std::process::ExitCode;

use koine_corpus::{WordRef, concat};
use koine_reference::BookReference;
use koine_search::Searcher;
use tracing::{debug, info};

use super::shared::parse_query_or_failure;
use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{output_json_results, output_text_results},
};

/// Searches every corpus and prints the matches in search order.
pub fn run(ctx: &mut CommandContext, cmd: &SearchCommand) -> ExitCode {
    let query = cmd.query.joined();
    let expr = match parse_query_or_failure(&query) {
        Ok(expr) => expr,
        Err(code) => return code,
    };
    let searcher = match Searcher::new(&expr) {
        Ok(searcher) => searcher,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let within = match cmd.within.as_deref().map(str::parse::<BookReference>).transpose() {
        Ok(within) => within,
        Err(e) => {
            eprintln!("error: invalid --within reference: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut settings = ctx.config.output.clone();
    if let Some(format) = &cmd.out {
        settings.format.clone_from(format);
    }
    if let Some(before) = cmd.before {
        settings.window_before = before;
    }
    if let Some(after) = cmd.after {
        settings.window_after = after;
    }

    let corpora = match ctx.corpora() {
        Ok(corpora) => corpora,
        Err(code) => return code,
    };

    let input: Vec<WordRef<'_>> = match &within {
        Some(reference) => {
            let input: Vec<_> = corpora.iter().flat_map(|c| c.slice(reference)).collect();
            if input.is_empty() {
                eprintln!("warning: no words found within {reference}");
            }
            input
        }
        None => concat(corpora),
    };

    debug!(query = %query, input = input.len(), "searching");
    let hits = searcher.search(&input);
    info!(matches = hits.len(), "search finished");

    if cmd.count {
        println!("{}", hits.len());
        return ExitCode::SUCCESS;
    }
    if cmd.json {
        return output_json_results(&query, &hits);
    }
    output_text_results(&hits, &settings)
}
