//! Command-line interface for koine, a search tool for tagged Koine Greek corpora.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let loaded = if cli.command.needs_config() {
        CommandContext::load(cli.corpora)
    } else {
        CommandContext::load_cwd_only(cli.corpora)
    };
    let mut ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
