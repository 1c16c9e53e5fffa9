//! Command implementations and dispatch.

pub mod books;
pub mod decode;
pub mod explain;
pub mod search;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Explain(cmd) => explain::run(&cmd),
        Commands::Decode(cmd) => decode::run(&cmd),
        Commands::Books(cmd) => books::run(ctx, &cmd),
    }
}
