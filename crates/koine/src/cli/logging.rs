//! Tracing subscriber setup.
//!
//! Events go to stderr so that stdout carries only results. The filter comes from
//! `KOINE_LOG` when it is set, otherwise from the `-v` count.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `KOINE_LOG=koine_search=debug`.
pub const LOG_ENV: &str = "KOINE_LOG";

/// Returns the default filter directive for a `-v` count.
pub const fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}
