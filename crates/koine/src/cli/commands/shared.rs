//! Helpers shared by query commands.

use std::process::ExitCode;

use koine_query::{QueryError, QueryExpr, parse};

/// Prints a query error and its hint.
pub fn report_query_error(err: &QueryError) {
    eprintln!("error: {}", err.to_string().trim_end());
}

/// Parses a query, printing syntax errors. An empty query is an error.
pub fn parse_query_or_failure(query: &str) -> Result<QueryExpr, ExitCode> {
    match parse(query) {
        Ok(Some(expr)) => Ok(expr),
        Ok(None) => {
            eprintln!("error: empty query");
            Err(ExitCode::FAILURE)
        }
        Err(e) => {
            report_query_error(&e);
            Err(ExitCode::FAILURE)
        }
    }
}
