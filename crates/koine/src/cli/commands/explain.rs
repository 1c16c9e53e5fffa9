//! Implementation of `koine explain`.

use std::process::ExitCode;

use koine_query::{QueryError, parse_tokens, tokenize};

use super::shared::report_query_error;
use crate::cli::{
    args::ExplainCommand,
    output::{dim, subheader},
};

/// Prints the token stream and the parsed tree of a query.
pub fn run(cmd: &ExplainCommand) -> ExitCode {
    let query = cmd.query.joined();

    println!("{}", subheader("Query:"));
    println!("   {query}");
    println!();

    let tokens = match tokenize(&query) {
        Ok(tokens) => tokens,
        Err(e) => {
            report_query_error(&QueryError::from(e));
            return ExitCode::FAILURE;
        }
    };

    println!("{}", subheader("Tokens:"));
    for token in &tokens {
        println!("   {token}");
    }
    println!();

    match parse_tokens(&tokens) {
        Ok(Some(expr)) => {
            println!("{}", subheader("Parsed AST:"));
            for line in expr.to_string().lines() {
                println!("   {line}");
            }
            println!();

            println!("{}", subheader("Normalized:"));
            println!("   {}", expr.to_query_string());
            println!();
        }
        Ok(None) => {
            println!("{}", dim("(empty query)"));
            println!();
        }
        Err(e) => {
            report_query_error(&QueryError::from(e).with_query(query));
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
