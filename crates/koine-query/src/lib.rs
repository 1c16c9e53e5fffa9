//! Query language for koine corpus search.
//!
//! A query combines leaf searches with boolean and proximity operators:
//!
//! - **Lexeme**: `lexeme λογος --case genitive` - words of a lexeme, optionally filtered
//!   by case, number, gender, tense, voice, mood or person. The pattern may be a regular
//!   expression (`lexeme λογ.*`) and is matched against the whole lexeme.
//! - **Morphology**: `morph mood imperative` - words carrying one grammatical property
//! - **Proximity**: `ante 2`, `post 3`, `window 2 3` - words before and after each input word
//! - **AND**: `a and b` or `a & b` - search `b` within the results of `a`
//! - **OR**: `a or b` or `a | b` - results of both, in order, duplicates kept
//! - **Grouping**: `(a or b) and c`, `[a or b] and c`
//!
//! `and` binds tighter than `or`; both associate to the left.
//!
//! # Example
//!
//! ```
//! use koine_query::{QueryExpr, parse};
//!
//! let expr = parse("lexeme λογος --case genitive and window 2 2").unwrap().unwrap();
//! assert!(matches!(expr, QueryExpr::And(..)));
//! ```

#![warn(missing_docs)]

mod ast;
mod command;
mod error;
mod lexer;
mod parser;

pub use ast::{LexemeQuery, QueryExpr};
pub use command::{LEXEME_FLAGS, parse_command};
pub use error::{LexError, ParseError, QueryError, QueryErrorKind};
pub use lexer::{Token, tokenize};
pub use parser::{parse, parse_tokens};
