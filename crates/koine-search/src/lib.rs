//! Query evaluation for koine.
//!
//! A parsed [`QueryExpr`](koine_query::QueryExpr) is compiled into a [`Searcher`] and
//! evaluated over an ordered input of [`WordRef`](koine_corpus::WordRef)s, usually every
//! word of every loaded corpus. Evaluation is a pure function of the input: leaf searches
//! filter it, `and` feeds its left result to its right side, `or` concatenates both sides,
//! and proximity searches collect neighbours from each word's corpus.
//!
//! # Example
//!
//! ```
//! use koine_corpus::Corpus;
//! use koine_morph::Dialect;
//! use koine_query::parse;
//! use koine_search::search;
//!
//! let corpus = Corpus::from_json(
//!     "nt",
//!     r#"[{"Book": "John", "Chapter": "1", "Verse": "1", "lexeme": ["λόγος"],
//!          "word_index": 0, "morph_code": "N-NSM"}]"#,
//!     Dialect::Rmac,
//! )
//! .unwrap();
//! let expr = parse("lexeme λογος --case nominative").unwrap().unwrap();
//! let input: Vec<_> = corpus.iter().collect();
//! assert_eq!(search(&expr, &input).unwrap().len(), 1);
//! ```

#![warn(missing_docs)]

mod engine;
mod error;
mod matcher;

pub use engine::{Searcher, search};
pub use error::SearchError;
pub use matcher::LexemeMatcher;
