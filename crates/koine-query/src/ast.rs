//! Query abstract syntax tree.
//!
//! Trees are built once by the parser and are immutable afterwards.

use std::fmt;

use koine_morph::MorphProperty;
use regex::{Regex, RegexBuilder};

/// A lexeme search with optional grammatical filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexemeQuery {
    /// Lexeme pattern as written in the query: a plain word or a regular expression.
    pub pattern: String,
    /// Properties every match must carry, at most one per category.
    pub filters: Vec<MorphProperty>,
}

impl LexemeQuery {
    /// Creates a lexeme search without filters.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            filters: Vec::new(),
        }
    }

    /// Adds a grammatical filter.
    pub fn with_filter(mut self, filter: MorphProperty) -> Self {
        self.filters.push(filter);
        self
    }

    /// Compiles a pattern into a whole-lexeme, case-insensitive matcher.
    ///
    /// `pattern` must already be folded the same way as the lexemes it is matched
    /// against. A plain word matches only that lexeme; `λογ.*` matches every lexeme
    /// starting with `λογ`.
    pub fn matcher(pattern: &str) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(true)
            .build()
    }
}

/// A parsed query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryExpr {
    /// Words whose lexeme matches, optionally filtered by grammar.
    Lexeme(LexemeQuery),

    /// Words carrying one grammatical property.
    Morphology(MorphProperty),

    /// Sequential narrowing: the right side searches the left side's results.
    And(Box<Self>, Box<Self>),

    /// Both sides over the same input, results concatenated with duplicates kept.
    Or(Box<Self>, Box<Self>),

    /// The `n` words before each input word.
    Ante(usize),

    /// The `n` words after each input word.
    Post(usize),

    /// The words before and after each input word; same as `Or(Ante, Post)`.
    Window {
        /// Words before.
        ante: usize,
        /// Words after.
        post: usize,
    },
}

impl QueryExpr {
    /// Creates an And expression.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates an Or expression.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Lexeme(query) => {
                writeln!(f, "{prefix}Lexeme({:?})", query.pattern)?;
                for filter in &query.filters {
                    writeln!(f, "{prefix}  {filter}")?;
                }
                Ok(())
            }
            Self::Morphology(property) => writeln!(f, "{prefix}Morphology({property})"),
            Self::And(left, right) => {
                writeln!(f, "{prefix}And")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Or(left, right) => {
                writeln!(f, "{prefix}Or")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Ante(n) => writeln!(f, "{prefix}Ante({n})"),
            Self::Post(n) => writeln!(f, "{prefix}Post({n})"),
            Self::Window { ante, post } => writeln!(f, "{prefix}Window({ante}, {post})"),
        }
    }

    /// Formats the expression back into query syntax, fully bracketed.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Lexeme(query) => {
                let mut text = format!("lexeme {}", query.pattern);
                for filter in &query.filters {
                    text.push_str(&format!(" --{} {}", filter.key(), filter.value()));
                }
                text
            }
            Self::Morphology(property) => format!("morph {} {}", property.key(), property.value()),
            Self::And(left, right) => {
                format!("({} and {})", left.to_query_string(), right.to_query_string())
            }
            Self::Or(left, right) => {
                format!("({} or {})", left.to_query_string(), right.to_query_string())
            }
            Self::Ante(n) => format!("ante {n}"),
            Self::Post(n) => format!("post {n}"),
            Self::Window { ante, post } => format!("window {ante} {post}"),
        }
    }
}

impl fmt::Display for QueryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
