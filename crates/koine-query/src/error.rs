//! Error types for query tokenizing and parsing.
//!
//! Tokenizer failures (unbalanced brackets) carry a byte position and render a caret
//! under the offending character. Parser and command-grammar failures carry the fragment
//! they rejected.

use std::{error::Error, fmt};

/// Tokenizer error with position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Error message.
    pub message: String,
    /// Byte position in input where error occurred.
    pub position: usize,
    /// The original input string.
    pub input: String,
}

impl LexError {
    /// Creates a new tokenizer error.
    pub fn new(message: impl Into<String>, position: usize, input: &str) -> Self {
        Self {
            message: message.into(),
            position,
            input: input.to_string(),
        }
    }

    /// Formats the error with a position indicator showing where the error occurred.
    pub fn format_with_context(&self) -> String {
        let mut result = String::new();
        result.push_str(&format!("query syntax error: {}\n", self.message));
        result.push_str(&format!("  {}\n", self.input));
        result.push_str(&format!("  {}^", " ".repeat(caret_column(&self.input, self.position))));
        result
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_context())
    }
}

impl Error for LexError {}

/// Parse error naming the rejected fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// The command or operator the parser rejected, if there is one.
    pub fragment: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>, fragment: Option<&str>) -> Self {
        Self {
            message: message.into(),
            fragment: fragment.map(str::to_string),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(fragment) = &self.fragment {
            write!(f, "{} in {:?}", self.message, fragment)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl Error for ParseError {}

/// A unified error type for query parsing.
///
/// Carries the original query string so that it can be shown alongside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string (if available).
    pub query: Option<String>,
}

/// The specific kind of query error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// Unbalanced grouping brackets.
    Lex {
        /// Error message.
        message: String,
        /// Byte position in input.
        position: usize,
    },
    /// Invalid syntax: empty group, missing operand, malformed command.
    Parse {
        /// Error message.
        message: String,
        /// The rejected fragment, if there is one.
        fragment: Option<String>,
    },
}

impl QueryError {
    /// Creates a tokenizer error.
    pub fn lex(message: impl Into<String>, position: usize, query: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: message.into(),
                position,
            },
            query: Some(query.into()),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>, fragment: Option<String>, query: Option<String>) -> Self {
        Self {
            kind: QueryErrorKind::Parse {
                message: message.into(),
                fragment,
            },
            query,
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns the error message without context.
    pub fn message(&self) -> &str {
        match &self.kind {
            QueryErrorKind::Lex { message, .. } | QueryErrorKind::Parse { message, .. } => message,
        }
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            QueryErrorKind::Lex { message, .. } if message.contains("unclosed") => {
                Some("Add a closing bracket ) or ] to match the opening one")
            }
            QueryErrorKind::Lex { message, .. } if message.contains("unmatched") => {
                Some("Remove the closing bracket or add an opening one before it")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("missing an operand") => {
                Some("'and' and 'or' need a search on both sides, e.g. 'lexeme λογος and lexeme ρημα'")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("unknown search type") => {
                Some("Searches start with one of: lexeme, morph, ante, post, window")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("unknown flag") => {
                Some("Valid flags are: --case, --number, --gender, --tense, --voice, --mood, --person")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("between searches") => {
                Some("Join searches with 'and' or 'or'")
            }
            _ => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query syntax error: {}", self.message())?;

        if let QueryErrorKind::Parse {
            fragment: Some(fragment),
            ..
        } = &self.kind
        {
            writeln!(f, "  at: {fragment}")?;
        }

        if let Some(query) = &self.query {
            writeln!(f, "  {query}")?;
            if let QueryErrorKind::Lex { position, .. } = &self.kind {
                writeln!(f, "  {}^", " ".repeat(caret_column(query, *position)))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {suggestion}")?;
        }

        Ok(())
    }
}

impl Error for QueryError {}

impl From<LexError> for QueryError {
    fn from(err: LexError) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: err.message,
                position: err.position,
            },
            query: Some(err.input),
        }
    }
}

impl From<ParseError> for QueryError {
    fn from(err: ParseError) -> Self {
        Self {
            kind: QueryErrorKind::Parse {
                message: err.message,
                fragment: err.fragment,
            },
            query: None,
        }
    }
}

/// Number of characters before a byte position, for caret alignment.
fn caret_column(input: &str, position: usize) -> usize {
    let clamped = position.min(input.len());
    input
        .char_indices()
        .take_while(|(index, _)| *index < clamped)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = QueryError::lex("unclosed bracket", 0, "(λογος");
        let display = err.to_string();
        assert!(display.contains("unclosed bracket"));
        assert!(display.contains("(λογος"));
        assert!(display.contains('^'));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn caret_counts_characters_not_bytes() {
        let err = LexError::new("unmatched closing bracket", 19, "λογος ρημα)");
        let rendered = err.format_with_context();
        let caret_line = rendered.lines().last().unwrap();
        assert_eq!(caret_line, format!("  {}^", " ".repeat(10)));
    }

    #[test]
    fn parse_error_display() {
        let err = QueryError::parse(
            "unknown search type",
            Some("lemma λογος".to_string()),
            Some("lemma λογος".to_string()),
        );
        let display = err.to_string();
        assert!(display.contains("unknown search type"));
        assert!(display.contains("at: lemma λογος"));
        assert!(display.contains("hint:"));
        assert!(!display.contains('^'));
    }

    #[test]
    fn error_with_query() {
        let err = QueryError::parse("test error", None, None).with_query("lexeme x");
        assert_eq!(err.query.as_deref(), Some("lexeme x"));
    }

    #[test]
    fn message_extraction() {
        let err = QueryError::lex("test message", 0, "query");
        assert_eq!(err.message(), "test message");
    }

    #[test]
    fn operand_error_suggestion() {
        let err = QueryError::parse("'or' is missing an operand", None, None);
        assert!(err.suggestion().unwrap().contains("both sides"));
    }

    #[test]
    fn parse_error_names_fragment() {
        let err = ParseError::new("unknown flag", Some("--aspect"));
        assert_eq!(err.to_string(), "unknown flag in \"--aspect\"");
    }
}
