//! Query lexer (tokenizer).
//!
//! A single pass over the input with two states: scanning between commands, where
//! operators and brackets are recognized and whitespace is skipped, and inside a command,
//! where characters accumulate until a structural character ends it. Inside a command a
//! trailing `and`/`or` word is promoted to an operator, so `lexeme λογος and lexeme ρημα`
//! needs no brackets.

use std::{fmt, iter::Peekable, str::Chars};

use crate::error::LexError;

/// A token in the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A leaf command, trimmed (e.g. `lexeme λογος --case genitive`).
    Command(String),

    /// The AND operator (`&` or the word `and`).
    And,

    /// The OR operator (`|` or the word `or`).
    Or,

    /// Opening `(` or `[` at the given nesting depth, starting from 1.
    Open(usize),

    /// Closing `)` or `]` matching the opening bracket of the same depth.
    Close(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(command) => f.write_str(command),
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
            Self::Open(_) => f.write_str("("),
            Self::Close(_) => f.write_str(")"),
        }
    }
}

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between commands.
    Scanning,
    /// Accumulating a command.
    InCommand,
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with one-character lookahead.
    chars: Peekable<Chars<'a>>,
    /// Current byte position in input.
    position: usize,
    /// Current scanner state.
    state: State,
    /// The command accumulated so far.
    command: String,
    /// Byte positions of the currently open brackets, innermost last.
    open: Vec<usize>,
    /// Tokens produced so far.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars().peekable(),
            position: 0,
            state: State::Scanning,
            command: String::new(),
            open: Vec::new(),
            tokens: Vec::new(),
        }
    }

    /// Creates an error at a specific position.
    fn error_at(&self, message: impl Into<String>, position: usize) -> LexError {
        LexError::new(message, position, self.input)
    }

    /// Tokenizes the entire input, returning all tokens or an error.
    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(&ch) = self.chars.peek() {
            match ch {
                '&' | '|' | '(' | ')' | '[' | ']' => {
                    self.end_command();
                    self.read_structural(ch)?;
                }
                c if c.is_whitespace() => {
                    if self.state == State::InCommand && !self.split_keyword() {
                        self.command.push(c);
                    }
                }
                c => {
                    self.state = State::InCommand;
                    self.command.push(c);
                }
            }
            self.advance();
        }

        self.end_command();

        if let Some(&position) = self.open.last() {
            return Err(self.error_at("unclosed bracket", position));
        }

        Ok(self.tokens)
    }

    /// Handles an operator or bracket at the current position.
    fn read_structural(&mut self, ch: char) -> Result<(), LexError> {
        let token = match ch {
            '&' => Token::And,
            '|' => Token::Or,
            '(' | '[' => {
                self.open.push(self.position);
                Token::Open(self.open.len())
            }
            _ => {
                let depth = self.open.len();
                if self.open.pop().is_none() {
                    return Err(self.error_at("unmatched closing bracket", self.position));
                }
                Token::Close(depth)
            }
        };
        self.tokens.push(token);
        Ok(())
    }

    /// Promotes a trailing lowercase `and`/`or` word of the current command to an operator.
    ///
    /// The text before the keyword becomes its own command. Returns true if a keyword
    /// was found.
    fn split_keyword(&mut self) -> bool {
        let trimmed = self.command.trim_end();
        let (head, last) = match trimmed.rfind(char::is_whitespace) {
            Some(index) => trimmed.split_at(index),
            None => ("", trimmed),
        };
        let operator = match last.trim_start() {
            "and" => Token::And,
            "or" => Token::Or,
            _ => return false,
        };

        let head = head.trim().to_string();
        if !head.is_empty() {
            self.tokens.push(Token::Command(head));
        }
        self.tokens.push(operator);
        self.command.clear();
        self.state = State::Scanning;
        true
    }

    /// Finishes the current command, if any.
    fn end_command(&mut self) {
        if self.state == State::InCommand && !self.split_keyword() {
            let command = self.command.trim();
            if !command.is_empty() {
                self.tokens.push(Token::Command(command.to_string()));
            }
        }
        self.command.clear();
        self.state = State::Scanning;
    }

    /// Advances to the next character.
    fn advance(&mut self) {
        if let Some(ch) = self.chars.next() {
            self.position += ch.len_utf8();
        }
    }
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}
