//! Leaf command grammar.
//!
//! A leaf command is the text between operators. Its first word selects the search type:
//!
//! ```text
//! lexeme PATTERN [--case C] [--number N] [--gender G] [--tense T] [--voice V] [--mood M] [--person P]
//! morph PROPERTY VALUE
//! ante N
//! post N
//! window ANTE POST
//! ```

use koine_morph::MorphProperty;

use crate::{
    ast::{LexemeQuery, QueryExpr},
    error::ParseError,
};

/// Filter flags accepted by `lexeme`, without the leading `--`.
pub const LEXEME_FLAGS: &[&str] = &["case", "number", "gender", "tense", "voice", "mood", "person"];

/// Parses one leaf command into a query node.
pub fn parse_command(command: &str) -> Result<QueryExpr, ParseError> {
    let mut words = command.split_whitespace();
    let Some(kind) = words.next() else {
        return Err(ParseError::new("empty search", None));
    };
    let args: Vec<&str> = words.collect();

    match kind.to_ascii_lowercase().as_str() {
        "lexeme" => parse_lexeme(command, &args),
        "morph" => parse_morph(command, &args),
        "ante" => {
            let [n] = exact_args(command, &args)?;
            Ok(QueryExpr::Ante(parse_count(n)?))
        }
        "post" => {
            let [n] = exact_args(command, &args)?;
            Ok(QueryExpr::Post(parse_count(n)?))
        }
        "window" => {
            let [ante, post] = exact_args(command, &args)?;
            Ok(QueryExpr::Window {
                ante: parse_count(ante)?,
                post: parse_count(post)?,
            })
        }
        _ => Err(ParseError::new("unknown search type", Some(kind))),
    }
}

/// Parses `lexeme PATTERN` and its filter flags.
fn parse_lexeme(command: &str, args: &[&str]) -> Result<QueryExpr, ParseError> {
    let Some((&pattern, flags)) = args.split_first() else {
        return Err(ParseError::new("lexeme search needs a pattern", Some(command)));
    };
    if pattern.starts_with("--") {
        return Err(ParseError::new("lexeme search needs a pattern before its flags", Some(pattern)));
    }
    if let Err(e) = LexemeQuery::matcher(pattern) {
        return Err(ParseError::new(format!("invalid lexeme pattern: {e}"), Some(pattern)));
    }

    let mut query = LexemeQuery::new(pattern);
    let mut pending: Option<&str> = None;

    for &word in flags {
        match pending.take() {
            Some(flag) if word.starts_with("--") => {
                return Err(ParseError::new("missing value for flag", Some(flag)));
            }
            Some(flag) => {
                let key = flag.trim_start_matches('-');
                let filter = MorphProperty::parse(key, word)
                    .map_err(|e| ParseError::new(format!("invalid value for {flag}: {e}"), Some(word)))?;
                query.filters.push(filter);
            }
            None => {
                let Some(key) = word.strip_prefix("--") else {
                    return Err(ParseError::new("unexpected argument", Some(word)));
                };
                if !LEXEME_FLAGS.contains(&key) {
                    return Err(ParseError::new("unknown flag", Some(word)));
                }
                if query.filters.iter().any(|filter| filter.key() == key) {
                    return Err(ParseError::new("flag given twice", Some(word)));
                }
                pending = Some(word);
            }
        }
    }

    if let Some(flag) = pending {
        return Err(ParseError::new("missing value for flag", Some(flag)));
    }

    Ok(QueryExpr::Lexeme(query))
}

/// Parses `morph PROPERTY VALUE`.
fn parse_morph(command: &str, args: &[&str]) -> Result<QueryExpr, ParseError> {
    let [key, value] = exact_args(command, args)?;
    let key_name = key.to_ascii_lowercase();
    if !MorphProperty::KEYS.contains(&key_name.as_str()) && key_name != "pos" {
        return Err(ParseError::new("unknown morphology property", Some(key)));
    }
    MorphProperty::parse(&key_name, value)
        .map(QueryExpr::Morphology)
        .map_err(|e| ParseError::new(e.to_string(), Some(value)))
}

/// Checks that a command has exactly `N` arguments.
fn exact_args<'a, const N: usize>(command: &str, args: &[&'a str]) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| {
        let expected = if N == 1 { "argument" } else { "arguments" };
        ParseError::new(format!("expected {N} {expected}, found {}", args.len()), Some(command))
    })
}

/// Parses a non-negative word count.
fn parse_count(text: &str) -> Result<usize, ParseError> {
    text.parse()
        .map_err(|_| ParseError::new("expected a non-negative number", Some(text)))
}
