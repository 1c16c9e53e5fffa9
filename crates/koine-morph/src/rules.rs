//! Ordered pattern → extractor rule tables.
//!
//! A table is tried top to bottom and the first rule whose pattern matches owns the code.
//! If that rule's extractor then rejects the code, decoding fails; later rules are never
//! consulted.

use regex::{Captures, Regex};
use tracing::trace;

use crate::{CodeContext, MorphAttributes, MorphError};

/// Builds attributes from the capture groups of a matched pattern.
type Extractor = Box<dyn Fn(&Captures<'_>) -> Option<MorphAttributes> + Send + Sync>;

/// A single decoding rule.
pub struct Rule {
    /// Pattern over the raw code.
    pattern: Regex,
    /// Extractor run when the pattern matches.
    extract: Extractor,
}

impl Rule {
    /// Creates a rule. Patterns are static literals, so a compile failure is a bug.
    pub fn new<F>(pattern: &str, extract: F) -> Self
    where
        F: Fn(&Captures<'_>) -> Option<MorphAttributes> + Send + Sync + 'static,
    {
        Self {
            pattern: Regex::new(pattern).expect("morphology rule pattern must compile"),
            extract: Box::new(extract),
        }
    }
}

/// An ordered list of rules for one code dialect.
pub struct RuleTable {
    /// Dialect name, for tracing.
    name: &'static str,
    /// Rules in priority order.
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Creates a table from rules in priority order.
    pub const fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    /// Decodes a code with the first matching rule.
    pub fn decode(
        &self,
        code: &str,
        context: CodeContext<'_>,
    ) -> Result<MorphAttributes, MorphError> {
        for (position, rule) in self.rules.iter().enumerate() {
            let Some(captures) = rule.pattern.captures(code) else {
                continue;
            };
            trace!(dialect = self.name, code, rule = position, "morphology rule matched");
            return (rule.extract)(&captures).ok_or_else(|| MorphError::unknown_code(code, context));
        }
        Err(MorphError::unknown_code(code, context))
    }

    /// Number of rules in the table.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

/// Returns the text of a capture group, if it participated in the match.
pub fn group<'c>(captures: &Captures<'c>, index: usize) -> Option<&'c str> {
    captures.get(index).map(|m| m.as_str())
}
