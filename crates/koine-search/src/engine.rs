//! Query evaluation.
//!
//! Every node maps an ordered input of words to an ordered output. Results keep input
//! order and are never deduplicated, so a word reached twice appears twice.

use koine_corpus::WordRef;
use koine_morph::MorphProperty;
use koine_query::QueryExpr;
use tracing::debug;

use crate::{LexemeMatcher, SearchError};

/// A compiled query node.
#[derive(Debug, Clone)]
enum Node {
    /// Lexeme match with filters.
    Lexeme(LexemeMatcher),
    /// Single grammatical property.
    Morphology(MorphProperty),
    /// Right side searches the left side's output.
    And(Box<Self>, Box<Self>),
    /// Left output followed by right output, both over the same input.
    Or(Box<Self>, Box<Self>),
    /// Preceding words.
    Ante(usize),
    /// Following words.
    Post(usize),
}

impl Node {
    /// Compiles an expression. Windows become an `Or` of `Ante` and `Post`.
    fn compile(expr: &QueryExpr) -> Result<Self, SearchError> {
        Ok(match expr {
            QueryExpr::Lexeme(query) => Self::Lexeme(LexemeMatcher::new(query)?),
            QueryExpr::Morphology(property) => Self::Morphology(*property),
            QueryExpr::And(left, right) => {
                Self::And(Box::new(Self::compile(left)?), Box::new(Self::compile(right)?))
            }
            QueryExpr::Or(left, right) => {
                Self::Or(Box::new(Self::compile(left)?), Box::new(Self::compile(right)?))
            }
            QueryExpr::Ante(n) => Self::Ante(*n),
            QueryExpr::Post(n) => Self::Post(*n),
            QueryExpr::Window { ante, post } => {
                Self::Or(Box::new(Self::Ante(*ante)), Box::new(Self::Post(*post)))
            }
        })
    }

    /// Short name for logging.
    const fn label(&self) -> &'static str {
        match self {
            Self::Lexeme(_) => "lexeme",
            Self::Morphology(_) => "morph",
            Self::And(..) => "and",
            Self::Or(..) => "or",
            Self::Ante(_) => "ante",
            Self::Post(_) => "post",
        }
    }

    /// Evaluates the node over `input`.
    fn search<'c>(&self, input: &[WordRef<'c>]) -> Vec<WordRef<'c>> {
        let results: Vec<WordRef<'c>> = match self {
            Self::Lexeme(matcher) => input.iter().copied().filter(|w| matcher.matches(w)).collect(),
            Self::Morphology(property) => {
                input.iter().copied().filter(|w| w.morph.has(*property)).collect()
            }
            Self::And(left, right) => right.search(&left.search(input)),
            Self::Or(left, right) => {
                let mut results = left.search(input);
                results.extend(right.search(input));
                results
            }
            Self::Ante(n) => input.iter().flat_map(|w| w.preceding(*n)).collect(),
            Self::Post(n) => input.iter().flat_map(|w| w.following(*n)).collect(),
        };
        debug!(node = self.label(), input = input.len(), results = results.len(), "evaluated");
        results
    }
}

/// A query compiled for evaluation.
///
/// Compiling checks every lexeme pattern once; evaluation itself cannot fail.
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Root of the compiled tree.
    root: Node,
}

impl Searcher {
    /// Compiles a parsed query.
    pub fn new(expr: &QueryExpr) -> Result<Self, SearchError> {
        Ok(Self {
            root: Node::compile(expr)?,
        })
    }

    /// Evaluates the query over an ordered input.
    ///
    /// Proximity nodes look up neighbours in each word's own corpus, so they see words
    /// outside `input`.
    pub fn search<'c>(&self, input: &[WordRef<'c>]) -> Vec<WordRef<'c>> {
        self.root.search(input)
    }
}

/// Compiles and evaluates a query in one step.
pub fn search<'c>(expr: &QueryExpr, input: &[WordRef<'c>]) -> Result<Vec<WordRef<'c>>, SearchError> {
    Ok(Searcher::new(expr)?.search(input))
}
