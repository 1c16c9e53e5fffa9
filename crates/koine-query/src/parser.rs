//! Query parser.
//!
//! Parses a token stream into a query AST in three steps:
//!
//! 1. Bracketed regions become nested groups, so grouping tokens disappear.
//! 2. Within each group, every `and` folds its left and right neighbours into an
//!    [`QueryExpr::And`], scanning left to right.
//! 3. The remaining `or` operators fold the same way into [`QueryExpr::Or`].
//!
//! Both operators therefore associate to the left, and `and` binds tighter than `or`:
//!
//! ```text
//! a and b or c   →  Or(And(a, b), c)
//! a or b and c   →  Or(a, And(b, c))
//! ```
//!
//! Leaf commands are handed to the command grammar in [`crate::command`].

use std::slice::Iter;

use crate::{
    ast::QueryExpr,
    command::parse_command,
    error::{ParseError, QueryError},
    lexer::{Token, tokenize},
};

/// A token list with grouping resolved.
#[derive(Debug)]
enum Element {
    /// A leaf command.
    Command(String),
    /// The AND operator.
    And,
    /// The OR operator.
    Or,
    /// A bracketed sub-list.
    Group(Vec<Self>),
}

/// A group element during operator folding.
#[derive(Debug)]
enum Item {
    /// A converted operand.
    Operand(QueryExpr),
    /// An unresolved AND.
    And,
    /// An unresolved OR.
    Or,
}

/// Which operator a folding pass resolves.
#[derive(Debug, Clone, Copy)]
enum Operator {
    /// `and`.
    And,
    /// `or`.
    Or,
}

impl Operator {
    /// The operator's query keyword.
    const fn keyword(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }

    /// True if the item is this operator.
    const fn matches(self, item: &Item) -> bool {
        matches!((self, item), (Self::And, Item::And) | (Self::Or, Item::Or))
    }

    /// Combines two operands.
    fn combine(self, left: QueryExpr, right: QueryExpr) -> QueryExpr {
        match self {
            Self::And => QueryExpr::and(left, right),
            Self::Or => QueryExpr::or(left, right),
        }
    }
}

/// Collects tokens up to the close of the current group.
///
/// At the top level (`depth == 0`) the input must run out; inside a group a matching
/// close token must end it.
fn group(tokens: &mut Iter<'_, Token>, depth: usize) -> Result<Vec<Element>, ParseError> {
    let mut elements = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::Command(command) => elements.push(Element::Command(command.clone())),
            Token::And => elements.push(Element::And),
            Token::Or => elements.push(Element::Or),
            Token::Open(_) => elements.push(Element::Group(group(tokens, depth + 1)?)),
            Token::Close(_) if depth == 0 => {
                return Err(ParseError::new("unmatched closing bracket", Some(")")));
            }
            Token::Close(_) => return Ok(elements),
        }
    }

    if depth > 0 {
        return Err(ParseError::new("unclosed bracket", Some("(")));
    }
    Ok(elements)
}

/// Converts a group into a single expression.
fn reduce(elements: Vec<Element>) -> Result<QueryExpr, ParseError> {
    if elements.is_empty() {
        return Err(ParseError::new("empty group", Some("()")));
    }

    let items = elements
        .into_iter()
        .map(|element| match element {
            Element::Command(command) => parse_command(&command).map(Item::Operand),
            Element::Group(inner) => reduce(inner).map(Item::Operand),
            Element::And => Ok(Item::And),
            Element::Or => Ok(Item::Or),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let items = fold(items, Operator::And)?;
    let mut items = fold(items, Operator::Or)?.into_iter();

    match (items.next(), items.next()) {
        (Some(Item::Operand(expr)), None) => Ok(expr),
        (Some(Item::Operand(_)), Some(Item::Operand(next))) => Err(ParseError::new(
            "expected 'and' or 'or' between searches",
            Some(&next.to_query_string()),
        )),
        _ => Err(ParseError::new("malformed query", None)),
    }
}

/// Resolves every occurrence of one operator, left to right.
fn fold(items: Vec<Item>, operator: Operator) -> Result<Vec<Item>, ParseError> {
    let missing = || {
        ParseError::new(
            format!("'{}' is missing an operand", operator.keyword()),
            Some(operator.keyword()),
        )
    };

    let mut folded = Vec::with_capacity(items.len());
    let mut items = items.into_iter();

    while let Some(item) = items.next() {
        if !operator.matches(&item) {
            folded.push(item);
            continue;
        }
        let Some(Item::Operand(left)) = folded.pop() else {
            return Err(missing());
        };
        let Some(Item::Operand(right)) = items.next() else {
            return Err(missing());
        };
        folded.push(Item::Operand(operator.combine(left, right)));
    }

    Ok(folded)
}

/// Parses a token stream into a query expression.
///
/// Returns `Ok(None)` for an empty stream.
pub fn parse_tokens(tokens: &[Token]) -> Result<Option<QueryExpr>, ParseError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let elements = group(&mut tokens.iter(), 0)?;
    reduce(elements).map(Some)
}

/// Parses a query string into an expression.
///
/// Returns `Ok(None)` for empty or whitespace-only input.
pub fn parse(input: &str) -> Result<Option<QueryExpr>, QueryError> {
    let tokens = tokenize(input).map_err(QueryError::from)?;
    parse_tokens(&tokens).map_err(|e| QueryError::from(e).with_query(input))
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use koine_morph::{Case, MorphProperty};

    use super::*;
    use crate::ast::LexemeQuery;

    fn lexeme(pattern: &str) -> QueryExpr {
        QueryExpr::Lexeme(LexemeQuery::new(pattern))
    }

    fn and(left: QueryExpr, right: QueryExpr) -> QueryExpr {
        QueryExpr::and(left, right)
    }

    fn or(left: QueryExpr, right: QueryExpr) -> QueryExpr {
        QueryExpr::or(left, right)
    }

    #[test]
    fn empty_query() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn single_leaf() {
        assert_eq!(
            parse("lexeme λογος --case genitive").unwrap(),
            Some(QueryExpr::Lexeme(
                LexemeQuery::new("λογος").with_filter(MorphProperty::Case(Case::Genitive))
            ))
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            parse("lexeme a and lexeme b or lexeme c").unwrap(),
            Some(or(and(lexeme("a"), lexeme("b")), lexeme("c")))
        );
        assert_eq!(
            parse("lexeme a or lexeme b and lexeme c").unwrap(),
            Some(or(lexeme("a"), and(lexeme("b"), lexeme("c"))))
        );
    }

    #[test]
    fn operators_associate_left() {
        assert_eq!(
            parse("lexeme a & lexeme b & lexeme c").unwrap(),
            Some(and(and(lexeme("a"), lexeme("b")), lexeme("c")))
        );
        assert_eq!(
            parse("lexeme a | lexeme b | lexeme c").unwrap(),
            Some(or(or(lexeme("a"), lexeme("b")), lexeme("c")))
        );
    }

    #[test]
    fn groups_override_precedence() {
        assert_eq!(
            parse("lexeme a and (lexeme b or lexeme c)").unwrap(),
            Some(and(lexeme("a"), or(lexeme("b"), lexeme("c"))))
        );
        assert_eq!(
            parse("[[lexeme a]]").unwrap(),
            Some(lexeme("a"))
        );
    }

    #[test]
    fn proximity_in_chain() {
        assert_eq!(
            parse("lexeme λογος and window 2 3").unwrap(),
            Some(and(lexeme("λογος"), QueryExpr::Window { ante: 2, post: 3 }))
        );
    }

    #[test]
    fn error_empty_group() {
        let err = parse("lexeme a and ()").unwrap_err();
        assert_eq!(err.message(), "empty group");
    }

    #[test]
    fn error_missing_operand() {
        let err = parse("lexeme a and").unwrap_err();
        assert!(err.message().contains("missing an operand"));
        let err = parse("or lexeme a").unwrap_err();
        assert!(err.message().contains("'or'"));
        let err = parse("lexeme a & | lexeme b").unwrap_err();
        assert!(err.message().contains("'and'"));
    }

    #[test]
    fn error_adjacent_operands() {
        let err = parse("(lexeme a) (lexeme b)").unwrap_err();
        assert!(err.message().contains("between searches"));
        assert_eq!(err.query.as_deref(), Some("(lexeme a) (lexeme b)"));
    }

    #[test]
    fn error_unbalanced_is_lexical() {
        let err = parse("(lexeme a").unwrap_err();
        assert!(matches!(err.kind, crate::QueryErrorKind::Lex { position: 0, .. }));
        assert!(parse("lexeme a)").is_err());
    }

    #[test]
    fn error_bad_leaf() {
        let err = parse("lexeme a and lemma b").unwrap_err();
        assert_eq!(err.message(), "unknown search type");
    }

    #[test]
    fn unbalanced_token_streams() {
        assert!(parse_tokens(&[Token::Close(1)]).is_err());
        assert!(parse_tokens(&[Token::Open(1), Token::Command("ante 1".into())]).is_err());
    }

    #[test]
    fn query_string_reparses() {
        let expr = parse("lexeme a or lexeme b --case dative and post 2").unwrap().unwrap();
        assert_eq!(parse(&expr.to_query_string()).unwrap(), Some(expr));
    }

    #[test]
    fn performance_many_queries() {
        let queries = [
            "lexeme λογος",
            "lexeme λογος --case genitive --number singular",
            "lexeme a and lexeme b or lexeme c",
            "(lexeme a | lexeme b) & window 3 3",
            "[lexeme θεος and ante 2] or [morph mood imperative and post 1]",
        ];

        let start = Instant::now();
        for _ in 0..1000 {
            for query in &queries {
                let _ = parse(query).unwrap();
            }
        }
        let elapsed = start.elapsed();

        assert!(
            elapsed.as_millis() < 2000,
            "Parsing 5,000 queries took {elapsed:?}, expected < 2s"
        );
    }
}
