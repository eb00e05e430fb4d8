//! The rule abstraction and the combinator value model.

use asn_token::Token;

use crate::error::ParseError;
use crate::parser::Parser;

/// Result of one rule attempt.
///
/// `Ok(None)` means "did not match, no input consumed" — pure control
/// flow, the caller tries something else. `Err` means the rule matched a
/// prefix and then hit malformed input; the attempt is unrecoverable and
/// the error propagates until a backtracking boundary catches it.
pub type ParseResult<N> = Result<Option<Matched<N>>, ParseError>;

/// One grammar rule, generic over the grammar layer's AST node type `N`.
///
/// # Contract
///
/// A rule that returns `Ok(None)` must leave the parser positioned
/// exactly where it started: any consumption during the attempt has to
/// be bracketed by `mark()` and `reset_to_mark()`.
pub trait Rule<N> {
    fn parse(&self, parser: &mut Parser) -> ParseResult<N>;
}

/// What a successful rule attempt produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Matched<N> {
    /// A single consumed token.
    Token(Token),
    /// Per-slot results of a sequence; skipped optional elements leave
    /// `None` at their slot.
    Sequence(Vec<Option<Matched<N>>>),
    /// One-or-more collected results of a repetition or separated list.
    Repetition(Vec<Matched<N>>),
    /// Results of alternatives that tied on maximal consumption; the
    /// grammar layer resolves the ambiguity semantically.
    Ambiguous(Vec<Matched<N>>),
    /// Sentinel for a satisfied lookahead; consumes nothing.
    Lookahead,
    /// A node built by a grammar-layer rule.
    Node(N),
}

impl<N> Matched<N> {
    /// The consumed token, when this result is a plain token match.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Matched::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_token(self) -> Option<Token> {
        match self {
            Matched::Token(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<N> {
        match self {
            Matched::Node(n) => Some(n),
            _ => None,
        }
    }
}
