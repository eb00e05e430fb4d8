//! Parse failure types and the furthest-failure record.

use asn_lexer::LexError;
use asn_token::{Token, TokenKind};
use thiserror::Error;

/// A failed parse, rendered in one of the two user-visible diagnostic
/// shapes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A malformed literal or unrecognized input run. Recoverable while
    /// a backtracking attempt is active, fatal otherwise.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// A token-level expectation that was never satisfied.
    #[error("Token '{expected}' expected, but found '{found}' at line {line} position {column}")]
    Expected {
        expected: String,
        found: String,
        line: u32,
        column: u32,
    },

    /// The root rule declined the input without recording any
    /// expectation. Only reachable from grammars that never read a
    /// token.
    #[error("no rule matched at line {line} position {column}")]
    NoMatch { line: u32, column: u32 },
}

/// What actually sat at a failure point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput { line: u32, column: u32 },
    Lexical(LexError),
}

/// The deepest failure seen during one parse attempt.
///
/// Overwritten only when a new failure's offset is strictly greater, so
/// the record survives any number of rewinds and reflects the furthest
/// point reached by any explored alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub offset: usize,
    pub found: Found,
    /// The kind that was expected, when the failure came from a
    /// token-level match; `None` for raw lexical errors.
    pub expected: Option<TokenKind>,
}

impl Failure {
    pub fn to_error(&self) -> ParseError {
        match (self.expected, &self.found) {
            (Some(expected), Found::Token(t)) => ParseError::Expected {
                expected: expected.display_name().to_string(),
                found: format!("{}({})", t.kind, t.text_str()),
                line: t.line,
                column: t.column,
            },
            (Some(expected), Found::EndOfInput { line, column }) => ParseError::Expected {
                expected: expected.display_name().to_string(),
                found: "end of input".to_string(),
                line: *line,
                column: *column,
            },
            (_, Found::Lexical(e)) => ParseError::Lexical(e.clone()),
            (None, Found::Token(t)) => ParseError::NoMatch {
                line: t.line,
                column: t.column,
            },
            (None, Found::EndOfInput { line, column }) => ParseError::NoMatch {
                line: *line,
                column: *column,
            },
        }
    }
}
