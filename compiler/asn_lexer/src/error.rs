//! Lexical error types.

use thiserror::Error;

/// A lexical error with its source location.
///
/// The rendered form is the user-visible diagnostic shape used when no
/// token-level expectation was ever recorded by the parser.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Line {line}, position {column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Character offset of the error, used for furthest-failure ranking.
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl LexError {
    pub fn new(kind: LexErrorKind, offset: usize, line: u32, column: u32) -> Self {
        Self {
            kind,
            offset,
            line,
            column,
        }
    }
}

/// What went wrong while lexing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    // ─── Module text ────────────────────────────────────────────────────
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
    #[error("unterminated character string")]
    UnterminatedString,
    #[error("identifier may not end with a hyphen")]
    TrailingHyphen,
    #[error("'{0}' is not a known encoding reference")]
    UnknownEncodingReference(String),
    #[error("expected a field reference after '&'")]
    InvalidFieldReference,
    #[error("invalid token '{0}'")]
    InvalidToken(String),

    // ─── OID-IRI values ─────────────────────────────────────────────────
    #[error("empty OID-IRI value")]
    EmptyIri,
    #[error("an OID-IRI value must begin with '/'")]
    MissingLeadingSolidus,
    #[error("a relative OID-IRI value must not begin with '/'")]
    UnexpectedLeadingSolidus,
    #[error("empty arc identifier")]
    EmptyArc,
    #[error("invalid character '{0}' in arc identifier")]
    InvalidArcCharacter(char),
    #[error("integer arc label may not have a leading zero")]
    LeadingZeroArc,
    #[error("arc identifier may not begin or end with '-'")]
    HyphenAtArcEdge,
    #[error("arc identifier may not contain '--' at its third position")]
    DoubleHyphenInArc,
}
