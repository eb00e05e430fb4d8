//! Backtracking parser-combinator engine over the ASN.1 token stream.
//!
//! The grammar layer composes [`Rule`] implementations from the
//! primitives in [`combinator`] and drives them through a [`Parser`],
//! which owns the lexer, the replay buffer with its mark stack, the
//! lexical-context stack, and the furthest-failure record that feeds
//! the final diagnostic.

mod combinator;
mod error;
mod parser;
mod rule;

pub use combinator::{
    AmbiguousChoice, Choice, NegativeLookahead, Repetition, Sequence, SingleToken,
    TokenSeparated, ValueExtractor,
};
pub use error::{Failure, Found, ParseError};
pub use parser::Parser;
pub use rule::{Matched, ParseResult, Rule};

/// Run `root` over `source` and require it to consume the entire input.
///
/// On failure the single reported diagnostic reflects the deepest point
/// reached by any explored alternative; no partial result is returned.
pub fn parse_complete<N>(source: &str, root: &dyn Rule<N>) -> Result<Matched<N>, ParseError> {
    let mut parser = Parser::from_source(source);
    match root.parse(&mut parser) {
        Ok(Some(matched)) => match parser.read_token() {
            Ok(None) => Ok(matched),
            Ok(Some(t)) => Err(ParseError::Expected {
                expected: "end of input".to_string(),
                found: format!("{}({})", t.kind, t.text_str()),
                line: t.line,
                column: t.column,
            }),
            Err(e) => Err(parser.report_or(e.into())),
        },
        Ok(None) => Err(parser.report()),
        Err(e) => Err(parser.report_or(e)),
    }
}
