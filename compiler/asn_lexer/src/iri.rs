//! Mini-lexer for the body of OID-IRI and Relative-OID-IRI values.
//!
//! The main lexer hands over the literal text of the quoted string; this
//! module splits it into `/` separators and arc identifiers, classifying
//! each arc as an integer or a non-integer Unicode label. [`parse_arcs`]
//! drives the strict solidus/label alternation and returns the arc list
//! with the separators dropped.

use asn_token::Position;

use crate::error::{LexError, LexErrorKind};

/// One segment of an OID-IRI value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArcIdentifier {
    /// All-digit label (`2`, `48`); a leading zero is only legal as the
    /// lone digit `0`.
    IntegerLabel { digits: String, position: Position },
    /// Unicode label (`ISO`, `Member-Body`).
    NonIntegerLabel { text: String, position: Position },
}

impl ArcIdentifier {
    pub fn text(&self) -> &str {
        match self {
            ArcIdentifier::IntegerLabel { digits, .. } => digits,
            ArcIdentifier::NonIntegerLabel { text, .. } => text,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ArcIdentifier::IntegerLabel { position, .. }
            | ArcIdentifier::NonIntegerLabel { position, .. } => *position,
        }
    }
}

/// Raw token from the IRI body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IriToken {
    /// A `/` separator.
    Solidus(Position),
    Arc(ArcIdentifier),
}

/// Tokenizer over the body of one OID-IRI quoted string.
///
/// Offsets in produced errors are character indices into the body;
/// line/column continue from the `position` of the body's first
/// character inside the enclosing module.
pub struct IriLexer {
    chars: Vec<char>,
    index: usize,
    line: u32,
    base_column: u32,
}

impl IriLexer {
    pub fn new(body: &str, position: Position) -> Self {
        Self {
            chars: body.chars().collect(),
            index: 0,
            line: position.line,
            base_column: position.column,
        }
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.base_column + self.index as u32)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn error(&self, kind: LexErrorKind, index: usize) -> LexError {
        LexError::new(kind, index, self.line, self.base_column + index as u32)
    }

    /// Next separator or arc identifier, or `None` at end of the body.
    pub fn next_token(&mut self) -> Result<Option<IriToken>, LexError> {
        let start = self.index;
        let Some(c) = self.peek() else {
            return Ok(None);
        };
        if c == '/' {
            self.index += 1;
            return Ok(Some(IriToken::Solidus(Position::new(
                self.line,
                self.base_column + start as u32,
            ))));
        }

        let mut text = String::new();
        let mut all_digits = true;
        while let Some(c) = self.peek() {
            if c == '/' {
                break;
            }
            if !is_arc_char(c) {
                return Err(self.error(LexErrorKind::InvalidArcCharacter(c), self.index));
            }
            if !c.is_ascii_digit() {
                all_digits = false;
            }
            self.index += 1;
            text.push(c);
        }

        let position = Position::new(self.line, self.base_column + start as u32);
        let arc = if all_digits {
            if text.len() > 1 && text.starts_with('0') {
                return Err(self.error(LexErrorKind::LeadingZeroArc, start));
            }
            ArcIdentifier::IntegerLabel {
                digits: text,
                position,
            }
        } else {
            if text.starts_with('-') || text.ends_with('-') {
                return Err(self.error(LexErrorKind::HyphenAtArcEdge, start));
            }
            let mut chars = text.chars().skip(2);
            if chars.next() == Some('-') && chars.next() == Some('-') {
                return Err(self.error(LexErrorKind::DoubleHyphenInArc, start));
            }
            ArcIdentifier::NonIntegerLabel { text, position }
        };
        Ok(Some(IriToken::Arc(arc)))
    }
}

/// Parse a whole IRI body into its arc identifiers.
///
/// An absolute value must open with `/`; a relative one must not. Exactly
/// one `/` separates consecutive arcs, and the body may not be empty or
/// end on a separator.
pub fn parse_arcs(
    body: &str,
    position: Position,
    relative: bool,
) -> Result<Vec<ArcIdentifier>, LexError> {
    let mut lexer = IriLexer::new(body, position);
    if body.is_empty() {
        return Err(lexer.error(LexErrorKind::EmptyIri, 0));
    }

    let mut arcs = Vec::new();
    // Whether the next token must be an arc identifier; the alternation
    // starts on a separator for absolute values.
    let mut id_expected = relative;
    loop {
        match lexer.next_token()? {
            None => break,
            Some(IriToken::Solidus(_)) => {
                if id_expected {
                    let kind = if arcs.is_empty() && relative {
                        LexErrorKind::UnexpectedLeadingSolidus
                    } else {
                        LexErrorKind::EmptyArc
                    };
                    return Err(lexer.error(kind, lexer.index - 1));
                }
                id_expected = true;
            }
            Some(IriToken::Arc(arc)) => {
                if !id_expected {
                    return Err(lexer.error(LexErrorKind::MissingLeadingSolidus, 0));
                }
                arcs.push(arc);
                id_expected = false;
            }
        }
    }
    if id_expected {
        return Err(lexer.error(LexErrorKind::EmptyArc, lexer.index));
    }
    Ok(arcs)
}

/// Characters legal inside an arc identifier: the `iunreserved` set of
/// RFC 3987 — ASCII letters and digits, `-`, `.`, `_`, `~`, plus the
/// `ucschar` code point ranges.
fn is_arc_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~') || is_ucschar(c)
}

fn is_ucschar(c: char) -> bool {
    matches!(c,
        '\u{A0}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFEF}'
        | '\u{10000}'..='\u{1FFFD}'
        | '\u{20000}'..='\u{2FFFD}'
        | '\u{30000}'..='\u{3FFFD}'
        | '\u{40000}'..='\u{4FFFD}'
        | '\u{50000}'..='\u{5FFFD}'
        | '\u{60000}'..='\u{6FFFD}'
        | '\u{70000}'..='\u{7FFFD}'
        | '\u{80000}'..='\u{8FFFD}'
        | '\u{90000}'..='\u{9FFFD}'
        | '\u{A0000}'..='\u{AFFFD}'
        | '\u{B0000}'..='\u{BFFFD}'
        | '\u{C0000}'..='\u{CFFFD}'
        | '\u{D0000}'..='\u{DFFFD}'
        | '\u{E1000}'..='\u{EFFFD}'
    )
}
