//! The token value type.

use crate::{LexContext, Position, StringFlags, TokenKind};

/// One lexed token.
///
/// Tokens are immutable value types. The only "mutation" the front-end
/// ever performs — splicing a reference token into a field reference
/// after `&` — is modeled by [`Token::into_field_reference`], which
/// constructs a new token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal payload for structural kinds (identifier spelling,
    /// numeric literal text, string body). `None` for punctuation and
    /// keywords.
    pub text: Option<String>,
    /// Character offset of the token start, used for stream seeking.
    pub offset: usize,
    /// 1-based line of the token start.
    pub line: u32,
    /// Column of the token start (resets to 0 at each newline).
    pub column: u32,
    /// The lexical context active when the token was produced.
    pub context: LexContext,
    /// Quoted-string classification; empty for every kind but `CString`.
    pub flags: StringFlags,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize, line: u32, column: u32, context: LexContext) -> Self {
        Self {
            kind,
            text: None,
            offset,
            line,
            column,
            context,
            flags: StringFlags::empty(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: StringFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Source position of the token start.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Splice this reference token into a `&`-prefixed field reference.
    ///
    /// The new token starts one character earlier (at the `&`), carries
    /// the `&`-prefixed spelling, and records the context that requested
    /// the field reference.
    #[must_use]
    pub fn into_field_reference(self, kind: TokenKind, context: LexContext) -> Self {
        let text = self.text.unwrap_or_default();
        Self {
            kind,
            text: Some(format!("&{text}")),
            offset: self.offset.saturating_sub(1),
            line: self.line,
            column: self.column.saturating_sub(1),
            context,
            flags: StringFlags::empty(),
        }
    }

    /// The literal payload, or `""` for payload-free kinds.
    pub fn text_str(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_reference_splicing() {
        let inner = Token::new(TokenKind::TypeReference, 5, 2, 8, LexContext::Normal)
            .with_text("ArgumentType");
        let spliced = inner.into_field_reference(TokenKind::TypeFieldReference, LexContext::TypeField);

        assert_eq!(spliced.kind, TokenKind::TypeFieldReference);
        assert_eq!(spliced.text_str(), "&ArgumentType");
        assert_eq!(spliced.offset, 4);
        assert_eq!(spliced.column, 7);
        assert_eq!(spliced.line, 2);
        assert_eq!(spliced.context, LexContext::TypeField);
    }

    #[test]
    fn position_accessor() {
        let t = Token::new(TokenKind::Begin, 0, 3, 1, LexContext::Normal);
        assert_eq!(t.position(), Position::new(3, 1));
    }
}
