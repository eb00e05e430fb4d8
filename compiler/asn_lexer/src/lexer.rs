//! The context-sensitive lexer.
//!
//! `next_token` produces one token at a time under the caller's
//! [`LexContext`], skipping whitespace and comments as it goes. A small
//! pushback stack lets the parser return tokens for replay; if a
//! pushed-back token was produced under a different context than the one
//! now requested, the lexer seeks the character stream back to that
//! token's start and re-tokenizes from scratch.

use asn_token::{is_encoding_reference, keyword_lookup, LexContext, StringFlags, Token, TokenKind};
use tracing::trace;

use crate::error::{LexError, LexErrorKind};
use crate::source_stream::SourceStream;

/// Snapshot of the character cursor plus line/column counters.
#[derive(Clone, Copy, Debug)]
struct LexState {
    pos: usize,
    line: u32,
    column: u32,
}

/// Context-sensitive tokenizer over a [`SourceStream`].
pub struct Lexer {
    stream: SourceStream,
    /// Tokens returned by the parser for replay. The top of the stack is
    /// the next token to hand out.
    pushback: Vec<Token>,
    /// 1-based line of the next unread character.
    line: u32,
    /// Characters read on the current line (0 right after a newline).
    column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Self {
            stream: SourceStream::new(source),
            pushback: Vec::new(),
            line: 1,
            column: 0,
        }
    }

    /// Produce the next token under `context`, or `None` at end of input.
    ///
    /// A pushed-back token is returned as-is when its recorded context
    /// matches. On a mismatch the whole pushback stack is discarded and
    /// the stream is re-tokenized from the front token's start offset:
    /// every deeper pushback token sits at a later offset, so it will be
    /// re-scanned from characters anyway.
    pub fn next_token(&mut self, context: LexContext) -> Result<Option<Token>, LexError> {
        if let Some(front) = self.pushback.pop() {
            if front.context == context {
                return Ok(Some(front));
            }
            trace!(
                offset = front.offset,
                requested = ?context,
                recorded = ?front.context,
                "re-lex after context mismatch"
            );
            self.stream.seek(front.offset);
            self.line = front.line;
            self.column = front.column.saturating_sub(1);
            self.pushback.clear();
        }
        self.lex(context)
    }

    /// Return one token to the pushback stack.
    ///
    /// The next `next_token` call — regardless of requested context —
    /// starts from this token again.
    pub fn push_back(&mut self, token: Token) {
        self.pushback.push(token);
    }

    /// Character offset of the next token to be produced or replayed.
    pub fn offset(&self) -> usize {
        self.pushback.last().map_or(self.stream.pos(), |t| t.offset)
    }

    pub fn is_eof(&self) -> bool {
        self.pushback.is_empty() && self.stream.is_eof()
    }

    /// Line of the next unread character, for end-of-input diagnostics.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next unread character.
    pub fn column(&self) -> u32 {
        self.column
    }

    // ─── Character helpers ──────────────────────────────────────────────

    fn state(&self) -> LexState {
        LexState {
            pos: self.stream.pos(),
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, state: LexState) {
        self.stream.seek(state.pos);
        self.line = state.line;
        self.column = state.column;
    }

    fn read(&mut self) -> Option<char> {
        let c = self.stream.read()?;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.stream.peek()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.stream.peek_at(n)
    }

    /// Build a token starting at `start` (which snapshots the state just
    /// before the token's first character was read).
    fn token(&self, kind: TokenKind, start: LexState, context: LexContext) -> Token {
        Token::new(kind, start.pos, start.line, start.column + 1, context)
    }

    /// Build an error anchored at `start` and rewind the stream there,
    /// so a backtracking caller re-lexes deterministically.
    fn fail(&mut self, start: LexState, kind: LexErrorKind) -> LexError {
        self.restore(start);
        LexError::new(kind, start.pos, start.line, start.column + 1)
    }

    // ─── Trivia ─────────────────────────────────────────────────────────

    fn lex(&mut self, context: LexContext) -> Result<Option<Token>, LexError> {
        loop {
            let start = self.state();
            let Some(c) = self.read() else {
                return Ok(None);
            };
            match c {
                ' ' | '\t' | '\n' | '\r' | '\u{B}' | '\u{C}' => {}
                '-' if self.peek() == Some('-') => {
                    self.read();
                    self.skip_line_comment();
                }
                '/' if self.peek() == Some('*') => {
                    self.read();
                    self.skip_block_comment(start)?;
                }
                _ => {
                    let token = self.dispatch(c, start, context)?;
                    trace!(kind = %token.kind, line = token.line, column = token.column, "token");
                    return Ok(Some(token));
                }
            }
        }
    }

    /// `--` comments close on `--`, a newline, or end of input; the same
    /// marker delimits both ends, so `-- a -- b` is one comment of "a".
    fn skip_line_comment(&mut self) {
        loop {
            match self.read() {
                None | Some('\n') => return,
                Some('-') if self.peek() == Some('-') => {
                    self.read();
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// `/* … */` comments nest; end of input inside one is an error.
    fn skip_block_comment(&mut self, start: LexState) -> Result<(), LexError> {
        let mut level = 1u32;
        loop {
            match self.read() {
                None => return Err(self.fail(start, LexErrorKind::UnterminatedBlockComment)),
                Some('/') if self.peek() == Some('*') => {
                    self.read();
                    level += 1;
                }
                Some('*') if self.peek() == Some('/') => {
                    self.read();
                    level -= 1;
                    if level == 0 {
                        return Ok(());
                    }
                }
                Some(_) => {}
            }
        }
    }

    // ─── Dispatch ───────────────────────────────────────────────────────

    fn dispatch(&mut self, c: char, start: LexState, context: LexContext) -> Result<Token, LexError> {
        match c {
            'a'..='z' | 'A'..='Z' => self.word(c, start, context),
            '0'..='9' => Ok(self.number(c, start, context)),
            '\'' => Ok(self.bit_or_hex_string(start, context)),
            '"' => self.character_string(start, context),
            '&' => self.ampersand(start, context),
            '{' => Ok(self.token(TokenKind::LeftBrace, start, context)),
            '}' => Ok(self.token(TokenKind::RightBrace, start, context)),
            '(' => Ok(self.token(TokenKind::LeftParen, start, context)),
            ')' => Ok(self.token(TokenKind::RightParen, start, context)),
            ',' => Ok(self.token(TokenKind::Comma, start, context)),
            ';' => Ok(self.token(TokenKind::Semicolon, start, context)),
            '|' => Ok(self.token(TokenKind::Pipe, start, context)),
            '!' => Ok(self.token(TokenKind::Exclamation, start, context)),
            '^' => Ok(self.token(TokenKind::Caret, start, context)),
            '<' => Ok(self.token(TokenKind::Less, start, context)),
            '>' => Ok(self.token(TokenKind::Greater, start, context)),
            '@' => Ok(self.token(TokenKind::At, start, context)),
            '-' => Ok(self.token(TokenKind::Minus, start, context)),
            ':' => Ok(self.colon(start, context)),
            '.' => Ok(self.dot(start, context)),
            '[' => Ok(self.left_bracket(start, context)),
            ']' => Ok(self.right_bracket(start, context)),
            '=' if context == LexContext::PropertySettings => {
                Ok(self.token(TokenKind::Equals, start, context))
            }
            _ => Err(self.invalid_token(c, start)),
        }
    }

    /// `::=` or a lone `:`.
    fn colon(&mut self, start: LexState, context: LexContext) -> Token {
        if self.peek() == Some(':') && self.peek_at(1) == Some('=') {
            self.read();
            self.read();
            self.token(TokenKind::Assign, start, context)
        } else {
            self.token(TokenKind::Colon, start, context)
        }
    }

    /// `.`, `..` or `...`.
    fn dot(&mut self, start: LexState, context: LexContext) -> Token {
        if self.peek() == Some('.') {
            self.read();
            if self.peek() == Some('.') {
                self.read();
                self.token(TokenKind::Ellipsis, start, context)
            } else {
                self.token(TokenKind::Range, start, context)
            }
        } else {
            self.token(TokenKind::Dot, start, context)
        }
    }

    /// `[[` is a version bracket except in `Syntax` context, where
    /// single brackets are always used.
    fn left_bracket(&mut self, start: LexState, context: LexContext) -> Token {
        if context != LexContext::Syntax && self.peek() == Some('[') {
            self.read();
            self.token(TokenKind::LeftVersionBrackets, start, context)
        } else {
            self.token(TokenKind::LeftBracket, start, context)
        }
    }

    fn right_bracket(&mut self, start: LexState, context: LexContext) -> Token {
        if context != LexContext::Syntax && self.peek() == Some(']') {
            self.read();
            self.token(TokenKind::RightVersionBrackets, start, context)
        } else {
            self.token(TokenKind::RightBracket, start, context)
        }
    }

    /// A run of non-whitespace the lexer cannot classify.
    fn invalid_token(&mut self, first: char, start: LexState) -> LexError {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                break;
            }
            self.read();
            text.push(c);
        }
        self.fail(start, LexErrorKind::InvalidToken(text))
    }

    // ─── Words ──────────────────────────────────────────────────────────

    /// Identifiers, type references, keywords, and their context-driven
    /// reclassifications.
    ///
    /// A hyphen immediately followed by another hyphen is not consumed
    /// (it starts a comment); a trailing hyphen is a lexical error that
    /// lets the enclosing choice try another production.
    fn word(&mut self, first: char, start: LexState, context: LexContext) -> Result<Token, LexError> {
        let mut text = String::new();
        text.push(first);
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_alphanumeric() => {
                    self.read();
                    text.push(c);
                }
                Some('-') => {
                    if self.peek_at(1) == Some('-') {
                        break;
                    }
                    match self.peek_at(1) {
                        Some(c) if c.is_ascii_alphanumeric() => {
                            self.read();
                            self.read();
                            text.push('-');
                            text.push(c);
                        }
                        _ => return Err(self.fail(start, LexErrorKind::TrailingHyphen)),
                    }
                }
                _ => break,
            }
        }

        if let Some(kind) = keyword_lookup(&text) {
            return Ok(self.token(kind, start, context));
        }

        if first.is_ascii_uppercase() {
            let kind = match context {
                LexContext::Encoding => {
                    if is_encoding_reference(&text) {
                        TokenKind::EncodingReference
                    } else {
                        return Err(
                            self.fail(start, LexErrorKind::UnknownEncodingReference(text))
                        );
                    }
                }
                LexContext::ObjectClass if all_uppercase(&text) => TokenKind::ObjectClassReference,
                LexContext::Syntax if all_uppercase(&text) && digit_free(&text) => TokenKind::Word,
                _ => TokenKind::TypeReference,
            };
            Ok(self.token(kind, start, context).with_text(text))
        } else {
            Ok(self.token(TokenKind::Identifier, start, context).with_text(text))
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────────

    /// Digits start a tentative INTEGER; a fraction or exponent promotes
    /// it to REAL, as does a multi-digit literal with a leading zero
    /// (legacy rule, preserved exactly). `..` after the digits is left
    /// for the range token.
    fn number(&mut self, first: char, start: LexState, context: LexContext) -> Token {
        let mut text = String::new();
        text.push(first);
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.read();
            text.push(c);
        }

        // A level/version slot only ever reads a whole number.
        if context == LexContext::Level {
            return self.token(TokenKind::Number, start, context).with_text(text);
        }

        let mut real = false;
        if self.peek() == Some('.') {
            if let Some(c) = self.peek_at(1) {
                if c.is_ascii_digit() {
                    self.read();
                    text.push('.');
                    real = true;
                    while let Some(d) = self.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        self.read();
                        text.push(d);
                    }
                }
            }
        }

        if let Some(e @ ('e' | 'E')) = self.peek() {
            let before_exponent = self.state();
            self.read();
            let mut exponent = String::new();
            if let Some(sign @ ('+' | '-')) = self.peek() {
                self.read();
                exponent.push(sign);
            }
            let mut has_digits = false;
            while let Some(d) = self.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                self.read();
                exponent.push(d);
                has_digits = true;
            }
            if has_digits {
                text.push(e);
                text.push_str(&exponent);
                real = true;
            } else {
                // `5e` with no digits: the marker is not part of the number.
                self.restore(before_exponent);
            }
        }

        if !real && text.len() > 1 && text.starts_with('0') {
            real = true;
        }

        let kind = if real {
            TokenKind::RealNumber
        } else {
            TokenKind::Number
        };
        self.token(kind, start, context).with_text(text)
    }

    // ─── Bit and hex strings ────────────────────────────────────────────

    /// `'…'B` / `'…'H`. Any digit outside `{0,1}` restricts the literal
    /// to an H-string. On any violation — bad content character, missing
    /// or inconsistent suffix, end of input — the stream rewinds to just
    /// after the opening quote and a bare `Apostrophe` token is produced.
    fn bit_or_hex_string(&mut self, start: LexState, context: LexContext) -> Token {
        let after_quote = self.state();
        let mut text = String::new();
        let mut binary_only = true;
        loop {
            match self.read() {
                None => return self.apostrophe_fallback(after_quote, start, context),
                Some('\'') => {
                    return match self.peek() {
                        Some('B') if binary_only => {
                            self.read();
                            self.token(TokenKind::BString, start, context).with_text(text)
                        }
                        Some('H') => {
                            self.read();
                            self.token(TokenKind::HString, start, context).with_text(text)
                        }
                        _ => self.apostrophe_fallback(after_quote, start, context),
                    };
                }
                Some(c) if c.is_ascii_digit() || ('A'..='F').contains(&c) => {
                    if !matches!(c, '0' | '1') {
                        binary_only = false;
                    }
                    text.push(c);
                }
                Some(' ' | '\t' | '\n' | '\r') => {}
                Some(_) => return self.apostrophe_fallback(after_quote, start, context),
            }
        }
    }

    fn apostrophe_fallback(
        &mut self,
        after_quote: LexState,
        start: LexState,
        context: LexContext,
    ) -> Token {
        self.restore(after_quote);
        self.token(TokenKind::Apostrophe, start, context)
    }

    // ─── Character strings ──────────────────────────────────────────────

    /// `"…"` with `""` as an escaped quote. Classification flags start
    /// full and are only ever cleared: an escaped quote leaves the
    /// literal cstring-only, control and line-break characters rule out
    /// the tstring reading, and any non-ASCII or control character rules
    /// out the simple-string reading.
    fn character_string(&mut self, start: LexState, context: LexContext) -> Result<Token, LexError> {
        let mut text = String::new();
        let mut flags = StringFlags::all_candidates();
        loop {
            match self.read() {
                None => return Err(self.fail(start, LexErrorKind::UnterminatedString)),
                Some('"') => {
                    if self.peek() == Some('"') {
                        self.read();
                        text.push('"');
                        flags.remove(StringFlags::TSTRING | StringFlags::SIMPLE_STRING);
                    } else {
                        break;
                    }
                }
                Some(c) => {
                    if c.is_control() {
                        flags.remove(StringFlags::TSTRING | StringFlags::SIMPLE_STRING);
                    } else if !c.is_ascii() {
                        flags.remove(StringFlags::SIMPLE_STRING);
                    }
                    text.push(c);
                }
            }
        }
        if text.is_empty() {
            flags.remove(StringFlags::TSTRING | StringFlags::SIMPLE_STRING);
        }
        Ok(self
            .token(TokenKind::CString, start, context)
            .with_text(text)
            .with_flags(flags))
    }

    // ─── Field references ───────────────────────────────────────────────

    /// Under `TypeField`/`ValueField` the remainder after `&` is re-lexed
    /// as a typereference/identifier and spliced into one field-reference
    /// token; elsewhere `&` is a bare `Ampersand`.
    fn ampersand(&mut self, start: LexState, context: LexContext) -> Result<Token, LexError> {
        if !matches!(context, LexContext::TypeField | LexContext::ValueField) {
            return Ok(self.token(TokenKind::Ampersand, start, context));
        }

        let word_start = self.state();
        let Some(c) = self.peek().filter(char::is_ascii_alphabetic) else {
            return Err(self.fail(start, LexErrorKind::InvalidFieldReference));
        };
        self.read();
        let inner = self.word(c, word_start, context)?;
        match (context, inner.kind) {
            (LexContext::TypeField, TokenKind::TypeReference) => {
                Ok(inner.into_field_reference(TokenKind::TypeFieldReference, context))
            }
            (LexContext::ValueField, TokenKind::Identifier) => {
                Ok(inner.into_field_reference(TokenKind::ValueFieldReference, context))
            }
            _ => Err(self.fail(start, LexErrorKind::InvalidFieldReference)),
        }
    }
}

fn all_uppercase(text: &str) -> bool {
    !text.chars().any(|c| c.is_ascii_lowercase())
}

fn digit_free(text: &str) -> bool {
    !text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests;
