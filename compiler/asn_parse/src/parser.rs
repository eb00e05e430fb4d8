//! Engine state: token buffering, mark/reset, lexical context stack,
//! and furthest-failure tracking.

use asn_lexer::{LexError, Lexer};
use asn_token::{LexContext, Token, TokenKind};
use smallvec::{smallvec, SmallVec};
use tracing::trace;

use crate::error::{Failure, Found, ParseError};

/// The backtracking engine the combinators drive.
///
/// Tokens read while at least one mark is live are buffered so a failed
/// attempt can replay them onto the lexer's pushback stack; dropping the
/// last mark discards the buffer. This bounds memory to the depth of the
/// deepest live attempt rather than the whole input.
///
/// # Invariant
///
/// Every mark is resolved by exactly one `clear_mark` (tokens consumed)
/// or `reset_to_mark` (tokens replayed); no token is silently dropped.
pub struct Parser {
    lexer: Lexer,
    buffer: Vec<Token>,
    marks: SmallVec<[usize; 8]>,
    contexts: SmallVec<[LexContext; 4]>,
    failure: Option<Failure>,
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            buffer: Vec::new(),
            marks: SmallVec::new(),
            contexts: smallvec![LexContext::Normal],
            failure: None,
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    // ─── Lexical context stack ──────────────────────────────────────────

    /// The context the next token will be lexed under.
    pub fn context(&self) -> LexContext {
        self.contexts.last().copied().unwrap_or_default()
    }

    pub fn push_context(&mut self, context: LexContext) {
        trace!(?context, depth = self.contexts.len(), "push context");
        self.contexts.push(context);
    }

    /// Pops the top context; the bottom `Normal` entry is never removed.
    pub fn pop_context(&mut self) {
        if self.contexts.len() > 1 {
            self.contexts.pop();
        }
    }

    // ─── Token flow ─────────────────────────────────────────────────────

    /// Read one token under the current context, buffering it for
    /// replay while any mark is live.
    pub fn read_token(&mut self) -> Result<Option<Token>, LexError> {
        let token = self.lexer.next_token(self.context())?;
        if let Some(t) = &token {
            if !self.marks.is_empty() {
                self.buffer.push(t.clone());
            }
        }
        Ok(token)
    }

    /// Return the most recently read token to the lexer.
    ///
    /// # Contract
    ///
    /// Only valid for the token `read_token` just produced; its buffered
    /// copy is dropped alongside.
    pub fn unread_token(&mut self, token: Token) {
        if !self.marks.is_empty() {
            self.buffer.pop();
        }
        self.lexer.push_back(token);
    }

    // ─── Marks ──────────────────────────────────────────────────────────

    /// Save the current buffered-token count as a checkpoint.
    pub fn mark(&mut self) {
        trace!(buffered = self.buffer.len(), depth = self.marks.len(), "mark");
        self.marks.push(self.buffer.len());
    }

    /// Commit the tokens consumed since the last mark. When the last
    /// mark drops, nothing above the current position needs to be
    /// replayable anymore and the buffer is discarded.
    pub fn clear_mark(&mut self) {
        self.marks.pop();
        if self.marks.is_empty() {
            self.buffer.clear();
        }
    }

    /// Rewind to the last mark, replaying every token buffered since it
    /// onto the lexer so the next reads reproduce the same sequence.
    pub fn reset_to_mark(&mut self) {
        if let Some(mark) = self.marks.pop() {
            trace!(replayed = self.buffer.len() - mark, "reset to mark");
            while self.buffer.len() > mark {
                if let Some(t) = self.buffer.pop() {
                    self.lexer.push_back(t);
                }
            }
        }
    }

    /// Tokens consumed since the innermost live mark.
    pub fn consumed_since_mark(&self) -> usize {
        let base = self.marks.last().copied().unwrap_or(0);
        self.buffer.len() - base
    }

    /// Current size of the replay buffer (empty whenever no mark is
    /// live).
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_eof(&self) -> bool {
        self.lexer.is_eof()
    }

    // ─── Furthest-failure tracking ──────────────────────────────────────

    /// Record "expected `expected`, found `found`".
    pub fn record_mismatch(&mut self, expected: TokenKind, found: Token) {
        self.record(Failure {
            offset: found.offset,
            found: Found::Token(found),
            expected: Some(expected),
        });
    }

    /// Record "expected `expected`, found end of input".
    pub fn record_eof(&mut self, expected: TokenKind) {
        self.record(Failure {
            offset: self.lexer.offset(),
            found: Found::EndOfInput {
                line: self.lexer.line(),
                column: self.lexer.column() + 1,
            },
            expected: Some(expected),
        });
    }

    /// Record a lexical error as the failure at its offset.
    pub fn record_lex_failure(&mut self, error: &LexError) {
        self.record(Failure {
            offset: error.offset,
            found: Found::Lexical(error.clone()),
            expected: None,
        });
    }

    fn record(&mut self, failure: Failure) {
        let deeper = self
            .failure
            .as_ref()
            .map_or(true, |prev| failure.offset > prev.offset);
        if deeper {
            trace!(offset = failure.offset, "record failure");
            self.failure = Some(failure);
        }
    }

    /// Drop the failure record. Called by the grammar layer at commit
    /// points where earlier alternatives are known to be irrelevant, so
    /// stale failures from abandoned branches cannot resurface.
    pub fn clear_failure(&mut self) {
        self.failure = None;
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Render the diagnostic for a parse that produced no result.
    pub fn report(&self) -> ParseError {
        match &self.failure {
            Some(f) => f.to_error(),
            None => ParseError::NoMatch {
                line: self.lexer.line(),
                column: self.lexer.column() + 1,
            },
        }
    }

    /// Prefer the recorded failure over `error` when it represents
    /// strictly deeper progress.
    pub fn report_or(&self, error: ParseError) -> ParseError {
        match (&self.failure, &error) {
            (Some(f), ParseError::Lexical(e)) if f.offset > e.offset => f.to_error(),
            _ => error,
        }
    }
}
