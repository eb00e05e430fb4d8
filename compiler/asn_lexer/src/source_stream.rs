//! Seekable cursor over the decoded source text.
//!
//! ASN.1 modules are small text files, so the whole input is decoded to
//! characters once up front. Offsets throughout the front-end are
//! character offsets into this buffer, which makes `seek` O(1).

/// A seekable, mark/reset/unread-capable cursor over decoded source text.
#[derive(Clone, Debug)]
pub struct SourceStream {
    chars: Vec<char>,
    pos: usize,
}

impl SourceStream {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    /// Read the next character, advancing the cursor.
    pub fn read(&mut self) -> Option<char> {
        let c = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(c)
    }

    /// Push exactly one character back.
    ///
    /// Single-level pushback is sufficient: all lexer lookahead is
    /// bounded and deeper rewinds go through `mark`/`reset` or `seek`.
    pub fn unread(&mut self) {
        debug_assert!(self.pos > 0, "unread at start of stream");
        self.pos = self.pos.saturating_sub(1);
    }

    /// Peek at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Peek `n` characters ahead (`peek_at(0)` is the next character).
    pub fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Save the read position for a later [`SourceStream::reset`].
    pub fn mark(&self) -> usize {
        self.pos
    }

    /// Restore a position saved with [`SourceStream::mark`].
    pub fn reset(&mut self, mark: usize) {
        debug_assert!(mark <= self.chars.len(), "reset past end of stream");
        self.pos = mark;
    }

    /// Absolute repositioning, used when the parser rewinds past a
    /// context switch.
    pub fn seek(&mut self, offset: usize) {
        debug_assert!(offset <= self.chars.len(), "seek past end of stream");
        self.pos = offset;
    }

    /// Current character offset.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Total length of the source in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}
