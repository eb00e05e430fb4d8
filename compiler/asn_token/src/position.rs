//! Source positions for diagnostics and AST provenance.

use std::fmt;

/// A `(line, column)` source position.
///
/// Lines are 1-based. The column counter resets to 0 at each newline and
/// advances by one per character, so the first character of a line sits
/// at column 1. Positions order lexicographically by `(line, column)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Sentinel for synthesized nodes with no source location.
    pub const NONE: Position = Position { line: 0, column: 0 };

    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Whether this is the [`Position::NONE`] sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
