//! Token model.

use serde::Serialize;
use tealc_util::Position;

/// The three token shapes the lexer produces.
///
/// TEAL is line-oriented, so line terminators are real tokens rather than
/// skipped trivia: the parser uses them to close logical lines, and blank
/// lines must survive into the listing as no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// Any run of non-terminating bytes: opcode names, labels, literals.
    Value,
    /// A `//` comment; the value excludes the leading slashes.
    Comment,
    /// A line terminator (`\n`, `\r`, or `\r\n`).
    Eol,
}

/// An immutable lexed token.
///
/// `begin`/`end` are byte columns within `line`, `end` exclusive. A token
/// never spans source lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token text. For comments this excludes the `//`; for everything else
    /// it is the exact source slice.
    pub value: String,
    /// Line index (zero-based).
    pub line: u32,
    /// First byte column.
    pub begin: u32,
    /// One past the last byte column.
    pub end: u32,
    /// Token shape.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, begin: u32, end: u32) -> Self {
        Self {
            value: value.into(),
            line,
            begin,
            end,
            kind,
        }
    }

    /// The position of the token's first byte.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.begin)
    }

    /// Span length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.begin
    }

    /// Returns true for zero-length tokens (possible only for empty
    /// comments).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns true if the byte column `col` on this token's line falls
    /// inside the span. The end column counts as inside, so a cursor sitting
    /// just after the last byte still probes this token.
    #[inline]
    pub fn contains_column(&self, col: u32) -> bool {
        self.begin <= col && col <= self.end
    }
}
