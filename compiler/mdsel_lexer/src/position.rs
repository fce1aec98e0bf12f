//! Source positions for selector tokens.
//!
//! Every unit here is a Unicode scalar value, not a byte: a selector such as
//! `heading:"Überblick"` reports the closing quote at column 19 regardless of
//! how many bytes `Ü` takes in UTF-8.

use std::fmt;

/// A point in the selector source.
///
/// `line` and `column` are 1-based; `offset` is the 0-based index of the
/// character at this point. Token ends are exclusive, so the end position of
/// a token is the position of the character right after it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    /// Position of the first character of any input.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    #[inline]
    pub const fn new(line: u32, column: u32, offset: u32) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// Position immediately after consuming `ch` at `self`.
    ///
    /// This is the only place line/column bookkeeping happens. Multi-character
    /// tokens call it once per consumed character so that a line feed inside
    /// a string literal still moves the following tokens to the next line.
    ///
    /// Counters saturate at `u32::MAX` instead of overflowing, so inputs
    /// beyond 4 Gi characters still scan; their positions just stop growing.
    #[inline]
    #[must_use]
    pub const fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Position {
                line: self.line.saturating_add(1),
                column: 1,
                offset: self.offset.saturating_add(1),
            }
        } else {
            Position {
                line: self.line,
                column: self.column.saturating_add(1),
                offset: self.offset.saturating_add(1),
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
