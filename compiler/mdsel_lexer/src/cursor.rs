//! Character cursor over a selector string.
//!
//! The cursor walks the source one Unicode scalar value at a time and keeps
//! the matching [`Position`] in lockstep. It is [`Copy`]: a snapshot is just
//! an assignment, which is how the scanner remembers where a token started.
//!
//! Selectors are short (one line typed by a person or an agent), so the
//! cursor favors simple `chars()` decoding over the byte-level tricks a
//! whole-file lexer would need.

use crate::position::Position;

/// Cursor over a selector string.
///
/// # Invariant
///
/// `byte` always sits on a UTF-8 character boundary of `src`, and `pos`
/// describes exactly the characters in `src[..byte]`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The full selector source.
    src: &'a str,
    /// Byte index of the next unread character.
    byte: usize,
    /// Position of the next unread character.
    pos: Position,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `src`.
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            byte: 0,
            pos: Position::START,
        }
    }

    /// Unread remainder of the source.
    #[inline]
    fn rest(&self) -> &'a str {
        self.src.get(self.byte..).unwrap_or_default()
    }

    /// The next unread character, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after [`current()`](Self::current).
    ///
    /// This is the scanner's only lookahead; nothing needs more than one
    /// character beyond the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.byte >= self.src.len()
    }

    /// Position of the next unread character.
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Byte index of the next unread character.
    #[inline]
    pub fn byte_pos(&self) -> usize {
        self.byte
    }

    /// Consume one character, returning it.
    ///
    /// Returns `None` (and leaves the cursor untouched) at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current()?;
        self.byte += ch.len_utf8();
        self.pos = self.pos.advance(ch);
        Some(ch)
    }

    /// Consume characters while `pred` holds.
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.current() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Source text from byte index `start` up to the cursor.
    ///
    /// `start` must be a value previously returned by
    /// [`byte_pos()`](Self::byte_pos) on this cursor or one of its copies.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.src.get(start..self.byte).unwrap_or_default()
    }
}
