//! Lexical errors.
//!
//! A `LexError` is produced for two conditions only: a character no rule
//! recognizes, and a string literal that reaches end of input before its
//! closing quote. The recoverable path turns each into an inline
//! [`TokenKind::Error`] token via [`LexError::into_token`]; the fail-fast
//! path returns the first one as `Err`.
//!
//! Both paths carry the same diagnostic: an error rendered with `Display`
//! reads `Line 1, Column 8: Unterminated string`.

use std::borrow::Cow;

use crate::error_code::ErrorCode;
use crate::position::Position;
use crate::token::{Token, TokenKind};

/// Category name shared by every error this crate produces.
pub const LEXICAL_ERROR: &str = "LEXICAL_ERROR";

const UNTERMINATED_STRING: &str = "Unterminated string";

/// A lexical error with the span it covers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// A `"` or `'` string was still open at end of input.
    ///
    /// The span covers only the opening quote.
    #[error("Line {}, Column {}: Unterminated string", .start.line, .start.column)]
    UnterminatedString {
        quote: char,
        start: Position,
        end: Position,
    },
    /// A character matched by no scanning rule.
    #[error("Line {}, Column {}: Unexpected character {found:?}", .start.line, .start.column)]
    UnexpectedCharacter {
        found: char,
        start: Position,
        end: Position,
    },
}

impl LexError {
    /// Error for a string opened by `quote` at `start`.
    pub fn unterminated_string(quote: char, start: Position) -> Self {
        LexError::UnterminatedString {
            quote,
            start,
            end: start.advance(quote),
        }
    }

    /// Error for an unrecognized `found` at `start`.
    pub fn unexpected_character(found: char, start: Position) -> Self {
        LexError::UnexpectedCharacter {
            found,
            start,
            end: start.advance(found),
        }
    }

    pub fn start(&self) -> Position {
        match self {
            LexError::UnterminatedString { start, .. }
            | LexError::UnexpectedCharacter { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Position {
        match self {
            LexError::UnterminatedString { end, .. }
            | LexError::UnexpectedCharacter { end, .. } => *end,
        }
    }

    /// Always [`LEXICAL_ERROR`]; no other error kind originates here.
    pub fn kind(&self) -> &'static str {
        LEXICAL_ERROR
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0002,
        }
    }

    /// The diagnostic without its location prefix.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            LexError::UnterminatedString { .. } => Cow::Borrowed(UNTERMINATED_STRING),
            LexError::UnexpectedCharacter { found, .. } => {
                Cow::Owned(format!("Unexpected character {found:?}"))
            }
        }
    }

    /// What the inline error token stores as its value.
    ///
    /// Unterminated strings store the message; unexpected characters store
    /// the character itself, so a consumer can still show what was typed.
    pub fn token_value(&self) -> Cow<'static, str> {
        match self {
            LexError::UnterminatedString { .. } => Cow::Borrowed(UNTERMINATED_STRING),
            LexError::UnexpectedCharacter { found, .. } => Cow::Owned(found.to_string()),
        }
    }

    /// Convert into the inline token used by the recoverable path.
    pub fn into_token(self) -> Token<'static> {
        Token::new(TokenKind::Error, self.token_value(), self.start(), self.end())
    }
}
