//! Tokenizer for the mdsel document selector language.
//!
//! Selectors address fragments of a parsed document:
//!
//! ```text
//! namespace::heading:h2[1]
//! block:code[0]?lang=ts
//! /path/to/section
//! ```
//!
//! This crate turns such a string into a position-annotated token stream.
//! It knows nothing about documents, parsing, or resolution: the parser
//! consumes the tokens, skipping trivia, and treats any `Error` token as a
//! hard failure at that token's position.
//!
//! # Two entry points
//!
//! - [`tokenize`] is total. Malformed input becomes inline
//!   [`TokenKind::Error`] tokens and scanning carries on.
//! - [`tokenize_with_recovery`] fails fast, returning the first
//!   [`LexError`], with the same position and message the inline token
//!   would have carried.
//!
//! Both always see the same scan: the fail-fast path stops exactly where the
//! total path would have emitted its first `Error` token.
//!
//! # Invariants
//!
//! For every input, the token list from [`tokenize`]:
//! - ends with exactly one `Eof` token, empty and zero-width;
//! - covers every input character with exactly one token span, whitespace
//!   and newlines included;
//! - is ordered by offset with no overlapping spans.

mod cursor;
mod error_code;
mod escape;
mod keywords;
mod lex_error;
mod position;
mod scanner;
mod token;

pub use cursor::Cursor;
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use keywords::{lookup as lookup_keyword, KEYWORDS};
pub use lex_error::{LexError, LEXICAL_ERROR};
pub use position::Position;
pub use scanner::Scanner;
pub use token::{first_error, significant, Token, TokenKind};

use tracing::debug;

/// Tokenizer bound to one selector string.
///
/// Holds no cursor of its own: every call scans with a fresh [`Scanner`],
/// so repeated calls return structurally identical results and a shared
/// `&Tokenizer` can be used from several threads.
#[derive(Clone, Copy, Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer { source }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scan the whole source, embedding lexical errors as `Error` tokens.
    pub fn tokenize(&self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for item in Scanner::new(self.source) {
            match item {
                Ok(tok) => tokens.push(tok),
                Err(err) => tokens.push(err.into_token()),
            }
        }
        tokens
    }

    /// Scan the whole source, stopping at the first lexical error.
    pub fn tokenize_with_recovery(&self) -> Result<Vec<Token<'a>>, LexError> {
        Scanner::new(self.source)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| debug!(code = %err.code(), "{err}"))
    }
}

/// Tokenize `source`, embedding lexical errors as `Error` tokens.
///
/// Never fails. The last token is always `Eof`.
///
/// ```
/// use mdsel_lexer::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("namespace::path").iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::NamespaceKeyword,
///         TokenKind::NamespaceSeparator,
///         TokenKind::Identifier,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).tokenize()
}

/// Tokenize `source`, returning the first lexical error instead of
/// embedding it.
///
/// ```
/// use mdsel_lexer::tokenize_with_recovery;
///
/// let err = tokenize_with_recovery("heading:\"unclosed").unwrap_err();
/// assert_eq!(err.to_string(), "Line 1, Column 9: Unterminated string");
/// ```
pub fn tokenize_with_recovery(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Tokenizer::new(source).tokenize_with_recovery()
}
