//! Hand-written selector scanner.
//!
//! The scanner makes a single left-to-right pass with at most one character
//! of lookahead. Each call to [`Scanner::next_token`] produces exactly one
//! token (or one lexical error) and consumes at least one character, except
//! at end of input where it produces the zero-width `Eof` token.
//!
//! # Design
//!
//! Errors are returned as `Err(LexError)` from the scanner itself. Deciding
//! whether an error becomes an inline `Error` token or stops the scan is
//! the caller's business; see [`crate::tokenize`] and
//! [`crate::tokenize_with_recovery`].
//!
//! All scanning state lives in the scanner value. Two scanners over the same
//! source share nothing and can run on different threads.

use std::borrow::Cow;
use std::iter::FusedIterator;

use tracing::trace;

use crate::cursor::Cursor;
use crate::escape::resolve_escape;
use crate::keywords;
use crate::lex_error::LexError;
use crate::token::{Token, TokenKind};

/// Scanner over one selector string.
///
/// As an iterator it yields every token up to and including `Eof`, then
/// `None` forever.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns the `Eof` token when the source is exhausted; subsequent calls
    /// keep returning `Eof` at the same position.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        let start = self.cursor;
        let Some(c) = self.cursor.current() else {
            return Ok(Token::eof(self.cursor.position()));
        };
        match c {
            '\n' => Ok(self.single(start, TokenKind::Newline)),
            c if c.is_whitespace() => Ok(self.single(start, TokenKind::Whitespace)),
            ':' => Ok(self.colon(start)),
            '/' => Ok(self.single(start, TokenKind::PathSeparator)),
            '[' => Ok(self.single(start, TokenKind::OpenBracket)),
            ']' => Ok(self.single(start, TokenKind::CloseBracket)),
            '?' => Ok(self.single(start, TokenKind::QuerySeparator)),
            '&' => Ok(self.single(start, TokenKind::AndSeparator)),
            '"' | '\'' => self.string(start, c),
            '0'..='9' => Ok(self.number(start)),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier(start)),
            c if is_punctuation(c) => Ok(self.single(start, TokenKind::Punctuation)),
            c => Err(self.unexpected(start, c)),
        }
    }

    /// Token of `kind` covering everything consumed since `start`.
    #[inline]
    fn token(&self, start: Cursor<'a>, kind: TokenKind) -> Token<'a> {
        Token::new(
            kind,
            self.cursor.slice_from(start.byte_pos()),
            start.position(),
            self.cursor.position(),
        )
    }

    /// Single-character token: advance one character and emit `kind`.
    fn single(&mut self, start: Cursor<'a>, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.token(start, kind)
    }

    // ─── Operators ─────────────────────────────────────────────────────

    fn colon(&mut self, start: Cursor<'a>) -> Token<'a> {
        self.cursor.advance(); // consume ':'
        if self.cursor.current() == Some(':') {
            self.cursor.advance();
            self.token(start, TokenKind::NamespaceSeparator)
        } else {
            self.token(start, TokenKind::Punctuation)
        }
    }

    // ─── Numbers & Identifiers ─────────────────────────────────────────

    fn number(&mut self, start: Cursor<'a>) -> Token<'a> {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.token(start, TokenKind::Number)
    }

    fn identifier(&mut self, start: Cursor<'a>) -> Token<'a> {
        self.cursor.advance(); // consume first char (already validated)
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start.byte_pos());
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        self.token(start, kind)
    }

    // ─── Strings ───────────────────────────────────────────────────────

    /// Scan a string opened by `quote`.
    ///
    /// The token value is the decoded content without the quotes. It borrows
    /// the source unless an escape had to be decoded.
    ///
    /// On end of input the scanner rewinds to just after the opening quote,
    /// so the error covers only the quote and the would-be content is
    /// scanned again as ordinary tokens.
    fn string(&mut self, start: Cursor<'a>, quote: char) -> Result<Token<'a>, LexError> {
        self.cursor.advance(); // consume opening quote
        let content_start = self.cursor.byte_pos();
        // Allocated on the first escape; until then the content is a plain slice.
        let mut decoded: Option<String> = None;

        loop {
            match self.cursor.current() {
                None => {
                    self.cursor = start;
                    self.cursor.advance();
                    let err = LexError::unterminated_string(quote, start.position());
                    trace!(at = %err.start(), "unterminated string");
                    return Err(err);
                }
                Some(c) if c == quote => {
                    let content = self.cursor.slice_from(content_start);
                    self.cursor.advance(); // consume closing quote
                    let value = match decoded {
                        Some(owned) => Cow::Owned(owned),
                        None => Cow::Borrowed(content),
                    };
                    return Ok(Token::new(
                        TokenKind::String,
                        value,
                        start.position(),
                        self.cursor.position(),
                    ));
                }
                Some('\\') => {
                    let buf = decoded
                        .get_or_insert_with(|| self.cursor.slice_from(content_start).to_owned());
                    self.cursor.advance(); // consume '\'
                    // A trailing backslash leaves the string open; the next
                    // iteration reports it.
                    if let Some(esc) = self.cursor.advance() {
                        match resolve_escape(esc, quote) {
                            Some(resolved) => buf.push(resolved),
                            None => {
                                buf.push('\\');
                                buf.push(esc);
                            }
                        }
                    }
                }
                Some(c) => {
                    self.cursor.advance();
                    if let Some(buf) = decoded.as_mut() {
                        buf.push(c);
                    }
                }
            }
        }
    }

    // ─── Errors ────────────────────────────────────────────────────────

    fn unexpected(&mut self, start: Cursor<'a>, c: char) -> LexError {
        self.cursor.advance();
        let err = LexError::unexpected_character(c, start.position());
        trace!(at = %err.start(), found = ?c, "unexpected character");
        err
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        if matches!(&item, Ok(tok) if tok.kind == TokenKind::Eof) {
            self.finished = true;
        }
        Some(item)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Identifier continuation: ASCII letters, digits, and `_`.
#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters emitted as generic `Punctuation`.
///
/// `:` is handled separately because of `::`. Anything outside this set and
/// the dedicated separators is an unexpected character.
#[inline]
fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | '=' | '-' | '#' | '*' | '+' | '~' | '!' | '|' | ';' | '(' | ')' | '{' | '}'
            | '<' | '>'
    )
}
