//! Token kinds and position-annotated tokens.

use std::borrow::Cow;
use std::fmt;

use crate::position::Position;

/// Classification of a selector token.
///
/// Discriminants are grouped in ranges so that category checks stay cheap
/// and new kinds can slot into a gap without renumbering:
///
/// | Range   | Category    |
/// |---------|-------------|
/// | 0-7     | Keywords    |
/// | 8-15    | Literals    |
/// | 16-31   | Separators  |
/// | 32-47   | Delimiters and punctuation |
/// | 48-55   | Trivia      |
/// | 240     | Error       |
/// | 255     | End of input |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // === Keywords (0-7) ===
    /// `heading`
    HeadingKeyword = 0,
    /// `block`
    BlockKeyword = 1,
    /// `namespace`
    NamespaceKeyword = 2,

    // === Literals (8-15) ===
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not a keyword.
    Identifier = 8,
    /// Run of ASCII decimal digits. No sign, fraction, or exponent.
    Number = 9,
    /// Quoted string; the token value is the decoded content.
    String = 10,

    // === Separators (16-31) ===
    /// `::`
    NamespaceSeparator = 16,
    /// `/`
    PathSeparator = 17,
    /// `?`
    QuerySeparator = 18,
    /// `&`
    AndSeparator = 19,

    // === Delimiters & punctuation (32-47) ===
    /// `[`
    OpenBracket = 32,
    /// `]`
    CloseBracket = 33,
    /// Any other recognized punctuation character, including a lone `:`.
    Punctuation = 34,

    // === Trivia (48-55) ===
    /// A single whitespace character other than a line feed.
    Whitespace = 48,
    /// A single line feed.
    Newline = 49,

    // === Errors (240) ===
    /// Lexical error; the token value is a diagnostic, not source text.
    Error = 240,

    // === Control (255) ===
    /// End-of-input sentinel with an empty value and zero width.
    Eof = 255,
}

impl TokenKind {
    /// Human-readable name, used in diagnostics and token listings.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HeadingKeyword => "heading keyword",
            Self::BlockKeyword => "block keyword",
            Self::NamespaceKeyword => "namespace keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::NamespaceSeparator => "namespace separator",
            Self::PathSeparator => "path separator",
            Self::QuerySeparator => "query separator",
            Self::AndSeparator => "and separator",
            Self::OpenBracket => "open bracket",
            Self::CloseBracket => "close bracket",
            Self::Punctuation => "punctuation",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::Error => "error",
            Self::Eof => "end of input",
        }
    }

    /// Fixed source text for kinds that always spell the same way.
    ///
    /// Returns `None` for kinds whose text varies (identifiers, numbers,
    /// strings, generic punctuation, whitespace, errors).
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::HeadingKeyword => Some("heading"),
            Self::BlockKeyword => Some("block"),
            Self::NamespaceKeyword => Some("namespace"),
            Self::NamespaceSeparator => Some("::"),
            Self::PathSeparator => Some("/"),
            Self::QuerySeparator => Some("?"),
            Self::AndSeparator => Some("&"),
            Self::OpenBracket => Some("["),
            Self::CloseBracket => Some("]"),
            Self::Newline => Some("\n"),
            Self::Eof => Some(""),
            Self::Identifier
            | Self::Number
            | Self::String
            | Self::Punctuation
            | Self::Whitespace
            | Self::Error => None,
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        (self as u8) < 8
    }

    /// Whitespace and newlines: carried in the stream for exact positions,
    /// skipped by the parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, position-tagged lexical unit.
///
/// `value` borrows the source lexeme whenever it can. It is owned only for
/// strings whose escapes had to be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: Cow<'a, str>,
    /// Position of the first character.
    pub start: Position,
    /// Position right after the last character (exclusive).
    pub end: Position,
}

impl<'a> Token<'a> {
    pub fn new(
        kind: TokenKind,
        value: impl Into<Cow<'a, str>>,
        start: Position,
        end: Position,
    ) -> Self {
        Token {
            kind,
            value: value.into(),
            start,
            end,
        }
    }

    /// The end-of-input sentinel at `at`.
    pub fn eof(at: Position) -> Self {
        Token::new(TokenKind::Eof, "", at, at)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Number of source characters covered by this token.
    #[inline]
    pub fn span_len(&self) -> u32 {
        self.end.offset - self.start.offset
    }

    /// Detach the token from the source it was scanned from.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            value: Cow::Owned(self.value.into_owned()),
            start: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:?} @ {}-{}",
            self.kind, self.value, self.start, self.end
        )
    }
}

/// Tokens the parser looks at: everything except whitespace and newlines.
pub fn significant<'t, 'a>(tokens: &'t [Token<'a>]) -> impl Iterator<Item = &'t Token<'a>> {
    tokens.iter().filter(|tok| !tok.is_trivia())
}

/// The first error token in `tokens`, if any.
pub fn first_error<'t, 'a>(tokens: &'t [Token<'a>]) -> Option<&'t Token<'a>> {
    tokens.iter().find(|tok| tok.is_error())
}
