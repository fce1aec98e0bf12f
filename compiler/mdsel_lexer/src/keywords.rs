//! Reserved selector keywords.
//!
//! Exactly three words are reserved, matched case-sensitively: `heading`,
//! `block`, and `namespace`. `Heading` or `BLOCK` are ordinary identifiers.

use crate::token::TokenKind;

/// Every reserved keyword with the kind it scans to.
///
/// Exposed so suggestion engines can offer `heading` for `haeding`.
pub const KEYWORDS: [(&str, TokenKind); 3] = [
    ("heading", TokenKind::HeadingKeyword),
    ("block", TokenKind::BlockKeyword),
    ("namespace", TokenKind::NamespaceKeyword),
];

/// Look up a keyword by its exact text.
///
/// Returns `None` for anything that should stay an identifier.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    // Guard: keywords are 5-9 chars long
    if !(5..=9).contains(&text.len()) {
        return None;
    }
    match text {
        "heading" => Some(TokenKind::HeadingKeyword),
        "block" => Some(TokenKind::BlockKeyword),
        "namespace" => Some(TokenKind::NamespaceKeyword),
        _ => None,
    }
}
