//! Escape decoding inside quoted selector strings.
//!
//! Selector strings are lenient: only five escapes decode, and everything
//! else after a backslash is kept as written. `"C:\docs"` therefore stays
//! `C:\docs` instead of failing.
//!
//! | Escape | Decodes to |
//! |--------|------------|
//! | `\n`   | line feed |
//! | `\t`   | tab |
//! | `\r`   | carriage return |
//! | `\\`   | backslash |
//! | `\"` or `\'` | the quote that opened the string |

/// Resolve the character following a backslash.
///
/// `quote` is the character that opened the current string; only that quote
/// is escapable, so `\'` inside `"..."` stays two characters.
/// Returns `None` when the pair must be kept verbatim.
#[inline]
pub(crate) fn resolve_escape(c: char, quote: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        _ if c == quote => Some(quote),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
