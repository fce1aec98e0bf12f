use std::fmt;
use std::str::FromStr;

/// Error codes for lexical diagnostics.
///
/// Format: E#### where the first digit is the phase. Only the lexer phase
/// (E0xxx) exists today; the parser and resolver that consume these tokens
/// number their own errors from E1xxx upward.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unexpected character in selector
    E0002,
}

/// An error code string that names no known code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code `{0}`")]
pub struct UnknownErrorCode(pub String);

impl ErrorCode {
    /// Every defined code, in numeric order.
    pub const ALL: [ErrorCode; 2] = [ErrorCode::E0001, ErrorCode::E0002];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
        }
    }

    /// Long-form explanation shown by `mdsel explain`.
    pub const fn explanation(self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "A quoted string in the selector was never closed.\n\
                 \n\
                 Strings open with `\"` or `'` and must close with the same\n\
                 character. Inside a string, `\\n`, `\\t`, `\\r`, `\\\\` and an\n\
                 escaped copy of the opening quote are decoded; any other\n\
                 backslash pair is kept as written.\n\
                 \n\
                 Erroneous example:\n\
                 \n    heading:\"Getting started\n\
                 \n\
                 Fixed:\n\
                 \n    heading:\"Getting started\"\n"
            }
            ErrorCode::E0002 => {
                "The selector contains a character that is not part of the\n\
                 selector language.\n\
                 \n\
                 Names may use ASCII letters, digits and `_`. Anything else,\n\
                 such as `@`, `$` or accented letters, must be written inside\n\
                 a quoted string.\n\
                 \n\
                 Erroneous example:\n\
                 \n    heading:intro@v2\n\
                 \n\
                 Fixed:\n\
                 \n    heading:\"intro@v2\"\n"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Accepts the code in any case, with or without the leading `E`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['E', 'e'])
            .unwrap_or(trimmed);
        ErrorCode::ALL
            .into_iter()
            .find(|code| &code.as_str()[1..] == digits)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

#[cfg(test)]
mod tests;
