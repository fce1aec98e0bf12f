//! `mdsel check`: validate a selector with fail-fast tokenization.

use std::fmt::Write;

use mdsel_lexer::{significant, tokenize_with_recovery, LexError, Token, TokenKind, KEYWORDS};
use mdsel_suggest::{did_you_mean, suggest_similar};
use tracing::debug;

/// Check a selector, printing the verdict.
///
/// Returns `false` when the selector has a lexical error.
#[tracing::instrument(level = "debug", skip_all, fields(len = selector.len()))]
pub fn check_selector(selector: &str) -> bool {
    match render_check(selector) {
        Ok(report) => {
            print!("{report}");
            true
        }
        Err(report) => {
            eprint!("{report}");
            false
        }
    }
}

/// Render the check report.
///
/// `Ok` holds the success report (with any warnings), `Err` the error report.
pub fn render_check(selector: &str) -> Result<String, String> {
    match tokenize_with_recovery(selector) {
        Ok(tokens) => {
            let mut out = String::new();
            for warning in keyword_typos(&tokens) {
                let _ = writeln!(out, "{warning}");
            }
            let _ = writeln!(out, "ok ({} tokens)", tokens.len());
            Ok(out)
        }
        Err(err) => Err(render_error(selector, &err)),
    }
}

/// `error[E0002]: ...` with a caret under the offending character.
fn render_error(selector: &str, err: &LexError) -> String {
    let start = err.start();
    let line_no = start.line.to_string();
    let gutter = " ".repeat(line_no.len());
    let line = selector
        .split('\n')
        .nth(start.line as usize - 1)
        .unwrap_or_default()
        .trim_end_matches('\r');
    // Tabs stay tabs so the caret lines up with what the terminal shows.
    let caret_pad: String = line
        .chars()
        .take(start.column as usize - 1)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "error[{}]: {err}", err.code());
    let _ = writeln!(out, "{gutter} |");
    let _ = writeln!(out, "{line_no} | {line}");
    let _ = writeln!(out, "{gutter} | {caret_pad}^");
    let _ = writeln!(
        out,
        "{gutter} = help: run `mdsel explain {}` for details",
        err.code()
    );
    out
}

/// Warn about `name:` targets whose name is close to a keyword.
///
/// `haeding:intro` lexes cleanly (it is an identifier followed by `:`) but
/// almost certainly meant `heading:intro`.
fn keyword_typos(tokens: &[Token<'_>]) -> Vec<String> {
    let visible: Vec<&Token<'_>> = significant(tokens).collect();
    let keywords = || KEYWORDS.map(|(text, _)| text).into_iter();

    visible
        .windows(2)
        .filter(|pair| {
            pair[0].kind == TokenKind::Identifier
                && pair[1].kind == TokenKind::Punctuation
                && pair[1].value == ":"
        })
        .filter_map(|pair| {
            let name = pair[0].value.as_ref();
            let suggestion = suggest_similar(name, keywords())?;
            debug!(name, suggestion, "possible keyword typo");
            let hint = did_you_mean(&[suggestion])?;
            Some(format!(
                "warning: `{name}` at {} is not a selector keyword; {hint}",
                pair[0].start
            ))
        })
        .collect()
}
