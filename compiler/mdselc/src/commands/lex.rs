//! `mdsel lex`: dump the token stream of a selector.

use std::fmt::Write;

use mdsel_lexer::tokenize;

/// Tokenize a selector and print every token, errors included.
#[tracing::instrument(level = "debug", skip_all, fields(len = selector.len()))]
pub fn lex_selector(selector: &str) {
    print!("{}", render_tokens(selector));
}

/// One line per token: `KIND "value" @ start-end`.
///
/// Kind names are padded so values line up in a terminal.
pub fn render_tokens(selector: &str) -> String {
    let tokens = tokenize(selector);
    let width = tokens
        .iter()
        .map(|t| t.kind.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "Tokens for {selector:?} ({} tokens):", tokens.len());
    for tok in &tokens {
        let _ = writeln!(
            out,
            "  {:<width$} {:?} @ {}-{}",
            tok.kind.name(),
            tok.value,
            tok.start,
            tok.end
        );
    }
    out
}
