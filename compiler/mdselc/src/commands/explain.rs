//! `mdsel explain`: long-form documentation for an error code.

use mdsel_lexer::ErrorCode;

/// Print the explanation for `code`. Returns `false` for unknown codes.
pub fn explain_error(code: &str) -> bool {
    match render_explanation(code) {
        Ok(text) => {
            print!("{text}");
            true
        }
        Err(msg) => {
            eprintln!("{msg}");
            false
        }
    }
}

pub fn render_explanation(code: &str) -> Result<String, String> {
    let code: ErrorCode = code.parse().map_err(|err| {
        let known: Vec<&str> = ErrorCode::ALL.iter().map(|c| c.as_str()).collect();
        format!("error: {err}\nKnown codes: {}", known.join(", "))
    })?;
    Ok(format!("{code}\n\n{}", code.explanation()))
}
