//! CLI commands: `lex`, `check`, `suggest`, `explain`.

mod check;
mod explain;
mod lex;
mod suggest;

pub use check::{check_selector, render_check};
pub use explain::{explain_error, render_explanation};
pub use lex::{lex_selector, render_tokens};
pub use suggest::{render_suggestions, suggest_names, SuggestOptions};
