//! `mdsel suggest`: rank candidate names against a misspelled one.

use std::fmt::Write;

use mdsel_suggest::{default_threshold, did_you_mean, find_similar};

/// Ranking knobs for `mdsel suggest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions shown.
    pub max_results: usize,
    /// Maximum edit distance; `None` picks one from the name's length.
    pub threshold: Option<usize>,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        SuggestOptions {
            max_results: 3,
            threshold: None,
        }
    }
}

impl SuggestOptions {
    /// Apply one `--max=N` or `--threshold=N` flag.
    ///
    /// Returns `Ok(false)` if `arg` is not a suggest flag at all.
    pub fn apply_flag(&mut self, arg: &str) -> Result<bool, String> {
        if let Some(value) = arg.strip_prefix("--max=") {
            self.max_results = parse_count("--max", value)?;
            Ok(true)
        } else if let Some(value) = arg.strip_prefix("--threshold=") {
            self.threshold = Some(parse_count("--threshold", value)?);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("error: {flag} expects a non-negative integer, got '{value}'"))
}

/// Print ranked suggestions. Returns `false` when nothing was close enough.
#[tracing::instrument(level = "debug", skip(candidates))]
pub fn suggest_names(name: &str, candidates: &[String], options: SuggestOptions) -> bool {
    let (report, found) = render_suggestions(name, candidates, options);
    print!("{report}");
    found
}

/// Render the ranked suggestion list and whether anything matched.
pub fn render_suggestions(
    name: &str,
    candidates: &[String],
    options: SuggestOptions,
) -> (String, bool) {
    let threshold = options
        .threshold
        .unwrap_or_else(|| default_threshold(name.chars().count()));
    let ranked = find_similar(
        name,
        candidates.iter().map(String::as_str),
        threshold,
        options.max_results,
    );

    let mut out = String::new();
    if ranked.is_empty() {
        let _ = writeln!(
            out,
            "no candidates within distance {threshold} of `{name}`"
        );
        return (out, false);
    }

    let names: Vec<&str> = ranked.iter().map(|(candidate, _)| *candidate).collect();
    if let Some(hint) = did_you_mean(&names) {
        let _ = writeln!(out, "{hint}");
    }
    for (candidate, distance) in &ranked {
        let _ = writeln!(out, "  {distance}  {candidate}");
    }
    (out, true)
}
