//! Levenshtein distance and candidate ranking.

/// Levenshtein distance between two names.
///
/// Counts the single-character insertions, deletions and substitutions that
/// turn `a` into `b`. Characters are Unicode scalar values, so `"héllo"` is
/// one edit away from `"hello"`.
///
/// Runs in O(len(a) · len(b)) time. Only the shorter name is buffered, as the
/// row of the DP table; the longer one is streamed, so auxiliary space is
/// O(min(len(a), len(b))). Resolvers compare short selector names against
/// long heading titles, so the row stays small.
///
/// # Example
///
/// ```
/// use mdsel_suggest::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("intro", "intro"), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let (long, short) = order_by_len(a, b);
    let short: Vec<char> = short.chars().collect();

    if short.is_empty() {
        return long.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; short.len() + 1];

    for (i, long_char) in long.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, &short_char) in short.iter().enumerate() {
            let cost = usize::from(long_char != short_char);

            curr_row[j + 1] = (prev_row[j + 1] + 1) // drop from long
                .min(curr_row[j] + 1) // add to long
                .min(prev_row[j] + cost); // replace
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// `(longer, shorter)` by character count. Equal lengths keep `a` first.
fn order_by_len<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a.chars().count() >= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Edit budget for a misspelled name of `name_len` characters.
///
/// | length | budget |
/// |--------|--------|
/// | 0      | 0      |
/// | 1-2    | 1      |
/// | 3-5    | 2      |
/// | 6-10   | 3      |
/// | 11+    | half the length, at most 5 |
///
/// One- and two-letter targets like `h2` get a single edit, so `h3` is
/// offered but unrelated short names are not.
pub fn default_threshold(name_len: usize) -> usize {
    match name_len {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        n => (n / 2).min(5),
    }
}

/// Closest candidate to `name` within [`default_threshold`] edits.
///
/// On ties the earlier candidate wins.
pub fn suggest_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<&'a str> {
    suggest_similar_with_threshold(name, candidates, default_threshold(name.chars().count()))
}

/// [`suggest_similar`] with a caller-chosen edit budget.
pub fn suggest_similar_with_threshold<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
    threshold: usize,
) -> Option<&'a str> {
    if name.is_empty() {
        return None;
    }

    let name_len = name.chars().count();
    let mut best: Option<(&str, usize)> = None;

    for candidate in candidates {
        // The length gap alone already exceeds the budget.
        if name_len.abs_diff(candidate.chars().count()) > threshold {
            continue;
        }

        let distance = edit_distance(name, candidate);

        if distance <= threshold {
            match best {
                None => best = Some((candidate, distance)),
                Some((_, best_dist)) if distance < best_dist => {
                    best = Some((candidate, distance));
                }
                _ => {}
            }
        }
    }

    best.map(|(s, _)| s)
}

/// Find all similar names within threshold, with their distances.
///
/// Sorted by edit distance, then alphabetically for ties, and truncated to
/// `max_results`. This is the top-N policy for "did you mean one of ...".
pub fn find_similar<'a>(
    name: &str,
    candidates: impl Iterator<Item = &'a str>,
    threshold: usize,
    max_results: usize,
) -> Vec<(&'a str, usize)> {
    if name.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let name_len = name.chars().count();
    let mut matches: Vec<(&str, usize)> = candidates
        .filter_map(|candidate| {
            if name_len.abs_diff(candidate.chars().count()) > threshold {
                return None;
            }

            let distance = edit_distance(name, candidate);
            (distance <= threshold).then_some((candidate, distance))
        })
        .collect();

    matches.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    matches.dedup_by(|a, b| a.0 == b.0);
    matches.truncate(max_results);
    matches
}

/// Whether `a` and `b` look like the same name typed carelessly.
///
/// True for an ASCII case mismatch (`Intro` vs `intro`) or a single edit.
/// Stricter than [`suggest_similar`], whose budget grows with the length.
pub fn is_likely_typo(a: &str, b: &str) -> bool {
    if a.eq_ignore_ascii_case(b) {
        return true;
    }
    edit_distance(a, b) == 1
}

/// Render ranked suggestions as a hint line.
///
/// Returns `None` when there is nothing to suggest.
///
/// ```
/// use mdsel_suggest::did_you_mean;
///
/// assert_eq!(did_you_mean(&["intro"]).as_deref(), Some("did you mean `intro`?"));
/// assert_eq!(
///     did_you_mean(&["intro", "outro"]).as_deref(),
///     Some("did you mean one of `intro`, `outro`?")
/// );
/// assert_eq!(did_you_mean(&[]), None);
/// ```
pub fn did_you_mean(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [only] => Some(format!("did you mean `{only}`?")),
        many => {
            let quoted: Vec<String> = many.iter().map(|s| format!("`{s}`")).collect();
            Some(format!("did you mean one of {}?", quoted.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests;
