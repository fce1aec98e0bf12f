use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

#[test]
fn test_edit_distance_identical() {
    assert_eq!(edit_distance("hello", "hello"), 0);
    assert_eq!(edit_distance("", ""), 0);
    assert_eq!(edit_distance("a", "a"), 0);
}

#[test]
fn test_edit_distance_empty() {
    assert_eq!(edit_distance("hello", ""), 5);
    assert_eq!(edit_distance("", "abc"), 3);
}

#[test]
fn test_edit_distance_single_char() {
    assert_eq!(edit_distance("a", "b"), 1);
    assert_eq!(edit_distance("ab", "a"), 1);
    assert_eq!(edit_distance("a", "ab"), 1);
}

#[test]
fn test_edit_distance_insertions_and_deletions() {
    assert_eq!(edit_distance("abc", "abcde"), 2);
    assert_eq!(edit_distance("abcde", "abc"), 2);
}

#[test]
fn test_edit_distance_substitutions() {
    assert_eq!(edit_distance("abc", "adc"), 1);
    assert_eq!(edit_distance("abc", "xyz"), 3);
}

#[test]
fn test_edit_distance_classic() {
    assert_eq!(edit_distance("kitten", "sitting"), 3);
    assert_eq!(edit_distance("sitting", "kitten"), 3);
    assert_eq!(edit_distance("saturday", "sunday"), 3);
}

#[test]
fn test_edit_distance_transposition_costs_two() {
    // No transposition operation: a swap is two substitutions.
    assert_eq!(edit_distance("haeding", "heading"), 2);
    assert_eq!(edit_distance("lenght", "length"), 2);
}

#[test]
fn test_edit_distance_unicode() {
    assert_eq!(edit_distance("héllo", "hello"), 1);
    assert_eq!(edit_distance("日本語", "日本"), 1);
    assert_eq!(edit_distance("Überblick", "Uberblick"), 1);
}

#[test]
fn test_order_by_len_counts_chars_not_bytes() {
    assert_eq!(order_by_len("abcdef", "xy"), ("abcdef", "xy"));
    assert_eq!(order_by_len("xy", "abcdef"), ("abcdef", "xy"));
    // "ééé" is 6 bytes but only 3 chars, so "abcd" is the longer name.
    assert_eq!(order_by_len("ééé", "abcd"), ("abcd", "ééé"));
    assert_eq!(order_by_len("ab", "cd"), ("ab", "cd"));
}

#[test]
fn test_edit_distance_very_long_against_short() {
    let long = "x".repeat(100_000);
    assert_eq!(edit_distance(&long, "y"), 100_000);
    assert_eq!(edit_distance("y", &long), 100_000);
    assert_eq!(edit_distance(&long, "x"), 99_999);
    assert_eq!(edit_distance(&long, ""), 100_000);
}

#[test]
fn test_default_threshold() {
    assert_eq!(default_threshold(0), 0);
    assert_eq!(default_threshold(1), 1);
    assert_eq!(default_threshold(2), 1);
    assert_eq!(default_threshold(3), 2);
    assert_eq!(default_threshold(5), 2);
    assert_eq!(default_threshold(6), 3);
    assert_eq!(default_threshold(10), 3);
    assert_eq!(default_threshold(12), 5);
    assert_eq!(default_threshold(40), 5); // max 5
}

#[test]
fn test_suggest_similar_typo() {
    let headings = ["installation", "configuration", "usage"];
    assert_eq!(
        suggest_similar("instalation", headings.iter().copied()),
        Some("installation")
    );
}

#[test]
fn test_suggest_similar_keywords() {
    let keywords = ["heading", "block", "namespace"];
    assert_eq!(suggest_similar("haeding", keywords.iter().copied()), Some("heading"));
    assert_eq!(suggest_similar("blok", keywords.iter().copied()), Some("block"));
    assert_eq!(suggest_similar("namspace", keywords.iter().copied()), Some("namespace"));
}

#[test]
fn test_suggest_similar_no_match() {
    let candidates = ["alpha", "beta", "gamma"];
    assert_eq!(suggest_similar("xyz", candidates.iter().copied()), None);
}

#[test]
fn test_suggest_similar_empty_input() {
    let candidates = ["foo", "bar"];
    assert_eq!(suggest_similar("", candidates.iter().copied()), None);
}

#[test]
fn test_suggest_similar_empty_candidates() {
    assert_eq!(suggest_similar("foo", std::iter::empty::<&str>()), None);
}

#[test]
fn test_suggest_similar_tie_keeps_first() {
    let candidates = ["for", "foo", "four"];
    assert_eq!(suggest_similar("fo", candidates.iter().copied()), Some("for"));
}

#[test]
fn test_suggest_with_threshold() {
    let candidates = ["abc", "abcd", "abcde"];
    assert_eq!(
        suggest_similar_with_threshold("abc", candidates.iter().copied(), 1),
        Some("abc")
    );
    assert_eq!(
        suggest_similar_with_threshold("abx", candidates.iter().copied(), 0),
        None
    );
}

#[test]
fn test_find_similar_sorted_with_distances() {
    let candidates = ["abcd", "ab", "abc", "xyz"];
    let results = find_similar("abc", candidates.iter().copied(), 2, 5);
    assert_eq!(results, vec![("abc", 0), ("ab", 1), ("abcd", 1)]);
}

#[test]
fn test_find_similar_max_results() {
    let candidates = ["a", "ab", "abc", "abcd", "abcde"];
    let results = find_similar("abc", candidates.iter().copied(), 3, 2);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0], ("abc", 0));
}

#[test]
fn test_find_similar_deduplicates() {
    let candidates = ["intro", "introx", "intro"];
    let results = find_similar("intr", candidates.iter().copied(), 2, 5);
    assert_eq!(results, vec![("intro", 1), ("introx", 2)]);
}

#[test]
fn test_find_similar_degenerate_inputs() {
    let candidates = ["a", "b"];
    assert!(find_similar("", candidates.iter().copied(), 3, 3).is_empty());
    assert!(find_similar("a", candidates.iter().copied(), 3, 0).is_empty());
}

#[test]
fn test_is_likely_typo() {
    assert!(is_likely_typo("hello", "helo")); // missing letter
    assert!(is_likely_typo("Intro", "intro")); // case difference
    assert!(is_likely_typo("abc", "adc")); // substitution
    assert!(!is_likely_typo("hello", "world"));
    assert!(!is_likely_typo("haeding", "heading")); // transposition is 2
}

#[test]
fn test_did_you_mean() {
    assert_eq!(did_you_mean(&[]), None);
    assert_eq!(did_you_mean(&["usage"]).as_deref(), Some("did you mean `usage`?"));
    assert_eq!(
        did_you_mean(&["a", "b", "c"]).as_deref(),
        Some("did you mean one of `a`, `b`, `c`?")
    );
}

// ─── Property Tests ────────────────────────────────────────────────────

/// Reference implementation: full matrix, no row swapping.
fn full_matrix_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[a.len()][b.len()]
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in "\\PC{0,16}") {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn distance_is_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn distance_against_empty_is_length(a in "\\PC{0,16}") {
        prop_assert_eq!(edit_distance(&a, ""), a.chars().count());
        prop_assert_eq!(edit_distance("", &a), a.chars().count());
    }

    #[test]
    fn distance_matches_full_matrix(a in "[a-d]{0,10}", b in "[a-d]{0,10}") {
        prop_assert_eq!(edit_distance(&a, &b), full_matrix_distance(&a, &b));
    }

    #[test]
    fn distance_bounded_by_longer_length(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        let d = edit_distance(&a, &b);
        prop_assert!(d <= a.len().max(b.len()));
        prop_assert!(d >= a.len().abs_diff(b.len()));
    }

    #[test]
    fn triangle_inequality(a in "[a-c]{0,6}", b in "[a-c]{0,6}", c in "[a-c]{0,6}") {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }
}
