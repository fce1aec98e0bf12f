//! "Did You Mean?" Suggestions
//!
//! When a selector names a heading, block, or namespace that does not exist,
//! the resolver ranks the names that do exist at that scope by Levenshtein
//! edit distance and offers the closest ones.
//!
//! [`edit_distance`] is the matcher itself. The remaining functions are
//! ranking policies built on top of it; a resolver is free to pick any of
//! them or roll its own cutoff.
//!
//! # Example
//!
//! ```
//! use mdsel_suggest::{edit_distance, suggest_similar};
//!
//! assert_eq!(edit_distance("kitten", "sitting"), 3);
//!
//! let headings = ["installation", "configuration", "usage"];
//! assert_eq!(
//!     suggest_similar("instalation", headings.iter().copied()),
//!     Some("installation")
//! );
//! ```

mod suggest;

pub use suggest::{
    default_threshold, did_you_mean, edit_distance, find_similar, is_likely_typo,
    suggest_similar, suggest_similar_with_threshold,
};
