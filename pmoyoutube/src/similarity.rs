//! Token-overlap similarity between a title and a search term
//!
//! The scorer compares the word sets of two strings and reports their overlap
//! as an integer percentage. It is deliberately cheap: no stemming, no edit
//! distance, just normalized token intersection. Scores feed the
//! [`ResultRanker`](crate::ranker::ResultRanker).

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Runs of Unicode punctuation and symbols, collapsed to a single space
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]+").expect("valid literal regex"));

/// Normalize a string into its set of lowercase tokens
fn tokens(s: &str) -> HashSet<String> {
    NON_WORD
        .replace_all(s, " ")
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Score the similarity of two strings as a percentage in `0..=100`
///
/// The score is `|A ∩ B| * 100 / max(|A|, |B|)` over the normalized token
/// sets. An empty `b` (nothing to compare against) scores 0, as does an
/// empty `a`. Identical non-empty strings score 100.
///
/// # Example
///
/// ```
/// use pmoyoutube::similarity::score;
///
/// assert_eq!(score("Hello, World!", "hello world"), 100);
/// assert_eq!(score("one two three four", "one two"), 50);
/// assert_eq!(score("anything", ""), 0);
/// ```
pub fn score(a: &str, b: &str) -> u32 {
    let a = tokens(a);
    let b = tokens(b);

    if b.is_empty() {
        return 0;
    }

    let common = a.intersection(&b).count() as u32;
    common * 100 / (a.len().max(b.len()) as u32)
}
