//! Structure scoring: list markers and short sentences.

use regex::Regex;
use std::sync::LazyLock;

use crate::text;

/// A line that starts (after optional indentation) with a list marker.
static LIST_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*?]").expect("valid regex"));

const LIST_BONUS: f64 = 0.2;
const SHORT_SENTENCE_WEIGHT: f64 = 0.8;

/// Sentences with at most this many words count as short.
const SHORT_SENTENCE_MAX_WORDS: usize = 18;

/// Score formatting quality.
///
/// `0.2` when any line starts with `-`, `*`, or `?`, plus `0.8` times the
/// share of short sentences. With no sentences the share is 1, so empty text
/// scores `0.8`.
pub fn structure_score(text: &str, sentences: &[String]) -> f64 {
    let bonus = if has_list_line(text) { LIST_BONUS } else { 0.0 };
    SHORT_SENTENCE_WEIGHT.mul_add(short_sentence_share(sentences), bonus)
}

/// Whether any line begins with a list marker.
pub fn has_list_line(text: &str) -> bool {
    LIST_LINE.is_match(text)
}

/// Share of sentences with at most 18 whitespace-separated words.
pub fn short_sentence_share(sentences: &[String]) -> f64 {
    if sentences.is_empty() {
        return 1.0;
    }
    let short = sentences
        .iter()
        .filter(|s| text::count_words(s) <= SHORT_SENTENCE_MAX_WORDS)
        .count();
    short as f64 / sentences.len() as f64
}
