//! Lexical novelty and variety.

use std::collections::{HashMap, HashSet};

/// Words longer than this many characters count as "long".
const LONG_WORD_MIN_EXCLUSIVE: usize = 6;

/// Floor on the denominator so short texts cannot score high novelty.
const MIN_NOVELTY_BASE: usize = 20;

/// Share of rare long words: tokens used exactly once and longer than six
/// characters, over `max(20, token count)`. Capped at 1, `0.0` for no tokens.
pub fn novelty_score(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in words {
        *counts.entry(w.as_str()).or_insert(0) += 1;
    }

    let rare_long = counts
        .iter()
        .filter(|(word, count)| **count == 1 && word.chars().count() > LONG_WORD_MIN_EXCLUSIVE)
        .count();

    (rare_long as f64 / words.len().max(MIN_NOVELTY_BASE) as f64).min(1.0)
}

/// Number of distinct tokens.
pub fn unique_word_count(words: &[String]) -> usize {
    words.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn short_text_uses_floor_denominator() {
        let words = text::split_words("This is a simple test. It has short sentences.");
        // Only "sentences" is long and unique
        assert_eq!(novelty_score(&words), 1.0 / 20.0);
    }

    #[test]
    fn repeated_long_words_are_not_rare() {
        let words = text::split_words("elephant elephant elephant");
        assert_eq!(novelty_score(&words), 0.0);
    }

    #[test]
    fn seven_characters_is_long_six_is_not() {
        assert_eq!(novelty_score(&text::split_words("abcdefg")), 1.0 / 20.0);
        assert_eq!(novelty_score(&text::split_words("abcdef")), 0.0);
    }

    #[test]
    fn large_texts_use_token_count() {
        let mut words: Vec<String> = (0..30).map(|_| "cat".to_string()).collect();
        words.push("marvelous".to_string());
        words.push("luminous".to_string());
        assert_eq!(novelty_score(&words), 2.0 / 32.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(novelty_score(&[]), 0.0);
        assert_eq!(unique_word_count(&[]), 0);
    }

    #[test]
    fn unique_counts_distinct_tokens() {
        let words = text::split_words("The cat and THE dog and the bird");
        assert_eq!(unique_word_count(&words), 5);
        assert!(unique_word_count(&words) <= words.len());
    }
}
