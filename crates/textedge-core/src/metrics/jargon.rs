//! Jargon density.

use crate::word_lists::JARGON;

use super::ratio;

/// Share of tokens that appear in the jargon list.
///
/// Tokens are expected to be lowercase already. Returns `0.0` for no tokens.
pub fn jargon_density(words: &[String]) -> f64 {
    let hits = words
        .iter()
        .filter(|w| JARGON.contains(w.as_str()))
        .count();
    ratio(hits, words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn no_jargon() {
        let words = text::split_words("The cat sat on the mat.");
        assert_eq!(jargon_density(&words), 0.0);
    }

    #[test]
    fn partial_jargon() {
        let words = text::split_words("We leverage synergy daily.");
        assert_eq!(jargon_density(&words), 0.5);
    }

    #[test]
    fn case_insensitive_via_tokenizer() {
        let words = text::split_words("SYNERGY Synergy synergy");
        assert_eq!(jargon_density(&words), 1.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(jargon_density(&[]), 0.0);
    }

    #[test]
    fn swapping_in_jargon_never_lowers_density() {
        let plain = text::split_words("we use the new tool to plan the work");
        let swapped = text::split_words("we leverage the new tool to plan the work");
        assert!(jargon_density(&swapped) >= jargon_density(&plain));
    }
}
