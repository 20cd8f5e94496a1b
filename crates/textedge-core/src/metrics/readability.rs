//! Readability scoring using an approximation of Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher = easier to read. The result is clamped to `[0, 100]`.
//!
//! Syllables come from the vowel-group heuristic in
//! [`text::estimate_syllables`], not a pronunciation dictionary.

use crate::text;

use super::ratio;

const BASE: f64 = 206.835;
const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
const SYLLABLE_WEIGHT: f64 = 84.6;

/// Score reading ease from word tokens and the number of sentences.
///
/// A sentence count of zero is treated as one. With no words the syllable
/// term is zero, so empty text scores the maximum.
pub fn reading_ease(words: &[String], sentence_count: usize) -> f64 {
    let syllables: usize = words.iter().map(|w| text::estimate_syllables(w)).sum();
    let words_per_sentence = words.len() as f64 / sentence_count.max(1) as f64;
    let syllables_per_word = ratio(syllables, words.len());

    let score = SENTENCE_LENGTH_WEIGHT.mul_add(
        -words_per_sentence,
        SYLLABLE_WEIGHT.mul_add(-syllables_per_word, BASE),
    );

    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
