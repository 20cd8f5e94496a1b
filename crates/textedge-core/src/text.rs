//! Text processing utilities.
//!
//! Provides word tokenization, sentence splitting, and syllable estimation
//! for use by the metric extractors.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for word tokens: runs of ASCII letters and apostrophes.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z']+").expect("valid regex"));

/// Regex for runs of newline characters.
static NEWLINE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").expect("valid regex"));

/// Regex for vowel groups counted as syllables (at most two letters each).
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Extract lowercase word tokens from text.
///
/// Everything other than ASCII letters and apostrophes is a separator, so
/// digits, hyphens, and non-Latin scripts never produce tokens.
pub fn split_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences.
///
/// Newline runs are flattened to a single space first. A split happens at
/// whitespace immediately following `.`, `!`, or `?`; the mark stays with the
/// sentence it ends. Pieces are trimmed and empty pieces dropped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let flattened = NEWLINE_RUN.replace_all(text, " ");
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev = None;

    for (idx, ch) in flattened.char_indices() {
        if ch.is_whitespace() && prev.is_some_and(is_sentence_terminator) {
            push_sentence(&mut sentences, &flattened[start..idx]);
            start = idx;
        }
        prev = Some(ch);
    }

    // Remaining text
    push_sentence(&mut sentences, &flattened[start..]);

    sentences
}

/// Estimate the syllable count of a single word.
///
/// Vowel-group heuristic: drop one trailing `e`, then count groups of one or
/// two consecutive vowels (`y` included). Never returns less than 1.
pub fn estimate_syllables(word: &str) -> usize {
    let lower = word.to_lowercase();
    let stem = lower.strip_suffix('e').unwrap_or(&lower);
    VOWEL_GROUP.find_iter(stem).count().max(1)
}

/// Count whitespace-separated words.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn push_sentence(sentences: &mut Vec<String>, piece: &str) {
    let sentence = piece.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}
