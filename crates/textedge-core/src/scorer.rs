//! The scoring pipeline: tokenize, extract metrics, aggregate.
//!
//! Aggregation blends two sub-scores:
//!
//! - clarity = `(readability / 100) * (1 - jargon) * structure`
//! - originality = `0.5 * novelty + 0.5 * (unique / tokens)`
//!
//! and maps `0.65 * clarity + 0.35 * originality` onto `0..=100`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advice::{self, Tip};
use crate::metrics;
use crate::text;

const CLARITY_WEIGHT: f64 = 0.65;
const ORIGINALITY_WEIGHT: f64 = 0.35;

/// Metrics computed for one block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricVector {
    /// Number of word tokens.
    pub token_count: usize,
    /// Number of distinct word tokens.
    pub unique_words: usize,
    /// Reading ease, `0..=100`, higher is easier.
    pub readability: f64,
    /// Share of tokens that are jargon, `0..=1`.
    pub jargon_density: f64,
    /// Formatting quality from list markers and short sentences.
    pub structure_score: f64,
    /// Share of rare long words, `0..=1`.
    pub novelty_score: f64,
    /// Aggregate advantage score, `0..=100`.
    pub advantage: u8,
}

impl MetricVector {
    /// Distinct tokens over total tokens (`0.0` for empty text).
    pub fn vocabulary_ratio(&self) -> f64 {
        self.unique_words as f64 / self.token_count.max(1) as f64
    }

    /// Clarity sub-score.
    pub fn clarity(&self) -> f64 {
        clarity(self.readability, self.jargon_density, self.structure_score)
    }

    /// Originality sub-score.
    pub fn originality(&self) -> f64 {
        originality(self.novelty_score, self.vocabulary_ratio())
    }
}

/// Metrics plus the advice derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    /// The computed metrics.
    pub metrics: MetricVector,
    /// Tips in rule order; never empty.
    pub advice: Vec<Tip>,
}

impl ScoreReport {
    /// Whether the advantage score meets an optional minimum.
    pub fn passes(&self, min_score: Option<u8>) -> bool {
        min_score.is_none_or(|min| self.metrics.advantage >= min)
    }
}

/// Compute every metric for `text`.
///
/// Infallible: empty or pathological input still yields finite values.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_scores(text: &str) -> MetricVector {
    let words = text::split_words(text);
    let sentences = text::split_sentences(text);

    let token_count = words.len();
    let unique_words = metrics::unique_word_count(&words);
    let readability = metrics::reading_ease(&words, sentences.len());
    let jargon_density = metrics::jargon_density(&words);
    let structure_score = metrics::structure_score(text, &sentences);
    let novelty_score = metrics::novelty_score(&words);

    let vocabulary = unique_words as f64 / token_count.max(1) as f64;
    let advantage = advantage_score(
        clarity(readability, jargon_density, structure_score),
        originality(novelty_score, vocabulary),
    );

    tracing::debug!(
        token_count,
        sentences = sentences.len(),
        advantage,
        "scores computed"
    );

    MetricVector {
        token_count,
        unique_words,
        readability,
        jargon_density,
        structure_score,
        novelty_score,
        advantage,
    }
}

/// Score `text` and derive advice in one pass.
pub fn score_text(text: &str) -> ScoreReport {
    let metrics = compute_scores(text);
    let advice = advice::advice_from_scores(&metrics);
    ScoreReport { metrics, advice }
}

/// Clarity: readable, jargon-free, well-structured.
pub fn clarity(readability: f64, jargon_density: f64, structure_score: f64) -> f64 {
    (readability / 100.0) * (1.0 - jargon_density) * structure_score
}

/// Originality: rare vocabulary and lexical variety, weighted equally.
pub fn originality(novelty_score: f64, vocabulary_ratio: f64) -> f64 {
    0.5f64.mul_add(novelty_score, 0.5 * vocabulary_ratio)
}

/// Blend clarity and originality into `0..=100`.
///
/// The blend is clamped so out-of-range sub-scores cannot escape the range;
/// a non-finite blend scores 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn advantage_score(clarity: f64, originality: f64) -> u8 {
    let raw = (100.0 * CLARITY_WEIGHT.mul_add(clarity, ORIGINALITY_WEIGHT * originality)).round();
    if raw.is_finite() {
        // Clamped to 0..=100, so the cast is lossless
        raw.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}
