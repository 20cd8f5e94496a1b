//! Advice derived from a [`MetricVector`].
//!
//! Rules run in a fixed order and each contributes at most one [`Tip`]. When
//! no rule fires the list holds [`Tip::StrongPerformance`] alone, so advice is
//! never empty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scorer::MetricVector;

/// Readability below this suggests shorter sentences.
pub const MIN_READABILITY: f64 = 55.0;
/// Jargon density above this suggests plainer words.
pub const MAX_JARGON_DENSITY: f64 = 0.06;
/// Structure below this suggests headings and lists.
pub const MIN_STRUCTURE: f64 = 0.6;
/// Novelty below this suggests concrete examples.
pub const MIN_NOVELTY: f64 = 0.05;
/// Vocabulary ratio below this suggests more varied wording.
pub const MIN_VOCABULARY_RATIO: f64 = 0.35;

/// A single recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tip {
    /// Readability is low.
    ShortenSentences,
    /// Too much jargon.
    ReplaceJargon,
    /// Weak formatting.
    AddStructure,
    /// Few rare or specific words.
    AddExamples,
    /// Repetitive vocabulary.
    VaryVocabulary,
    /// Nothing to fix.
    StrongPerformance,
}

impl Tip {
    /// Every tip in rule order.
    pub const ALL: [Self; 6] = [
        Self::ShortenSentences,
        Self::ReplaceJargon,
        Self::AddStructure,
        Self::AddExamples,
        Self::VaryVocabulary,
        Self::StrongPerformance,
    ];

    /// Stable identifier, matching the serialized form.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ShortenSentences => "shorten-sentences",
            Self::ReplaceJargon => "replace-jargon",
            Self::AddStructure => "add-structure",
            Self::AddExamples => "add-examples",
            Self::VaryVocabulary => "vary-vocabulary",
            Self::StrongPerformance => "strong-performance",
        }
    }

    /// Human-readable recommendation.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::ShortenSentences => {
                "Shorten your sentences and prefer words with fewer syllables."
            }
            Self::ReplaceJargon => "Replace jargon with concrete, specific language.",
            Self::AddStructure => {
                "Break the text up with headings, bullet points, and focused paragraphs."
            }
            Self::AddExamples => "Add concrete examples or a surprising insight.",
            Self::VaryVocabulary => "Increase vocabulary variety; avoid repeating the same words.",
            Self::StrongPerformance => {
                "Strong clarity and originality. Consider adding visuals or data to back it up."
            }
        }
    }
}

impl std::fmt::Display for Tip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Derive recommendations from the metrics, in rule order.
///
/// Returns between one and five tips.
pub fn advice_from_scores(metrics: &MetricVector) -> Vec<Tip> {
    let rules = [
        (metrics.readability < MIN_READABILITY, Tip::ShortenSentences),
        (metrics.jargon_density > MAX_JARGON_DENSITY, Tip::ReplaceJargon),
        (metrics.structure_score < MIN_STRUCTURE, Tip::AddStructure),
        (metrics.novelty_score < MIN_NOVELTY, Tip::AddExamples),
        (
            metrics.vocabulary_ratio() < MIN_VOCABULARY_RATIO,
            Tip::VaryVocabulary,
        ),
    ];

    let mut tips: Vec<Tip> = rules
        .into_iter()
        .filter_map(|(fired, tip)| fired.then_some(tip))
        .collect();

    if tips.is_empty() {
        tips.push(Tip::StrongPerformance);
    }

    tracing::debug!(tips = tips.len(), "advice derived");
    tips
}
