//! Metric extractors.
//!
//! Each metric is a pure function over the tokenized text, in its own module.
//! [`crate::scorer::compute_scores`] runs them all; callers can also invoke
//! them individually.

pub mod jargon;
pub mod novelty;
pub mod readability;
pub mod structure;

pub use jargon::jargon_density;
pub use novelty::{novelty_score, unique_word_count};
pub use readability::reading_ease;
pub use structure::structure_score;

/// Divide, treating an empty denominator as a zero ratio.
pub(crate) fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
