//! Core library for textedge.
//!
//! Scores a block of text on readability, jargon density, structure, and
//! novelty, blends those into a single advantage score, and derives advice.
//! Every function in the pipeline is pure and infallible.
//!
//! # Modules
//!
//! - [`text`] - Word tokenization, sentence splitting, syllable estimation
//! - [`metrics`] - One extractor per metric
//! - [`scorer`] - Aggregation into a [`MetricVector`]
//! - [`advice`] - Threshold rules producing [`Tip`]s
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textedge_core::{advice_from_scores, compute_scores};
//!
//! let metrics = compute_scores("Short words win. Long ones lose.");
//! assert_eq!(metrics.token_count, 6);
//!
//! let tips = advice_from_scores(&metrics);
//! assert!(!tips.is_empty());
//! ```
#![deny(unsafe_code)]

pub mod advice;
pub mod config;
pub mod error;
pub mod metrics;
pub mod scorer;
pub mod text;
pub mod word_lists;

pub use advice::{Tip, advice_from_scores};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{ConfigError, ConfigResult};
pub use scorer::{MetricVector, ScoreReport, compute_scores, score_text};
