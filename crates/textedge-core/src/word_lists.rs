//! Curated word lists for scoring.
//!
//! Entries are lowercase single words, matching what [`crate::text::split_words`]
//! produces. Multi-word or hyphenated buzzwords can never match a token and are
//! left out.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Business and tech buzzwords penalized by the jargon density metric.
pub static JARGON: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "synergy",
        "synergies",
        "leverage",
        "leveraging",
        "paradigm",
        "disrupt",
        "disruptive",
        "innovative",
        "streamline",
        "optimize",
        "optimization",
        "scalable",
        "bandwidth",
        "holistic",
        "ecosystem",
        "robust",
        "seamless",
        "seamlessly",
        "agile",
        "actionable",
        "deliverable",
        "deliverables",
        "stakeholder",
        "stakeholders",
        "empower",
        "ideate",
        "ideation",
        "pivot",
        "incentivize",
        "monetize",
        "operationalize",
        "granular",
        "alignment",
        "frictionless",
        "learnings",
        "utilize",
        "mindshare",
        "wheelhouse",
        "omnichannel",
        "blockchain",
        "gamification",
        "upskill",
    ]
    .into_iter()
    .collect()
});
