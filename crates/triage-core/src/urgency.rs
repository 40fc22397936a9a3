//! # Urgency Scoring
//!
//! Urgency starts at the severity score and is raised by every urgency
//! pattern that matches. Patterns are independent; the total is clamped to
//! [`MAX_SCORE`] once, after all of them have been applied.

use crate::primitives::MAX_SCORE;
use crate::tables::{URGENCY_PATTERNS, UrgencyPattern};
use crate::types::UrgencyVerdict;
use once_cell::sync::Lazy;
use regex::Regex;

/// An urgency pattern compiled for matching.
#[derive(Debug)]
pub struct CompiledPattern {
    pub source: &'static UrgencyPattern,
    pub regex: Regex,
}

/// Urgency patterns compiled once, in table order.
pub static COMPILED_PATTERNS: Lazy<Vec<CompiledPattern>> = Lazy::new(|| {
    URGENCY_PATTERNS
        .iter()
        .map(|source| CompiledPattern {
            source,
            regex: Regex::new(&format!("(?i){}", source.pattern))
                .expect("valid urgency pattern"),
        })
        .collect()
});

/// A single urgency pattern hit: the first matched substring and its weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyHit {
    pub matched: String,
    pub weight: u8,
}

/// Every urgency pattern that matches `text`, in table order.
#[must_use]
pub fn urgency_hits(text: &str) -> Vec<UrgencyHit> {
    COMPILED_PATTERNS
        .iter()
        .filter_map(|compiled| {
            compiled.regex.find(text).map(|m| UrgencyHit {
                matched: m.as_str().to_string(),
                weight: compiled.source.weight,
            })
        })
        .collect()
}

/// Score the urgency of normalized `text`, anchored on `severity_score`.
#[must_use]
pub fn classify_urgency(text: &str, severity_score: u8) -> UrgencyVerdict {
    let hits = urgency_hits(text);

    let total = hits
        .iter()
        .fold(u32::from(severity_score), |acc, hit| {
            acc.saturating_add(u32::from(hit.weight))
        });

    let reasons = hits
        .iter()
        .map(|hit| {
            format!(
                "Urgency increased by context matching pattern: '{}'",
                hit.matched
            )
        })
        .collect();

    UrgencyVerdict {
        urgency_score: total.min(u32::from(MAX_SCORE)) as u8,
        reasons,
    }
}

// =============================================================================
// TESTS
// =============================================================================
