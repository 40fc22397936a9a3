//! # Severity Classification
//!
//! First-match-wins dispatch over the severity keyword table.
//!
//! Tiers are tried from Critical down to Medium. The first tier with at least
//! one keyword present decides the verdict; lower tiers are never consulted,
//! so a single critical keyword outranks any number of lesser ones. When no
//! scoring tier matches the verdict falls through to Low.

use crate::primitives::{LOW_SEVERITY_REASON, MAX_REASON_KEYWORDS};
use crate::tables::{SEVERITY_KEYWORDS, TierKeywords};
use crate::types::{SeverityTier, SeverityVerdict};

/// Keywords of `entry` that occur in `text`, in table order.
#[must_use]
pub fn matched_keywords(entry: &TierKeywords, text: &str) -> Vec<&'static str> {
    entry
        .keywords
        .iter()
        .copied()
        .filter(|keyword| text.contains(keyword))
        .collect()
}

/// Classify the severity of normalized `text`.
#[must_use]
pub fn classify_severity(text: &str) -> SeverityVerdict {
    let scoring_tiers = SEVERITY_KEYWORDS
        .iter()
        .filter(|entry| entry.tier != SeverityTier::Low);

    for entry in scoring_tiers {
        let matches = matched_keywords(entry, text);
        if matches.is_empty() {
            continue;
        }

        let quoted = matches
            .iter()
            .take(MAX_REASON_KEYWORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");

        return SeverityVerdict {
            severity: entry.tier,
            severity_score: entry.tier.score(),
            reasons: vec![flag_reason(entry.tier, &quoted)],
        };
    }

    SeverityVerdict {
        severity: SeverityTier::Low,
        severity_score: SeverityTier::Low.score(),
        reasons: vec![LOW_SEVERITY_REASON.to_string()],
    }
}

fn flag_reason(tier: SeverityTier, quoted: &str) -> String {
    match tier {
        SeverityTier::Critical => format!("Flagged as Critical due to keywords: {}", quoted),
        _ => format!("Flagged as {} Severity due to keywords: {}", tier, quoted),
    }
}

// =============================================================================
// TESTS
// =============================================================================
