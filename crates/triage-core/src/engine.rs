//! # Triage Engine
//!
//! Top-level orchestration: normalize, classify severity, score urgency,
//! suggest categories, and assemble the verdict.
//!
//! Every function here is pure. Identical inputs always produce identical
//! results and the engine may be called from any number of threads.

use crate::category::{detect_categories, ranked_categories};
use crate::normalize::normalize;
use crate::primitives::FALLBACK_REASON;
use crate::severity::{classify_severity, matched_keywords};
use crate::tables::SEVERITY_KEYWORDS;
use crate::types::{AnalysisResult, IssueReport, SeverityTier};
use crate::urgency::{UrgencyHit, classify_urgency, urgency_hits};

/// Analyze one issue description with its optional image labels.
///
/// Total over its input domain: empty strings and empty label lists are
/// valid and yield a Low verdict.
#[must_use]
pub fn analyze_issue<S: AsRef<str>>(description: &str, image_labels: &[S]) -> AnalysisResult {
    let text = normalize(description, image_labels);

    let severity = classify_severity(&text);
    let urgency = classify_urgency(&text, severity.severity_score);
    let suggested_categories = detect_categories(&text);

    let mut reasoning = severity.reasons;
    reasoning.extend(urgency.reasons);
    if reasoning.is_empty() {
        reasoning.push(FALLBACK_REASON.to_string());
    }

    AnalysisResult {
        severity: severity.severity,
        severity_score: severity.severity_score,
        urgency_score: urgency.urgency_score,
        suggested_categories,
        reasoning,
    }
}

/// Analyze a whole [`IssueReport`].
#[must_use]
pub fn analyze_report(report: &IssueReport) -> AnalysisResult {
    analyze_issue(&report.description, &report.image_labels)
}

// =============================================================================
// EXPLANATION
// =============================================================================

/// Full rule-level breakdown of how a text was scored.
///
/// Unlike [`AnalysisResult`], this lists every tier's matches (including the
/// non-scoring low tier), every urgency hit and every category count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// The normalized text all rules were matched against.
    pub text: String,
    pub tier_matches: Vec<(SeverityTier, Vec<&'static str>)>,
    pub urgency_hits: Vec<UrgencyHit>,
    pub category_hits: Vec<(&'static str, usize)>,
    pub result: AnalysisResult,
}

/// Produce a rule-level breakdown for `description` and `image_labels`.
#[must_use]
pub fn explain<S: AsRef<str>>(description: &str, image_labels: &[S]) -> Explanation {
    let text = normalize(description, image_labels);

    let tier_matches = SEVERITY_KEYWORDS
        .iter()
        .map(|entry| (entry.tier, matched_keywords(entry, &text)))
        .collect();

    Explanation {
        tier_matches,
        urgency_hits: urgency_hits(&text),
        category_hits: ranked_categories(&text),
        result: analyze_issue(description, image_labels),
        text,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::LOW_SEVERITY_REASON;

    #[test]
    fn empty_input_is_low() {
        let result = analyze_issue::<&str>("", &[]);
        assert_eq!(result.severity, SeverityTier::Low);
        assert_eq!(result.severity_score, 10);
        assert_eq!(result.urgency_score, 10);
        assert!(result.suggested_categories.is_empty());
        assert_eq!(result.reasoning, vec![LOW_SEVERITY_REASON.to_string()]);
    }

    #[test]
    fn urgency_reasons_follow_severity_reasons() {
        let result = analyze_issue::<&str>("fire spreading now", &[]);
        assert_eq!(result.reasoning.len(), 3);
        assert!(result.reasoning[0].starts_with("Flagged as Critical"));
        assert!(result.reasoning[1].contains("'now'"));
        assert!(result.reasoning[2].contains("'fire'"));
    }

    #[test]
    fn labels_contribute() {
        let result = analyze_issue("There is a problem here.", &["fire", "smoke"]);
        assert_eq!(result.severity, SeverityTier::Critical);
        assert!(result.suggested_categories.contains(&"Fire".to_string()));
    }

    #[test]
    fn report_matches_direct_call() {
        let report = IssueReport::new("Broken bench").with_labels(["wood"]);
        assert_eq!(analyze_report(&report), analyze_issue("Broken bench", &["wood"]));
    }

    #[test]
    fn explanation_covers_low_tier() {
        let explanation = explain::<&str>("dim lamp in the park", &[]);
        let low = explanation
            .tier_matches
            .iter()
            .find(|(tier, _)| *tier == SeverityTier::Low)
            .map(|(_, matches)| matches.clone())
            .unwrap_or_default();
        assert_eq!(low, vec!["lamp", "dim", "park"]);
        assert_eq!(explanation.result.severity, SeverityTier::Low);
    }
}
