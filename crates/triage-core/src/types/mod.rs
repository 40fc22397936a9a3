//! # Core Type Definitions
//!
//! This module contains all core types for the triage engine:
//! - Severity classification (`SeverityTier`)
//! - Input and output records (`IssueReport`, `AnalysisResult`)
//! - Intermediate verdicts (`SeverityVerdict`, `UrgencyVerdict`)
//! - Error types (`TriageError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer scores only (no floating-point)
//! - Implement `Ord` where ordering carries meaning
//! - Are plain values with no interior mutability

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// SEVERITY TIER
// =============================================================================

/// Ordinal severity classification of an issue.
///
/// Variants are declared from least to most severe so that the derived
/// `Ord` gives `Critical > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// Maintenance or cosmetic issue.
    Low,
    /// Nuisance that degrades quality of life.
    Medium,
    /// Hazard or service outage.
    High,
    /// Immediate danger to life or property.
    Critical,
}

impl SeverityTier {
    /// All tiers, most severe first.
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Critical,
        SeverityTier::High,
        SeverityTier::Medium,
        SeverityTier::Low,
    ];

    /// Fixed severity score associated with this tier.
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            SeverityTier::Critical => 90,
            SeverityTier::High => 70,
            SeverityTier::Medium => 40,
            SeverityTier::Low => 10,
        }
    }

    /// Display name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SeverityTier::Critical => "Critical",
            SeverityTier::High => "High",
            SeverityTier::Medium => "Medium",
            SeverityTier::Low => "Low",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityTier {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(SeverityTier::Critical),
            "high" => Ok(SeverityTier::High),
            "medium" => Ok(SeverityTier::Medium),
            "low" => Ok(SeverityTier::Low),
            other => Err(TriageError::InvalidReport(format!(
                "Unknown severity tier: {}",
                other
            ))),
        }
    }
}

// =============================================================================
// INPUT RECORD
// =============================================================================

/// A citizen issue report as submitted for triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueReport {
    /// Free-text description typed by the reporter.
    pub description: String,
    /// Labels produced by an image-recognition step, if any.
    #[serde(default)]
    pub image_labels: Vec<String>,
}

impl IssueReport {
    /// Create a report without image labels.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image_labels: Vec::new(),
        }
    }

    /// Attach image labels to the report.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_labels = labels.into_iter().map(Into::into).collect();
        self
    }
}

// =============================================================================
// VERDICTS
// =============================================================================

/// Outcome of severity classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityVerdict {
    pub severity: SeverityTier,
    pub severity_score: u8,
    pub reasons: Vec<String>,
}

/// Outcome of urgency scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgencyVerdict {
    /// Severity-anchored score, clamped to 100.
    pub urgency_score: u8,
    pub reasons: Vec<String>,
}

/// The structured verdict produced for one issue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub severity: SeverityTier,
    pub severity_score: u8,
    pub urgency_score: u8,
    /// At most three category names, best match first.
    pub suggested_categories: Vec<String>,
    /// Human-readable justifications; severity reasons come first.
    pub reasoning: Vec<String>,
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised at the edges of the triage workflow.
///
/// The engine itself is total and never returns these; they cover report
/// validation, batch files and configuration.
#[derive(Debug, Error)]
pub enum TriageError {
    /// The report is missing required content or is malformed.
    #[error("Invalid report: {0}")]
    InvalidReport(String),

    /// The description exceeds the accepted length.
    #[error("Description length {len} exceeds maximum {max} bytes")]
    DescriptionTooLong { len: usize, max: usize },

    /// Too many image labels were attached.
    #[error("Image label count {count} exceeds maximum {max}")]
    TooManyLabels { count: usize, max: usize },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The configuration file could not be used.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
