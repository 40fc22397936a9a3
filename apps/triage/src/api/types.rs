//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.

use crate::config::RequestLimits;
use serde::{Deserialize, Serialize};
use triage_core::{AnalysisResult, IssueReport, SeverityTier, TriageError};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ANALYZE REQUEST/RESPONSE
// =============================================================================

/// Issue analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeIssueRequest {
    pub description: String,
    #[serde(default)]
    pub image_labels: Option<Vec<String>>,
    /// Category picked by the reporter. Logged, never used for scoring.
    #[serde(default)]
    pub category: Option<String>,
}

impl AnalyzeIssueRequest {
    /// Convert to an [`IssueReport`], validating fields against `limits`.
    pub fn to_report(&self, limits: &RequestLimits) -> Result<IssueReport, TriageError> {
        let labels = self.image_labels.clone().unwrap_or_default();
        limits.check_report(&self.description, &labels)?;
        Ok(IssueReport::new(self.description.clone()).with_labels(labels))
    }
}

/// Issue analysis response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeIssueResponse {
    pub severity: SeverityTier,
    pub severity_score: u8,
    pub urgency_score: u8,
    pub suggested_categories: Vec<String>,
    pub reasoning: Vec<String>,
}

impl From<AnalysisResult> for AnalyzeIssueResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            severity: result.severity,
            severity_score: result.severity_score,
            urgency_score: result.urgency_score,
            suggested_categories: result.suggested_categories,
            reasoning: result.reasoning,
        }
    }
}

// =============================================================================
// CATEGORIES RESPONSE
// =============================================================================

/// Known categories, in ranking tie-break order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
