//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{
        AnalyzeIssueRequest, AnalyzeIssueResponse, CategoriesResponse, ErrorResponse,
        HealthResponse,
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use triage_core::{analyze_report, category_names};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// ANALYZE HANDLER
// =============================================================================

/// Analyze an issue report.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeIssueRequest>,
) -> Result<Json<AnalyzeIssueResponse>, (StatusCode, Json<ErrorResponse>)> {
    let report = request.to_report(&state.limits).map_err(|e| {
        tracing::warn!(event = "invalid_report", error = %e, "Rejected issue report");
        (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())))
    })?;

    let result = analyze_report(&report);

    tracing::debug!(
        severity = %result.severity,
        urgency_score = result.urgency_score,
        categories = ?result.suggested_categories,
        reporter_category = ?request.category,
        "Issue analyzed"
    );

    Ok(Json(AnalyzeIssueResponse::from(result)))
}

// =============================================================================
// CATEGORIES HANDLER
// =============================================================================

/// List known categories.
pub async fn categories_handler() -> impl IntoResponse {
    let response = CategoriesResponse {
        categories: category_names().map(str::to_string).collect(),
    };

    (StatusCode::OK, Json(response))
}
