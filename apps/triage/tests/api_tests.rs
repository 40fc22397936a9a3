//! Integration tests for the triage HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real server.

// Allow unwrap and panic in tests - these are standard for test code
// Allow holding MutexGuard across await - tests that touch env vars are
// serialized intentionally
#![allow(clippy::unwrap_used, clippy::panic, clippy::await_holding_lock)]

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use serde_json::json;
use std::sync::Mutex;
use triage::api::{
    AnalyzeIssueResponse, AppState, CategoriesResponse, ErrorResponse, HealthResponse,
    create_router,
};
use triage::config::RequestLimits;
use triage_core::SeverityTier;

/// Mutex to serialize tests since router construction reads env vars.
static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Guard wrapper that holds the mutex and resets env vars on drop.
struct TestGuard {
    _guard: std::sync::MutexGuard<'static, ()>,
}

impl Drop for TestGuard {
    fn drop(&mut self) {
        // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
        unsafe {
            std::env::remove_var("TRIAGE_RATE_LIMIT");
            std::env::remove_var("TRIAGE_CORS_ORIGINS");
        }
    }
}

fn lock_env() -> TestGuard {
    let guard = ENV_TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe {
        std::env::remove_var("TRIAGE_RATE_LIMIT");
        std::env::remove_var("TRIAGE_CORS_ORIGINS");
    }
    TestGuard { _guard: guard }
}

/// Create a test server with default limits.
/// Returns a guard that must be kept alive during the test.
fn create_test_server() -> (TestServer, TestGuard) {
    create_test_server_with(RequestLimits::default())
}

fn create_test_server_with(limits: RequestLimits) -> (TestServer, TestGuard) {
    let guard = lock_env();
    let router = create_router(AppState::new(limits));
    (TestServer::new(router).unwrap(), guard)
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// ANALYZE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_analyze_gas_leak_near_school() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({
            "description": "There is a gas leak near the school, smoke everywhere, emergency!"
        }))
        .await;

    response.assert_status_ok();
    let result: AnalyzeIssueResponse = response.json();
    assert_eq!(result.severity, SeverityTier::Critical);
    assert_eq!(result.severity_score, 90);
    assert_eq!(result.urgency_score, 100);
    assert_eq!(result.suggested_categories[..2], ["Gas Leak", "Fire"]);
    assert_eq!(result.reasoning.len(), 4);
}

#[tokio::test]
async fn test_analyze_with_image_labels() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({
            "description": "There is a problem here.",
            "image_labels": ["fire", "smoke"]
        }))
        .await;

    response.assert_status_ok();
    let result: AnalyzeIssueResponse = response.json();
    assert_eq!(result.severity, SeverityTier::Critical);
    assert!(result.suggested_categories.contains(&"Fire".to_string()));
}

#[tokio::test]
async fn test_analyze_response_shape() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({ "description": "overflowing garbage bin smells bad" }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["severity"], "Medium");
    assert_eq!(body["severity_score"], 40);
    assert_eq!(body["urgency_score"], 40);
    assert!(body["suggested_categories"].is_array());
    assert!(body["reasoning"].is_array());
}

#[tokio::test]
async fn test_analyze_ignores_reporter_category() {
    let (server, _guard) = create_test_server();

    let plain = server
        .post("/api/analyze-issue")
        .json(&json!({ "description": "broken street lamp" }))
        .await
        .json::<AnalyzeIssueResponse>();
    let tagged = server
        .post("/api/analyze-issue")
        .json(&json!({ "description": "broken street lamp", "category": "Fire" }))
        .await
        .json::<AnalyzeIssueResponse>();

    assert_eq!(plain, tagged);
}

#[tokio::test]
async fn test_analyze_empty_description_rejected() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({ "description": "" }))
        .await;

    response.assert_status_bad_request();
    let error: ErrorResponse = response.json();
    assert!(error.error.contains("Description is required"));
}

#[tokio::test]
async fn test_analyze_too_many_labels_rejected() {
    let limits = RequestLimits {
        max_image_labels: 2,
        ..RequestLimits::default()
    };
    let (server, _guard) = create_test_server_with(limits);

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({
            "description": "pothole",
            "image_labels": ["a", "b", "c"]
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_analyze_missing_description_field() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .json(&json!({ "image_labels": ["fire"] }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_invalid_json_body() {
    let (server, _guard) = create_test_server();

    let response = server
        .post("/api/analyze-issue")
        .text("not valid json")
        .content_type("application/json")
        .await;

    assert!(response.status_code().is_client_error());
}

// =============================================================================
// CATEGORIES ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_categories_in_table_order() {
    let (server, _guard) = create_test_server();

    let response = server.get("/api/categories").await;

    response.assert_status_ok();
    let body: CategoriesResponse = response.json();
    assert_eq!(body.categories.len(), 21);
    assert_eq!(body.categories.first().map(String::as_str), Some("Fire"));
    assert_eq!(body.categories.last().map(String::as_str), Some("Environment"));
}

// =============================================================================
// MIDDLEWARE TESTS
// =============================================================================

#[tokio::test]
async fn test_cors_allows_localhost_by_default() {
    let (server, _guard) = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some(&HeaderValue::from_static("http://localhost:3000"))
    );
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let (server, _guard) = create_test_server();

    let response = server
        .get("/health")
        .add_header(
            header::ORIGIN,
            "http://evil.example".parse::<HeaderValue>().unwrap(),
        )
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_rate_limit_exceeded() {
    let guard = lock_env();
    // SAFETY: Tests run sequentially under ENV_TEST_MUTEX, so no concurrent env access.
    unsafe { std::env::set_var("TRIAGE_RATE_LIMIT", "1") };
    let server = TestServer::new(create_router(AppState::default())).unwrap();

    server.get("/health").await.assert_status_ok();
    let response = server.get("/health").await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));
    drop(guard);
}

// =============================================================================
// ERROR HANDLING TESTS
// =============================================================================

#[tokio::test]
async fn test_404_on_unknown_endpoint() {
    let (server, _guard) = create_test_server();

    let response = server.get("/unknown").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_method_not_allowed() {
    let (server, _guard) = create_test_server();

    // /api/analyze-issue is POST only
    let response = server.get("/api/analyze-issue").await;
    assert_eq!(response.status_code().as_u16(), 405);
}
