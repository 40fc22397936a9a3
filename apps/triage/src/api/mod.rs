//! # Triage HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `POST /api/analyze-issue` - Analyze an issue description
//! - `GET /api/categories` - List known categories
//! - `GET /health` - Health check
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `TRIAGE_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `TRIAGE_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)

mod handlers;
mod middleware;
mod types;

// Re-exports for external use
pub use middleware::{DEFAULT_RATE_LIMIT, create_rate_limiter, get_rate_limit_from_env};
// Re-export handlers and types for integration tests (via `triage::api::*`)
#[allow(unused_imports)]
pub use handlers::{analyze_handler, categories_handler, health_handler};
#[allow(unused_imports)]
pub use types::{
    AnalyzeIssueRequest, AnalyzeIssueResponse, CategoriesResponse, ErrorResponse, HealthResponse,
};

use crate::config::RequestLimits;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use triage_core::TriageError;

/// Request body cap. Generous next to the description limit, small enough
/// to stop oversized uploads before JSON parsing.
const MAX_BODY_BYTES: usize = 256 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// The engine is stateless, so only the immutable request limits are shared.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub limits: RequestLimits,
}

impl AppState {
    /// Create new app state with the given limits.
    #[must_use]
    pub fn new(limits: RequestLimits) -> Self {
        Self { limits }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `TRIAGE_CORS_ORIGINS`:
/// - "*": allows all origins
/// - unset: localhost only
/// - otherwise: comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("TRIAGE_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (TRIAGE_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(hv) => {
                        tracing::info!("CORS: Allowing origin: {}", origin);
                        Some(hv)
                    }
                    Err(e) => {
                        tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                        None
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in TRIAGE_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                restricted_cors(allowed_origins)
            }
        }
        None => {
            tracing::info!("CORS: No TRIAGE_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Localhost origins used by the reporting frontend during development.
fn build_localhost_cors() -> CorsLayer {
    let origins = [
        "http://localhost:3000",
        "http://localhost:5173",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:5173",
    ]
    .into_iter()
    .filter_map(|o| o.parse::<HeaderValue>().ok())
    .collect();

    restricted_cors(origins)
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Rate Limiting (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = create_rate_limiter(rate_limit);
    if rate_limiter.is_some() {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
    } else {
        tracing::info!("Rate limiting disabled");
    }

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/analyze-issue", post(handlers::analyze_handler))
        .route("/api/categories", get(handlers::categories_handler));

    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and serve until Ctrl+C.
pub async fn run_server(addr: &str, limits: RequestLimits) -> Result<(), TriageError> {
    let router = create_router(AppState::new(limits));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| TriageError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Triage HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TriageError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
