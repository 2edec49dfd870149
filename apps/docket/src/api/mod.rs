//! # Docket HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /types` - Case-type catalog
//! - `GET /cases` - List/search cases (`?search=`, `?type=`)
//! - `GET /cases/next-number` - Preview the next case number (`?type=`)
//! - `GET /cases/{id}` - Single case, public view
//! - `POST /cases` - Register a new case
//! - `PATCH /cases/{id}` - Update status/notes (admin)
//! - `DELETE /cases/{id}` - Remove a case (admin)
//! - `GET /stats` - Aggregate statistics (admin)
//! - `POST /login` - Open the admin session
//! - `POST /logout` - Close the admin session
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `DOCKET_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `DOCKET_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)

mod auth;
mod handlers;
mod middleware;
pub mod types;

// Re-exports for external use
pub use middleware::{
    GlobalRateLimiter, create_rate_limiter, get_rate_limit_from_env, rate_limit_middleware,
};
// Re-export handlers for integration tests (via `docket::api::*`)
#[allow(unused_imports)]
pub use auth::{login_handler, logout_handler};
#[allow(unused_imports)]
pub use handlers::{
    create_case_handler, delete_case_handler, get_case_handler, health_handler,
    list_cases_handler, next_number_handler, stats_handler, types_handler, update_case_handler,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use docket_core::{CaseRegistry, SessionGate};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppError;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the registry and the single admin session gate.
#[derive(Clone)]
pub struct AppState {
    /// The case registry. One lock, one writer at a time, so the
    /// count-based numbering invariant of the core holds.
    pub registry: Arc<RwLock<CaseRegistry>>,
    /// The admin session gate.
    pub gate: Arc<RwLock<SessionGate>>,
}

impl AppState {
    /// Create new app state around a registry (seeded or empty).
    #[must_use]
    pub fn new(registry: CaseRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            gate: Arc::new(RwLock::new(SessionGate::new())),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `DOCKET_CORS_ORIGINS` environment variable:
/// - If "*": allows all origins (development mode - use with caution!)
/// - If not set: defaults to localhost only (restrictive default)
/// - Otherwise: parses comma-separated list of allowed origins
///
/// # Security Note
///
/// The default is restrictive (localhost only). Set `DOCKET_CORS_ORIGINS=*`
/// explicitly only for development or if you understand the security implications.
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("DOCKET_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            // Explicit wildcard - warn about security implications
            tracing::warn!(
                "CORS: Allowing ALL origins (DOCKET_CORS_ORIGINS=*). This is insecure for production!"
            );
            CorsLayer::permissive()
        }
        Some(origins) => {
            // Parse comma-separated origins
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in DOCKET_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([
                        Method::GET,
                        Method::POST,
                        Method::PATCH,
                        Method::DELETE,
                        Method::OPTIONS,
                    ])
                    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            }
        }
        None => {
            // No configuration - default to localhost only (restrictive)
            tracing::info!("CORS: No DOCKET_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = vec![
        "http://localhost:3000".parse::<HeaderValue>().ok(),
        "http://localhost:8080".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:3000".parse::<HeaderValue>().ok(),
        "http://127.0.0.1:8080".parse::<HeaderValue>().ok(),
    ];
    let origins: Vec<HeaderValue> = localhost_origins.into_iter().flatten().collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. CORS - handles preflight requests
/// 2. Tracing - logs all requests
/// 3. Rate Limiting - protects against DoS (if enabled)
///
/// Admin checks happen inside the protected handlers themselves, since
/// admin and public methods share paths (`/cases/{id}` is public for GET
/// but admin-only for PATCH and DELETE).
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    // Check if rate limiting is enabled (DOCKET_RATE_LIMIT=0 disables it)
    let rate_limit = get_rate_limit_from_env();
    let rate_limiter = create_rate_limiter(rate_limit);
    if rate_limiter.is_some() {
        tracing::info!("Rate limiting enabled: {} requests/second", rate_limit);
    } else {
        tracing::info!("Rate limiting disabled");
    }

    // Build base router with routes
    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/types", get(handlers::types_handler))
        .route(
            "/cases",
            get(handlers::list_cases_handler).post(handlers::create_case_handler),
        )
        .route("/cases/next-number", get(handlers::next_number_handler))
        .route(
            "/cases/{id}",
            get(handlers::get_case_handler)
                .patch(handlers::update_case_handler)
                .delete(handlers::delete_case_handler),
        )
        .route("/stats", get(handlers::stats_handler))
        .route("/login", post(auth::login_handler))
        .route("/logout", post(auth::logout_handler));

    // Apply rate limiting middleware
    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    // Apply CORS, body limit, and tracing (outermost layers)
    router
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, registry: CaseRegistry) -> Result<(), AppError> {
    let state = AppState::new(registry);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Docket HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))
}
