//! # Session Authentication
//!
//! Login/logout handlers and the admin gate check used by protected
//! endpoints.
//!
//! There is a single shared admin session for the whole server. Credential
//! comparison happens inside [`docket_core::SessionGate`] in constant time;
//! this module only translates outcomes into HTTP responses.

use axum::{Json, extract::State, http::StatusCode};
use docket_core::LoginOutcome;

use super::AppState;
use super::types::{ErrorResponse, LoginRequest, SessionResponse};

// =============================================================================
// LOGIN / LOGOUT HANDLERS
// =============================================================================

/// POST /login - Open the admin session.
///
/// A rejected attempt returns 401 and leaves the gate in whatever state
/// it was in before.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<SessionResponse>)> {
    let mut gate = state.gate.write().await;

    match gate.attempt_login(&request.username, &request.password) {
        LoginOutcome::Authenticated => {
            tracing::info!(username = %request.username, "admin session opened");
            Ok(Json(SessionResponse::authenticated()))
        }
        LoginOutcome::Rejected => {
            tracing::warn!(username = %request.username, "rejected login attempt");
            Err((StatusCode::UNAUTHORIZED, Json(SessionResponse::rejected())))
        }
    }
}

/// POST /logout - Close the admin session.
///
/// Always succeeds, even when no session was open.
pub async fn logout_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut gate = state.gate.write().await;
    gate.logout();
    tracing::info!("admin session closed");
    Json(SessionResponse::logged_out())
}

// =============================================================================
// ADMIN GATE CHECK
// =============================================================================

/// Verify that the admin session is open.
///
/// Protected handlers call this before touching the registry. Returns
/// 401 with an error envelope when the gate is closed.
pub async fn require_admin(state: &AppState) -> Result<(), (StatusCode, Json<ErrorResponse>)> {
    let gate = state.gate.read().await;
    if gate.is_authenticated() {
        Ok(())
    } else {
        tracing::warn!("admin endpoint hit without an open session");
        Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("authentication required")),
        ))
    }
}
