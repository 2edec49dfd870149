//! # Middleware Module
//!
//! Global rate limiting for the docket HTTP API.
//!
//! ## Configuration
//!
//! - `DOCKET_RATE_LIMIT`: requests per second. Unset or unparseable
//!   values fall back to 100; `0` disables the limiter entirely.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

use super::types::ErrorResponse;

/// Requests per second when `DOCKET_RATE_LIMIT` is unset or unparseable.
const DEFAULT_RPS: u32 = 100;

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Global rate limiter type alias.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build the global limiter for the given rate.
///
/// Returns `None` for a rate of 0, which means rate limiting is
/// disabled; the router then skips the middleware layer entirely.
#[must_use]
pub fn create_rate_limiter(requests_per_second: u32) -> Option<GlobalRateLimiter> {
    let rps = NonZeroU32::new(requests_per_second)?;
    Some(Arc::new(RateLimiter::direct(Quota::per_second(rps))))
}

/// Read the configured rate from `DOCKET_RATE_LIMIT`.
#[must_use]
pub fn get_rate_limit_from_env() -> u32 {
    parse_rate_limit(std::env::var("DOCKET_RATE_LIMIT").ok().as_deref())
}

/// Parse a raw rate value. Anything unparseable falls back to the default;
/// an explicit `0` is passed through and disables limiting upstream.
fn parse_rate_limit(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(DEFAULT_RPS)
}

/// Rate limiting middleware.
///
/// Checks the global limiter before allowing requests through. Rejected
/// requests get 429 with the usual error envelope.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    if limiter.check().is_ok() {
        Ok(next.run(request).await)
    } else {
        tracing::warn!(path = %request.uri().path(), "rate limit exceeded");
        Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse::new("too many requests")),
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_disables_the_limiter() {
        assert!(create_rate_limiter(0).is_none());
    }

    #[test]
    fn limiter_enforces_the_configured_burst() {
        let limiter = create_rate_limiter(2).expect("limiter");
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_ok());
        assert!(limiter.check().is_err());
    }

    #[test]
    fn unparseable_rate_falls_back_to_default() {
        assert_eq!(parse_rate_limit(None), DEFAULT_RPS);
        assert_eq!(parse_rate_limit(Some("")), DEFAULT_RPS);
        assert_eq!(parse_rate_limit(Some("not-a-number")), DEFAULT_RPS);
        assert_eq!(parse_rate_limit(Some("-5")), DEFAULT_RPS);
    }

    #[test]
    fn explicit_rate_is_honored() {
        assert_eq!(parse_rate_limit(Some("25")), 25);
        assert_eq!(parse_rate_limit(Some(" 25 ")), 25);
        assert_eq!(parse_rate_limit(Some("0")), 0);
    }
}
