//! Process-wide request rate limiting.
//!
//! A single token bucket (no per-client keying) refilled at
//! `RATE_LIMIT_PER_SEC` with capacity `RATE_LIMIT_BURST`. An empty bucket
//! short-circuits the request with `429 Too Many Requests`.

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

use crate::error::AppError;
use crate::state::AppState;

/// Build the limiter, or `None` when `per_sec` is zero.
///
/// A zero `burst` falls back to `per_sec`.
pub fn build_rate_limiter(per_sec: u32, burst: u32) -> Option<Arc<DefaultDirectRateLimiter>> {
    let per_sec = NonZeroU32::new(per_sec)?;
    let burst = NonZeroU32::new(burst).unwrap_or(per_sec);
    let quota = Quota::per_second(per_sec).allow_burst(burst);
    Some(Arc::new(RateLimiter::direct(quota)))
}

/// Axum middleware rejecting requests once the bucket is empty.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(limiter) = &state.rate_limiter {
        if limiter.check().is_err() {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Rate limit exceeded"
            );
            return Err(AppError::RateLimited);
        }
    }
    Ok(next.run(request).await)
}
