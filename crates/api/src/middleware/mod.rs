//! Request middleware and extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated caller from a JWT Bearer token.
//! - [`rate_limit::rate_limit`] -- Process-wide token-bucket limiter.

pub mod auth;
pub mod rate_limit;
