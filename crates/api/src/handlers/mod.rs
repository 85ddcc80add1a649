//! Request handlers.
//!
//! Each submodule provides the async handler functions for one resource.
//! Handlers delegate to the store or the caller-scoped access layer and map
//! errors via [`crate::error::AppError`].

pub mod auth;
pub mod health;
pub mod notes;
pub mod search;
