use std::sync::Arc;

use governor::DefaultDirectRateLimiter;
use jotter_db::access::NoteAccess;
use jotter_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend (PostgreSQL in production, in-memory in tests).
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide request limiter; `None` when rate limiting is disabled.
    pub rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl AppState {
    /// Caller-scoped note operations over the configured store.
    pub fn notes(&self) -> NoteAccess<'_> {
        NoteAccess::new(self.store.as_ref())
    }
}
