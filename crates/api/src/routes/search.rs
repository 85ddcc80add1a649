use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// `GET /search?q=` (requires auth).
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search))
}
