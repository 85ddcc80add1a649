pub mod auth;
pub mod health;
pub mod notes;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                   signup (public)
/// /auth/login                    login (public)
/// /auth/me                       caller identity
///
/// /notes                         list, create
/// /notes/{id}                    get, update, delete (owner only)
/// /notes/{id}/share              share with users by username (owner only)
///
/// /search?q=                     search own notes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
        .merge(search::router())
}
