//! Handler for `/search`.

use axum::extract::State;
use axum::Json;
use jotter_db::models::note::Note;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Substring to look for; missing or empty matches every note.
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/search?q=
///
/// Case-insensitive substring search over the caller's own live notes.
/// Notes shared with the caller are not searched.
pub async fn search(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Note>>>> {
    let notes = state.notes().search_notes(auth.user_id, &params.q).await?;

    tracing::debug!(user_id = auth.user_id, hits = notes.len(), "Search completed");

    Ok(Json(DataResponse { data: notes }))
}
