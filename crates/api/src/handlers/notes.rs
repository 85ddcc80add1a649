//! Handlers for the `/notes` resource.
//!
//! Every handler is scoped to the authenticated caller through
//! [`jotter_db::access::NoteAccess`]. Notes the caller cannot see answer
//! `404` exactly like notes that do not exist.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use jotter_core::sharing::RecipientOutcome;
use jotter_core::types::DbId;
use jotter_db::access::SharedNote;
use jotter_db::models::note::{CreateNote, Note, UpdateNote};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A note in the caller's listing.
///
/// Shared notes carry `shared_by` and `shared_by_username` next to the note
/// fields; owned notes do not.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ListedNote {
    Owned(Note),
    Shared(SharedNote),
}

/// Request body for `POST /notes/{id}/share`.
#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    /// Usernames to share with.
    #[serde(alias = "to_users_id")]
    pub recipients: Vec<String>,
}

/// Response for `POST /notes/{id}/share`.
#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub note_id: DbId,
    /// One entry per distinct requested username, in request order.
    pub recipients: Vec<RecipientOutcome>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/notes
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let note = state.notes().create_note(auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, note_id = note.id, "Note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// GET /api/v1/notes
///
/// Owned notes first, then notes shared with the caller.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ListedNote>>>> {
    let visible = state.notes().list_visible_notes(auth.user_id).await?;

    if !visible.unavailable.is_empty() {
        tracing::debug!(
            user_id = auth.user_id,
            unavailable = visible.unavailable.len(),
            "Skipped shares whose note was deleted"
        );
    }

    let data = visible
        .owned
        .into_iter()
        .map(ListedNote::Owned)
        .chain(visible.shared.into_iter().map(ListedNote::Shared))
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/notes/{id}
///
/// Owner-only. A share recipient gets `404` here and sees the note through
/// the listing instead.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DataResponse<Note>>> {
    let note = state.notes().get_accessible_note(auth.user_id, id).await?;
    Ok(Json(DataResponse { data: note }))
}

/// PUT /api/v1/notes/{id}
///
/// Partial update: missing or empty fields keep their stored value.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNote>,
) -> AppResult<Json<DataResponse<Note>>> {
    let note = state.notes().update_note(auth.user_id, id, &input).await?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note updated");

    Ok(Json(DataResponse { data: note }))
}

/// DELETE /api/v1/notes/{id}
///
/// Soft delete. Deleting an already-deleted note returns `404`.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.notes().delete_note(auth.user_id, id).await?;

    tracing::info!(user_id = auth.user_id, note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notes/{id}/share
///
/// Share an owned note with other users by username. Unknown usernames and
/// the caller's own username are reported as skipped, not rejected.
pub async fn share(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<ShareRequest>,
) -> AppResult<Json<DataResponse<ShareResponse>>> {
    let recipients = state
        .notes()
        .share_note(auth.user_id, id, &input.recipients)
        .await?;

    let shared = recipients
        .iter()
        .filter(|r| r.is_visible_to_recipient())
        .count();
    tracing::info!(
        user_id = auth.user_id,
        note_id = id,
        requested = recipients.len(),
        shared,
        "Note shared"
    );

    Ok(Json(DataResponse {
        data: ShareResponse {
            note_id: id,
            recipients,
        },
    }))
}
