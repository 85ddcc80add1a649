//! Share relation model.

use jotter_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `note_shares` table: `note_id`, owned by `from_user_id`,
/// is readable by `to_user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct NoteShare {
    pub id: DbId,
    pub note_id: DbId,
    pub from_user_id: DbId,
    pub to_user_id: DbId,
    pub created_at: Timestamp,
}
