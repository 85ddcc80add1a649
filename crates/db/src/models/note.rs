//! Note model and DTOs.

use jotter_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
///
/// Rows are never removed; `is_deleted` hides a note from every
/// caller-facing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub owner_id: DbId,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing)]
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// DTO for a partial note update.
///
/// Missing or empty fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl UpdateNote {
    /// The new title, if this update changes it.
    pub fn title_change(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The new body, if this update changes it.
    pub fn body_change(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }
}
