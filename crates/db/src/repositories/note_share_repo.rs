//! Repository for the `note_shares` table.

use jotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::note_share::NoteShare;

const COLUMNS: &str = "id, note_id, from_user_id, to_user_id, created_at";

/// Provides insert and lookup for share relations. Relations are never
/// updated or deleted.
pub struct NoteShareRepo;

impl NoteShareRepo {
    /// Record that `note_id` is shared with `to_user_id`.
    ///
    /// Returns `false` when the pair already existed; no duplicate row is written.
    pub async fn create(
        pool: &PgPool,
        note_id: DbId,
        from_user_id: DbId,
        to_user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO note_shares (note_id, from_user_id, to_user_id)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_note_shares_note_recipient DO NOTHING",
        )
        .bind(note_id)
        .bind(from_user_id)
        .bind(to_user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every relation targeting `to_user_id`, oldest first.
    pub async fn list_for_recipient(
        pool: &PgPool,
        to_user_id: DbId,
    ) -> Result<Vec<NoteShare>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM note_shares
             WHERE to_user_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, NoteShare>(&query)
            .bind(to_user_id)
            .fetch_all(pool)
            .await
    }

    /// Number of stored relations for a note. Test support only.
    #[doc(hidden)]
    pub async fn count_for_note(pool: &PgPool, note_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM note_shares WHERE note_id = $1")
            .bind(note_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
