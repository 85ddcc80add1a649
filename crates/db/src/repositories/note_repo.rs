//! Repository for the `notes` table.
//!
//! Every caller-facing query is scoped by `owner_id` and `is_deleted = FALSE`.
//! The bare id lookup [`NoteRepo::find_by_id_include_deleted`] is test
//! support for checking soft-deleted rows.

use jotter_core::search::like_pattern;
use jotter_core::types::DbId;
use sqlx::PgPool;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, title, body, is_deleted, created_at, updated_at";

/// Provides owner-scoped CRUD and search for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note for `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (owner_id, title, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a live note owned by `owner_id`.
    pub async fn find_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE id = $1 AND owner_id = $2 AND is_deleted = FALSE"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a note by ID regardless of owner or soft-delete state.
    ///
    /// Test support only. No caller-facing path goes through it.
    #[doc(hidden)]
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live notes owned by `owner_id` in creation order.
    pub async fn list_owned(pool: &PgPool, owner_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE owner_id = $1 AND is_deleted = FALSE
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update to a live owned note in one statement.
    ///
    /// Empty or missing fields keep their stored value. Returns `None` if no
    /// live row with `id` belongs to `owner_id`.
    pub async fn update_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($3, title),
                body = COALESCE($4, body)
             WHERE id = $1 AND owner_id = $2 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(input.title_change())
            .bind(input.body_change())
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a live owned note. Returns `true` if a row was marked deleted.
    pub async fn soft_delete_owned(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notes SET is_deleted = TRUE
             WHERE id = $1 AND owner_id = $2 AND is_deleted = FALSE",
        )
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search live owned notes whose title or body contains `query`
    /// (case-insensitive, wildcards escaped), in creation order.
    pub async fn search_owned(
        pool: &PgPool,
        owner_id: DbId,
        query_str: &str,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let pattern = like_pattern(query_str);
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE owner_id = $1 AND is_deleted = FALSE
               AND (title ILIKE $2 ESCAPE '\\' OR body ILIKE $2 ESCAPE '\\')
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(owner_id)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }
}
