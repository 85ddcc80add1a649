//! PostgreSQL-backed [`Store`] delegating to the repositories.

use async_trait::async_trait;
use jotter_core::error::{CoreError, CoreResult};
use jotter_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::note_share::NoteShare;
use crate::models::user::{CreateUser, User};
use crate::repositories::{NoteRepo, NoteShareRepo, UserRepo};
use crate::store::{IdentityStore, NoteStore, ShareRegistry, Store};
use crate::DbPool;

/// PostgreSQL unique-violation SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Constraint guarding username uniqueness.
const USERNAME_CONSTRAINT: &str = "uq_users_username";

#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a database error and collapse it into an opaque persistence failure.
fn persistence(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Persistence(err.to_string())
}

fn is_username_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(USERNAME_CONSTRAINT)
        }
        _ => false,
    }
}

#[async_trait]
impl IdentityStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> CoreResult<User> {
        UserRepo::create(&self.pool, input).await.map_err(|e| {
            if is_username_conflict(&e) {
                CoreError::DuplicateUsername(input.username.clone())
            } else {
                persistence(e)
            }
        })
    }

    async fn find_user_by_username(&self, username: &str) -> CoreResult<User> {
        UserRepo::find_by_username(&self.pool, username)
            .await
            .map_err(persistence)?
            .ok_or_else(CoreError::user_not_found)
    }

    async fn find_user_by_id(&self, id: DbId) -> CoreResult<User> {
        UserRepo::find_by_id(&self.pool, id)
            .await
            .map_err(persistence)?
            .ok_or_else(CoreError::user_not_found)
    }
}

#[async_trait]
impl NoteStore for PgStore {
    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> CoreResult<Note> {
        NoteRepo::create(&self.pool, owner_id, input)
            .await
            .map_err(persistence)
    }

    async fn get_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<Note> {
        NoteRepo::find_owned(&self.pool, owner_id, note_id)
            .await
            .map_err(persistence)?
            .ok_or_else(CoreError::note_not_found)
    }

    async fn list_notes(&self, owner_id: DbId) -> CoreResult<Vec<Note>> {
        NoteRepo::list_owned(&self.pool, owner_id)
            .await
            .map_err(persistence)
    }

    async fn update_note(
        &self,
        owner_id: DbId,
        note_id: DbId,
        input: &UpdateNote,
    ) -> CoreResult<Note> {
        NoteRepo::update_owned(&self.pool, owner_id, note_id, input)
            .await
            .map_err(persistence)?
            .ok_or_else(CoreError::note_not_found)
    }

    async fn soft_delete_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<()> {
        let deleted = NoteRepo::soft_delete_owned(&self.pool, owner_id, note_id)
            .await
            .map_err(persistence)?;
        if deleted {
            Ok(())
        } else {
            Err(CoreError::note_not_found())
        }
    }

    async fn search_notes(&self, owner_id: DbId, query: &str) -> CoreResult<Vec<Note>> {
        NoteRepo::search_owned(&self.pool, owner_id, query)
            .await
            .map_err(persistence)
    }
}

#[async_trait]
impl ShareRegistry for PgStore {
    async fn create_share(
        &self,
        note_id: DbId,
        from_user_id: DbId,
        to_user_id: DbId,
    ) -> CoreResult<bool> {
        NoteShareRepo::create(&self.pool, note_id, from_user_id, to_user_id)
            .await
            .map_err(persistence)
    }

    async fn list_shared_with_user(&self, user_id: DbId) -> CoreResult<Vec<NoteShare>> {
        NoteShareRepo::list_for_recipient(&self.pool, user_id)
            .await
            .map_err(persistence)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> CoreResult<()> {
        crate::health_check(&self.pool).await.map_err(persistence)
    }
}
