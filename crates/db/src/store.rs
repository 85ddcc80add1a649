//! Store contracts consumed by the access layer.
//!
//! [`IdentityStore`], [`NoteStore`] and [`ShareRegistry`] are implemented by
//! [`crate::pg::PgStore`] and [`crate::memory::MemoryStore`]. Note lookups
//! are always scoped by owner and soft-delete state; none of them consult
//! sharing.

use async_trait::async_trait;
use jotter_core::error::{CoreError, CoreResult};
use jotter_core::sharing::{distinct_recipients, RecipientOutcome, SkipReason};
use jotter_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::note_share::NoteShare;
use crate::models::user::{CreateUser, User};

/// Write-once user records plus lookup.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Fails with [`CoreError::DuplicateUsername`] when the username exists.
    async fn create_user(&self, input: &CreateUser) -> CoreResult<User>;

    /// Fails with [`CoreError::NotFound`] when absent.
    async fn find_user_by_username(&self, username: &str) -> CoreResult<User>;

    /// Fails with [`CoreError::NotFound`] when absent.
    async fn find_user_by_id(&self, id: DbId) -> CoreResult<User>;
}

/// Owner-scoped note persistence.
#[async_trait]
pub trait NoteStore: Send + Sync {
    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> CoreResult<Note>;

    /// The note only if it belongs to `owner_id` and is not deleted.
    async fn get_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<Note>;

    /// Live owned notes in creation order.
    async fn list_notes(&self, owner_id: DbId) -> CoreResult<Vec<Note>>;

    /// Atomic partial update returning the post-update row.
    async fn update_note(
        &self,
        owner_id: DbId,
        note_id: DbId,
        input: &UpdateNote,
    ) -> CoreResult<Note>;

    /// Flip the soft-delete flag. A second call fails with `NotFound`.
    async fn soft_delete_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<()>;

    /// Live owned notes whose title or body contains `query`, ignoring case.
    async fn search_notes(&self, owner_id: DbId, query: &str) -> CoreResult<Vec<Note>>;
}

/// Directed share relations.
#[async_trait]
pub trait ShareRegistry: Send + Sync {
    /// Returns `false` if `(note_id, to_user_id)` was already recorded.
    async fn create_share(
        &self,
        note_id: DbId,
        from_user_id: DbId,
        to_user_id: DbId,
    ) -> CoreResult<bool>;

    /// Every relation targeting `user_id`, in the order they were created.
    async fn list_shared_with_user(&self, user_id: DbId) -> CoreResult<Vec<NoteShare>>;
}

/// A complete backend: all three contracts plus a health check.
#[async_trait]
pub trait Store: IdentityStore + NoteStore + ShareRegistry {
    async fn health_check(&self) -> CoreResult<()>;
}

/// Share `note_id` from `from_user_id` with each named recipient.
///
/// Recipients are resolved through `identity`; names that do not resolve,
/// or that resolve to the sharer, are skipped rather than failing the
/// request. Repeated names in `recipients` produce a single outcome.
/// Persistence errors still propagate.
pub async fn share_with_recipients<S>(
    store: &S,
    note_id: DbId,
    from_user_id: DbId,
    recipients: &[String],
) -> CoreResult<Vec<RecipientOutcome>>
where
    S: IdentityStore + ShareRegistry + ?Sized,
{
    let mut outcomes = Vec::with_capacity(recipients.len());

    for username in distinct_recipients(recipients) {
        let recipient = match store.find_user_by_username(username).await {
            Ok(user) => user,
            Err(CoreError::NotFound { .. }) => {
                tracing::warn!(note_id, username, "Share recipient not found, skipping");
                outcomes.push(RecipientOutcome::skipped(username, SkipReason::UnknownUser));
                continue;
            }
            Err(e) => return Err(e),
        };

        if recipient.id == from_user_id {
            outcomes.push(RecipientOutcome::skipped(username, SkipReason::SelfShare));
            continue;
        }

        let created = store
            .create_share(note_id, from_user_id, recipient.id)
            .await?;
        outcomes.push(if created {
            RecipientOutcome::shared(username, recipient.id)
        } else {
            RecipientOutcome::already_shared(username, recipient.id)
        });
    }

    Ok(outcomes)
}
