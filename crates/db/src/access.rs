//! Caller-scoped note operations.
//!
//! [`NoteAccess`] answers "what may user U see or do" on top of the store
//! contracts. Every method takes the authenticated caller's id explicitly.
//!
//! Rules:
//! - Mutation, deletion, search and fetch-by-id are owner-only.
//! - Sharing grants visibility through [`NoteAccess::list_visible_notes`]
//!   and nowhere else; a recipient cannot fetch a shared note by id.
//! - A shared note disappears from recipients' lists once its owner
//!   deletes it.
//! - Only the owner of a live note may share it.

use std::collections::HashMap;

use jotter_core::error::{CoreError, CoreResult};
use jotter_core::sharing::RecipientOutcome;
use jotter_core::types::DbId;
use jotter_core::validation::{
    validate_body, validate_note_patch, validate_recipients, validate_search_query,
    validate_title,
};
use serde::Serialize;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::note_share::NoteShare;
use crate::store::{share_with_recipients, Store};

/// A note visible to the caller because another user shared it.
#[derive(Debug, Clone, Serialize)]
pub struct SharedNote {
    #[serde(flatten)]
    pub note: Note,
    pub shared_by: DbId,
    pub shared_by_username: String,
}

/// Everything the caller can list, split by how it became visible.
#[derive(Debug, Default)]
pub struct VisibleNotes {
    /// The caller's own live notes, in creation order.
    pub owned: Vec<Note>,
    /// Live notes shared with the caller, in share order.
    pub shared: Vec<SharedNote>,
    /// Shares whose note can no longer be read (deleted by its owner).
    pub unavailable: Vec<NoteShare>,
}

impl VisibleNotes {
    /// Owned notes first, then shared notes.
    pub fn into_notes(self) -> Vec<Note> {
        self.owned
            .into_iter()
            .chain(self.shared.into_iter().map(|s| s.note))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.owned.len() + self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Access-scoped query layer over a [`Store`].
#[derive(Clone, Copy)]
pub struct NoteAccess<'a> {
    store: &'a dyn Store,
}

impl<'a> NoteAccess<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    pub async fn create_note(&self, caller_id: DbId, input: &CreateNote) -> CoreResult<Note> {
        validate_title(&input.title).map_err(CoreError::Validation)?;
        validate_body(&input.body).map_err(CoreError::Validation)?;
        self.store.create_note(caller_id, input).await
    }

    /// Owned notes plus notes shared with the caller.
    ///
    /// A share whose note lookup fails with `NotFound` lands in
    /// [`VisibleNotes::unavailable`]; any other failure is returned.
    pub async fn list_visible_notes(&self, caller_id: DbId) -> CoreResult<VisibleNotes> {
        let owned = self.store.list_notes(caller_id).await?;
        let shares = self.store.list_shared_with_user(caller_id).await?;

        let mut visible = VisibleNotes {
            owned,
            ..VisibleNotes::default()
        };
        let mut sharer_names: HashMap<DbId, String> = HashMap::new();

        for share in shares {
            match self.store.get_note(share.from_user_id, share.note_id).await {
                Ok(note) => {
                    let shared_by_username = match sharer_names.get(&share.from_user_id) {
                        Some(name) => name.clone(),
                        None => {
                            let sharer = self.store.find_user_by_id(share.from_user_id).await?;
                            sharer_names.insert(sharer.id, sharer.username.clone());
                            sharer.username
                        }
                    };
                    visible.shared.push(SharedNote {
                        note,
                        shared_by: share.from_user_id,
                        shared_by_username,
                    });
                }
                Err(CoreError::NotFound { .. }) => {
                    tracing::debug!(
                        caller_id,
                        note_id = share.note_id,
                        "Shared note no longer available"
                    );
                    visible.unavailable.push(share);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(visible)
    }

    /// Owner-only fetch. Sharing is not consulted.
    pub async fn get_accessible_note(&self, caller_id: DbId, note_id: DbId) -> CoreResult<Note> {
        self.store.get_note(caller_id, note_id).await
    }

    pub async fn update_note(
        &self,
        caller_id: DbId,
        note_id: DbId,
        input: &UpdateNote,
    ) -> CoreResult<Note> {
        validate_note_patch(
            input.title.as_deref().unwrap_or(""),
            input.body.as_deref().unwrap_or(""),
        )
        .map_err(CoreError::Validation)?;
        self.store.update_note(caller_id, note_id, input).await
    }

    /// Soft delete. Deleting an already-deleted note fails with `NotFound`.
    pub async fn delete_note(&self, caller_id: DbId, note_id: DbId) -> CoreResult<()> {
        self.store.soft_delete_note(caller_id, note_id).await
    }

    /// Owner-only search; shared notes are never searched.
    pub async fn search_notes(&self, caller_id: DbId, query: &str) -> CoreResult<Vec<Note>> {
        validate_search_query(query).map_err(CoreError::Validation)?;
        self.store.search_notes(caller_id, query).await
    }

    /// Share a live owned note with the named recipients.
    ///
    /// Fails with `NotFound` if the caller does not own the note or it was
    /// deleted; otherwise returns one outcome per distinct recipient.
    pub async fn share_note(
        &self,
        caller_id: DbId,
        note_id: DbId,
        recipients: &[String],
    ) -> CoreResult<Vec<RecipientOutcome>> {
        validate_recipients(recipients).map_err(CoreError::Validation)?;
        let note = self.store.get_note(caller_id, note_id).await?;
        share_with_recipients(self.store, note.id, caller_id, recipients).await
    }
}
