//! In-memory [`Store`] for tests and database-less local runs.
//!
//! Mirrors the PostgreSQL store's semantics: the same owner/soft-delete
//! scoping, the same unique constraints, creation-ordered listings.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use jotter_core::error::{CoreError, CoreResult};
use jotter_core::search::matches_query;
use jotter_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::models::note_share::NoteShare;
use crate::models::user::{CreateUser, User};
use crate::store::{IdentityStore, NoteStore, ShareRegistry, Store};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    notes: Vec<Note>,
    shares: Vec<NoteShare>,
    next_id: DbId,
}

impl Tables {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }

    fn live_note(&self, owner_id: DbId, note_id: DbId) -> Option<&Note> {
        self.notes
            .iter()
            .find(|n| n.id == note_id && n.owner_id == owner_id && !n.is_deleted)
    }

    fn live_note_mut(&mut self, owner_id: DbId, note_id: DbId) -> Option<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == note_id && n.owner_id == owner_id && !n.is_deleted)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch a note by id whatever its owner or deleted state.
    /// Test support only.
    #[doc(hidden)]
    pub fn note_including_deleted(&self, note_id: DbId) -> Option<Note> {
        self.tables().notes.iter().find(|n| n.id == note_id).cloned()
    }

    /// Number of stored share relations for a note. Test support only.
    #[doc(hidden)]
    pub fn share_count(&self, note_id: DbId) -> usize {
        self.tables()
            .shares
            .iter()
            .filter(|s| s.note_id == note_id)
            .count()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> CoreResult<User> {
        let mut tables = self.tables();
        if tables.users.iter().any(|u| u.username == input.username) {
            return Err(CoreError::DuplicateUsername(input.username.clone()));
        }
        let user = User {
            id: tables.allocate_id(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> CoreResult<User> {
        self.tables()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(CoreError::user_not_found)
    }

    async fn find_user_by_id(&self, id: DbId) -> CoreResult<User> {
        self.tables()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(CoreError::user_not_found)
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn create_note(&self, owner_id: DbId, input: &CreateNote) -> CoreResult<Note> {
        let mut tables = self.tables();
        let now = Utc::now();
        let note = Note {
            id: tables.allocate_id(),
            owner_id,
            title: input.title.clone(),
            body: input.body.clone(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        tables.notes.push(note.clone());
        Ok(note)
    }

    async fn get_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<Note> {
        self.tables()
            .live_note(owner_id, note_id)
            .cloned()
            .ok_or_else(CoreError::note_not_found)
    }

    async fn list_notes(&self, owner_id: DbId) -> CoreResult<Vec<Note>> {
        Ok(self
            .tables()
            .notes
            .iter()
            .filter(|n| n.owner_id == owner_id && !n.is_deleted)
            .cloned()
            .collect())
    }

    async fn update_note(
        &self,
        owner_id: DbId,
        note_id: DbId,
        input: &UpdateNote,
    ) -> CoreResult<Note> {
        let mut tables = self.tables();
        let note = tables
            .live_note_mut(owner_id, note_id)
            .ok_or_else(CoreError::note_not_found)?;
        if let Some(title) = input.title_change() {
            note.title = title.to_string();
        }
        if let Some(body) = input.body_change() {
            note.body = body.to_string();
        }
        note.updated_at = Utc::now();
        Ok(note.clone())
    }

    async fn soft_delete_note(&self, owner_id: DbId, note_id: DbId) -> CoreResult<()> {
        let mut tables = self.tables();
        let note = tables
            .live_note_mut(owner_id, note_id)
            .ok_or_else(CoreError::note_not_found)?;
        note.is_deleted = true;
        note.updated_at = Utc::now();
        Ok(())
    }

    async fn search_notes(&self, owner_id: DbId, query: &str) -> CoreResult<Vec<Note>> {
        Ok(self
            .tables()
            .notes
            .iter()
            .filter(|n| n.owner_id == owner_id && !n.is_deleted)
            .filter(|n| matches_query(&n.title, &n.body, query))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ShareRegistry for MemoryStore {
    async fn create_share(
        &self,
        note_id: DbId,
        from_user_id: DbId,
        to_user_id: DbId,
    ) -> CoreResult<bool> {
        let mut tables = self.tables();
        if tables
            .shares
            .iter()
            .any(|s| s.note_id == note_id && s.to_user_id == to_user_id)
        {
            return Ok(false);
        }
        let share = NoteShare {
            id: tables.allocate_id(),
            note_id,
            from_user_id,
            to_user_id,
            created_at: Utc::now(),
        };
        tables.shares.push(share);
        Ok(true)
    }

    async fn list_shared_with_user(&self, user_id: DbId) -> CoreResult<Vec<NoteShare>> {
        Ok(self
            .tables()
            .shares
            .iter()
            .filter(|s| s.to_user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> CoreResult<()> {
        Ok(())
    }
}
