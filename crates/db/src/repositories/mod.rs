//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod note_repo;
pub mod note_share_repo;
pub mod user_repo;

pub use note_repo::NoteRepo;
pub use note_share_repo::NoteShareRepo;
pub use user_repo::UserRepo;
