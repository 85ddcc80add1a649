//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the DTOs used to create or patch it.

pub mod note;
pub mod note_share;
pub mod user;
