//! Domain types, error taxonomy and validation rules shared by the store
//! and API crates. Has no I/O and no internal dependencies.

pub mod error;
pub mod search;
pub mod sharing;
pub mod types;
pub mod validation;
