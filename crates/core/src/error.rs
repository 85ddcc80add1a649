/// Typed outcomes signalled by the store and access layers.
///
/// `NotFound` deliberately covers both "does not exist" and "exists but the
/// caller may not see it", so callers never learn about other users' notes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid username or password")]
    CredentialMismatch,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Convenience alias for store and access-layer results.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    pub fn note_not_found() -> Self {
        CoreError::NotFound { entity: "Note" }
    }

    pub fn user_not_found() -> Self {
        CoreError::NotFound { entity: "User" }
    }
}
