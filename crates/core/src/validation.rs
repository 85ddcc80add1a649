//! Input validation for users, notes, search queries and share requests.
//!
//! Every validator returns `Err` with a human-readable message that is safe
//! to show to the caller.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a username in characters.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Default minimum password length when not configured.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a note body in characters.
pub const MAX_BODY_LENGTH: usize = 100_000;

/// Maximum length of a search query in characters.
pub const MAX_SEARCH_QUERY_LENGTH: usize = 200;

/// Maximum number of recipients accepted by a single share request.
pub const MAX_SHARE_RECIPIENTS: usize = 50;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Validate a username: 3-50 characters of ASCII letters, digits, `_`, `.` or `-`.
pub fn validate_username(username: &str) -> Result<(), String> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH || len > MAX_USERNAME_LENGTH {
        return Err(format!(
            "Username must be between {MIN_USERNAME_LENGTH} and {MAX_USERNAME_LENGTH} characters"
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        return Err(
            "Username may only contain letters, digits, '_', '.' and '-'".to_string(),
        );
    }
    Ok(())
}

/// Validate that a password meets the minimum length.
pub fn validate_password(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

/// Validate a note title. Blank titles are rejected.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Note title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Note title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a note body. Empty bodies are allowed.
pub fn validate_body(body: &str) -> Result<(), String> {
    if body.chars().count() > MAX_BODY_LENGTH {
        return Err(format!(
            "Note body must be at most {MAX_BODY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a partial update. Empty fields are left unchanged, so at least
/// one of them must carry a value. A title that is supplied obeys the same
/// rules as on create.
pub fn validate_note_patch(title: &str, body: &str) -> Result<(), String> {
    if title.is_empty() && body.is_empty() {
        return Err("Update must change the title or the body".to_string());
    }
    if !title.is_empty() {
        validate_title(title)?;
    }
    validate_body(body)
}

// ---------------------------------------------------------------------------
// Search / share
// ---------------------------------------------------------------------------

pub fn validate_search_query(query: &str) -> Result<(), String> {
    if query.chars().count() > MAX_SEARCH_QUERY_LENGTH {
        return Err(format!(
            "Search query must be at most {MAX_SEARCH_QUERY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the recipient list of a share request.
pub fn validate_recipients(recipients: &[String]) -> Result<(), String> {
    if recipients.is_empty() {
        return Err("At least one recipient is required".to_string());
    }
    if recipients.len() > MAX_SHARE_RECIPIENTS {
        return Err(format!(
            "At most {MAX_SHARE_RECIPIENTS} recipients per share request"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("bob.smith-2_x").is_ok());
        assert!(validate_username("al").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
        assert!(validate_username("alice smith").is_err());
        assert!(validate_username("alice@example").is_err());
    }

    #[test]
    fn test_password_minimum() {
        let err = validate_password("short", 8).unwrap_err();
        assert!(err.contains("at least 8 characters"));
        assert!(validate_password("exactly8", 8).is_ok());
    }

    #[test]
    fn test_title_required_on_create() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title("Groceries").is_ok());
        assert!(validate_title(&"t".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_patch_needs_one_field() {
        assert!(validate_note_patch("", "").is_err());
        assert!(validate_note_patch("", "new body").is_ok());
        assert!(validate_note_patch("new title", "").is_ok());
    }

    #[test]
    fn test_patch_rejects_blank_title() {
        assert!(validate_note_patch("   ", "").is_err());
        assert!(validate_note_patch("\t", "new body").is_err());
        assert!(validate_note_patch(&"t".repeat(MAX_TITLE_LENGTH + 1), "").is_err());
    }

    #[test]
    fn test_recipient_bounds() {
        assert!(validate_recipients(&[]).is_err());
        assert!(validate_recipients(&["bob".to_string()]).is_ok());
        let many: Vec<String> = (0..=MAX_SHARE_RECIPIENTS).map(|i| format!("u{i}")).collect();
        assert!(validate_recipients(&many).is_err());
    }

    #[test]
    fn test_empty_search_query_is_valid() {
        assert!(validate_search_query("").is_ok());
        assert!(validate_search_query(&"q".repeat(MAX_SEARCH_QUERY_LENGTH + 1)).is_err());
    }
}
