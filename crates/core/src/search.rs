//! Note search helpers.
//!
//! Search is a case-insensitive literal substring match over title and body.
//! The PostgreSQL store uses `ILIKE ... ESCAPE '\'` with [`like_pattern`];
//! the in-memory store uses [`matches_query`]. Both treat `%` and `_` in the
//! query as ordinary characters.

/// Escape the LIKE wildcards (`%`, `_`) and the escape character itself.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%...%` pattern matching `query` anywhere in a column.
pub fn like_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}

/// Whether a note with the given title and body matches `query`.
///
/// An empty query matches every note.
pub fn matches_query(title: &str, body: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    title.to_lowercase().contains(&needle) || body.to_lowercase().contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("snake_case"), "snake\\_case");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_like_pattern_wraps() {
        assert_eq!(like_pattern("milk"), "%milk%");
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn test_matches_title_or_body_ignoring_case() {
        assert!(matches_query("Groceries", "milk, eggs", "grocer"));
        assert!(matches_query("Groceries", "milk, eggs", "EGGS"));
        assert!(!matches_query("Groceries", "milk, eggs", "bread"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query("", "", ""));
        assert!(matches_query("Anything", "at all", ""));
    }

    #[test]
    fn test_wildcards_are_literal() {
        assert!(!matches_query("discount", "ten percent", "%"));
        assert!(matches_query("50% off", "", "%"));
    }
}
