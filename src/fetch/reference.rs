//! Paste reference resolution: user input to a rentry page id.

use super::FetchError;

/// Resolves trimmed user input to a page id.
///
/// Accepts a rentry URL (scheme optional, optional trailing `/raw`) or a bare
/// page id of ASCII letters. Everything else is `InvalidReference`, decided
/// before any network activity.
pub fn resolve_reference(input: &str) -> Result<String, FetchError> {
    let input = input.trim();
    if let Some(id) = rentry_url_id(input) {
        return Ok(id.to_string());
    }
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(input.to_string());
    }
    Err(FetchError::InvalidReference {
        input: input.to_string(),
    })
}

/// Canonical raw-content URL for a page id.
pub fn raw_url(base: &str, id: &str) -> String {
    format!("{}{}/raw", base, id)
}

/// Matches `[http[s]://]rentry.co/<id>[/raw]` and extracts the id.
///
/// The id is one-or-more word characters (ASCII alphanumeric or `_`); nothing
/// may follow it except a literal `/raw`.
fn rentry_url_id(input: &str) -> Option<&str> {
    let rest = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"))
        .unwrap_or(input);
    let rest = rest.strip_prefix("rentry.co/")?;

    let id_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if id_len == 0 {
        return None;
    }
    let (id, tail) = rest.split_at(id_len);
    (tail.is_empty() || tail == "/raw").then_some(id)
}
