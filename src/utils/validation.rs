//! Short code format checks and form hints.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted short code shape: 6 to 8 ASCII letters or digits.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Case-insensitive `http://` or `https://` prefix.
pub(crate) static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Returns true if the trimmed `code` is a well-formed short code.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_code("AbC123"));
/// assert!(!is_valid_code("abc-123"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code.trim())
}

/// Cheap plausibility check for a value typed into the dashboard form.
///
/// True if the value starts with `http(s)://` or contains a dot. This only
/// drives an inline hint; [`crate::utils::url_normalizer::normalize_url`] is
/// the authoritative check.
pub fn looks_like_url(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }

    HTTP_SCHEME_REGEX.is_match(value) || value.contains('.')
}
