//! Target URL normalization.
//!
//! Accepts loosely typed input (`example.com`, ` https://Example.COM/a `) and
//! turns it into the canonical serialization stored in `links.target_url`.

use crate::utils::validation::HTTP_SCHEME_REGEX;
use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Target URL is required")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Normalizes a user-supplied target URL.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed; an empty result is rejected
/// 2. Input without an `http://` / `https://` prefix gets `https://` prepended
/// 3. The result must parse as an absolute URL with an `http` or `https` scheme
/// 4. The returned string is the parser's canonical form (lowercase host,
///    default port dropped, `/` path for bare hosts)
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input.
/// Returns [`UrlNormalizationError::InvalidFormat`] for malformed URLs.
/// Returns [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com").unwrap(), "https://example.com/");
/// assert_eq!(
///     normalize_url("HTTP://EXAMPLE.COM:80/Path").unwrap(),
///     "http://example.com/Path"
/// );
/// ```
pub fn normalize_url(raw: &str) -> Result<String, UrlNormalizationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if HTTP_SCHEME_REGEX.is_match(value) {
        value.to_string()
    } else {
        format!("https://{value}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        _ => Err(UrlNormalizationError::UnsupportedProtocol),
    }
}
