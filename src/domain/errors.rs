//! Error kinds produced by the link lifecycle.
//!
//! Every failure in validation, code assignment, or storage is expressed as a
//! [`LinkError`] variant. The HTTP layer matches on the variant to choose a
//! status code (see [`crate::error::AppError`]).

/// Tagged failure of a link operation.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Target URL is blank, malformed, or not http(s).
    #[error("URL \"{url}\" is invalid: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Caller-supplied code does not match `^[A-Za-z0-9]{6,8}$`.
    #[error("Code \"{0}\" must be 6-8 letters or digits")]
    InvalidCodeFormat(String),

    /// The insert hit the unique constraint on `code`.
    #[error("Code \"{0}\" already exists")]
    DuplicateCode(String),

    #[error("No link found for code \"{0}\"")]
    NotFound(String),

    /// Any other storage or parsing failure. The payload is for logs only.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<sqlx::Error> for LinkError {
    fn from(e: sqlx::Error) -> Self {
        LinkError::Unexpected(e.to_string())
    }
}
