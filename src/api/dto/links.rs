//! DTOs for link management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Body of `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Target URL. A missing scheme is allowed; `https://` is assumed.
    #[validate(length(min = 1, message = "Target URL is required"))]
    pub url: String,

    /// Optional custom code. Blank values are treated as absent.
    #[serde(default)]
    pub code: Option<String>,
}

impl CreateLinkRequest {
    /// The requested code, trimmed, or `None` when absent or blank.
    pub fn requested_code(&self) -> Option<&str> {
        self.code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Body of `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<Link>,
}

/// Body of a successful `DELETE /api/links/{code}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub ok: bool,
}
