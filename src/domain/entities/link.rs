//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A short code mapped to its target URL, with click counters.
///
/// Serialized in camelCase because this is the record shape returned by the
/// REST API (`targetUrl`, `totalClicks`, `lastClickedAt`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub created_at: DateTime<Utc>,
    pub last_clicked_at: Option<DateTime<Utc>>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target_url: String,
        total_clicks: i64,
        created_at: DateTime<Utc>,
        last_clicked_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            code,
            target_url,
            total_clicks,
            created_at,
            last_clicked_at,
        }
    }

    /// Returns true once the link has been followed at least once.
    pub fn was_clicked(&self) -> bool {
        self.total_clicks > 0
    }

    /// Builds the public short URL for this link under `origin`
    /// (e.g. `https://s.example.com`).
    pub fn short_url(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.code)
    }
}

/// Input data for creating a new link.
///
/// Both fields are expected to be validated already: `code` matches the
/// short-code format and `target_url` is a normalized http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
