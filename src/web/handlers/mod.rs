//! HTML template rendering handlers for the web dashboard.

mod code_stats;
mod dashboard;

pub use code_stats::{code_stats_handler, delete_from_dashboard_handler};
pub use dashboard::{create_from_dashboard_handler, dashboard_handler};

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};

use crate::domain::entities::Link;

/// Shown in place of a timestamp for links nobody has followed yet.
pub(crate) const NEVER_CLICKED: &str = "Never clicked";

/// Origin the visitor reached us on, used to display full short URLs.
///
/// Honors `X-Forwarded-Proto` (default `http`) and `Host` (default
/// `localhost:3000`).
pub(crate) fn request_origin(headers: &HeaderMap) -> String {
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost:3000");

    format!("{proto}://{host}")
}

/// Human-readable timestamp for tables and stat cards.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M UTC").to_string()
}

/// Last click time for display, or [`NEVER_CLICKED`].
pub(crate) fn last_clicked_label(link: &Link) -> String {
    match link.last_clicked_at {
        Some(ts) if link.was_clicked() => format_timestamp(ts),
        _ => NEVER_CLICKED.to_string(),
    }
}
