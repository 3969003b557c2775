//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness report returned by `GET /healthz`.
///
/// `started_at` and `timestamp` are Unix epoch milliseconds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub version: String,
    pub uptime_seconds: i64,
    pub started_at: i64,
    pub timestamp: i64,
}
