//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports that the process is up.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// # Response
///
/// ```json
/// {
///   "ok": true,
///   "version": "0.1.0",
///   "uptimeSeconds": 3600,
///   "startedAt": 1767225600000,
///   "timestamp": 1767229200000
/// }
/// ```
///
/// This is a liveness probe: it does not touch the database.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.timestamp_millis(),
        timestamp: Utc::now().timestamp_millis(),
    })
}
