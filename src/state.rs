//! Shared state injected into every handler.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::application::services::LinkService;

/// Application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Moment the state was built, reported by `/healthz`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Creates the state with `started_at` set to now.
    pub fn new(link_service: Arc<LinkService>) -> Self {
        Self {
            link_service,
            started_at: Utc::now(),
        }
    }

    /// Whole seconds elapsed since startup.
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}
