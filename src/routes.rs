//! Top-level router combining the redirect, REST API and dashboard routes.
//!
//! # Route Structure
//!
//! - `GET  /healthz`     - Liveness probe
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - REST API for link management
//! - `/` and `/code/*`   - Web dashboard
//!
//! The request tracing layer wraps every route. Trailing slash
//! normalization is applied by the server around this router.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
///
/// `/healthz` is registered explicitly so it takes precedence over the
/// `/{code}` capture; `healthz` is seven letters and would otherwise be
/// treated as a short code.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .merge(web::routes::routes())
        .with_state(state)
        .layer(tracing::layer())
}
