//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    code_stats_handler, create_from_dashboard_handler, dashboard_handler,
    delete_from_dashboard_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Dashboard routes.
///
/// # Endpoints
///
/// - `GET  /`                    - Link table, search filter and creation form
/// - `POST /`                    - Creation form submission
/// - `GET  /code/{code}`         - Statistics page for one link
/// - `POST /code/{code}/delete`  - Delete a link and return to the dashboard
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler).post(create_from_dashboard_handler))
        .route("/code/{code}", get(code_stats_handler))
        .route("/code/{code}/delete", post(delete_from_dashboard_handler))
}
