//! Per-link statistics page and dashboard deletion.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};

use super::{format_timestamp, last_clicked_label, request_origin};
use crate::domain::errors::LinkError;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the statistics page of one link.
#[derive(Template, WebTemplate)]
#[template(path = "code_stats.html")]
pub struct CodeStatsTemplate {
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub total_clicks: i64,
    pub last_clicked: String,
    pub created: String,
}

/// Rendered when a code has no link.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

fn not_found_page(code: String) -> Response {
    (StatusCode::NOT_FOUND, NotFoundTemplate { code }).into_response()
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Shows the destination, the full short URL, total clicks and the last
/// click time. Unknown codes get a 404 page.
pub async fn code_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let link = match state.link_service.get_link(&code).await {
        Ok(link) => link,
        Err(LinkError::NotFound(code)) => return Ok(not_found_page(code)),
        Err(e) => return Err(e.into()),
    };

    let page = CodeStatsTemplate {
        short_url: link.short_url(&request_origin(&headers)),
        last_clicked: last_clicked_label(&link),
        created: format_timestamp(link.created_at),
        total_clicks: link.total_clicks,
        target_url: link.target_url,
        code: link.code,
    };

    Ok(page.into_response())
}

/// Deletes a link from the dashboard and returns to the list.
///
/// # Endpoint
///
/// `POST /code/{code}/delete`
pub async fn delete_from_dashboard_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !state.link_service.delete_link(&code).await? {
        return Ok(not_found_page(code));
    }

    Ok(Redirect::to("/").into_response())
}
