//! Handlers for link management endpoints (list, create, get, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, DeleteLinkResponse, LinkListResponse};
use crate::domain::entities::Link;
use crate::domain::errors::LinkError;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// ```json
/// { "links": [ { "code": "aZ3kP9", "targetUrl": "https://example.com/", "totalClicks": 4, ... } ] }
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(LinkListResponse { links }))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "example.com",
///   "code": "docs2025"   // optional, 6-8 letters or digits
/// }
/// ```
///
/// # Response Codes
///
/// - **201 Created**: the new link record
/// - **400 Bad Request**: malformed body, invalid URL, or invalid code format
/// - **409 Conflict**: the code is already taken
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Link>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state
        .link_service
        .create_link(&payload.url, payload.requested_code())
        .await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Returns a single link record.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist.
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Link>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link))
}

/// Permanently deletes a short link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Behavior
///
/// The row is removed. The code stops redirecting immediately and may be
/// reused by a new link.
///
/// # Errors
///
/// Returns 404 Not Found if the link doesn't exist.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    if !state.link_service.delete_link(&code).await? {
        return Err(LinkError::NotFound(code).into());
    }

    Ok(Json(DeleteLinkResponse { ok: true }))
}
