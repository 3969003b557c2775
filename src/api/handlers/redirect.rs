//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by code
/// 2. Increment its click counter and stamp `lastClickedAt`
/// 3. Return `302 Found` with `Location: targetUrl`
///
/// A failed increment is logged and the redirect still happens.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist. Nothing is mutated
/// in that case.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.link_service.resolve_redirect(&code).await?;

    tracing::debug!(code, target_url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, target_url)]).into_response())
}
