//! HTTP-facing error type.
//!
//! Handlers return [`AppError`], which renders as
//! `{"error": "<message>", "code": "<kind>", "details": {...}}` with the
//! matching status code. Domain failures arrive as [`LinkError`] and are
//! mapped here, in one place.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::LinkError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        kind: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::invalid("validation_error", message, details)
    }
    pub fn invalid(kind: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            kind,
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its JSON body.
    pub fn to_body(&self) -> ErrorBody {
        let (code, message, details) = match self {
            AppError::Validation {
                kind,
                message,
                details,
            } => (*kind, message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("duplicate_code", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorBody {
            error: message.clone(),
            code,
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.to_body())).into_response()
    }
}

impl From<LinkError> for AppError {
    fn from(e: LinkError) -> Self {
        match e {
            LinkError::InvalidUrl { url, reason } => AppError::invalid(
                "invalid_url",
                format!("URL \"{url}\" is invalid"),
                json!({ "url": url, "reason": reason }),
            ),
            LinkError::InvalidCodeFormat(ref code) => AppError::invalid(
                "invalid_code_format",
                e.to_string(),
                json!({ "code": code, "pattern": crate::utils::validation::CODE_REGEX.as_str() }),
            ),
            LinkError::DuplicateCode(ref code) => {
                AppError::conflict(e.to_string(), json!({ "code": code }))
            }
            LinkError::NotFound(ref code) => {
                AppError::not_found(e.to_string(), json!({ "code": code }))
            }
            LinkError::Unexpected(detail) => {
                tracing::error!(error = %detail, "Unexpected error while handling request");
                AppError::internal("Unexpected error", Value::Null)
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Validation failed",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::bad_request(
            "Validation failed",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        AppError::bad_request("Validation failed", json!({ "fields": details }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_error_status_mapping() {
        let cases = [
            (
                LinkError::InvalidUrl {
                    url: "x".to_string(),
                    reason: "bad".to_string(),
                },
                StatusCode::BAD_REQUEST,
                "invalid_url",
            ),
            (
                LinkError::InvalidCodeFormat("a-b".to_string()),
                StatusCode::BAD_REQUEST,
                "invalid_code_format",
            ),
            (
                LinkError::DuplicateCode("abc123".to_string()),
                StatusCode::CONFLICT,
                "duplicate_code",
            ),
            (
                LinkError::NotFound("abc123".to_string()),
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                LinkError::Unexpected("pool timed out".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (link_error, status, code) in cases {
            let app_error = AppError::from(link_error);
            assert_eq!(app_error.status(), status);
            assert_eq!(app_error.to_body().code, code);
        }
    }

    #[test]
    fn test_unexpected_error_hides_detail() {
        let app_error = AppError::from(LinkError::Unexpected(
            "password authentication failed for user admin".to_string(),
        ));

        let body = serde_json::to_value(app_error.to_body()).unwrap();
        assert_eq!(body["error"], "Unexpected error");
        assert!(body.get("details").is_none());
    }

    #[test]
    fn test_not_found_body_names_code() {
        let body = AppError::from(LinkError::NotFound("zzz999".to_string())).to_body();

        assert_eq!(body.error, "No link found for code \"zzz999\"");
        assert_eq!(body.details["code"], "zzz999");
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Code \"abc123\" already exists", Value::Null);
        assert_eq!(err.to_string(), "Code \"abc123\" already exists");
    }
}
