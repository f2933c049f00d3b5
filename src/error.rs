//! Application error type and its translation into HTTP responses.
//!
//! Every failure a handler can produce is an [`AppError`]. The
//! [`IntoResponse`] impl is the single table mapping error kinds to status
//! codes and body shapes; handlers never build error responses themselves.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// Structured error payload used for validation, conflict and internal errors.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// JSON key a short error message is rendered under.
///
/// Most endpoints answer `{"msg": ...}`; user lookup answers `{"error": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Msg,
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String, details: Value },

    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("not found: {message}")]
    NotFound { message: String, key: MessageKey },

    #[error("pet {pet_id} is already adopted")]
    AlreadyAdopted { pet_id: i64 },

    #[error("conflict: {message}")]
    Conflict { message: String, details: Value },

    #[error("internal error: {message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            key: MessageKey::Msg,
        }
    }

    /// Not-found error rendered as `{"error": message}`.
    pub fn not_found_error(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            key: MessageKey::Error,
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

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. }
            | AppError::AlreadyAdopted { .. }
            | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::Unauthorized { message } => {
                let mut response = (status, Json(json!({ "msg": message }))).into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            AppError::NotFound { message, key } => {
                let body = match key {
                    MessageKey::Msg => json!({ "msg": message }),
                    MessageKey::Error => json!({ "error": message }),
                };
                (status, Json(body)).into_response()
            }
            AppError::AlreadyAdopted { .. } => {
                (status, Json(json!({ "msg": "Pet is already adopted" }))).into_response()
            }
            AppError::Validation { message, details } => {
                detailed(status, "validation_error", message, details)
            }
            AppError::Conflict { message, details } => {
                detailed(status, "conflict", message, details)
            }
            AppError::Internal { message, details } => {
                detailed(status, "internal_error", message, details)
            }
        }
    }
}

fn detailed(status: StatusCode, code: &'static str, message: String, details: Value) -> Response {
    let body = ErrorBody {
        error: ErrorInfo {
            code,
            message,
            details,
        },
    };

    (status, Json(body)).into_response()
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(
                    "Unique constraint violation",
                    json!({ "constraint": db.constraint() }),
                );
            }
            if db.is_foreign_key_violation() {
                return AppError::bad_request(
                    "Referenced record does not exist",
                    json!({ "constraint": db.constraint() }),
                );
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Internal server error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Missing or invalid fields", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        AppError::bad_request("Invalid path parameter", json!({ "reason": e.body_text() }))
    }
}
