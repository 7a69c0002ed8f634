//! Application error type and its HTTP representation.
//!
//! Every fallible service and repository call returns [`AppError`]. Handlers
//! propagate it with `?` and axum turns it into a JSON body via [`IntoResponse`].

use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::moderation::ModerationError;

/// Header carrying the alert key of a rejected request (`error.invalidEmoji`).
pub const ALERT_ERROR_HEADER: &str = "x-blog-error";
/// Header carrying the entity name of a rejected request (`entry`).
pub const ALERT_PARAMS_HEADER: &str = "x-blog-params";

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload shared by every failing response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// A business rule refused the request for a specific entity.
    #[error("{message} ({entity}.{error_key})")]
    Rejected {
        message: String,
        entity: &'static str,
        error_key: &'static str,
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
        Self::Validation {
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

    /// Returns the error key of a [`AppError::Rejected`] error.
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            AppError::Rejected { error_key, .. } => Some(*error_key),
            _ => None,
        }
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation { message, details } => ErrorInfo {
                code: "validation_error".to_string(),
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Rejected {
                message,
                entity,
                error_key,
            } => ErrorInfo {
                code: (*error_key).to_string(),
                message: message.clone(),
                details: json!({ "entity": entity }),
            },
            AppError::NotFound { message, details } => ErrorInfo {
                code: "not_found".to_string(),
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Conflict { message, details } => ErrorInfo {
                code: "conflict".to_string(),
                message: message.clone(),
                details: details.clone(),
            },
            AppError::Internal { message, details } => ErrorInfo {
                code: "internal_error".to_string(),
                message: message.clone(),
                details: details.clone(),
            },
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Rejected { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let mut headers = HeaderMap::new();
        if let AppError::Rejected {
            entity, error_key, ..
        } = &self
        {
            if let Ok(value) = HeaderValue::from_str(&format!("error.{error_key}")) {
                headers.insert(ALERT_ERROR_HEADER, value);
            }
            headers.insert(ALERT_PARAMS_HEADER, HeaderValue::from_static(*entity));
        }

        let body = ErrorBody {
            error: self.to_info(),
        };

        (status, headers, Json(body)).into_response()
    }
}

impl From<ModerationError> for AppError {
    fn from(e: ModerationError) -> Self {
        AppError::Rejected {
            message: e.to_string(),
            entity: ModerationError::ENTITY_NAME,
            error_key: e.error_key(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(errors.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_foreign_key_violation() {
            return AppError::not_found(
                "Referenced record does not exist",
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    tracing::error!(error = %e, "Database error");
    AppError::internal("Database error", json!({}))
}
