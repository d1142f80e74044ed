//! Error types and handling for the relay server.
//!
//! This module provides a unified error type [`AppError`] covering every way a
//! generation request can fail, and implements the conversion to the
//! `{success: false, error, details}` response envelope.

use crate::core::error_types::{ErrorCategoryCode, FALLBACK_ERROR_DETAILS};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required inbound field is absent or empty
    #[error("{0}")]
    Validation(String),

    /// The inbound body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// The backend answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Upstream {
        status: u16,
        /// Upstream error body, `None` when the body was empty
        body: Option<Value>,
    },

    /// The backend did not answer within the call timeout
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u64 },

    /// Connection or protocol failure reaching the backend
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Generic internal server errors with custom message
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status reported to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::Timeout { .. } | AppError::Transport(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Category used for metrics labels and log fields.
    pub fn category(&self) -> ErrorCategoryCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorCategoryCode::InvalidRequest,
            AppError::Upstream { status, .. } if *status >= 500 => ErrorCategoryCode::Upstream5xx,
            AppError::Upstream { .. } => ErrorCategoryCode::Upstream4xx,
            AppError::Timeout { .. } => ErrorCategoryCode::Timeout,
            AppError::Transport(e) if e.is_connect() => ErrorCategoryCode::ConnectError,
            AppError::Transport(_) => ErrorCategoryCode::NetworkError,
            AppError::Internal(_) => ErrorCategoryCode::InternalError,
        }
    }

    /// `details` member of the failure envelope.
    ///
    /// Caller-side failures carry no details; upstream failures forward the
    /// upstream body when there is one.
    fn details(&self) -> Option<Value> {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => None,
            AppError::Upstream {
                body: Some(body), ..
            } => Some(body.clone()),
            _ => Some(Value::String(FALLBACK_ERROR_DETAILS.to_string())),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self.details() {
            Some(details) => json!({
                "success": false,
                "error": self.to_string(),
                "details": details
            }),
            None => json!({
                "success": false,
                "error": self.to_string()
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Convenience type alias for Results using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
