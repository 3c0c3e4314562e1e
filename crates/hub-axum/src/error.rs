//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and the JSON error body
//! `{error, status, details?}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hub_core::{ContentError, CoreError};
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A collaborator (store, content, chat backend) failed.
    ///
    /// `message` is what the client sees; `details` is included in the body
    /// only when set.
    #[error("{message}")]
    Upstream {
        message: String,
        details: Option<String>,
    },
}

impl HttpError {
    /// Replace the client-facing message of an upstream failure.
    #[must_use]
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            Self::Upstream { details, .. } => Self::Upstream {
                message: message.into(),
                details,
            },
            other => other,
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => (msg, None),
            Self::Upstream { message, details } => {
                tracing::error!(
                    target: "hub.http",
                    details = details.as_deref().unwrap_or(""),
                    "{message}"
                );
                (message, details)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            details,
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Store(e) => Self::Upstream {
                message: "Store operation failed".to_string(),
                details: Some(e.to_string()),
            },
            CoreError::Content(e @ (ContentError::NotFound(_) | ContentError::Io(_))) => {
                Self::Upstream {
                    message: "Failed to load content".to_string(),
                    details: Some(e.to_string()),
                }
            }
            CoreError::Content(e) => Self::Upstream {
                message: "Invalid content".to_string(),
                details: Some(e.to_string()),
            },
            // Backend detail is logged by the chat service and never sent out
            CoreError::Chat(_) => Self::Upstream {
                message: "Failed to process chat message".to_string(),
                details: None,
            },
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
