use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Errors raised by the HTTP API and its configuration.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server misconfigured".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

/// Errors surfaced by a [`CoursesService`](crate::client::CoursesService).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport error {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("not found: {body}")]
    NotFound { body: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Maps a non-success status to the matching variant. 404 is `NotFound`.
    pub fn from_status(status: u16, body: String) -> Self {
        if status == StatusCode::NOT_FOUND.as_u16() {
            ServiceError::NotFound { body }
        } else {
            ServiceError::Transport { status, body }
        }
    }

    /// Remote status code, if the remote answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Transport { status, .. } => Some(*status),
            ServiceError::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            ServiceError::Request(e) => e.status().map(|s| s.as_u16()),
            ServiceError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }
}
