use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::metrics::REQUEST_FAILURES;

/// Failures raised while talking to a hosted inference backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{backend} quota exceeded")]
    QuotaExceeded { backend: &'static str },
    #[error("{backend} returned HTTP {status}: {body}")]
    Http {
        backend: &'static str,
        status: u16,
        body: String,
    },
    #[error("{backend} request failed: {source}")]
    Transport {
        backend: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{backend} stream reported an error: {message}")]
    Stream {
        backend: &'static str,
        message: String,
    },
    #[error("{backend} sent an undecodable chunk: {source}")]
    Decode {
        backend: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, BackendError::QuotaExceeded { .. })
    }
}

/// Top level error for the generate handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("failed to fetch image: {0}")]
    ImageFetch(#[source] reqwest::Error),
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::ImageFetch(_) => "image_fetch",
            AppError::Backend(_) => "backend",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        REQUEST_FAILURES.with_label_values(&[self.kind()]).inc();

        let (status, message) = match &self {
            AppError::Validation(msg) => {
                tracing::debug!(error = %msg, "rejected request body");
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::ImageFetch(err) => {
                tracing::error!(error = %err, "image fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch image".to_string(),
                )
            }
            AppError::Backend(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "code generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}
