use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use rapport_scoring::error::ScoringError;

/// Every failure the service reports to a caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The sentiment classifier has not finished loading.
    #[error("Sentiment model is not loaded.")]
    ServiceUnavailable,

    /// Request body is malformed or missing fields. Rejected before processing.
    #[error("Unable to process input: {0}")]
    Validation(String),

    /// Scoring failed or panicked after the request was accepted.
    #[error("Unable to process input: {0}")]
    Processing(String),

    /// Anything unexpected outside the scoring sequence.
    #[error("An error occurred: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::ServiceUnavailable => {
                tracing::warn!("request rejected: sentiment classifier not loaded");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation(detail) => {
                tracing::warn!(detail, "request validation failed");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Processing(detail) => {
                tracing::error!(detail, "error processing request");
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::ClassifierUnavailable => ApiError::ServiceUnavailable,
            other => ApiError::Processing(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Validation(e.body_text())
    }
}

/// Message carried by a panic payload.
pub fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    }
}

/// Render a panic caught outside the scoring sequence as an
/// [`ApiError::Internal`] response.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal(panic_detail(&*err)).into_response()
}
