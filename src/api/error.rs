use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::GlimpseError;

use super::types::ErrorResponse;

/// API-specific errors with HTTP status code mapping.
#[derive(Debug)]
pub enum ApiError {
    DatasetNotFound(String),
    InvalidRequest(String),
    Internal(String),
}

impl From<GlimpseError> for ApiError {
    fn from(err: GlimpseError) -> Self {
        match err {
            GlimpseError::NotFound(path) => ApiError::DatasetNotFound(path),
            GlimpseError::ParseError(msg) | GlimpseError::InvalidSelection(msg) => {
                ApiError::InvalidRequest(msg)
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::DatasetNotFound(path) => (
                StatusCode::NOT_FOUND,
                "DATASET_NOT_FOUND",
                format!("Dataset '{}' not found", path),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
