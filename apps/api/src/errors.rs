use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::sizing::SizingError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),
}

impl From<SizingError> for AppError {
    fn from(err: SizingError) -> Self {
        match err {
            SizingError::InvalidGender(_) => AppError::InvalidGender(err.to_string()),
            SizingError::UnknownProfile(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidGender(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, "INVALID_GENDER", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
