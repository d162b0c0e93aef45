//! Request-level errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::RequestError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Prefix shared by every error message returned to clients.
const ERROR_PREFIX: &str = "Could not decode request";

/// Errors that reject a request outright. Everything else is absorbed by
/// filtering and still yields 200.
#[derive(Debug, Error)]
pub enum AppError {
    /// Body is not valid JSON or does not match the request shape.
    #[error("JSON parsing failed")]
    Decode(#[from] serde_json::Error),

    /// Body decoded but failed request validation.
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),
}

pub type AppResult<T> = Result<T, AppError>;

/// Error body returned with 4xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Decode(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Decode(e) => tracing::error!("Failed to decode request: {}", e),
            AppError::InvalidRequest(e) => tracing::error!("Request validation failed: {}", e),
        }

        let body = ErrorResponse {
            error: format!("{}: {}", ERROR_PREFIX, self),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
