//! Contact endpoint error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the contact endpoint, shaped to its published
/// contract: every response body is `{"message": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// The message stays generic; the cause only goes to the log.
    #[error("Failed to submit request")]
    WriteFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingFields | ApiError::InvalidEmail => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::WriteFailed(cause) => {
                tracing::error!(%cause, "support request write failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = json!({ "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
