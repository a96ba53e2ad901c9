//! Contact/support form endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use teemates_core::validate::is_valid_email;
use teemates_core::{Backend, SupportRequest, SUPPORT_REQUESTS_TABLE};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub message: String,
}

/// POST /api/contact
pub async fn submit_contact<B>(
    State(state): State<Arc<AppState<B>>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError>
where
    B: Backend,
{
    // Absent and empty are the same thing to the form.
    let present = |field: Option<String>| field.filter(|value| !value.is_empty());

    let (Some(name), Some(email), Some(category), Some(message)) = (
        present(req.name),
        present(req.email),
        present(req.category),
        present(req.message),
    ) else {
        return Err(ApiError::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(ApiError::InvalidEmail);
    }

    let record = SupportRequest {
        name,
        email,
        category,
        message,
        created_at: Utc::now(),
    }
    .into_record();

    state
        .backend
        .insert(SUPPORT_REQUESTS_TABLE, record)
        .await
        .map_err(|err| ApiError::WriteFailed(err.to_string()))?;

    tracing::info!("support request stored");

    Ok(Json(ContactResponse {
        message: "Support request submitted successfully".to_string(),
    }))
}

/// OPTIONS /api/contact (CORS preflight)
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any other method on /api/contact
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
