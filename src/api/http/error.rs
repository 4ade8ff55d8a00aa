// src/api/http/error.rs
// Error taxonomy for the HTTP surface. Per-item adapter failures never show
// up here; only validation, auth, not-found, the primary generative call and
// true internal errors surface as HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Misconfigured(String),
    #[error("{0}")]
    Upstream(String),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiError::Misconfigured(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            ApiError::Internal(e) => {
                // Full detail stays in the server log; the client gets a
                // generic message.
                error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

impl From<crate::auth::AuthError> for ApiError {
    fn from(e: crate::auth::AuthError) -> Self {
        use crate::auth::AuthError;
        match e {
            AuthError::MissingFields(msg) => ApiError::BadRequest(msg),
            AuthError::DuplicateEmail => ApiError::Conflict(e.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(e.to_string()),
            AuthError::NotFound => ApiError::NotFound(e.to_string()),
            AuthError::Internal(inner) => ApiError::Internal(inner),
        }
    }
}

impl From<crate::logs::LogError> for ApiError {
    fn from(e: crate::logs::LogError) -> Self {
        use crate::logs::LogError;
        match e {
            LogError::NotFound => ApiError::NotFound(e.to_string()),
            LogError::NotOwner => ApiError::Forbidden(e.to_string()),
            LogError::Database(inner) => ApiError::Internal(inner.into()),
        }
    }
}
