// src/api/http/auth.rs

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::{AuthResponse, AuthUser, LoginRequest, RegisterRequest, User};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let user: User = state.auth_service.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "user": user })),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = state.auth_service.login(req).await?;
    Ok(Json(response))
}

/// Returns the claims snapshot as embedded at login time. Deliberately does
/// not re-read storage; staleness until the token expires is accepted.
async fn me(AuthUser(claims): AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "id": claims.sub,
        "username": claims.username,
        "email": claims.email,
        "city": claims.city,
        "mbti_type": claims.mbti_type,
    }))
}
