// src/api/http/profile.rs

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::{AuthUser, UpdateProfileRequest, User};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// Fresh read from storage, unlike /me which serves the claims snapshot.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state.auth_service.get_profile(&claims.sub).await?;
    Ok(Json(user))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    let user = state.auth_service.update_profile(&claims.sub, req).await?;
    Ok(Json(user))
}
