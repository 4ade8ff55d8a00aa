// src/api/http/mod.rs

pub mod auth;
pub mod error;
pub mod health;
pub mod home;
pub mod logs;
pub mod profile;
pub mod recommend;
pub mod restaurants;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// Everything under /api, assembled per resource.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(profile::router())
        .merge(home::router())
        .merge(recommend::router())
        .merge(restaurants::router())
        .merge(logs::router())
}
