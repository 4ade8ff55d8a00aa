// src/api/http/health.rs
// Health check and welcome endpoints, unauthenticated.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    db: &'static str,
    time: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
}

async fn index() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Welcome to the RECO API" }))
}

/// GET /api/health - returns 503 when the database is unreachable.
async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_ok = sqlx::query("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();

    let response = HealthResponse {
        status: if db_ok { "ok" } else { "unhealthy" },
        db: if db_ok { "ok" } else { "error" },
        time: chrono::Utc::now().to_rfc3339(),
    };

    if db_ok {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}
