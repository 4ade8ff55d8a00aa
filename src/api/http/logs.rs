// src/api/http/logs.rs

use axum::extract::{Path, Query, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::AuthUser;
use crate::logs::LogEntry;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub date: Option<String>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/logs", get(list_logs))
        .route("/logs/{id}", delete(delete_log))
}

async fn list_logs(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let date = match query.date.as_deref() {
        Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
            ApiError::BadRequest("date must be in YYYY-MM-DD format".to_string())
        })?),
        None => None,
    };

    let entries = state.log_store.list(&claims.sub, date).await?;
    Ok(Json(entries))
}

async fn delete_log(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.log_store.delete(&claims.sub, id).await?;
    Ok(Json(serde_json::json!({ "message": "deleted" })))
}
