// src/api/http/home.rs

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use crate::auth::AuthUser;
use crate::state::AppState;

const DEFAULT_CITY: &str = "Tokyo";

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/home", get(home))
}

/// Current conditions for the user's home locality (from the claims
/// snapshot). Weather fields are null when the lookup is unavailable.
async fn home(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> Json<serde_json::Value> {
    let city = claims.city.unwrap_or_else(|| DEFAULT_CITY.to_string());
    let snapshot = state.weather.fetch(&city).await;

    Json(serde_json::json!({
        "city": city,
        "weather": snapshot.as_ref().map(|w| w.description.clone()),
        "temp": snapshot.as_ref().map(|w| w.temp_c),
    }))
}
