// src/api/http/restaurants.rs
// On-demand proximity search for a food the enrichment pipeline surfaced.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use super::error::ApiError;
use crate::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RestaurantsQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub food: Option<String>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/find_restaurants", get(find_restaurants))
}

async fn find_restaurants(
    State(state): State<Arc<AppState>>,
    AuthUser(_claims): AuthUser,
    Query(query): Query<RestaurantsQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (lat, lon, food) = match (&query.lat, &query.lon, &query.food) {
        (Some(lat), Some(lon), Some(food))
            if !lat.is_empty() && !lon.is_empty() && !food.is_empty() =>
        {
            (lat, lon, food)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "lat, lon and food are required".to_string(),
            ))
        }
    };

    if !state.places.is_configured() {
        return Err(ApiError::Misconfigured(
            "Places API key is not configured; please contact the administrator".to_string(),
        ));
    }

    let restaurants = state.places.nearby(lat, lon, food).await.map_err(|e| {
        error!(adapter = "places", lat = %lat, lon = %lon, food = %food, error = %e, "Restaurant search failed");
        ApiError::Upstream("Restaurant search is unavailable right now".to_string())
    })?;

    Ok(Json(serde_json::json!({ "restaurants": restaurants })))
}
