// src/api/http/recommend.rs
// The recommendation endpoint: build prompt, call the generative adapter,
// run the enrichment pipeline, log both sides, respond.

use axum::extract::{Json, State};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use super::error::ApiError;
use crate::auth::AuthUser;
use crate::enrichment::{EnrichedReply, EnrichmentPipeline};
use crate::logs::{ROLE_ASSISTANT, ROLE_USER};
use crate::prompt::{build_prompt, Mode};
use crate::state::AppState;

const DEFAULT_CITY: &str = "Tokyo";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub mood: String,
    pub mode: Option<String>,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/recommend", post(recommend))
}

async fn recommend(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<EnrichedReply>, ApiError> {
    let mode = Mode::parse(req.mode.as_deref().unwrap_or("normal"));
    let city = claims.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string());

    // Weather is best-effort; an unavailable adapter just drops the clause.
    let weather = state.weather.fetch(&city).await;
    let prompt = build_prompt(&req.mood, mode, claims.mbti_type.as_deref(), weather.as_ref());

    // Invariant: exactly two log rows per attempt, success or failure.
    state
        .log_store
        .append(&claims.sub, &req.mood, ROLE_USER)
        .await?;

    let raw_text = match state.gemini.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!(adapter = "gemini", error = %e, "Primary generation call failed");
            let message = format!("Upstream generation error: {}", e);
            state
                .log_store
                .append(&claims.sub, &message, ROLE_ASSISTANT)
                .await?;
            return Err(ApiError::Upstream(
                "The recommendation service is unavailable right now".to_string(),
            ));
        }
    };

    // The raw pre-enrichment text is what gets logged.
    state
        .log_store
        .append(&claims.sub, &raw_text, ROLE_ASSISTANT)
        .await?;

    let pipeline = EnrichmentPipeline::new(&state.youtube, &state.tmdb);
    let enriched = pipeline.run(&raw_text, mode).await;

    Ok(Json(enriched))
}
