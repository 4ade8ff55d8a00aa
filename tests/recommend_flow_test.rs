// tests/recommend_flow_test.rs
// Full recommendation flow over HTTP against a live router: register, login,
// recommend, and verify the interaction-log rows written along the way.

mod common;

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use reco_backend::adapters::{GeminiClient, PlacesClient, TmdbClient, WeatherClient, YoutubeClient};
use reco_backend::api::http::create_api_router;
use reco_backend::auth::AuthService;
use reco_backend::config::adapters::GeminiConfig;
use reco_backend::logs::LogStore;
use reco_backend::state::AppState;

use common::{test_config, test_pool};

fn test_state(pool: SqlitePool, gemini: GeminiClient) -> AppState {
    let config = test_config();

    AppState {
        auth_service: AuthService::new(pool.clone(), config.auth.clone()),
        log_store: LogStore::new(pool.clone()),
        gemini,
        weather: WeatherClient::new(config.weather.clone()).unwrap(),
        youtube: YoutubeClient::new(config.youtube.clone()).unwrap(),
        tmdb: TmdbClient::new(config.tmdb.clone()).unwrap(),
        places: PlacesClient::new(config.places.clone()).unwrap(),
        config,
        pool,
    }
}

async fn spawn_server(state: AppState) -> String {
    let app = Router::new()
        .nest("/api", create_api_router())
        .with_state(Arc::new(state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn register_and_login(client: &reqwest::Client, base: &str) -> String {
    let resp = client
        .post(format!("{}/api/register", base))
        .json(&serde_json::json!({
            "username": "hanako",
            "email": "hanako@example.com",
            "password": "s3cret-password",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 201);

    let resp = client
        .post(format!("{}/api/login", base))
        .json(&serde_json::json!({
            "email": "hanako@example.com",
            "password": "s3cret-password",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn log_rows(pool: &SqlitePool) -> Vec<(String, String)> {
    sqlx::query_as("SELECT role, message FROM logs ORDER BY id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn recommendation_writes_exactly_two_log_rows() {
    let pool = test_pool().await;
    let gemini = GeminiClient::new(test_config().gemini).unwrap();
    let base = spawn_server(test_state(pool.clone(), gemini)).await;

    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base).await;

    let resp = client
        .post(format!("{}/api/recommend", base))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "mood": "元気", "mode": "playlist" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    // unconfigured video key: the rewrite happened with the sentinel link
    assert!(body["reply"].as_str().unwrap().contains("<a href='#'"));
    assert_eq!(body["songs"].as_array().unwrap().len(), 1);

    let rows = log_rows(&pool).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, "user");
    assert_eq!(rows[0].1, "元気");
    assert_eq!(rows[1].0, "assistant");
    // the assistant row is the raw pre-enrichment text, never the rewrite
    assert!(rows[1].1.contains("🎵 Pretender -"));
    assert!(!rows[1].1.contains("<a href"));
}

#[tokio::test]
async fn failed_generation_still_writes_two_log_rows_and_returns_502() {
    let pool = test_pool().await;
    // a configured-looking key pointed at a dead endpoint forces the
    // primary generation call to fail
    let gemini = GeminiClient::with_base_url(
        GeminiConfig {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        },
        "http://127.0.0.1:1".to_string(),
    )
    .unwrap();
    let base = spawn_server(test_state(pool.clone(), gemini)).await;

    let client = reqwest::Client::new();
    let token = register_and_login(&client, &base).await;

    let resp = client
        .post(format!("{}/api/recommend", base))
        .bearer_auth(&token)
        .json(&serde_json::json!({ "mood": "眠い", "mode": "normal" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 502);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().is_some());

    let rows = log_rows(&pool).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].0, "user");
    assert_eq!(rows[0].1, "眠い");
    assert_eq!(rows[1].0, "assistant");
    assert!(rows[1].1.starts_with("Upstream generation error"));
}

#[tokio::test]
async fn recommend_without_token_is_unauthorized() {
    let pool = test_pool().await;
    let gemini = GeminiClient::new(test_config().gemini).unwrap();
    let base = spawn_server(test_state(pool, gemini)).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/recommend", base))
        .json(&serde_json::json!({ "mood": "元気" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}
