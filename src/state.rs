// src/state.rs

use anyhow::Result;
use sqlx::SqlitePool;

use crate::adapters::{GeminiClient, PlacesClient, TmdbClient, WeatherClient, YoutubeClient};
use crate::auth::AuthService;
use crate::config::RecoConfig;
use crate::logs::LogStore;

/// Application state shared across handlers. Built once in main() from the
/// injected configuration; adapters each own their key and bounded-timeout
/// HTTP client.
pub struct AppState {
    pub config: RecoConfig,
    pub pool: SqlitePool,
    pub auth_service: AuthService,
    pub log_store: LogStore,
    pub gemini: GeminiClient,
    pub weather: WeatherClient,
    pub youtube: YoutubeClient,
    pub tmdb: TmdbClient,
    pub places: PlacesClient,
}

impl AppState {
    pub fn new(config: RecoConfig, pool: SqlitePool) -> Result<Self> {
        let auth_service = AuthService::new(pool.clone(), config.auth.clone());
        let log_store = LogStore::new(pool.clone());

        let gemini = GeminiClient::new(config.gemini.clone())?;
        let weather = WeatherClient::new(config.weather.clone())?;
        let youtube = YoutubeClient::new(config.youtube.clone())?;
        let tmdb = TmdbClient::new(config.tmdb.clone())?;
        let places = PlacesClient::new(config.places.clone())?;

        Ok(Self {
            config,
            pool,
            auth_service,
            log_store,
            gemini,
            weather,
            youtube,
            tmdb,
            places,
        })
    }
}
