// src/config/mod.rs
// Central configuration. Built once in main() from the environment and
// passed explicitly through AppState; never read from ambient global state.

pub mod adapters;
pub mod helpers;
pub mod server;

use serde::{Deserialize, Serialize};

/// Auth configuration: token signing secret and validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: helpers::env_or(
                "JWT_SECRET",
                "reco-jwt-secret-change-in-production-please",
            ),
            token_ttl_hours: helpers::env_parsed("RECO_TOKEN_TTL_HOURS", 12),
        }
    }
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecoConfig {
    pub server: server::ServerConfig,
    pub database: server::DatabaseConfig,
    pub logging: server::LoggingConfig,
    pub auth: AuthConfig,
    pub gemini: adapters::GeminiConfig,
    pub weather: adapters::WeatherConfig,
    pub youtube: adapters::YoutubeConfig,
    pub tmdb: adapters::TmdbConfig,
    pub places: adapters::PlacesConfig,
}

impl RecoConfig {
    pub fn from_env() -> Self {
        // Don't panic if .env doesn't exist (for production)
        dotenv::dotenv().ok();

        Self {
            server: server::ServerConfig::from_env(),
            database: server::DatabaseConfig::from_env(),
            logging: server::LoggingConfig::from_env(),
            auth: AuthConfig::from_env(),
            gemini: adapters::GeminiConfig::from_env(),
            weather: adapters::WeatherConfig::from_env(),
            youtube: adapters::YoutubeConfig::from_env(),
            tmdb: adapters::TmdbConfig::from_env(),
            places: adapters::PlacesConfig::from_env(),
        }
    }
}
