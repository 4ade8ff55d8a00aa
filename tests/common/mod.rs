// tests/common/mod.rs
// Shared test utilities

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use reco_backend::config::{adapters, server, AuthConfig, RecoConfig};
use reco_backend::db;

pub async fn test_pool() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    db::init_schema(&pool).await.unwrap();

    pool
}

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-secret".to_string(),
        token_ttl_hours: 12,
    }
}

/// Config with every adapter key unset, so no test ever touches the network:
/// weather drops its clause, video/movie lookups degrade to their sentinels,
/// and the generative client serves its canned fallback reply.
pub fn test_config() -> RecoConfig {
    RecoConfig {
        server: server::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: server::DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        logging: server::LoggingConfig {
            level: "info".to_string(),
        },
        auth: test_auth_config(),
        gemini: adapters::GeminiConfig {
            api_key: String::new(),
            model: String::new(),
        },
        weather: adapters::WeatherConfig {
            api_key: String::new(),
        },
        youtube: adapters::YoutubeConfig {
            api_key: String::new(),
        },
        tmdb: adapters::TmdbConfig {
            api_key: String::new(),
        },
        places: adapters::PlacesConfig {
            api_key: String::new(),
        },
    }
}
