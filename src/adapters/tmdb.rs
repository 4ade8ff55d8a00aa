// src/adapters/tmdb.rs
// The Movie Database title search: first matching record, Japanese locale.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::config::adapters::TmdbConfig;
use crate::enrichment::MovieSearch;

#[derive(Debug, Clone, Serialize)]
pub struct MovieInfo {
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub tmdb_url: String,
}

pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
    base_url: String,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url: "https://api.themoviedb.org/3/search/movie".to_string(),
        })
    }

    async fn lookup(&self, title: &str) -> Option<MovieInfo> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("query", title),
                ("language", "ja-JP"),
            ])
            .send()
            .await
            .map_err(|e| warn!(adapter = "tmdb", title, error = %e, "Movie search failed"))
            .ok()?;

        if !response.status().is_success() {
            warn!(
                adapter = "tmdb",
                title,
                status = %response.status(),
                "Movie search returned non-success status"
            );
            return None;
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| warn!(adapter = "tmdb", title, error = %e, "Malformed search payload"))
            .ok()?;

        let movie = data["results"].as_array()?.first()?;

        Some(MovieInfo {
            title: movie["title"].as_str().map(String::from),
            overview: movie["overview"].as_str().map(String::from),
            release_date: movie["release_date"].as_str().map(String::from),
            poster_path: movie["poster_path"]
                .as_str()
                .map(|p| format!("https://image.tmdb.org/t/p/w300{}", p)),
            tmdb_url: format!("https://www.themoviedb.org/movie/{}", movie["id"]),
        })
    }
}

#[async_trait]
impl MovieSearch for TmdbClient {
    /// Returns the first matching record, or None on a miss or any failure.
    /// Misses are dropped silently from the enriched reply.
    async fn search(&self, title: &str) -> Option<MovieInfo> {
        if !self.config.is_configured() {
            return None;
        }

        self.lookup(title).await
    }
}
