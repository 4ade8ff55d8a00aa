// src/adapters/youtube.rs
// YouTube Data API search: first matching music video for a song title.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::config::adapters::YoutubeConfig;
use crate::enrichment::VideoSearch;

/// Sentinel link used when no video could be resolved. Rendered into the
/// reply as-is rather than failing the request.
pub const NO_LINK: &str = "#";

pub struct YoutubeClient {
    client: Client,
    config: YoutubeConfig,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(config: YoutubeConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url: "https://www.googleapis.com/youtube/v3/search".to_string(),
        })
    }

    async fn search(&self, title: &str) -> Option<String> {
        let query = format!("{} MV", title);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("part", "snippet"),
                ("q", &query),
                ("type", "video"),
                ("maxResults", "5"),
                ("key", &self.config.api_key),
                ("regionCode", "JP"),
                ("relevanceLanguage", "ja"),
                ("order", "relevance"),
            ])
            .send()
            .await
            .map_err(|e| warn!(adapter = "youtube", title, error = %e, "Video search failed"))
            .ok()?;

        if !response.status().is_success() {
            warn!(
                adapter = "youtube",
                title,
                status = %response.status(),
                "Video search returned non-success status"
            );
            return None;
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| warn!(adapter = "youtube", title, error = %e, "Malformed search payload"))
            .ok()?;

        for item in data["items"].as_array()? {
            if let Some(video_id) = item["id"]["videoId"].as_str() {
                return Some(format!("https://www.youtube.com/watch?v={}", video_id));
            }
        }
        None
    }
}

#[async_trait]
impl VideoSearch for YoutubeClient {
    /// Resolves a watch URL for the title, or the `NO_LINK` sentinel when the
    /// key is unconfigured or the lookup fails in any way.
    async fn first_video_url(&self, title: &str) -> String {
        if !self.config.is_configured() {
            return NO_LINK.to_string();
        }

        self.search(title)
            .await
            .unwrap_or_else(|| NO_LINK.to_string())
    }
}
