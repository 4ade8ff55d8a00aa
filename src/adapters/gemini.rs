// src/adapters/gemini.rs
// Generative-language provider using the Google AI API.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::adapters::GeminiConfig;

/// Canned reply served when no API key/model is configured, so development
/// setups still exercise the full enrichment path.
const DEV_FALLBACK_REPLY: &str = "（開発モード）APIキー未設定のためダミー応答：\n🎵 Pretender - 前向きになれる\n🎬 君の名は。 - 切なくも温かい\n🍽️ 親子丼 - たんぱく質・炭水化物";

pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        Self::with_base_url(
            config,
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
        )
    }

    /// Same client against a non-default endpoint (regional proxies, tests).
    pub fn with_base_url(config: GeminiConfig, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    pub fn is_available(&self) -> bool {
        self.config.is_configured()
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.config.model, self.config.api_key
        )
    }

    /// Sends one prompt and returns the generated text. This is the only
    /// adapter whose failure fails the whole request; the caller maps it to
    /// an upstream error. An unconfigured key degrades to a canned reply
    /// instead of erroring.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if !self.is_available() {
            warn!("Gemini API key/model not configured, serving fallback reply");
            return Ok(DEV_FALLBACK_REPLY.to_string());
        }

        debug!(model = %self.config.model, "Calling generateContent");

        let request_body = serde_json::json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Gemini API error ({}): {}", status, error_text));
        }

        let result: Value = response.json().await?;
        let text = result["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow!("Unexpected Gemini response shape"))?;

        Ok(text.to_string())
    }
}
