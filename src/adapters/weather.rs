// src/adapters/weather.rs
// OpenWeather current-conditions lookup. Best-effort: any failure returns
// None and the prompt simply omits the weather clause.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

use crate::config::adapters::WeatherConfig;

#[derive(Debug, Clone)]
pub struct WeatherSnapshot {
    pub description: String,
    pub temp_c: f64,
}

pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url: "http://api.openweathermap.org/data/2.5/weather".to_string(),
        })
    }

    pub async fn fetch(&self, city: &str) -> Option<WeatherSnapshot> {
        if !self.config.is_configured() {
            return None;
        }

        let result = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", &self.config.api_key),
                ("lang", "ja"),
                ("units", "metric"),
            ])
            .send()
            .await;

        let response = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(adapter = "openweather", city, error = %e, "Weather lookup failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                adapter = "openweather",
                city,
                status = %response.status(),
                "Weather lookup returned non-success status"
            );
            return None;
        }

        let data: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                warn!(adapter = "openweather", city, error = %e, "Malformed weather payload");
                return None;
            }
        };

        let description = data["weather"][0]["description"].as_str()?.to_string();
        let temp_c = data["main"]["temp"].as_f64()?;

        Some(WeatherSnapshot {
            description,
            temp_c,
        })
    }
}
