// src/adapters/places.rs
// Google Places nearby search around a coordinate, keyed by a food name.
// Unlike the per-item adapters this one surfaces its failures: the handler
// maps a missing key to a configuration error and an upstream failure to 502.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::config::adapters::PlacesConfig;

const SEARCH_RADIUS_METERS: u32 = 1500;

#[derive(Debug, Clone, Serialize)]
pub struct Restaurant {
    pub name: Option<String>,
    pub vicinity: Option<String>,
    pub rating: Option<f64>,
    pub place_id: Option<String>,
    pub url: String,
}

pub struct PlacesClient {
    client: Client,
    config: PlacesConfig,
    base_url: String,
}

impl PlacesClient {
    pub fn new(config: PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url: "https://maps.googleapis.com/maps/api/place/nearbysearch/json".to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub async fn nearby(&self, lat: &str, lon: &str, keyword: &str) -> Result<Vec<Restaurant>> {
        let location = format!("{},{}", lat, lon);
        let radius = SEARCH_RADIUS_METERS.to_string();
        let api_key = self.config.api_key.trim();

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("location", location.as_str()),
                ("radius", radius.as_str()),
                ("keyword", keyword),
                ("language", "ja"),
                ("key", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Places API error ({})", status));
        }

        let data: Value = response.json().await?;

        let results = data["results"]
            .as_array()
            .map(|places| places.iter().map(restaurant_from_place).collect())
            .unwrap_or_default();

        Ok(results)
    }
}

fn restaurant_from_place(place: &Value) -> Restaurant {
    let name = place["name"].as_str().unwrap_or_default();
    let place_id = place["place_id"].as_str().unwrap_or_default();
    let map_url = format!(
        "https://www.google.com/maps/search/?api=1&query={}&query_place_id={}",
        urlencoding::encode(name),
        place_id
    );

    Restaurant {
        name: place["name"].as_str().map(String::from),
        vicinity: place["vicinity"].as_str().map(String::from),
        rating: place["rating"].as_f64(),
        place_id: place["place_id"].as_str().map(String::from),
        url: map_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_map_url_from_place_payload() {
        let place = serde_json::json!({
            "name": "ラーメン 一蘭",
            "vicinity": "渋谷区",
            "rating": 4.2,
            "place_id": "abc123",
        });

        let r = restaurant_from_place(&place);
        assert_eq!(r.name.as_deref(), Some("ラーメン 一蘭"));
        assert_eq!(r.rating, Some(4.2));
        assert!(r.url.contains("query_place_id=abc123"));
        assert!(r.url.contains("%E3%83%A9%E3%83%BC%E3%83%A1%E3%83%B3"));
    }
}
