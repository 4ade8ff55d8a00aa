// src/config/adapters.rs
// Per-third-party adapter configuration. A missing or placeholder key never
// aborts startup; the owning adapter degrades to "unavailable" instead.

use serde::{Deserialize, Serialize};

use super::helpers::{env_or, key_is_configured};

/// Google generative-language API (the primary text generator)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("GEMINI_API_KEY", ""),
            model: env_or("GEMINI_MODEL_NAME", ""),
        }
    }

    pub fn is_configured(&self) -> bool {
        key_is_configured(&self.api_key) && !self.model.trim().is_empty()
    }
}

/// OpenWeather current-conditions API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    pub api_key: String,
}

impl WeatherConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("OPENWEATHER_API_KEY", ""),
        }
    }

    pub fn is_configured(&self) -> bool {
        key_is_configured(&self.api_key)
    }
}

/// YouTube Data API (video search)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeConfig {
    pub api_key: String,
}

impl YoutubeConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("YOUTUBE_API_KEY", ""),
        }
    }

    pub fn is_configured(&self) -> bool {
        key_is_configured(&self.api_key)
    }
}

/// The Movie Database search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
}

impl TmdbConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("TMDB_API_KEY", ""),
        }
    }

    pub fn is_configured(&self) -> bool {
        key_is_configured(&self.api_key)
    }
}

/// Google Places nearby-search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    pub api_key: String,
}

impl PlacesConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_or("GOOGLE_MAPS_API_KEY", ""),
        }
    }

    pub fn is_configured(&self) -> bool {
        key_is_configured(&self.api_key)
    }
}
