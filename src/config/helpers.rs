// src/config/helpers.rs
// Helper functions for loading environment variables

use std::env;

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// True when an API key is actually usable: non-empty and not one of the
/// `YOUR_..._API_KEY` placeholders that ship in sample .env files.
pub fn key_is_configured(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.starts_with("YOUR_")
}

#[cfg(test)]
mod tests {
    use super::key_is_configured;

    #[test]
    fn placeholder_keys_count_as_unconfigured() {
        assert!(!key_is_configured(""));
        assert!(!key_is_configured("   "));
        assert!(!key_is_configured("YOUR_OPENWEATHER_API_KEY"));
        assert!(key_is_configured("AIzaSyReal"));
    }
}
