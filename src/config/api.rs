//! News API configuration.

use serde::Deserialize;

use crate::domain::query::{DEFAULT_COUNTRY, DEFAULT_PAGE_SIZE};

pub const ENV_API_URL: &str = "NEWSDECK_API_URL";
pub const ENV_API_KEY: &str = "NEWSDECK_API_KEY";

/// Configuration for the news API endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the top-headlines endpoint.
    pub base_url: String,
    /// API key, sent as the `apiKey` query parameter.
    pub key: String,
    /// Country filter for headlines.
    pub country: String,
    /// Page size for feed requests.
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://newsapi.org/v2/top-headlines".to_string(),
            key: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    /// Apply `NEWSDECK_API_URL` / `NEWSDECK_API_KEY` environment overrides.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(key) = std::env::var(ENV_API_KEY) {
            if !key.is_empty() {
                self.key = key;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "https://newsapi.org/v2/top-headlines");
        assert!(api.key.is_empty());
        assert_eq!(api.country, "us");
        assert_eq!(api.page_size, 20);
    }

    #[test]
    fn test_apply_env_overrides_key() {
        std::env::set_var(ENV_API_KEY, "from-env");
        let mut api = ApiConfig {
            key: "from-file".into(),
            ..ApiConfig::default()
        };
        api.apply_env();
        assert_eq!(api.key, "from-env");
        std::env::remove_var(ENV_API_KEY);
    }
}
