use crate::{ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_API_BASE_URL, config::is_http_url};

use serde::Deserialize;

/// Configuration for the public-facing API surface
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL clients use to reach the API (`PUBLIC_API_BASE_URL`)
    pub public_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            public_base_url: String::from(DEFAULT_PUBLIC_API_BASE_URL),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.public_base_url) {
            return Err(ConfigError::config(format!(
                "PUBLIC_API_BASE_URL must be an http:// or https:// URL, got '{}'",
                self.public_base_url
            )));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.public_base_url.trim_end_matches('/')
    }
}
