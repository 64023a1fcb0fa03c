use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DB_ACQUIRE_TIMEOUT_SECS, DEFAULT_DB_POOL_SIZE,
    MAX_DB_POOL_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `sqlite:` connection URL (`DATABASE_URL`)
    pub url: Option<String>,
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_DB_POOL_SIZE,
            acquire_timeout_secs: DEFAULT_DB_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.as_deref().map(str::trim).unwrap_or_default();

        if url.is_empty() {
            return Err(ConfigError::database(
                "DATABASE_URL is required (e.g. sqlite://data/bfs.db)",
            ));
        }

        if !url.starts_with("sqlite:") {
            return Err(ConfigError::database(format!(
                "DATABASE_URL must be a sqlite: URL, got scheme '{}'",
                url.split(':').next().unwrap_or_default()
            )));
        }

        if self.max_connections == 0 || self.max_connections > MAX_DB_POOL_SIZE {
            return Err(ConfigError::database(format!(
                "database.max_connections must be 1-{}, got {}",
                MAX_DB_POOL_SIZE, self.max_connections
            )));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.acquire_timeout_secs must be at least 1",
            ));
        }

        Ok(())
    }

    /// The configured URL; only meaningful after `validate()`
    pub fn url(&self) -> &str {
        self.url.as_deref().map(str::trim).unwrap_or_default()
    }
}
