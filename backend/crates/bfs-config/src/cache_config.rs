use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_TTL_SECS, MAX_CACHE_TTL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Redis connection string (`CACHE_URL`); caching is off when unset
    pub url: Option<String>,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: None,
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(url) = self.url.as_deref()
            && !(url.starts_with("redis://") || url.starts_with("rediss://"))
        {
            return Err(ConfigError::cache(
                "CACHE_URL must start with redis:// or rediss://",
            ));
        }

        if self.ttl_secs == 0 || self.ttl_secs > MAX_CACHE_TTL_SECS {
            return Err(ConfigError::cache(format!(
                "cache.ttl_secs must be 1-{}, got {}",
                MAX_CACHE_TTL_SECS, self.ttl_secs
            )));
        }

        Ok(())
    }
}
