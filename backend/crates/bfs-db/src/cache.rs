//! Key-value cache over Redis.
//!
//! Values are stored as JSON with a fixed TTL. A `Cache` built with
//! [`Cache::disabled`] answers every lookup with a miss and ignores writes,
//! so callers never branch on whether `CACHE_URL` was configured.

use crate::Result as DbErrorResult;

use log::{debug, info};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::Serialize;
use serde::de::DeserializeOwned;

const KEY_PREFIX: &str = "bfs";

#[derive(Clone)]
pub struct Cache {
    manager: Option<ConnectionManager>,
    ttl_secs: u64,
}

impl Cache {
    /// Connect to `redis://` / `rediss://` and verify the connection.
    pub async fn connect(url: &str, ttl_secs: u64) -> DbErrorResult<Self> {
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;
        info!("Cache connected (ttl {}s)", ttl_secs);

        Ok(Self {
            manager: Some(manager),
            ttl_secs,
        })
    }

    pub fn disabled() -> Self {
        Self {
            manager: None,
            ttl_secs: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.manager.is_some()
    }

    /// Namespaced key, e.g. `bfs:financial-summary:<id>`.
    pub fn key(namespace: &str, id: impl std::fmt::Display) -> String {
        format!("{KEY_PREFIX}:{namespace}:{id}")
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> DbErrorResult<Option<T>> {
        let Some(manager) = &self.manager else {
            return Ok(None);
        };

        let mut conn = manager.clone();
        let raw: Option<String> = conn.get(key).await?;

        match raw {
            Some(raw) => {
                debug!("Cache hit: {}", key);
                Ok(Some(serde_json::from_str(&raw)?))
            }
            None => {
                debug!("Cache miss: {}", key);
                Ok(None)
            }
        }
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> DbErrorResult<()> {
        let Some(manager) = &self.manager else {
            return Ok(());
        };

        let payload = serde_json::to_string(value)?;
        let mut conn = manager.clone();
        let _: () = conn.set_ex(key, payload, self.ttl_secs).await?;

        Ok(())
    }

    /// Round-trip a PING; used by the readiness probe.
    pub async fn ping(&self) -> DbErrorResult<()> {
        let Some(manager) = &self.manager else {
            return Ok(());
        };

        let mut conn = manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        Ok(())
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("enabled", &self.is_enabled())
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}
