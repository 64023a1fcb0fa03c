use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_TOKEN_TTL_SECS, DEFAULT_HASH_ITERATIONS,
    DEFAULT_HASH_MEMORY_KIB, DEFAULT_REFRESH_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS,
    MAX_REFRESH_TOKEN_TTL_SECS, MIN_ACCESS_TOKEN_TTL_SECS, MIN_AUTH_SECRET_LENGTH,
    MIN_HASH_ITERATIONS, MIN_HASH_MEMORY_KIB,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret (`AUTH_SECRET`)
    pub secret: Option<String>,
    pub access_token_ttl_secs: i64,
    pub refresh_token_ttl_secs: i64,
    /// Argon2id memory cost in KiB
    pub hash_memory_kib: u32,
    /// Argon2id time cost
    pub hash_iterations: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: None,
            access_token_ttl_secs: DEFAULT_ACCESS_TOKEN_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TOKEN_TTL_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = self.secret.as_deref() else {
            return Err(ConfigError::auth("AUTH_SECRET is required"));
        };

        if secret.len() < MIN_AUTH_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "AUTH_SECRET must be at least {} characters",
                MIN_AUTH_SECRET_LENGTH
            )));
        }

        if self.access_token_ttl_secs < MIN_ACCESS_TOKEN_TTL_SECS
            || self.access_token_ttl_secs > MAX_ACCESS_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.access_token_ttl_secs must be {}-{}, got {}",
                MIN_ACCESS_TOKEN_TTL_SECS, MAX_ACCESS_TOKEN_TTL_SECS, self.access_token_ttl_secs
            )));
        }

        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs
            || self.refresh_token_ttl_secs > MAX_REFRESH_TOKEN_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.refresh_token_ttl_secs must exceed the access token TTL and be <= {}, got {}",
                MAX_REFRESH_TOKEN_TTL_SECS, self.refresh_token_ttl_secs
            )));
        }

        if self.hash_memory_kib < MIN_HASH_MEMORY_KIB || self.hash_iterations < MIN_HASH_ITERATIONS
        {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be >= {} and auth.hash_iterations >= {}",
                MIN_HASH_MEMORY_KIB, MIN_HASH_ITERATIONS
            )));
        }

        Ok(())
    }

    /// Signing secret bytes; only meaningful after `validate()`
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_deref().unwrap_or_default().as_bytes()
    }
}
