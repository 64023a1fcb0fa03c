use crate::{
    ApiConfig, AuthConfig, CacheConfig, ConfigError, ConfigErrorResult, DatabaseConfig,
    LoggingConfig, MonitoringConfig, RateLimitConfig, ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub cache: CacheConfig,
    pub monitoring: MonitoringConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for BFS_CONFIG_DIR env var, else use ./.bfs/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BFS_* environment variable overrides
    /// 5. Apply the deployment variables (DATABASE_URL, AUTH_SECRET, ...)
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BFS_CONFIG_DIR env var > ./.bfs/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("BFS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".bfs"))
    }

    /// Validate all configuration.
    /// Call after load() so a misconfigured deployment refuses to start.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.cache.validate()?;
        self.monitoring.validate()?;
        self.api.validate()?;

        if let Some(file) = self.logging.file.as_deref()
            && (std::path::Path::new(file).is_absolute() || file.contains(".."))
        {
            return Err(ConfigError::config(
                "logging.file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Absolute path of the log file, when file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = self.logging.file.as_deref() else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets or connection strings).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max {} connections, timeout {}s, secure cookies: {}, trust proxy headers: {})",
            self.server.host,
            self.server.port,
            self.server.max_connections,
            self.server.request_timeout_secs,
            self.server.secure_cookies,
            self.server.trust_proxy_headers
        );
        info!(
            "  database: sqlite (pool {}, acquire timeout {}s)",
            self.database.max_connections, self.database.acquire_timeout_secs
        );
        info!(
            "  auth: HS256 (access {}s, refresh {}s, argon2id m={}KiB t={})",
            self.auth.access_token_ttl_secs,
            self.auth.refresh_token_ttl_secs,
            self.auth.hash_memory_kib,
            self.auth.hash_iterations
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
        info!(
            "  cache: {} (ttl {}s)",
            if self.cache.url.is_some() {
                "redis"
            } else {
                "disabled"
            },
            self.cache.ttl_secs
        );
        info!(
            "  monitoring: {} ({})",
            if self.monitoring.dsn.is_some() {
                "enabled"
            } else {
                "log only"
            },
            self.monitoring.environment
        );
        info!("  api: {}", self.api.base_url());
    }

    fn apply_env_overrides(&mut self) -> ConfigErrorResult<()> {
        // Server
        Self::apply_env_string("BFS_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("BFS_SERVER_PORT", &mut self.server.port)?;
        Self::apply_env_parse(
            "BFS_SERVER_MAX_CONNECTIONS",
            &mut self.server.max_connections,
        )?;
        Self::apply_env_parse(
            "BFS_SERVER_REQUEST_TIMEOUT_SECS",
            &mut self.server.request_timeout_secs,
        )?;
        Self::apply_env_bool("BFS_SECURE_COOKIES", &mut self.server.secure_cookies)?;
        Self::apply_env_bool(
            "BFS_SERVER_TRUST_PROXY_HEADERS",
            &mut self.server.trust_proxy_headers,
        )?;

        // Database
        Self::apply_env_option_string("DATABASE_URL", &mut self.database.url);
        Self::apply_env_parse(
            "BFS_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        )?;
        Self::apply_env_parse(
            "BFS_DATABASE_ACQUIRE_TIMEOUT_SECS",
            &mut self.database.acquire_timeout_secs,
        )?;

        // Auth
        Self::apply_env_option_string("AUTH_SECRET", &mut self.auth.secret);
        Self::apply_env_parse(
            "BFS_AUTH_ACCESS_TOKEN_TTL_SECS",
            &mut self.auth.access_token_ttl_secs,
        )?;
        Self::apply_env_parse(
            "BFS_AUTH_REFRESH_TOKEN_TTL_SECS",
            &mut self.auth.refresh_token_ttl_secs,
        )?;
        Self::apply_env_parse("BFS_AUTH_HASH_MEMORY_KIB", &mut self.auth.hash_memory_kib)?;
        Self::apply_env_parse("BFS_AUTH_HASH_ITERATIONS", &mut self.auth.hash_iterations)?;

        // Logging
        Self::apply_env_parse("BFS_LOG_LEVEL", &mut self.logging.level)?;
        Self::apply_env_bool("BFS_LOG_COLORED", &mut self.logging.colored)?;
        Self::apply_env_option_string("BFS_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("BFS_LOG_DIR", &mut self.logging.dir);

        // Rate limit
        Self::apply_env_parse(
            "BFS_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        )?;
        Self::apply_env_parse(
            "BFS_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        )?;

        // Cache
        Self::apply_env_option_string("CACHE_URL", &mut self.cache.url);
        Self::apply_env_parse("BFS_CACHE_TTL_SECS", &mut self.cache.ttl_secs)?;

        // Monitoring
        Self::apply_env_option_string("MONITORING_DSN", &mut self.monitoring.dsn);
        Self::apply_env_string(
            "BFS_MONITORING_ENVIRONMENT",
            &mut self.monitoring.environment,
        );

        // API
        Self::apply_env_string("PUBLIC_API_BASE_URL", &mut self.api.public_base_url);

        Ok(())
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values
    /// ("true"/"1"/"false"/"0", anything else is rejected)
    #[track_caller]
    fn apply_env_bool(var_name: &str, target: &mut bool) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(Self::invalid_env(var_name, &val)),
            };
        }
        Ok(())
    }

    /// Helper: Apply environment variable override for parseable values
    #[track_caller]
    fn apply_env_parse<T: std::str::FromStr>(
        var_name: &str,
        target: &mut T,
    ) -> ConfigErrorResult<()> {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| Self::invalid_env(var_name, &val))?;
        }
        Ok(())
    }

    #[track_caller]
    fn invalid_env(var_name: &str, val: &str) -> ConfigError {
        ConfigError::config(format!("{var_name} has an invalid value '{val}'"))
    }

    /// Helper: empty values clear the option
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            let trimmed = val.trim();
            *target = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }
}

/// `http://` or `https://` followed by a non-empty host
pub(crate) fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    matches!(rest, Some(rest) if !rest.is_empty() && !rest.starts_with('/'))
}
