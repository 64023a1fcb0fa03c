mod api_config;
mod auth_config;
mod cache_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod monitoring_config;
mod rate_limit_config;
mod server_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use cache_config::CacheConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use monitoring_config::MonitoringConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_CONNECTIONS: usize = 512;
const MIN_MAX_CONNECTIONS: usize = 1;
const MAX_MAX_CONNECTIONS: usize = 10_000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// Database
const DEFAULT_DB_POOL_SIZE: u32 = 10;
const MAX_DB_POOL_SIZE: u32 = 100;
const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// Auth
const MIN_AUTH_SECRET_LENGTH: usize = 32;
const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;
const MIN_ACCESS_TOKEN_TTL_SECS: i64 = 60;
const MAX_ACCESS_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;
const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;
const MAX_REFRESH_TOKEN_TTL_SECS: i64 = 90 * 24 * 60 * 60;
const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;
const MIN_HASH_MEMORY_KIB: u32 = 19_456;
const DEFAULT_HASH_ITERATIONS: u32 = 2;
const MIN_HASH_ITERATIONS: u32 = 2;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Cache
const DEFAULT_CACHE_TTL_SECS: u64 = 60;
const MAX_CACHE_TTL_SECS: u64 = 24 * 60 * 60;

// Monitoring
const DEFAULT_MONITORING_ENVIRONMENT: &str = "production";

// API
const DEFAULT_PUBLIC_API_BASE_URL: &str = "http://127.0.0.1:8000";
