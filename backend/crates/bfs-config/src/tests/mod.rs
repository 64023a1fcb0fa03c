mod auth;
mod deployment_urls;
mod log_level;

use std::env;

use tempfile::TempDir;

pub(crate) const TEST_DATABASE_URL: &str = "sqlite::memory:";
pub(crate) const TEST_AUTH_SECRET: &str = "test-secret-that-is-at-least-32-chars-long";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config dir plus a clean deployment environment with the
/// required variables set.
pub(crate) struct TestEnv {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

pub(crate) fn setup_env() -> TestEnv {
    let dir = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("BFS_CONFIG_DIR", dir.path().to_str().unwrap()),
        EnvGuard::set("DATABASE_URL", TEST_DATABASE_URL),
        EnvGuard::set("AUTH_SECRET", TEST_AUTH_SECRET),
        EnvGuard::remove("CACHE_URL"),
        EnvGuard::remove("MONITORING_DSN"),
        EnvGuard::remove("PUBLIC_API_BASE_URL"),
        EnvGuard::remove("BFS_SERVER_PORT"),
        EnvGuard::remove("BFS_LOG_FILE"),
        EnvGuard::remove("BFS_LOG_COLORED"),
        EnvGuard::remove("BFS_SECURE_COOKIES"),
        EnvGuard::remove("BFS_SERVER_TRUST_PROXY_HEADERS"),
    ];
    TestEnv {
        dir,
        _guards: guards,
    }
}
