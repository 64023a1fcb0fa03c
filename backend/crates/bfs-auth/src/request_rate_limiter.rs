use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::num::NonZeroU32;
use std::panic::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

/// Rate limiter keyed by client (usually the remote address).
///
/// Each key may burst up to `max_requests` and regains one request every
/// `window_secs / max_requests`. Idle keys are dropped every
/// `PRUNE_INTERVAL` checks.
pub struct RequestRateLimiter {
    limiter: DefaultKeyedRateLimiter<String>,
    config: RateLimitConfig,
    checks: AtomicU64,
}

const PRUNE_INTERVAL: u64 = 1024;

impl RequestRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let burst = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs(config.window_secs.max(1)) / burst.get();
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(burst))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
            checks: AtomicU64::new(0),
        }
    }

    /// Check if a request from `key` is allowed, returns error if rate limited
    #[track_caller]
    pub fn check(&self, key: &str) -> AuthErrorResult<()> {
        if self.checks.fetch_add(1, Ordering::Relaxed) % PRUNE_INTERVAL == PRUNE_INTERVAL - 1 {
            self.prune();
        }

        self.limiter
            .check_key(&key.to_string())
            .map_err(|_| AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Drop state for keys that are back to a full quota
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }

    pub fn tracked_keys(&self) -> usize {
        self.limiter.len()
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

impl Default for RequestRateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}
