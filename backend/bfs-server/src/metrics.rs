use std::time::Duration;

use metrics::{counter, histogram};

/// Counters and timings for the portal
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "bfs" }
    }

    /// Record a completed HTTP request
    pub fn request_completed(&self, method: &str, status: u16, latency: Duration) {
        counter!(
            format!("{}_http_requests_total", self.prefix),
            "method" => method.to_string(),
            "status" => status.to_string()
        )
        .increment(1);
        histogram!(format!("{}_http_request_duration_seconds", self.prefix))
            .record(latency.as_secs_f64());
    }

    /// Record a login attempt; `outcome` is `success` or `failure`
    pub fn login_attempt(&self, outcome: &'static str) {
        counter!(format!("{}_auth_logins_total", self.prefix), "outcome" => outcome).increment(1);
    }

    pub fn user_registered(&self) {
        counter!(format!("{}_auth_registrations_total", self.prefix)).increment(1);
    }

    pub fn token_refreshed(&self) {
        counter!(format!("{}_auth_refreshes_total", self.prefix)).increment(1);
    }

    /// Record a page request turned away by the route guard
    pub fn guard_denied(&self, reason: &'static str) {
        counter!(format!("{}_guard_denied_total", self.prefix), "reason" => reason).increment(1);
    }

    pub fn rate_limited(&self) {
        counter!(format!("{}_rate_limited_total", self.prefix)).increment(1);
    }

    /// Record a cache lookup; `result` is `hit`, `miss` or `error`
    pub fn cache_lookup(&self, result: &'static str) {
        counter!(format!("{}_cache_lookups_total", self.prefix), "result" => result).increment(1);
    }

    pub fn error_reported(&self) {
        counter!(format!("{}_errors_reported_total", self.prefix)).increment(1);
    }

    pub fn page_render_failed(&self) {
        counter!(format!("{}_page_render_failures_total", self.prefix)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
