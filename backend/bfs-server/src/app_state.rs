use crate::Metrics;
use crate::api::cookies::CookieSettings;
use crate::error::Result as ServerErrorResult;
use crate::monitoring::ErrorReporter;
use crate::pages::renderer::PageRenderer;
use crate::services::{
    account_service::AccountService, auth_service::AuthService, contact_service::ContactService,
    dashboard_service::DashboardService,
};

use bfs_auth::{RequestRateLimiter, RouteGuard};
use bfs_db::Cache;

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub cache: Cache,
    pub auth: AuthService,
    pub account: AccountService,
    pub dashboard: DashboardService,
    pub contact: ContactService,
    pub guard: Arc<RouteGuard>,
    pub rate_limiter: Arc<RequestRateLimiter>,
    pub renderer: Arc<PageRenderer>,
    pub reporter: ErrorReporter,
    pub metrics: Metrics,
    pub prometheus: PrometheusHandle,
    pub cookies: CookieSettings,
    pub limits: RequestLimits,
    /// Rate-limit on forwarded headers instead of the socket peer
    pub trust_proxy_headers: bool,
}

/// Server-wide bounds applied by the router
#[derive(Debug, Clone, Copy)]
pub struct RequestLimits {
    pub max_concurrent: usize,
    pub timeout: Duration,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_concurrent: 512,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Externally constructed pieces of [`AppState`]
pub struct AppStateParts {
    pub pool: SqlitePool,
    pub cache: Cache,
    pub auth: AuthService,
    pub rate_limiter: RequestRateLimiter,
    pub reporter: ErrorReporter,
    pub prometheus: PrometheusHandle,
    pub cookies: CookieSettings,
    pub limits: RequestLimits,
    pub trust_proxy_headers: bool,
}

impl AppState {
    /// Wire the services together and compile the page templates.
    pub fn new(parts: AppStateParts) -> ServerErrorResult<Self> {
        let metrics = Metrics::new();
        let renderer = PageRenderer::new(metrics.clone())?;

        Ok(Self {
            account: AccountService::new(parts.pool.clone(), parts.auth.clone()),
            dashboard: DashboardService::new(
                parts.pool.clone(),
                parts.cache.clone(),
                metrics.clone(),
            ),
            contact: ContactService::new(parts.pool.clone()),
            pool: parts.pool,
            cache: parts.cache,
            auth: parts.auth,
            guard: Arc::new(RouteGuard::with_default_routes()),
            rate_limiter: Arc::new(parts.rate_limiter),
            renderer: Arc::new(renderer),
            reporter: parts.reporter,
            metrics,
            prometheus: parts.prometheus,
            cookies: parts.cookies,
            limits: parts.limits,
            trust_proxy_headers: parts.trust_proxy_headers,
        })
    }
}
