use bfs_server::{
    AppState, AppStateParts, AuthService, CookieSettings, ErrorReporter, Metrics, RequestLimits,
    build_router, logger,
};

use bfs_auth::{JwtValidator, PasswordHasher, RequestRateLimiter, TokenIssuer};
use bfs_db::Cache;

use std::error::Error;
use std::net::SocketAddr;
use std::time::Duration;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Local development convenience; real deployments set the environment
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = bfs_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting bfs-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Database
    let pool = bfs_db::connect(
        config.database.url(),
        config.database.max_connections,
        Duration::from_secs(config.database.acquire_timeout_secs),
    )
    .await?;
    info!("Database connection established");

    info!("Running database migrations...");
    bfs_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Cache (optional)
    let cache = match config.cache.url.as_deref() {
        Some(url) => Cache::connect(url, config.cache.ttl_secs).await?,
        None => {
            warn!("CACHE_URL not set; caching disabled");
            Cache::disabled()
        }
    };

    // Metrics exporter
    let prometheus = PrometheusBuilder::new().install_recorder().map_err(|e| {
        bfs_server::error::ServerError::Metrics {
            message: format!("Failed to install Prometheus recorder: {e}"),
        }
    })?;

    // Error monitoring (optional)
    let reporter = ErrorReporter::new(
        config.monitoring.dsn.as_deref(),
        &config.monitoring.environment,
    )?;
    if !reporter.is_enabled() {
        warn!("MONITORING_DSN not set; errors are only logged");
    }

    // Auth
    let secret = config.auth.secret_bytes();
    let hasher = PasswordHasher::new(config.auth.hash_memory_kib, config.auth.hash_iterations)?;
    let issuer = TokenIssuer::with_hs256(
        secret,
        chrono::Duration::seconds(config.auth.access_token_ttl_secs),
    );
    let validator = JwtValidator::with_hs256(secret);
    let auth = AuthService::new(
        pool.clone(),
        hasher,
        issuer,
        validator,
        chrono::Duration::seconds(config.auth.refresh_token_ttl_secs),
        Metrics::new(),
    );

    let rate_limiter = RequestRateLimiter::new(bfs_auth::RateLimitConfig {
        max_requests: config.rate_limit.max_requests,
        window_secs: config.rate_limit.window_secs,
    });

    // Build application state
    let app_state = AppState::new(AppStateParts {
        pool,
        cache,
        auth,
        rate_limiter,
        reporter,
        prometheus,
        cookies: CookieSettings {
            secure: config.server.secure_cookies,
            access_ttl_secs: config.auth.access_token_ttl_secs,
            refresh_ttl_secs: config.auth.refresh_token_ttl_secs,
        },
        limits: RequestLimits {
            max_concurrent: config.server.max_connections,
            timeout: Duration::from_secs(config.server.request_timeout_secs),
        },
        trust_proxy_headers: config.server.trust_proxy_headers,
    })?;

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);
    info!("Public API base URL: {}", config.api.base_url());

    // Start server with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
