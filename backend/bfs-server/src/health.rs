use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// GET /health - Comprehensive health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = database_ready(&state).await;

    let cache = if !state.cache.is_enabled() {
        "disabled"
    } else {
        match state.cache.ping().await {
            Ok(()) => "operational",
            Err(e) => {
                warn!("Health check: cache unavailable: {}", e);
                "unavailable"
            }
        }
    };

    let (status, code) = if database_ok {
        ("healthy", StatusCode::OK)
    } else {
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
            "cache": cache,
            "monitoring": if state.reporter.is_enabled() { "enabled" } else { "disabled" },
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (code, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe; ready once the database answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if database_ready(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.prometheus.render(),
    )
        .into_response()
}

async fn database_ready(state: &AppState) -> bool {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Health check: database unavailable: {}", e);
            false
        }
    }
}
