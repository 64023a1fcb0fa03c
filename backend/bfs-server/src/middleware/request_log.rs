use crate::AppState;

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::{debug, info, warn};

/// Middleware: one log line and one metrics sample per request.
pub async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency = started.elapsed();
    state
        .metrics
        .request_completed(method.as_str(), status.as_u16(), latency);

    if status.is_server_error() {
        warn!("{} {} -> {} ({:?})", method, path, status.as_u16(), latency);
    } else if path == "/live" || path == "/ready" || path == "/metrics" {
        debug!("{} {} -> {} ({:?})", method, path, status.as_u16(), latency);
    } else {
        info!("{} {} -> {} ({:?})", method, path, status.as_u16(), latency);
    }

    response
}
