use crate::api::extractors::client_ip::ClientIp;
use crate::{ApiError, AppState};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::warn;

/// Middleware: per-client rate limit for credential endpoints.
///
/// Rejected requests get 429 with `Retry-After` and never reach the handler.
pub async fn limit_by_client(
    State(state): State<AppState>,
    client: ClientIp,
    request: Request,
    next: Next,
) -> Response {
    if let Err(e) = state.rate_limiter.check(&client.0) {
        warn!(
            "Rate limit exceeded for {} on {}",
            client.0,
            request.uri().path()
        );
        state.metrics.rate_limited();
        return ApiError::from(e).into_response();
    }

    next.run(request).await
}
