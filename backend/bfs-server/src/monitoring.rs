//! Forwarding of unexpected errors to an external collector.
//!
//! Handlers never talk to the collector directly: `ApiError` attaches an
//! [`ErrorEvent`] to 500 responses and [`capture_errors`] hands it to the
//! [`ErrorReporter`], which posts it in the background. Without a
//! `MONITORING_DSN` events are only logged.

use crate::AppState;
use crate::error::{Result as ServerErrorResult, ServerError};

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::{error, warn};
use serde::Serialize;

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Internal failure attached to a response for reporting
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub message: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(flatten)]
    event: &'a ErrorEvent,
    level: &'static str,
    environment: &'a str,
    release: &'static str,
    timestamp: String,
}

struct Collector {
    client: reqwest::Client,
    dsn: String,
}

#[derive(Clone)]
pub struct ErrorReporter {
    collector: Option<Arc<Collector>>,
    environment: Arc<str>,
}

impl ErrorReporter {
    pub fn new(dsn: Option<&str>, environment: &str) -> ServerErrorResult<Self> {
        let collector = match dsn {
            Some(dsn) => {
                let client = reqwest::Client::builder()
                    .timeout(DELIVERY_TIMEOUT)
                    .pool_max_idle_per_host(1)
                    .build()
                    .map_err(|e| ServerError::Monitoring {
                        message: format!("Failed to create HTTP client: {e}"),
                    })?;
                Some(Arc::new(Collector {
                    client,
                    dsn: dsn.to_string(),
                }))
            }
            None => None,
        };

        Ok(Self {
            collector,
            environment: Arc::from(environment),
        })
    }

    /// Reporter that only logs
    pub fn disabled() -> Self {
        Self {
            collector: None,
            environment: Arc::from("test"),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.collector.is_some()
    }

    /// Log the event and, when a collector is configured, deliver it without
    /// waiting for the result.
    pub fn capture(&self, event: ErrorEvent) {
        error!(
            "Unexpected error on {} {}: {} {}",
            event.method.as_deref().unwrap_or("-"),
            event.path.as_deref().unwrap_or("-"),
            event.message,
            event.location
        );

        let Some(collector) = self.collector.clone() else {
            return;
        };
        let environment = Arc::clone(&self.environment);

        tokio::spawn(async move {
            let envelope = Envelope {
                event: &event,
                level: "error",
                environment: &environment,
                release: env!("CARGO_PKG_VERSION"),
                timestamp: chrono::Utc::now().to_rfc3339(),
            };

            match collector.client.post(&collector.dsn).json(&envelope).send().await {
                Ok(resp) if resp.status().is_success() => {}
                Ok(resp) => warn!("Monitoring collector rejected event: HTTP {}", resp.status()),
                Err(e) => warn!("Failed to deliver monitoring event: {}", e),
            }
        });
    }
}

/// Middleware: report internal errors attached to responses.
pub async fn capture_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Some(mut event) = response.extensions_mut().remove::<ErrorEvent>() {
        event.method = Some(method);
        event.path = Some(path);
        state.metrics.error_reported();
        state.reporter.capture(event);
    }

    response
}
