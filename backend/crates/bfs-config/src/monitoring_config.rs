use crate::{ConfigError, ConfigErrorResult, DEFAULT_MONITORING_ENVIRONMENT, config::is_http_url};

use serde::Deserialize;

/// Where unexpected errors are reported
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    /// Collector endpoint (`MONITORING_DSN`); reports are only logged when unset
    pub dsn: Option<String>,
    /// Environment tag attached to every report
    pub environment: String,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: String::from(DEFAULT_MONITORING_ENVIRONMENT),
        }
    }
}

impl MonitoringConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(dsn) = self.dsn.as_deref()
            && !is_http_url(dsn)
        {
            return Err(ConfigError::monitoring(
                "MONITORING_DSN must be an http:// or https:// URL",
            ));
        }
        Ok(())
    }
}
