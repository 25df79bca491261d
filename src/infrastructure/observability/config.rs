//! Metrics exporter settings

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics: MetricsConfig,
}

/// Prometheus exporter settings
///
/// Disabling the exporter leaves the counters as no-ops and drops the scrape route.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route the scrape endpoint is mounted on
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Check that `path` can be mounted as an axum route
    ///
    /// Only checked while the exporter is enabled.
    pub fn validate_path(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        if !self.path.starts_with('/') {
            return Err(format!("must start with '/', got '{}'", self.path));
        }
        if self.path.starts_with("/v1") || self.path == "/health" || self.path == "/live" {
            return Err(format!("'{}' collides with an API route", self.path));
        }

        Ok(())
    }
}
