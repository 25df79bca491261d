use serde::Deserialize;

use crate::domain::experiment::{validate_power, validate_stopping_config, StoppingConfig};
use crate::domain::DomainError;
use crate::infrastructure::observability::ObservabilityConfig;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub observability: ObservabilityConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Defaults applied to analysis requests that omit their own parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Target power for sample-size planning
    pub power: f64,
    /// Stopping policy thresholds, including the default alpha
    pub stopping: StoppingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            power: 0.8,
            stopping: StoppingConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Reject settings the server cannot run with
    ///
    /// Request-level overrides are validated per request; these are the
    /// defaults every request falls back to.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_stopping_config(&self.analysis.stopping)
            .map_err(|e| DomainError::configuration(format!("analysis.stopping: {}", e)))?;
        validate_power(self.analysis.power)
            .map_err(|e| DomainError::configuration(format!("analysis.power: {}", e)))?;
        self.observability
            .metrics
            .validate_path()
            .map_err(|e| DomainError::configuration(format!("observability.metrics.path {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.analysis.power, 0.8);
        assert_eq!(config.analysis.stopping, StoppingConfig::default());
    }

    #[test]
    fn test_empty_source_uses_defaults() {
        let config = from_toml("");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.analysis.stopping.max_samples_per_variant, 100);
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml(
            r#"
            [logging]
            format = "json"

            [analysis.stopping]
            alpha = 0.01
            max_samples_per_variant = 500
            "#,
        );

        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.analysis.stopping.alpha, 0.01);
        assert_eq!(config.analysis.stopping.max_samples_per_variant, 500);
        assert_eq!(config.analysis.stopping.min_samples_per_variant, 10);
    }

    mod validation {
        use super::*;

        #[test]
        fn test_defaults_are_valid() {
            assert!(AppConfig::default().validate().is_ok());
            assert!(from_toml("").validate().is_ok());
        }

        #[test]
        fn test_low_futility_floor_rejected() {
            let config = from_toml(
                r#"
                [analysis.stopping]
                min_samples_per_variant = 5
                futility_min_samples = 3
                "#,
            );

            let err = config.validate().unwrap_err();
            assert!(matches!(err, DomainError::Configuration { .. }));
            assert!(err.to_string().contains("futility_min_samples"));
            assert!(err.to_string().contains("at least 5"));
        }

        #[test]
        fn test_out_of_range_alpha_rejected() {
            let config = from_toml(
                r#"
                [analysis.stopping]
                alpha = 1.5
                "#,
            );

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("analysis.stopping"));
        }

        #[test]
        fn test_out_of_range_power_rejected() {
            let config = from_toml(
                r#"
                [analysis]
                power = 1.0
                "#,
            );

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("analysis.power"));
        }

        #[test]
        fn test_relative_metrics_path_rejected() {
            let config = from_toml(
                r#"
                [observability.metrics]
                path = "metrics"
                "#,
            );

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("observability.metrics.path"));
        }
    }
}
