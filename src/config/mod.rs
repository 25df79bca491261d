//! Application configuration loaded from files and `APP__*` environment variables

mod app_config;

pub use app_config::{AnalysisConfig, AppConfig, LogFormat, LoggingConfig, ServerConfig};
