//! Observability infrastructure - Metrics

mod config;
mod metrics;

pub use self::config::{MetricsConfig, ObservabilityConfig};
pub use self::metrics::{
    create_metrics_router, init_metrics, record_analysis, record_http_request,
    record_stopping_decision, record_verdict, PrometheusMetrics,
};
