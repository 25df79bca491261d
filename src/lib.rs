//! PMP Experiment Stats
//!
//! Statistics engine for sequential A/B tests on continuous metrics:
//! - Descriptive statistics and Welch's unequal-variance t-test
//! - Cohen's d effect size and power-analysis sample sizing
//! - Significance verdicts with human-readable recommendations
//! - Checkpoint stopping rules (max samples, clear winner, futility)
//!
//! The engine in [`infrastructure::experiment`] is pure and never fails;
//! degenerate input yields neutral values. Validation, configuration, logging
//! and metrics live in [`infrastructure::services`] and the HTTP/CLI hosts.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::AppConfig;
pub use domain::{
    DomainError, EffectMagnitude, ExperimentReport, SignificanceVerdict, StoppingConfig,
    StoppingDecision, StoppingReason, SummaryStats, TTestResult, Winner,
};
pub use infrastructure::experiment::{
    calculate_significance, calculate_significance_default, effect_size, interpret_effect_size,
    mean, min_sample_size, min_sample_size_default, sem, should_conclude_experiment, std_dev,
    variance, welch_t_test, SequentialStoppingPolicy,
};
pub use infrastructure::services::{AnalysisOverrides, ExperimentAnalysisService, SamplePair};
