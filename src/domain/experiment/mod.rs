//! Experiment domain module for A/B testing
//!
//! This module provides the value types produced by the statistics engine:
//! summary statistics, t-test results, significance verdicts and stopping
//! decisions.

mod decision;
mod result;
mod validation;

// Re-export all public types
pub use decision::{StoppingConfig, StoppingDecision, StoppingReason};
pub use result::{
    EffectMagnitude, ExperimentReport, SignificanceVerdict, SummaryStats, TTestResult, Winner,
};
pub use validation::{
    validate_alpha, validate_effect_size, validate_max_samples, validate_power, validate_samples,
    validate_stopping_config, ExperimentValidationError, MIN_SAMPLES_FOR_SIGNIFICANCE,
};

pub(crate) use validation::is_open_unit_interval;
