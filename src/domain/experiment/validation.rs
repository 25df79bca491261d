//! Experiment input validation utilities
//!
//! The statistics engine assumes finite samples and sane parameters; these
//! checks run upstream of it, at the service boundary.

use thiserror::Error;

use super::decision::StoppingConfig;

/// Per-variant sample count below which no significance verdict is attempted
pub const MIN_SAMPLES_FOR_SIGNIFICANCE: usize = 5;

/// Validation errors for analysis requests
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExperimentValidationError {
    #[error("Variant {variant} contains a non-finite value at index {index}")]
    NonFiniteSample { variant: char, index: usize },

    #[error("Alpha must be strictly between 0 and 1, got {0}")]
    InvalidAlpha(f64),

    #[error("Power must be strictly between 0 and 1, got {0}")]
    InvalidPower(f64),

    #[error("Effect size must be a finite number, got {0}")]
    InvalidEffectSize(f64),

    #[error("Maximum samples per variant must be at least 1")]
    InvalidMaxSamples,

    #[error("Stopping threshold {field} {requirement}")]
    InvalidStoppingThreshold {
        field: &'static str,
        requirement: String,
    },
}

/// Validate that every value in a variant's sample is finite
pub fn validate_samples(variant: char, sample: &[f64]) -> Result<(), ExperimentValidationError> {
    match sample.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(ExperimentValidationError::NonFiniteSample { variant, index }),
        None => Ok(()),
    }
}

/// Validate a significance level
pub fn validate_alpha(alpha: f64) -> Result<(), ExperimentValidationError> {
    if is_open_unit_interval(alpha) {
        Ok(())
    } else {
        Err(ExperimentValidationError::InvalidAlpha(alpha))
    }
}

/// Validate a statistical power target
pub fn validate_power(power: f64) -> Result<(), ExperimentValidationError> {
    if is_open_unit_interval(power) {
        Ok(())
    } else {
        Err(ExperimentValidationError::InvalidPower(power))
    }
}

/// Validate a target effect size for sample-size planning
pub fn validate_effect_size(effect_size: f64) -> Result<(), ExperimentValidationError> {
    if effect_size.is_finite() {
        Ok(())
    } else {
        Err(ExperimentValidationError::InvalidEffectSize(effect_size))
    }
}

/// Validate the per-variant sample cap of a stopping policy
pub fn validate_max_samples(max_samples: usize) -> Result<(), ExperimentValidationError> {
    if max_samples == 0 {
        return Err(ExperimentValidationError::InvalidMaxSamples);
    }

    Ok(())
}

/// Validate configured stopping thresholds
///
/// Every sample threshold must reach the significance gate, otherwise the
/// verdict-driven rules would act on the inconclusive placeholder.
pub fn validate_stopping_config(config: &StoppingConfig) -> Result<(), ExperimentValidationError> {
    validate_alpha(config.alpha)?;

    let probabilities = [
        ("early_stop_p_value", config.early_stop_p_value),
        ("futility_p_value", config.futility_p_value),
    ];
    for (field, value) in probabilities {
        if !is_open_unit_interval(value) {
            return Err(ExperimentValidationError::InvalidStoppingThreshold {
                field,
                requirement: format!("must be strictly between 0 and 1, got {}", value),
            });
        }
    }

    let sample_floors = [
        ("min_samples_per_variant", config.min_samples_per_variant),
        ("early_stop_min_samples", config.early_stop_min_samples),
        ("futility_min_samples", config.futility_min_samples),
    ];
    for (field, value) in sample_floors {
        if value < MIN_SAMPLES_FOR_SIGNIFICANCE {
            return Err(ExperimentValidationError::InvalidStoppingThreshold {
                field,
                requirement: format!(
                    "must be at least {}, got {}",
                    MIN_SAMPLES_FOR_SIGNIFICANCE, value
                ),
            });
        }
    }

    if config.max_samples_per_variant < config.min_samples_per_variant {
        return Err(ExperimentValidationError::InvalidStoppingThreshold {
            field: "max_samples_per_variant",
            requirement: format!(
                "must be at least min_samples_per_variant ({}), got {}",
                config.min_samples_per_variant, config.max_samples_per_variant
            ),
        });
    }

    Ok(())
}

/// True when `value` lies strictly inside (0, 1)
pub(crate) fn is_open_unit_interval(value: f64) -> bool {
    value > 0.0 && value < 1.0
}
