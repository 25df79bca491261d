//! Standardized effect size (Cohen's d)

use super::statistical::{mean, variance};
use crate::domain::experiment::EffectMagnitude;

/// Cohen's d using the pooled standard deviation
///
/// Positive when variant A has the larger mean. Returns 0 when either group
/// has fewer than 2 observations or the pooled standard deviation is 0.
pub fn effect_size(sample_a: &[f64], sample_b: &[f64]) -> f64 {
    if sample_a.len() < 2 || sample_b.len() < 2 {
        return 0.0;
    }

    let n_a = sample_a.len() as f64;
    let n_b = sample_b.len() as f64;

    let pooled_var =
        ((n_a - 1.0) * variance(sample_a) + (n_b - 1.0) * variance(sample_b)) / (n_a + n_b - 2.0);
    let pooled_sd = pooled_var.sqrt();

    if pooled_sd == 0.0 || !pooled_sd.is_finite() {
        return 0.0;
    }

    (mean(sample_a) - mean(sample_b)) / pooled_sd
}

/// Categorize an effect size by magnitude
pub fn interpret_effect_size(d: f64) -> EffectMagnitude {
    EffectMagnitude::from_cohens_d(d)
}
