//! Significance verdicts combining Welch's t-test and Cohen's d

use tracing::{debug, warn};

use super::effect_size::{effect_size, interpret_effect_size};
use super::power::DEFAULT_ALPHA;
use super::statistical::{mean, welch_t_test};
use crate::domain::experiment::{is_open_unit_interval, SignificanceVerdict, Winner};

pub use crate::domain::experiment::MIN_SAMPLES_FOR_SIGNIFICANCE;

/// Calculate a significance verdict for an A/B comparison
///
/// # Arguments
/// * `sample_a` - Outcomes observed for variant A
/// * `sample_b` - Outcomes observed for variant B
/// * `alpha` - Significance level; values outside (0, 1) fall back to 0.05
///
/// # Returns
/// An inconclusive verdict with zero confidence while either variant has
/// fewer than 5 samples; otherwise the winner (if `p < alpha`), confidence,
/// effect size and a plain-text recommendation.
pub fn calculate_significance(sample_a: &[f64], sample_b: &[f64], alpha: f64) -> SignificanceVerdict {
    let n_a = sample_a.len();
    let n_b = sample_b.len();

    if n_a.min(n_b) < MIN_SAMPLES_FOR_SIGNIFICANCE {
        debug!(n_a, n_b, "Not enough samples for a significance verdict");

        return SignificanceVerdict::inconclusive(format!(
            "Need at least {} samples per variant. Currently have {} for Variant A and {} for Variant B.",
            MIN_SAMPLES_FOR_SIGNIFICANCE, n_a, n_b
        ));
    }

    let alpha = if is_open_unit_interval(alpha) {
        alpha
    } else {
        warn!(alpha, "Alpha outside (0, 1), using default");
        DEFAULT_ALPHA
    };

    let t_test = welch_t_test(sample_a, sample_b);
    let d = effect_size(sample_a, sample_b);
    let interpretation = interpret_effect_size(d);
    let p_value = t_test.p_value;

    let mean_a = mean(sample_a);
    let mean_b = mean(sample_b);

    let winner = if p_value < alpha && mean_a > mean_b {
        Winner::A
    } else if p_value < alpha && mean_b > mean_a {
        Winner::B
    } else {
        Winner::Inconclusive
    };

    let confidence = ((1.0 - p_value) * 100.0).clamp(0.0, 100.0);

    let recommendation = match winner.variant_label() {
        Some(label) => format!(
            "{} is likely better ({:.1}% confidence, {} effect, p = {:.4}). Consider rolling out {}.",
            label, confidence, interpretation, p_value, label
        ),
        None => format!(
            "Insufficient evidence to pick a winner (p = {:.4}, {} effect). Keep collecting data or treat the variants as equivalent.",
            p_value, interpretation
        ),
    };

    debug!(
        n_a,
        n_b,
        p_value,
        effect_size = d,
        winner = %winner,
        "Calculated significance"
    );

    SignificanceVerdict {
        winner,
        confidence,
        p_value,
        effect_size: d,
        effect_interpretation: interpretation,
        recommendation,
    }
}

/// [`calculate_significance`] at alpha = 0.05
pub fn calculate_significance_default(sample_a: &[f64], sample_b: &[f64]) -> SignificanceVerdict {
    calculate_significance(sample_a, sample_b, DEFAULT_ALPHA)
}
