//! Power analysis for sample-size planning

use tracing::warn;

use super::distribution::normal_quantile;
use crate::domain::experiment::is_open_unit_interval;

/// Default statistical power (1 - beta)
pub const DEFAULT_POWER: f64 = 0.8;

/// Default significance level
pub const DEFAULT_ALPHA: f64 = 0.05;

/// z_{alpha/2} for the default 95% confidence level
const Z_ALPHA_HALF_DEFAULT: f64 = 1.96;

/// z_beta for the default 80% power
const Z_BETA_DEFAULT: f64 = 0.84;

/// Minimum samples per variant needed to detect effect size `d`
///
/// Closed-form two-sample estimate `n = 2 * ((z_{alpha/2} + z_beta) / d)^2`,
/// rounded up. Out-of-range `power` or `alpha` fall back to the defaults.
/// A zero or NaN effect can never be detected and yields `u64::MAX`.
pub fn min_sample_size(effect_size: f64, power: f64, alpha: f64) -> u64 {
    let d = effect_size.abs();

    if d.is_nan() || d == 0.0 {
        return u64::MAX;
    }

    let (z_alpha_half, z_beta) = z_scores(power, alpha);
    let n = 2.0 * ((z_alpha_half + z_beta) / d).powi(2);

    // Float-to-int casts saturate, so absurdly small effects clamp to u64::MAX
    n.ceil() as u64
}

/// [`min_sample_size`] at 80% power and alpha = 0.05
pub fn min_sample_size_default(effect_size: f64) -> u64 {
    min_sample_size(effect_size, DEFAULT_POWER, DEFAULT_ALPHA)
}

fn z_scores(power: f64, alpha: f64) -> (f64, f64) {
    let power = if is_open_unit_interval(power) {
        power
    } else {
        warn!(power, "Power outside (0, 1), using default");
        DEFAULT_POWER
    };

    let alpha = if is_open_unit_interval(alpha) {
        alpha
    } else {
        warn!(alpha, "Alpha outside (0, 1), using default");
        DEFAULT_ALPHA
    };

    let z_alpha_half = if alpha == DEFAULT_ALPHA {
        Z_ALPHA_HALF_DEFAULT
    } else {
        normal_quantile(1.0 - alpha / 2.0)
    };

    let z_beta = if power == DEFAULT_POWER {
        Z_BETA_DEFAULT
    } else {
        normal_quantile(power)
    };

    (z_alpha_half, z_beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smaller_effect_needs_more_samples() {
        assert!(min_sample_size_default(0.2) > min_sample_size_default(0.8));
        assert!(min_sample_size_default(0.5) > min_sample_size_default(0.8));
    }

    #[test]
    fn test_medium_effect_range() {
        let n = min_sample_size_default(0.5);

        // 2 * (2.8 / 0.5)^2 = 62.72, rounded up
        assert_eq!(n, 63);
        assert!(n > 50 && n < 100);
    }

    #[test]
    fn test_known_values() {
        // 2 * (2.8 / 0.2)^2 = 392
        assert_eq!(min_sample_size_default(0.2), 392);
        // 2 * (2.8 / 0.8)^2 = 24.5
        assert_eq!(min_sample_size_default(0.8), 25);
    }

    #[test]
    fn test_sign_independent() {
        assert_eq!(min_sample_size_default(-0.5), min_sample_size_default(0.5));
    }

    #[test]
    fn test_zero_effect_is_unreachable() {
        assert_eq!(min_sample_size_default(0.0), u64::MAX);
        assert_eq!(min_sample_size_default(f64::NAN), u64::MAX);
        assert_eq!(min_sample_size_default(1e-300), u64::MAX);
    }

    #[test]
    fn test_higher_power_needs_more_samples() {
        assert!(min_sample_size(0.5, 0.9, 0.05) > min_sample_size(0.5, 0.8, 0.05));
    }

    #[test]
    fn test_stricter_alpha_needs_more_samples() {
        assert!(min_sample_size(0.5, 0.8, 0.01) > min_sample_size(0.5, 0.8, 0.05));
    }

    #[test]
    fn test_invalid_parameters_use_defaults() {
        let baseline = min_sample_size_default(0.5);

        assert_eq!(min_sample_size(0.5, 1.5, 0.05), baseline);
        assert_eq!(min_sample_size(0.5, 0.8, 0.0), baseline);
        assert_eq!(min_sample_size(0.5, f64::NAN, f64::NAN), baseline);
    }
}
