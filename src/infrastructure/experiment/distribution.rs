//! Probability distributions used by the significance tests
//!
//! Thin guards over `statrs` that turn degenerate arguments into neutral
//! values instead of errors or panics.

use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Two-tailed p-value `P(|T| >= |t|)` for Student's t with `df` degrees of freedom
///
/// Degenerate arguments resolve to the neutral answer: NaN or non-positive
/// `df` gives 1, an infinite statistic gives 0. The result is clamped to [0, 1].
pub fn student_t_two_tailed(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return 1.0;
    }

    let t = t.abs();

    if t == 0.0 {
        return 1.0;
    }
    if t.is_infinite() {
        return 0.0;
    }

    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * dist.sf(t)).clamp(0.0, 1.0),
        Err(_) => 1.0,
    }
}

/// Standard normal quantile (inverse CDF)
///
/// Returns negative or positive infinity at 0 and 1, NaN outside [0, 1].
pub fn normal_quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    match Normal::new(0.0, 1.0) {
        Ok(normal) => normal.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}
