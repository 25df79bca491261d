//! Statistical analysis functions for A/B testing
//!
//! Descriptive statistics plus Welch's t-test. None of these functions fail:
//! samples too small to say anything produce zeros or the neutral t-test.

use tracing::trace;

use super::distribution::student_t_two_tailed;
use crate::domain::experiment::{SummaryStats, TTestResult};

/// Calculate mean of a sample
pub fn mean(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }
    sample.iter().sum::<f64>() / sample.len() as f64
}

/// Calculate variance of a sample (sample variance, n-1 denominator)
pub fn variance(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }

    let m = mean(sample);
    let n = sample.len() as f64;
    sample.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (n - 1.0)
}

/// Calculate standard deviation of a sample
pub fn std_dev(sample: &[f64]) -> f64 {
    variance(sample).sqrt()
}

/// Calculate the standard error of the mean
pub fn sem(sample: &[f64]) -> f64 {
    if sample.len() < 2 {
        return 0.0;
    }

    std_dev(sample) / (sample.len() as f64).sqrt()
}

/// Summarize a sample into count, mean, standard deviation and SEM
pub fn summarize(sample: &[f64]) -> SummaryStats {
    SummaryStats {
        n: sample.len(),
        mean: mean(sample),
        std_dev: std_dev(sample),
        sem: sem(sample),
    }
}

/// Welch's t-test for two independent samples
///
/// Welch's t-test is preferred over Student's t-test when the two samples
/// may have unequal variances and/or unequal sample sizes.
///
/// # Arguments
/// * `sample_a` - Outcomes observed for variant A
/// * `sample_b` - Outcomes observed for variant B
///
/// # Returns
/// The t statistic (signed as mean A - mean B), Welch-Satterthwaite degrees
/// of freedom and two-tailed p-value. [`TTestResult::NEUTRAL`] when either
/// sample has fewer than 2 elements or both samples have zero variance.
pub fn welch_t_test(sample_a: &[f64], sample_b: &[f64]) -> TTestResult {
    if sample_a.len() < 2 || sample_b.len() < 2 {
        return TTestResult::NEUTRAL;
    }

    let n_a = sample_a.len() as f64;
    let n_b = sample_b.len() as f64;

    let var_a = variance(sample_a);
    let var_b = variance(sample_b);

    if var_a + var_b == 0.0 {
        return TTestResult::NEUTRAL;
    }

    let se_a = var_a / n_a;
    let se_b = var_b / n_b;
    let se = (se_a + se_b).sqrt();

    let t = (mean(sample_a) - mean(sample_b)) / se;

    // Welch-Satterthwaite degrees of freedom
    let df_num = (se_a + se_b).powi(2);
    let df_denom = se_a.powi(2) / (n_a - 1.0) + se_b.powi(2) / (n_b - 1.0);
    let df = df_num / df_denom;

    if !t.is_finite() || !df.is_finite() {
        // Variances this large overflow f64; there is nothing meaningful to report
        trace!(t, df, "Welch t-test overflowed, returning neutral result");
        return TTestResult::NEUTRAL;
    }

    TTestResult {
        t_statistic: t,
        degrees_of_freedom: df,
        p_value: student_t_two_tailed(t, df),
    }
}
