//! Infrastructure layer for experiment A/B testing
//!
//! Pure statistics: descriptive statistics, Welch's t-test, effect sizes,
//! power analysis, significance verdicts and the sequential stopping policy.

mod distribution;
mod effect_size;
mod power;
mod significance;
mod statistical;
mod stopping;

pub use distribution::{normal_quantile, student_t_two_tailed};
pub use effect_size::{effect_size, interpret_effect_size};
pub use power::{min_sample_size, min_sample_size_default, DEFAULT_ALPHA, DEFAULT_POWER};
pub use significance::{
    calculate_significance, calculate_significance_default, MIN_SAMPLES_FOR_SIGNIFICANCE,
};
pub use statistical::{mean, sem, std_dev, summarize, variance, welch_t_test};
pub use stopping::{should_conclude_experiment, SequentialStoppingPolicy};
