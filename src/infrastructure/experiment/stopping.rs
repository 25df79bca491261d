//! Sequential stopping policy for running experiments
//!
//! The policy is a checkpoint function: every call re-derives the decision
//! from the full sample history, so it can be evaluated from any number of
//! callers without coordination.

use tracing::debug;

use super::power::min_sample_size_default;
use super::significance::{calculate_significance, MIN_SAMPLES_FOR_SIGNIFICANCE};
use crate::domain::experiment::{
    EffectMagnitude, StoppingConfig, StoppingDecision, StoppingReason,
};

/// Decides whether an experiment should continue collecting data
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialStoppingPolicy {
    config: StoppingConfig,
}

impl SequentialStoppingPolicy {
    /// Create a policy with the given thresholds
    pub fn new(config: StoppingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoppingConfig {
        &self.config
    }

    /// Evaluate the stopping rules against the current samples
    ///
    /// Rules are checked in order and the first match wins:
    /// 1. too few samples to say anything (never fewer than the significance gate)
    /// 2. the per-variant cap has been reached
    /// 3. a clear winner (strong p-value, large effect, enough samples)
    /// 4. futility (high p-value, negligible effect, many samples)
    /// 5. otherwise keep going, with a power-based estimate of what is left
    pub fn evaluate(&self, sample_a: &[f64], sample_b: &[f64]) -> StoppingDecision {
        let config = &self.config;
        let n_min = sample_a.len().min(sample_b.len());
        // Below the significance gate the verdict is a placeholder (p = 1, d = 0)
        let floor = config.min_samples_per_variant.max(MIN_SAMPLES_FOR_SIGNIFICANCE);

        if n_min < floor {
            return StoppingDecision::keep_collecting(
                StoppingReason::InsufficientSamples,
                format!(
                    "Need at least {} samples per variant before deciding (smallest variant has {}).",
                    floor, n_min
                ),
                Some((floor - n_min) as u64),
            );
        }

        if n_min >= config.max_samples_per_variant {
            return StoppingDecision::conclude(
                StoppingReason::MaxSamplesReached,
                "Maximum sample size reached.",
            );
        }

        let verdict = calculate_significance(sample_a, sample_b, config.alpha);
        let p_value = verdict.p_value;
        let magnitude = verdict.effect_interpretation;

        debug!(
            n_min,
            p_value,
            effect_size = verdict.effect_size,
            magnitude = %magnitude,
            "Evaluating stopping rules"
        );

        if n_min >= config.early_stop_min_samples
            && p_value < config.early_stop_p_value
            && magnitude == EffectMagnitude::Large
        {
            let leader = verdict.winner.variant_label().unwrap_or("the leading variant");

            return StoppingDecision::conclude(
                StoppingReason::ClearWinner,
                format!(
                    "Clear winner: {} ({:.1}% confidence, large effect).",
                    leader, verdict.confidence
                ),
            );
        }

        if n_min >= config.futility_min_samples
            && p_value > config.futility_p_value
            && magnitude == EffectMagnitude::Negligible
        {
            return StoppingDecision::conclude(
                StoppingReason::Futility,
                "No significant difference between variants; more data is unlikely to change the outcome.",
            );
        }

        // u64::MAX means no finite sample resolves a zero effect
        let required = min_sample_size_default(verdict.effect_size);
        let remaining = (required != u64::MAX).then(|| required.saturating_sub(n_min as u64));

        StoppingDecision::keep_collecting(
            StoppingReason::ContinueCollecting,
            "Continue collecting data.",
            remaining,
        )
    }
}

/// Evaluate the default stopping rules with a caller-chosen sample cap
pub fn should_conclude_experiment(
    sample_a: &[f64],
    sample_b: &[f64],
    max_samples_per_variant: usize,
) -> StoppingDecision {
    SequentialStoppingPolicy::new(
        StoppingConfig::default().with_max_samples(max_samples_per_variant),
    )
    .evaluate(sample_a, sample_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i32, end_inclusive: i32) -> Vec<f64> {
        (start..=end_inclusive).map(f64::from).collect()
    }

    #[test]
    fn test_insufficient_samples() {
        let decision = should_conclude_experiment(&range(1, 7), &range(1, 12), 100);

        assert!(!decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::InsufficientSamples);
        assert!(decision.reason.contains("at least 10 samples"));
        assert_eq!(decision.min_additional_samples, Some(3));
    }

    #[test]
    fn test_empty_samples() {
        let decision = should_conclude_experiment(&[], &[], 100);

        assert!(!decision.should_conclude);
        assert_eq!(decision.min_additional_samples, Some(10));
    }

    #[test]
    fn test_max_samples_reached() {
        let decision = should_conclude_experiment(&[3.0; 100], &[3.0; 100], 100);

        assert!(decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::MaxSamplesReached);
        assert!(decision.reason.contains("Maximum sample size"));
        assert!(decision.min_additional_samples.is_none());
    }

    #[test]
    fn test_max_samples_takes_priority_over_clear_winner() {
        let decision = should_conclude_experiment(&range(1, 25), &range(100, 124), 25);

        assert_eq!(decision.rule, StoppingReason::MaxSamplesReached);
    }

    #[test]
    fn test_clear_winner() {
        let decision = should_conclude_experiment(&range(1, 25), &range(100, 124), 100);

        assert!(decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::ClearWinner);
        assert!(decision.reason.contains("Clear winner"));
        assert!(decision.reason.contains("Variant B"));
    }

    #[test]
    fn test_clear_winner_needs_twenty_samples() {
        let decision = should_conclude_experiment(&range(1, 15), &range(100, 114), 100);

        assert!(!decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::ContinueCollecting);
    }

    #[test]
    fn test_futility() {
        let decision = should_conclude_experiment(&[7.0; 60], &[7.0; 60], 100);

        assert!(decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::Futility);
        assert!(decision.reason.contains("No significant difference"));
    }

    #[test]
    fn test_futility_needs_fifty_samples() {
        let decision = should_conclude_experiment(&[7.0; 40], &[7.0; 40], 100);

        assert!(!decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::ContinueCollecting);
        // Zero observed effect: no finite sample size is enough
        assert_eq!(decision.min_additional_samples, None);
    }

    #[test]
    fn test_continue_collecting() {
        // Moderate, overlapping difference with 15 samples per variant
        let a: Vec<f64> = (0..15).map(|i| 50.0 + (i % 5) as f64 * 2.0).collect();
        let b: Vec<f64> = (0..15).map(|i| 51.0 + (i % 5) as f64 * 2.0).collect();

        let decision = should_conclude_experiment(&a, &b, 100);

        assert!(!decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::ContinueCollecting);
        assert!(decision.reason.contains("Continue collecting"));

        let remaining = decision.min_additional_samples.unwrap();
        let d = crate::infrastructure::experiment::effect_size(&a, &b);
        assert_eq!(remaining, min_sample_size_default(d) - 15);
    }

    #[test]
    fn test_custom_thresholds() {
        let policy = SequentialStoppingPolicy::new(StoppingConfig {
            min_samples_per_variant: 3,
            early_stop_min_samples: 5,
            ..StoppingConfig::default()
        });

        let decision = policy.evaluate(&range(1, 6), &range(100, 105));

        assert_eq!(decision.rule, StoppingReason::ClearWinner);
        assert_eq!(policy.config().min_samples_per_variant, 3);
    }

    #[test]
    fn test_floor_never_below_significance_gate() {
        let policy = SequentialStoppingPolicy::new(StoppingConfig {
            min_samples_per_variant: 3,
            early_stop_min_samples: 3,
            futility_min_samples: 3,
            ..StoppingConfig::default()
        });

        let decision = policy.evaluate(&[1.0, 2.0, 3.0], &[100.0, 101.0, 102.0]);

        assert!(!decision.should_conclude);
        assert_eq!(decision.rule, StoppingReason::InsufficientSamples);
        assert!(decision.reason.contains("at least 5 samples"));
        assert_eq!(decision.min_additional_samples, Some(2));
    }

    #[test]
    fn test_stateless_reevaluation() {
        let policy = SequentialStoppingPolicy::default();
        let a = range(1, 25);
        let b = range(100, 124);

        assert_eq!(policy.evaluate(&a, &b), policy.evaluate(&a, &b));
    }
}
