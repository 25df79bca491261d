//! Experiment analysis service
//!
//! Sits between callers (HTTP handlers, the CLI) and the pure statistics
//! engine: validates input, applies configured defaults, logs and records
//! metrics.

use tracing::{debug, info};

use crate::config::AnalysisConfig;
use crate::domain::experiment::{
    validate_alpha, validate_effect_size, validate_max_samples, validate_power, validate_samples,
    ExperimentReport, SignificanceVerdict, StoppingDecision,
};
use crate::domain::DomainError;
use crate::infrastructure::experiment::{
    calculate_significance, min_sample_size, summarize, welch_t_test, SequentialStoppingPolicy,
};
use crate::infrastructure::observability::{
    record_analysis, record_stopping_decision, record_verdict,
};

// ============================================================================
// Request Types
// ============================================================================

/// Outcome samples for the two variants of an experiment
#[derive(Debug, Clone, Copy)]
pub struct SamplePair<'a> {
    pub variant_a: &'a [f64],
    pub variant_b: &'a [f64],
}

impl<'a> SamplePair<'a> {
    pub fn new(variant_a: &'a [f64], variant_b: &'a [f64]) -> Self {
        Self {
            variant_a,
            variant_b,
        }
    }

    /// Total number of observations across both variants
    pub fn total(&self) -> usize {
        self.variant_a.len() + self.variant_b.len()
    }

    fn validate(&self) -> Result<(), DomainError> {
        validate_samples('A', self.variant_a)?;
        validate_samples('B', self.variant_b)?;
        Ok(())
    }
}

/// Optional per-request overrides of the configured analysis defaults
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOverrides {
    pub alpha: Option<f64>,
    pub power: Option<f64>,
    pub max_samples_per_variant: Option<usize>,
}

// ============================================================================
// Experiment Analysis Service
// ============================================================================

/// Service for analysing A/B experiment checkpoints
#[derive(Debug, Clone, Default)]
pub struct ExperimentAnalysisService {
    config: AnalysisConfig,
}

impl ExperimentAnalysisService {
    /// Create a new analysis service
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Significance verdict for the two variants
    pub fn significance(
        &self,
        samples: SamplePair<'_>,
        overrides: AnalysisOverrides,
    ) -> Result<SignificanceVerdict, DomainError> {
        let alpha = self.tracked("significance", samples, || {
            samples.validate()?;
            self.resolve_alpha(overrides)
        })?;

        let verdict = calculate_significance(samples.variant_a, samples.variant_b, alpha);
        record_verdict(verdict.winner);

        debug!(
            n_a = samples.variant_a.len(),
            n_b = samples.variant_b.len(),
            winner = %verdict.winner,
            p_value = verdict.p_value,
            "Significance calculated"
        );

        Ok(verdict)
    }

    /// Stopping decision for the current checkpoint
    pub fn stopping(
        &self,
        samples: SamplePair<'_>,
        overrides: AnalysisOverrides,
    ) -> Result<StoppingDecision, DomainError> {
        let policy = self.tracked("stopping", samples, || {
            samples.validate()?;
            self.resolve_policy(overrides)
        })?;

        let decision = policy.evaluate(samples.variant_a, samples.variant_b);
        record_stopping_decision(decision.rule);

        info!(
            n_a = samples.variant_a.len(),
            n_b = samples.variant_b.len(),
            max_samples_per_variant = policy.config().max_samples_per_variant,
            rule = %decision.rule,
            should_conclude = decision.should_conclude,
            "Stopping rules evaluated"
        );

        Ok(decision)
    }

    /// Full report: summaries, t-test, verdict and stopping decision
    pub fn analyze(
        &self,
        samples: SamplePair<'_>,
        overrides: AnalysisOverrides,
    ) -> Result<ExperimentReport, DomainError> {
        let (alpha, policy) = self.tracked("analyze", samples, || {
            samples.validate()?;
            Ok((self.resolve_alpha(overrides)?, self.resolve_policy(overrides)?))
        })?;

        let verdict = calculate_significance(samples.variant_a, samples.variant_b, alpha);
        let decision = policy.evaluate(samples.variant_a, samples.variant_b);

        record_verdict(verdict.winner);
        record_stopping_decision(decision.rule);

        info!(
            n_a = samples.variant_a.len(),
            n_b = samples.variant_b.len(),
            winner = %verdict.winner,
            rule = %decision.rule,
            "Experiment analyzed"
        );

        Ok(ExperimentReport {
            variant_a: summarize(samples.variant_a),
            variant_b: summarize(samples.variant_b),
            t_test: welch_t_test(samples.variant_a, samples.variant_b),
            verdict,
            decision,
        })
    }

    /// Minimum samples per variant to detect `effect_size`
    pub fn sample_size(
        &self,
        effect_size: f64,
        overrides: AnalysisOverrides,
    ) -> Result<u64, DomainError> {
        let empty = SamplePair::new(&[], &[]);

        let (power, alpha) = self.tracked("sample_size", empty, || {
            validate_effect_size(effect_size)?;
            let power = overrides.power.unwrap_or(self.config.power);
            validate_power(power)?;
            Ok((power, self.resolve_alpha(overrides)?))
        })?;

        let n = min_sample_size(effect_size, power, alpha);
        debug!(effect_size, power, alpha, n, "Sample size estimated");

        Ok(n)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn resolve_alpha(&self, overrides: AnalysisOverrides) -> Result<f64, DomainError> {
        let alpha = overrides.alpha.unwrap_or(self.config.stopping.alpha);
        validate_alpha(alpha)?;
        Ok(alpha)
    }

    fn resolve_policy(
        &self,
        overrides: AnalysisOverrides,
    ) -> Result<SequentialStoppingPolicy, DomainError> {
        let mut config = self.config.stopping.with_alpha(self.resolve_alpha(overrides)?);

        if let Some(max) = overrides.max_samples_per_variant {
            validate_max_samples(max)?;
            config = config.with_max_samples(max);
        }

        Ok(SequentialStoppingPolicy::new(config))
    }

    /// Run request validation, recording the outcome as a metric
    fn tracked<T>(
        &self,
        operation: &'static str,
        samples: SamplePair<'_>,
        validate: impl FnOnce() -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        match validate() {
            Ok(value) => {
                record_analysis(operation, true, samples.total());
                Ok(value)
            }
            Err(e) => {
                debug!(operation, error = %e, "Rejected analysis request");
                record_analysis(operation, false, samples.total());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::experiment::{StoppingReason, Winner};

    fn range(start: i32, end_inclusive: i32) -> Vec<f64> {
        (start..=end_inclusive).map(f64::from).collect()
    }

    fn service() -> ExperimentAnalysisService {
        ExperimentAnalysisService::new(AnalysisConfig::default())
    }

    mod significance_tests {
        use super::*;

        #[test]
        fn test_significance_with_defaults() {
            let a = range(10, 19);
            let b = range(1, 10);

            let verdict = service()
                .significance(SamplePair::new(&a, &b), AnalysisOverrides::default())
                .unwrap();

            assert_eq!(verdict.winner, Winner::A);
        }

        #[test]
        fn test_rejects_non_finite_samples() {
            let a = vec![1.0, f64::NAN, 3.0, 4.0, 5.0];
            let b = range(1, 5);

            let result = service().significance(SamplePair::new(&a, &b), AnalysisOverrides::default());

            assert!(matches!(result, Err(DomainError::Validation { .. })));
        }

        #[test]
        fn test_rejects_invalid_alpha() {
            let a = range(1, 5);
            let overrides = AnalysisOverrides {
                alpha: Some(1.5),
                ..Default::default()
            };

            let err = service()
                .significance(SamplePair::new(&a, &a), overrides)
                .unwrap_err();

            assert!(err.to_string().contains("Alpha"));
        }
    }

    mod stopping_tests {
        use super::*;

        #[test]
        fn test_stopping_uses_configured_cap() {
            let mut config = AnalysisConfig::default();
            config.stopping.max_samples_per_variant = 12;
            let service = ExperimentAnalysisService::new(config);

            let a = [4.0; 12];
            let decision = service
                .stopping(SamplePair::new(&a, &a), AnalysisOverrides::default())
                .unwrap();

            assert_eq!(decision.rule, StoppingReason::MaxSamplesReached);
        }

        #[test]
        fn test_stopping_override_beats_config() {
            let mut config = AnalysisConfig::default();
            config.stopping.max_samples_per_variant = 12;
            let service = ExperimentAnalysisService::new(config);

            let a = [4.0; 12];
            let overrides = AnalysisOverrides {
                max_samples_per_variant: Some(500),
                ..Default::default()
            };

            let decision = service.stopping(SamplePair::new(&a, &a), overrides).unwrap();

            assert_eq!(decision.rule, StoppingReason::ContinueCollecting);
        }

        #[test]
        fn test_rejects_zero_cap() {
            let overrides = AnalysisOverrides {
                max_samples_per_variant: Some(0),
                ..Default::default()
            };

            let result = service().stopping(SamplePair::new(&[], &[]), overrides);

            assert!(result.is_err());
        }
    }

    mod analyze_tests {
        use super::*;

        #[test]
        fn test_full_report() {
            let a = range(1, 25);
            let b = range(100, 124);

            let report = service()
                .analyze(SamplePair::new(&a, &b), AnalysisOverrides::default())
                .unwrap();

            assert_eq!(report.variant_a.n, 25);
            assert_eq!(report.variant_b.mean, 112.0);
            assert!(report.t_test.t_statistic < 0.0);
            assert_eq!(report.verdict.winner, Winner::B);
            assert!(report.decision.should_conclude);
            assert_eq!(report.decision.rule, StoppingReason::ClearWinner);
        }

        #[test]
        fn test_report_for_empty_samples() {
            let report = service()
                .analyze(SamplePair::new(&[], &[]), AnalysisOverrides::default())
                .unwrap();

            assert_eq!(report.variant_a.n, 0);
            assert!(report.t_test.is_neutral());
            assert_eq!(report.verdict.winner, Winner::Inconclusive);
            assert_eq!(report.decision.rule, StoppingReason::InsufficientSamples);
        }
    }

    mod sample_size_tests {
        use super::*;

        #[test]
        fn test_sample_size_defaults() {
            let n = service().sample_size(0.5, AnalysisOverrides::default()).unwrap();
            assert_eq!(n, 63);
        }

        #[test]
        fn test_sample_size_rejects_invalid_power() {
            let overrides = AnalysisOverrides {
                power: Some(0.0),
                ..Default::default()
            };

            assert!(service().sample_size(0.5, overrides).is_err());
        }

        #[test]
        fn test_sample_size_rejects_non_finite_effect() {
            assert!(
                service()
                    .sample_size(f64::INFINITY, AnalysisOverrides::default())
                    .is_err()
            );
        }
    }
}
