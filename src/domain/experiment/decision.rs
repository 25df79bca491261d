//! Sequential stopping decision types

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// StoppingConfig
// ============================================================================

/// Thresholds for the sequential stopping policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppingConfig {
    /// Significance level used when computing the verdict at each checkpoint
    pub alpha: f64,
    /// Below this many samples per variant nothing is concluded
    pub min_samples_per_variant: usize,
    /// Hard cap; reaching it concludes the experiment
    pub max_samples_per_variant: usize,
    /// Samples per variant required before early stopping on a clear winner
    pub early_stop_min_samples: usize,
    /// p-value a clear winner must beat
    pub early_stop_p_value: f64,
    /// Samples per variant required before futility stopping
    pub futility_min_samples: usize,
    /// p-value above which a negligible effect counts as futile
    pub futility_p_value: f64,
}

impl Default for StoppingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            min_samples_per_variant: 10,
            max_samples_per_variant: 100,
            early_stop_min_samples: 20,
            early_stop_p_value: 0.01,
            futility_min_samples: 50,
            futility_p_value: 0.5,
        }
    }
}

impl StoppingConfig {
    /// Override the per-variant sample cap
    pub fn with_max_samples(mut self, max_samples_per_variant: usize) -> Self {
        self.max_samples_per_variant = max_samples_per_variant;
        self
    }

    /// Override the significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

// ============================================================================
// StoppingReason
// ============================================================================

/// Which rule of the stopping policy produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoppingReason {
    InsufficientSamples,
    MaxSamplesReached,
    ClearWinner,
    Futility,
    ContinueCollecting,
}

impl StoppingReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InsufficientSamples => "insufficient_samples",
            Self::MaxSamplesReached => "max_samples_reached",
            Self::ClearWinner => "clear_winner",
            Self::Futility => "futility",
            Self::ContinueCollecting => "continue_collecting",
        }
    }

    /// Whether this rule ends the experiment
    pub fn concludes(&self) -> bool {
        matches!(
            self,
            Self::MaxSamplesReached | Self::ClearWinner | Self::Futility
        )
    }
}

impl fmt::Display for StoppingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// StoppingDecision
// ============================================================================

/// Continue-or-conclude answer for one checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoppingDecision {
    pub should_conclude: bool,
    pub reason: String,
    pub rule: StoppingReason,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_additional_samples: Option<u64>,
}

impl StoppingDecision {
    /// Decision that ends the experiment
    pub fn conclude(rule: StoppingReason, reason: impl Into<String>) -> Self {
        Self {
            should_conclude: true,
            reason: reason.into(),
            rule,
            min_additional_samples: None,
        }
    }

    /// Decision to keep collecting
    ///
    /// `min_additional_samples` is `None` when no finite sample size would
    /// settle the comparison.
    pub fn keep_collecting(
        rule: StoppingReason,
        reason: impl Into<String>,
        min_additional_samples: Option<u64>,
    ) -> Self {
        Self {
            should_conclude: false,
            reason: reason.into(),
            rule,
            min_additional_samples,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoppingConfig::default();

        assert_eq!(config.alpha, 0.05);
        assert_eq!(config.min_samples_per_variant, 10);
        assert_eq!(config.max_samples_per_variant, 100);
        assert_eq!(config.early_stop_min_samples, 20);
        assert_eq!(config.early_stop_p_value, 0.01);
        assert_eq!(config.futility_min_samples, 50);
        assert_eq!(config.futility_p_value, 0.5);
    }

    #[test]
    fn test_config_builders() {
        let config = StoppingConfig::default().with_max_samples(250).with_alpha(0.01);

        assert_eq!(config.max_samples_per_variant, 250);
        assert_eq!(config.alpha, 0.01);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: StoppingConfig =
            serde_json::from_str(r#"{"max_samples_per_variant": 500}"#).unwrap();

        assert_eq!(config.max_samples_per_variant, 500);
        assert_eq!(config.min_samples_per_variant, 10);
    }

    #[test]
    fn test_reason_concludes() {
        assert!(StoppingReason::MaxSamplesReached.concludes());
        assert!(StoppingReason::ClearWinner.concludes());
        assert!(StoppingReason::Futility.concludes());
        assert!(!StoppingReason::InsufficientSamples.concludes());
        assert!(!StoppingReason::ContinueCollecting.concludes());
    }

    #[test]
    fn test_conclude_decision() {
        let decision =
            StoppingDecision::conclude(StoppingReason::MaxSamplesReached, "Maximum sample size reached.");

        assert!(decision.should_conclude);
        assert!(decision.min_additional_samples.is_none());

        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["rule"], "max_samples_reached");
        assert!(json.get("min_additional_samples").is_none());
    }

    #[test]
    fn test_keep_collecting_decision() {
        let decision =
            StoppingDecision::keep_collecting(StoppingReason::InsufficientSamples, "wait", Some(7));

        assert!(!decision.should_conclude);
        assert_eq!(decision.min_additional_samples, Some(7));
    }

    #[test]
    fn test_unbounded_remaining_serializes_without_count() {
        let decision =
            StoppingDecision::keep_collecting(StoppingReason::ContinueCollecting, "go on", None);

        let json = serde_json::to_value(&decision).unwrap();
        assert!(json["min_additional_samples"].is_null());
        assert_eq!(json["should_conclude"], false);
    }
}
