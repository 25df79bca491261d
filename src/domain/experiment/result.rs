//! Experiment result types for metrics and statistical analysis

use std::fmt;

use serde::{Deserialize, Serialize};

use super::decision::StoppingDecision;

// ============================================================================
// SummaryStats
// ============================================================================

/// Descriptive statistics for one variant's sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of observations
    pub n: usize,
    /// Arithmetic mean (0 for an empty sample)
    pub mean: f64,
    /// Sample standard deviation (0 when n <= 1)
    pub std_dev: f64,
    /// Standard error of the mean (0 when n <= 1)
    pub sem: f64,
}

// ============================================================================
// TTestResult
// ============================================================================

/// Outcome of a two-sample t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    /// Two-tailed p-value in [0, 1]
    pub p_value: f64,
}

impl TTestResult {
    /// Result reported when the test cannot run (too few samples, no variance)
    pub const NEUTRAL: Self = Self {
        t_statistic: 0.0,
        degrees_of_freedom: 0.0,
        p_value: 1.0,
    };

    /// Check whether this is the "no evidence" placeholder
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for TTestResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

// ============================================================================
// EffectMagnitude
// ============================================================================

/// Conventional Cohen's d buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EffectMagnitude {
    /// |d| < 0.2
    #[default]
    Negligible,
    /// 0.2 <= |d| < 0.5
    Small,
    /// 0.5 <= |d| < 0.8
    Medium,
    /// |d| >= 0.8
    Large,
}

impl EffectMagnitude {
    /// Bucket an effect size by its absolute value
    pub fn from_cohens_d(d: f64) -> Self {
        let magnitude = d.abs();

        if magnitude < 0.2 {
            Self::Negligible
        } else if magnitude < 0.5 {
            Self::Small
        } else if magnitude < 0.8 {
            Self::Medium
        } else {
            // NaN also lands here; callers never produce it from finite input
            Self::Large
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Winner
// ============================================================================

/// Which variant, if any, the evidence favours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    A,
    B,
    #[default]
    Inconclusive,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::Inconclusive => "inconclusive",
        }
    }

    /// Human-readable variant label, if a winner was found
    pub fn variant_label(&self) -> Option<&'static str> {
        match self {
            Self::A => Some("Variant A"),
            Self::B => Some("Variant B"),
            Self::Inconclusive => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SignificanceVerdict
// ============================================================================

/// Combined significance verdict for an A/B comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignificanceVerdict {
    pub winner: Winner,
    /// (1 - p) * 100, clamped to [0, 100]
    pub confidence: f64,
    pub p_value: f64,
    /// Cohen's d, signed as mean(A) - mean(B)
    pub effect_size: f64,
    pub effect_interpretation: EffectMagnitude,
    pub recommendation: String,
}

impl SignificanceVerdict {
    /// Verdict returned before enough data has been collected
    pub fn inconclusive(recommendation: impl Into<String>) -> Self {
        Self {
            winner: Winner::Inconclusive,
            confidence: 0.0,
            p_value: 1.0,
            effect_size: 0.0,
            effect_interpretation: EffectMagnitude::Negligible,
            recommendation: recommendation.into(),
        }
    }
}

// ============================================================================
// ExperimentReport
// ============================================================================

/// Full analysis of an experiment checkpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub variant_a: SummaryStats,
    pub variant_b: SummaryStats,
    pub t_test: TTestResult,
    pub verdict: SignificanceVerdict,
    pub decision: StoppingDecision,
}
