//! Request and response bodies for the experiment analysis endpoints

use serde::{Deserialize, Serialize};

use crate::infrastructure::services::{AnalysisOverrides, SamplePair};

/// Samples for both variants plus optional analysis parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentSamplesRequest {
    #[serde(default)]
    pub variant_a: Vec<f64>,
    #[serde(default)]
    pub variant_b: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_samples_per_variant: Option<usize>,
}

impl ExperimentSamplesRequest {
    pub fn samples(&self) -> SamplePair<'_> {
        SamplePair::new(&self.variant_a, &self.variant_b)
    }

    pub fn overrides(&self) -> AnalysisOverrides {
        AnalysisOverrides {
            alpha: self.alpha,
            power: None,
            max_samples_per_variant: self.max_samples_per_variant,
        }
    }
}

/// Sample-size planning request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSizeRequest {
    /// Target Cohen's d
    pub effect_size: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl SampleSizeRequest {
    pub fn overrides(&self) -> AnalysisOverrides {
        AnalysisOverrides {
            alpha: self.alpha,
            power: self.power,
            max_samples_per_variant: None,
        }
    }
}

/// Sample-size planning response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSizeResponse {
    pub effect_size: f64,
    /// Required samples per variant; `null` when no finite size suffices
    pub min_sample_size: Option<u64>,
}

impl SampleSizeResponse {
    pub fn new(effect_size: f64, min_sample_size: u64) -> Self {
        Self {
            effect_size,
            min_sample_size: (min_sample_size != u64::MAX).then_some(min_sample_size),
        }
    }
}
