//! Application state for shared services

use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::infrastructure::services::ExperimentAnalysisService;

/// Application state shared by all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub analysis_service: Arc<ExperimentAnalysisService>,
}

impl AppState {
    /// Create state from the analysis section of the configuration
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            analysis_service: Arc::new(ExperimentAnalysisService::new(config)),
        }
    }
}
