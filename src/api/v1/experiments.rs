//! Experiment analysis endpoints

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, ExperimentSamplesRequest, Json, SampleSizeRequest, SampleSizeResponse,
};
use crate::domain::experiment::{ExperimentReport, SignificanceVerdict, StoppingDecision};

/// POST /v1/experiments/significance
pub async fn significance(
    State(state): State<AppState>,
    Json(request): Json<ExperimentSamplesRequest>,
) -> Result<Json<SignificanceVerdict>, ApiError> {
    debug!(
        n_a = request.variant_a.len(),
        n_b = request.variant_b.len(),
        "Significance requested"
    );

    let verdict = state
        .analysis_service
        .significance(request.samples(), request.overrides())?;

    Ok(Json(verdict))
}

/// POST /v1/experiments/stopping
pub async fn stopping(
    State(state): State<AppState>,
    Json(request): Json<ExperimentSamplesRequest>,
) -> Result<Json<StoppingDecision>, ApiError> {
    debug!(
        n_a = request.variant_a.len(),
        n_b = request.variant_b.len(),
        "Stopping decision requested"
    );

    let decision = state
        .analysis_service
        .stopping(request.samples(), request.overrides())?;

    Ok(Json(decision))
}

/// POST /v1/experiments/analyze
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<ExperimentSamplesRequest>,
) -> Result<Json<ExperimentReport>, ApiError> {
    debug!(
        n_a = request.variant_a.len(),
        n_b = request.variant_b.len(),
        "Full analysis requested"
    );

    let report = state
        .analysis_service
        .analyze(request.samples(), request.overrides())?;

    Ok(Json(report))
}

/// POST /v1/experiments/sample-size
pub async fn sample_size(
    State(state): State<AppState>,
    Json(request): Json<SampleSizeRequest>,
) -> Result<Json<SampleSizeResponse>, ApiError> {
    debug!(effect_size = request.effect_size, "Sample size requested");

    let n = state
        .analysis_service
        .sample_size(request.effect_size, request.overrides())?;

    Ok(Json(SampleSizeResponse::new(request.effect_size, n)))
}
