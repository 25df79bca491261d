//! v1 API endpoints

pub mod experiments;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/experiments/significance", post(experiments::significance))
        .route("/experiments/stopping", post(experiments::stopping))
        .route("/experiments/analyze", post(experiments::analyze))
        .route("/experiments/sample-size", post(experiments::sample_size))
}
