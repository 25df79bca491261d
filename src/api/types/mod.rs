//! API request, response and error types

pub mod error;
pub mod experiment;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use experiment::{ExperimentSamplesRequest, SampleSizeRequest, SampleSizeResponse};
pub use json::Json;
