//! Domain layer - value types and errors for experiment analysis

pub mod error;
pub mod experiment;

pub use error::DomainError;
pub use experiment::{
    EffectMagnitude, ExperimentReport, SignificanceVerdict, StoppingConfig, StoppingDecision,
    StoppingReason, SummaryStats, TTestResult, Winner,
};
