use thiserror::Error;

use super::experiment::ExperimentValidationError;

/// Core domain errors
///
/// The statistics engine itself never fails; these errors only surface at the
/// host boundary: request validation and startup configuration checks.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<ExperimentValidationError> for DomainError {
    fn from(err: ExperimentValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_experiment_validation_error() {
        let error: DomainError = ExperimentValidationError::InvalidAlpha(2.0).into();
        assert_eq!(
            error.to_string(),
            "Validation error: Alpha must be strictly between 0 and 1, got 2"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Missing alpha");
        assert_eq!(error.to_string(), "Configuration error: Missing alpha");
    }
}
