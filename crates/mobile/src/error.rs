use titan_rush_core::ConfigError;
use titan_rush_core::campus::{ErrorKind, PlanError};

/// Errors surfaced to the host app. The variant tells the UI how to react:
/// show a message, offer a retry, or point at location settings.
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum PlannerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(String),

    #[error("{0}")]
    Permission(String),

    #[error("{0}")]
    Config(String),
}

impl From<PlanError> for PlannerError {
    fn from(error: PlanError) -> Self {
        let message = error.to_string();
        match error.kind() {
            ErrorKind::Validation => PlannerError::Validation(message),
            ErrorKind::Network => PlannerError::Network(message),
            ErrorKind::Permission => PlannerError::Permission(message),
        }
    }
}

impl From<ConfigError> for PlannerError {
    fn from(error: ConfigError) -> Self {
        PlannerError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use titan_rush_core::campus::{Collaborator, MissingField};

    use super::*;

    #[test]
    fn test_plan_error_mapping() {
        let err: PlannerError = PlanError::MissingDestination(MissingField::Building).into();
        assert!(matches!(err, PlannerError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Missing destination information: no building selected"
        );

        let err: PlannerError = PlanError::network(Collaborator::WalkingRoute, "HTTP 500").into();
        assert!(matches!(err, PlannerError::Network(_)));

        let err: PlannerError = PlanError::LocationUnavailable("no fix".into()).into();
        assert!(matches!(err, PlannerError::Permission(_)));
    }
}
