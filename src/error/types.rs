// src/error/types.rs
use crate::domain::{Capability, CoordinateInputError, DomainError};
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// CAPABILITY ERRORS
// ============================================================================

/// The camera failed to produce an image
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("Camera is busy")]
    DeviceBusy,

    #[error("No camera available")]
    Unavailable,

    #[error("Capture failed: {0}")]
    Failed(String),
}

/// Position sampling failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location request timed out")]
    Timeout,

    #[error("Location services unavailable")]
    Unavailable,

    #[error("Location sample rejected: {0}")]
    OutOfRange(#[from] DomainError),

    #[error("Location request failed: {0}")]
    Failed(String),
}

/// The app-resolution/share call failed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("No compatible navigation app is installed")]
    NoCompatibleApp,

    #[error("Failed to launch {app}: {reason}")]
    LaunchFailed { app: String, reason: String },

    #[error("App chooser failed: {0}")]
    Chooser(String),
}

/// Reported by the map renderer
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Map error: {0}")]
pub struct MapError(pub String);

// ============================================================================
// APPLICATION ERROR
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Permission not granted: {0}")]
    Permission(Capability),

    #[error("Capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Missing coordinate parameter: {param}")]
    MissingCoordinate { param: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<CoordinateInputError> for AppError {
    fn from(err: CoordinateInputError) -> Self {
        match err {
            CoordinateInputError::Missing { param } => AppError::MissingCoordinate {
                param: param.to_string(),
            },
            other => AppError::InvalidCoordinate(other.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param_maps_to_missing_coordinate() {
        let err: AppError = CoordinateInputError::Missing { param: "latitude" }.into();
        assert!(matches!(err, AppError::MissingCoordinate { ref param } if param == "latitude"));
    }

    #[test]
    fn test_range_failure_maps_to_invalid_coordinate() {
        let err: AppError = CoordinateInputError::Invalid(DomainError::CoordinateOutOfRange {
            latitude: 95.0,
            longitude: 0.0,
        })
        .into();
        assert!(matches!(err, AppError::InvalidCoordinate(_)));
    }

    #[test]
    fn test_app_error_serializes_as_message() {
        let err = AppError::Dispatch(DispatchError::NoCompatibleApp);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Dispatch error: No compatible navigation app is installed\"");
    }
}
