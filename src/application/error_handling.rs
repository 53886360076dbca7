// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides consistent error format for UI
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Bad screen parameters
    Validation,

    /// A device permission is missing
    Permission,

    /// Domain invariant violation
    DomainError,

    /// Camera or location provider failed
    Device,

    /// Map widget or navigation app failed
    ExternalService,

    /// Config file problem
    Configuration,

    FileSystem,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::MissingCoordinate { param } => Self::new(
                ErrorType::Validation,
                "Missing location data",
                Some(format!("parameter {} is required", param)),
            ),

            AppError::InvalidCoordinate(reason) => {
                Self::new(ErrorType::Validation, "Invalid location data", Some(reason))
            }

            AppError::Permission(capability) => Self::new(
                ErrorType::Permission,
                format!("{} permission is required", capability),
                None,
            ),

            AppError::Domain(domain_error) => Self::new(
                ErrorType::DomainError,
                "Domain validation failed",
                Some(domain_error.to_string()),
            ),

            AppError::Capture(err) => Self::new(ErrorType::Device, "Camera error", Some(err.to_string())),

            AppError::Location(err) => {
                Self::new(ErrorType::Device, "Location error", Some(err.to_string()))
            }

            AppError::Dispatch(err) => Self::new(
                ErrorType::ExternalService,
                "Could not open the location",
                Some(err.to_string()),
            ),

            AppError::Map(err) => {
                log::error!("Map error: {}", err.0);
                Self::new(ErrorType::ExternalService, "Map failed to load", Some(err.0))
            }

            AppError::Config(message) => {
                Self::new(ErrorType::Configuration, "Invalid configuration", Some(message))
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(
                    ErrorType::FileSystem,
                    "File system operation failed",
                    Some(io_error.to_string()),
                )
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self::new(ErrorType::Validation, message, None)
    }
}

/// Helper trait to convert Results to the JSON error string commands return
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
