// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod capture;
pub mod coordinate;
pub mod map;
pub mod permission;
pub mod route;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Permission Domain
pub use permission::{Capability, PermissionSnapshot, PermissionState};

// Coordinate Domain
pub use coordinate::{validate_coordinate, Coordinate, CoordinateInputError};

// Capture Domain
pub use capture::{
    validate_capture_session, CaptureSession, CaptureState, CapturedImage, LocationTag,
};

// Map Domain
pub use map::{MapMarker, MapRegion, MapRenderRequest, NavigationApp, ShareRequest};

// Screen transitions
pub use route::{ScreenParams, LATITUDE_PARAM, LONGITUDE_PARAM, MAP_ROUTE};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of invariants on in-memory values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Coordinate ({latitude}, {longitude}) is outside the valid geographic range")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },

    #[error("Coordinate component is not a finite number")]
    NonFiniteCoordinate,

    #[error("Location sampled at {sampled_at} precedes image capture at {captured_at}")]
    SampledBeforeCapture {
        captured_at: String,
        sampled_at: String,
    },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
