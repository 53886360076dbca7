// src/lib.rs
// Park & Snap - take a photo, tag it with where it was taken, and hand that
// location to a navigation app
//
// Architecture:
// - Domain: coordinates, capture sessions, permissions, map payloads
// - Capabilities: injected providers (camera, location, map, app launcher, router)
// - Services: the two screen state machines
// - Event-driven diagnostics: every failure is reported on the EventBus
// - Application Layer: screen views and command adapters for a UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod capabilities;
pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_capture_session,
    validate_coordinate,
    // Permissions
    Capability,
    // Capture
    CaptureSession,
    CaptureState,
    CapturedImage,
    // Coordinate
    Coordinate,
    CoordinateInputError,
    DomainError,
    LocationTag,
    // Map
    MapMarker,
    MapRegion,
    MapRenderRequest,
    NavigationApp,
    PermissionSnapshot,
    PermissionState,
    // Routing
    ScreenParams,
    ShareRequest,
    MAP_ROUTE,
};

// ============================================================================
// PUBLIC API - Errors & Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult, CaptureError, DispatchError, LocationError, MapError};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    register_diagnostic_handlers,
    CaptureDiscarded,
    CaptureFailed,
    CaptureIgnored,
    DomainEvent,
    EventBus,
    EventLogEntry,
    LocationSampleFailed,
    LocationShared,
    LocationTagged,
    MapErrorReported,
    MapReady,
    MapRegionChanged,
    MapRendered,
    NavigatedBack,
    PermissionRequested,
    PermissionResolved,
    PhotoCaptured,
    ShareFailed,
};

// ============================================================================
// PUBLIC API - Capabilities & Services
// ============================================================================

pub use capabilities::{
    AppResolver, CameraCapability, LocationCapability, MapRenderer, MediaLibraryCapability, Navigator,
    ShareResolution,
};

pub use services::{
    CaptureOrchestrator, CaptureOutcome, DispatcherState, EntryProblem, IgnoreReason, LocationDispatcher,
    ShareOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, CaptureScreenView, ErrorResponse, MapScreenView, Providers};
