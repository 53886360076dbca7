// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and must not be exported

pub mod bus;
pub mod handlers;
pub mod map_events;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    CaptureDiscarded,
    CaptureFailed,
    CaptureIgnored,
    LocationSampleFailed,
    LocationTagged,
    // Permissions
    PermissionRequested,
    PermissionResolved,
    // Capture
    PhotoCaptured,
};

pub use map_events::{
    LocationShared, MapErrorReported, MapReady, MapRegionChanged, MapRendered, NavigatedBack,
    ShareFailed,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_diagnostic_handlers;
