// events/types.rs
//
// Diagnostic events of the capture screen.
// Each event represents an immutable fact that has already occurred.
//
// - Events are facts, not commands
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Capability, PermissionState};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// PERMISSION EVENTS
// ============================================================================

/// Emitted before a capability permission prompt is issued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub capability: Capability,
}

impl PermissionRequested {
    pub fn new(capability: Capability) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            capability,
        }
    }
}

impl DomainEvent for PermissionRequested {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PermissionRequested" }
}

/// Emitted when a permission status becomes known (read or requested)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub capability: Capability,
    pub state: PermissionState,
}

impl PermissionResolved {
    pub fn new(capability: Capability, state: PermissionState) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            capability,
            state,
        }
    }
}

impl DomainEvent for PermissionResolved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PermissionResolved" }
}

// ============================================================================
// CAPTURE EVENTS
// ============================================================================

/// Emitted when the camera produced an image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCaptured {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub image_uri: String,
}

impl PhotoCaptured {
    pub fn new(session_id: Uuid, image_uri: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            image_uri,
        }
    }
}

impl DomainEvent for PhotoCaptured {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PhotoCaptured" }
}

/// Emitted when the camera call failed. The screen stays live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl CaptureFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl DomainEvent for CaptureFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CaptureFailed" }
}

/// Emitted when a capture request was not acted upon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureIgnored {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub state: String,
    pub reason: String,
}

impl CaptureIgnored {
    pub fn new(state: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            state,
            reason,
        }
    }
}

impl DomainEvent for CaptureIgnored {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CaptureIgnored" }
}

/// Emitted when a location sample was attached to a capture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationTagged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationTagged {
    pub fn new(session_id: Uuid, latitude: f64, longitude: f64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            latitude,
            longitude,
        }
    }
}

impl DomainEvent for LocationTagged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LocationTagged" }
}

/// Emitted when a location sample failed or could not be attached.
/// The capture proceeds without a coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSampleFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub reason: String,
}

impl LocationSampleFailed {
    pub fn new(session_id: Uuid, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            reason,
        }
    }
}

impl DomainEvent for LocationSampleFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LocationSampleFailed" }
}

/// Emitted when a held capture is dropped by retake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDiscarded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub had_location: bool,
}

impl CaptureDiscarded {
    pub fn new(session_id: Uuid, had_location: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            session_id,
            had_location,
        }
    }
}

impl DomainEvent for CaptureDiscarded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CaptureDiscarded" }
}
