use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Capability, Coordinate, DomainError, DomainResult};

/// Handle to a transient image produced by one capture action.
/// Never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapturedImage {
    /// Platform URI of the image resource
    pub uri: String,

    /// Pixel dimensions, when the camera reports them
    pub width: Option<u32>,
    pub height: Option<u32>,

    /// When the camera call resolved
    pub captured_at: DateTime<Utc>,
}

impl CapturedImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            width: None,
            height: None,
            captured_at: Utc::now(),
        }
    }
}

/// A location sample attached to a capture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationTag {
    pub coordinate: Coordinate,
    pub sampled_at: DateTime<Utc>,
}

impl LocationTag {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            sampled_at: Utc::now(),
        }
    }
}

/// In-memory pairing of one captured image with an optional location sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureSession {
    /// Identifies the capture that started this session.
    /// Late location samples are matched against it.
    pub id: Uuid,
    pub image: CapturedImage,
    pub location: Option<LocationTag>,
}

impl CaptureSession {
    pub fn new(image: CapturedImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            location: None,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.location.map(|tag| tag.coordinate)
    }

    /// Attach a location sample.
    /// The sample must be taken strictly after the image and may only be
    /// attached once.
    pub fn attach_location(&mut self, tag: LocationTag) -> DomainResult<()> {
        if self.location.is_some() {
            return Err(DomainError::InvalidStateTransition(
                "capture session already carries a location".to_string(),
            ));
        }
        if tag.sampled_at <= self.image.captured_at {
            return Err(DomainError::SampledBeforeCapture {
                captured_at: self.image.captured_at.to_rfc3339(),
                sampled_at: tag.sampled_at.to_rfc3339(),
            });
        }
        self.location = Some(tag);
        Ok(())
    }
}

/// Explicit state of the capture screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CaptureState {
    /// Camera or location status not yet known
    AwaitingPermissions,

    /// A required capability was explicitly not granted (always camera today)
    PermissionDenied { capability: Capability },

    /// Preview active, nothing captured
    Live,

    /// An image is held, possibly with a location
    Captured { session: CaptureSession },
}

impl CaptureState {
    pub fn name(&self) -> &'static str {
        match self {
            CaptureState::AwaitingPermissions => "awaiting_permissions",
            CaptureState::PermissionDenied { .. } => "permission_denied",
            CaptureState::Live => "live",
            CaptureState::Captured { .. } => "captured",
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, CaptureState::Live)
    }

    pub fn session(&self) -> Option<&CaptureSession> {
        match self {
            CaptureState::Captured { session } => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut CaptureSession> {
        match self {
            CaptureState::Captured { session } => Some(session),
            _ => None,
        }
    }
}

impl std::fmt::Display for CaptureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn coordinate() -> Coordinate {
        Coordinate::new(48.8584, 2.2945).unwrap()
    }

    fn tag_after(session: &CaptureSession) -> LocationTag {
        LocationTag {
            coordinate: coordinate(),
            sampled_at: session.image.captured_at + Duration::milliseconds(5),
        }
    }

    #[test]
    fn test_new_session_has_no_location() {
        let session = CaptureSession::new(CapturedImage::new("file:///tmp/a.jpg"));
        assert!(session.location.is_none());
        assert!(session.coordinate().is_none());
    }

    #[test]
    fn test_attach_location_after_capture() {
        let mut session = CaptureSession::new(CapturedImage::new("file:///tmp/a.jpg"));
        let tag = tag_after(&session);
        session.attach_location(tag).unwrap();
        assert_eq!(session.coordinate(), Some(coordinate()));
    }

    #[test]
    fn test_attach_location_at_capture_instant_fails() {
        let mut session = CaptureSession::new(CapturedImage::new("file:///tmp/a.jpg"));
        let tag = LocationTag {
            coordinate: coordinate(),
            sampled_at: session.image.captured_at,
        };
        assert!(matches!(
            session.attach_location(tag),
            Err(DomainError::SampledBeforeCapture { .. })
        ));
    }

    #[test]
    fn test_attach_location_before_capture_fails() {
        let mut session = CaptureSession::new(CapturedImage::new("file:///tmp/a.jpg"));
        let tag = LocationTag {
            coordinate: coordinate(),
            sampled_at: session.image.captured_at - Duration::seconds(1),
        };
        assert!(matches!(
            session.attach_location(tag),
            Err(DomainError::SampledBeforeCapture { .. })
        ));
        assert!(session.location.is_none());
    }

    #[test]
    fn test_attach_location_twice_fails() {
        let mut session = CaptureSession::new(CapturedImage::new("file:///tmp/a.jpg"));
        let tag = tag_after(&session);
        session.attach_location(tag).unwrap();
        assert!(session.attach_location(tag_after(&session)).is_err());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(CaptureState::AwaitingPermissions.to_string(), "awaiting_permissions");
        assert_eq!(
            CaptureState::PermissionDenied {
                capability: Capability::Camera
            }
            .name(),
            "permission_denied"
        );
        assert!(CaptureState::Live.is_live());
    }
}
