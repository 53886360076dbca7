// src/application/dto/mod.rs
//
// Screen views
//
// - One serializable view per screen state, built FROM service state
// - Carries the user-facing strings; services never format text for the UI
// - Never converted back into domain types

use serde::{Deserialize, Serialize};

use crate::capabilities::ShareResolution;
use crate::config::MapConfig;
use crate::domain::{Capability, CaptureState, MapRegion};
use crate::services::{CaptureOutcome, DispatcherState, EntryProblem, ShareOutcome};

pub const REQUESTING_PERMISSIONS_TEXT: &str = "Requesting permissions...";
pub const CAMERA_PERMISSION_TEXT: &str = "Camera permission is required to use this feature.";
pub const GRANT_CAMERA_PERMISSION_TEXT: &str = "Grant Camera Permission";
pub const MISSING_LOCATION_TEXT: &str = "Error: Missing location data.";
pub const INVALID_LOCATION_TEXT: &str = "Error: Invalid location data.";

// ============================================================================
// CAPTURE SCREEN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum CaptureScreenView {
    RequestingPermissions {
        message: String,
    },
    PermissionPrompt {
        message: String,
        button_label: String,
    },
    Preview,
    Review {
        session_id: String,
        image_uri: String,
        /// `Lat: 40.7128, Lon: -74.0060`, absent without a location
        location_label: Option<String>,
        can_open_map: bool,
    },
}

impl From<&CaptureState> for CaptureScreenView {
    fn from(state: &CaptureState) -> Self {
        match state {
            CaptureState::AwaitingPermissions => CaptureScreenView::RequestingPermissions {
                message: REQUESTING_PERMISSIONS_TEXT.to_string(),
            },
            CaptureState::PermissionDenied { capability } => {
                // Only the camera blocks the screen today
                let message = match capability {
                    Capability::Camera => CAMERA_PERMISSION_TEXT.to_string(),
                    other => format!("{} permission is required to use this feature.", other),
                };
                CaptureScreenView::PermissionPrompt {
                    message,
                    button_label: GRANT_CAMERA_PERMISSION_TEXT.to_string(),
                }
            }
            CaptureState::Live => CaptureScreenView::Preview,
            CaptureState::Captured { session } => {
                let coordinate = session.coordinate();
                CaptureScreenView::Review {
                    session_id: session.id.to_string(),
                    image_uri: session.image.uri.clone(),
                    location_label: coordinate.map(|c| c.label()),
                    can_open_map: coordinate.is_some(),
                }
            }
        }
    }
}

/// Result of a shutter press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureResultDto {
    pub captured: bool,
    /// Failure or ignore reason, for diagnostics only
    pub reason: Option<String>,
    pub view: CaptureScreenView,
}

impl CaptureResultDto {
    pub fn new(outcome: &CaptureOutcome, state: &CaptureState) -> Self {
        let reason = match outcome {
            CaptureOutcome::Captured { .. } => None,
            CaptureOutcome::Failed(err) => Some(err.to_string()),
            CaptureOutcome::Ignored(reason) => Some(reason.to_string()),
        };
        Self {
            captured: outcome.is_captured(),
            reason,
            view: CaptureScreenView::from(state),
        }
    }
}

// ============================================================================
// MAP SCREEN
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum MapScreenView {
    Loading,
    Error {
        message: String,
    },
    Map {
        latitude: f64,
        longitude: f64,
        marker_title: String,
        /// Set once the map has been drawn
        region: Option<MapRegion>,
    },
    Closed,
}

impl MapScreenView {
    pub fn from_state(state: &DispatcherState, config: &MapConfig) -> Self {
        let map = |coordinate: &crate::domain::Coordinate, region: Option<MapRegion>| MapScreenView::Map {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            marker_title: config.marker_title.clone(),
            region,
        };

        match state {
            DispatcherState::Uninitialized => MapScreenView::Loading,
            DispatcherState::Invalid { problem, .. } => MapScreenView::Error {
                message: match problem {
                    EntryProblem::MissingLocation => MISSING_LOCATION_TEXT,
                    EntryProblem::InvalidLocation => INVALID_LOCATION_TEXT,
                }
                .to_string(),
            },
            DispatcherState::Ready { coordinate } => map(coordinate, None),
            DispatcherState::Rendered { coordinate, region } => map(coordinate, Some(*region)),
            DispatcherState::Closed => MapScreenView::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShareResultDto {
    Launched { app: String },
    Cancelled,
    Failed { message: String },
    Unavailable,
}

impl From<ShareOutcome> for ShareResultDto {
    fn from(outcome: ShareOutcome) -> Self {
        match outcome {
            ShareOutcome::Dispatched(ShareResolution::Launched(app)) => ShareResultDto::Launched {
                app: app.id().to_string(),
            },
            ShareOutcome::Dispatched(ShareResolution::Cancelled) => ShareResultDto::Cancelled,
            ShareOutcome::Failed(err) => ShareResultDto::Failed {
                message: err.to_string(),
            },
            ShareOutcome::Unavailable => ShareResultDto::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CaptureSession, CapturedImage, Coordinate, LocationTag, NavigationApp};
    use crate::error::{CaptureError, DispatchError};
    use crate::services::IgnoreReason;

    fn captured(with_location: bool) -> CaptureState {
        let mut session = CaptureSession::new(CapturedImage::new("file:///tmp/p.jpg"));
        if with_location {
            session
                .attach_location(LocationTag {
                    coordinate: Coordinate::new(40.7128, -74.006).unwrap(),
                    sampled_at: session.image.captured_at + chrono::Duration::milliseconds(5),
                })
                .unwrap();
        }
        CaptureState::Captured { session }
    }

    #[test]
    fn test_permission_views_use_stock_strings() {
        assert_eq!(
            CaptureScreenView::from(&CaptureState::AwaitingPermissions),
            CaptureScreenView::RequestingPermissions {
                message: "Requesting permissions...".to_string()
            }
        );
        assert_eq!(
            CaptureScreenView::from(&CaptureState::PermissionDenied {
                capability: Capability::Camera
            }),
            CaptureScreenView::PermissionPrompt {
                message: "Camera permission is required to use this feature.".to_string(),
                button_label: "Grant Camera Permission".to_string(),
            }
        );
    }

    #[test]
    fn test_review_shows_four_decimal_label() {
        match CaptureScreenView::from(&captured(true)) {
            CaptureScreenView::Review {
                location_label,
                can_open_map,
                ..
            } => {
                assert_eq!(location_label.as_deref(), Some("Lat: 40.7128, Lon: -74.0060"));
                assert!(can_open_map);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_review_without_location_hides_label() {
        match CaptureScreenView::from(&captured(false)) {
            CaptureScreenView::Review {
                location_label,
                can_open_map,
                ..
            } => {
                assert!(location_label.is_none());
                assert!(!can_open_map);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_capture_result_reasons() {
        let failed = CaptureResultDto::new(
            &CaptureOutcome::Failed(CaptureError::DeviceBusy),
            &CaptureState::Live,
        );
        assert!(!failed.captured);
        assert_eq!(failed.reason.as_deref(), Some("Camera is busy"));
        assert_eq!(failed.view, CaptureScreenView::Preview);

        let ignored = CaptureResultDto::new(
            &CaptureOutcome::Ignored(IgnoreReason::NotLive),
            &CaptureState::AwaitingPermissions,
        );
        assert!(ignored.reason.is_some());
    }

    #[test]
    fn test_map_error_views() {
        let config = MapConfig::default();
        let missing = DispatcherState::Invalid {
            problem: EntryProblem::MissingLocation,
            message: String::new(),
        };
        let invalid = DispatcherState::Invalid {
            problem: EntryProblem::InvalidLocation,
            message: String::new(),
        };

        assert_eq!(
            MapScreenView::from_state(&missing, &config),
            MapScreenView::Error {
                message: "Error: Missing location data.".to_string()
            }
        );
        assert_eq!(
            MapScreenView::from_state(&invalid, &config),
            MapScreenView::Error {
                message: "Error: Invalid location data.".to_string()
            }
        );
    }

    #[test]
    fn test_map_view_carries_marker_title() {
        let coordinate = Coordinate::new(1.5, 2.5).unwrap();
        let view = MapScreenView::from_state(&DispatcherState::Ready { coordinate }, &MapConfig::default());
        assert_eq!(
            view,
            MapScreenView::Map {
                latitude: 1.5,
                longitude: 2.5,
                marker_title: "Photo Location".to_string(),
                region: None,
            }
        );
    }

    #[test]
    fn test_share_result_serialization() {
        let dto = ShareResultDto::from(ShareOutcome::Dispatched(ShareResolution::Launched(
            NavigationApp::AppleMaps,
        )));
        assert_eq!(
            serde_json::to_string(&dto).unwrap(),
            r#"{"status":"launched","app":"apple-maps"}"#
        );

        let dto = ShareResultDto::from(ShareOutcome::Failed(DispatchError::NoCompatibleApp));
        assert!(matches!(dto, ShareResultDto::Failed { .. }));
    }
}
