// src/services/capture_orchestrator.rs
//
// Capture Orchestrator - permission sequencing, camera capture and
// location tagging for the capture screen.
//
// STATE MACHINE:
//   AwaitingPermissions -> Live | PermissionDenied(camera)
//   PermissionDenied    -> Live            (retry_camera_permission, granted)
//   Live                -> Captured        (capture, image produced)
//   Captured            -> Live            (retake)
//
// RULES:
// - Capability failures are reported on the event bus and swallowed
// - Location never gates capture; media library never gates anything
// - A capture while another camera call is in flight is ignored
// - A location sample only attaches to the session that requested it
// - The state lock is never held across an await point

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::capabilities::{
    CameraCapability, LocationCapability, MediaLibraryCapability, Navigator,
};
use crate::domain::{
    validate_capture_session, validate_coordinate, Capability, CaptureSession, CaptureState,
    Coordinate, LocationTag, PermissionSnapshot, PermissionState, ScreenParams, MAP_ROUTE,
};
use crate::error::{CaptureError, LocationError};
use crate::events::{
    CaptureDiscarded, CaptureFailed, CaptureIgnored, EventBus, LocationSampleFailed,
    LocationTagged, PermissionRequested, PermissionResolved, PhotoCaptured,
};

/// Why a capture request was not acted upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The screen is not showing the live preview
    NotLive,
    CameraPermissionNotGranted,
    /// Another capture's camera call has not resolved yet
    CaptureInFlight,
}

impl std::fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreReason::NotLive => write!(f, "camera preview is not live"),
            IgnoreReason::CameraPermissionNotGranted => write!(f, "camera permission not granted"),
            IgnoreReason::CaptureInFlight => write!(f, "a capture is already in progress"),
        }
    }
}

/// Result of one capture action
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureOutcome {
    Captured {
        session_id: Uuid,
        location_attached: bool,
    },
    Failed(CaptureError),
    Ignored(IgnoreReason),
}

impl CaptureOutcome {
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureOutcome::Captured { .. })
    }
}

struct OrchestratorInner {
    state: CaptureState,
    permissions: PermissionSnapshot,
    capture_in_flight: bool,
}

pub struct CaptureOrchestrator {
    camera: Arc<dyn CameraCapability>,
    location: Arc<dyn LocationCapability>,
    media_library: Arc<dyn MediaLibraryCapability>,
    navigator: Arc<dyn Navigator>,
    event_bus: Arc<EventBus>,
    inner: Mutex<OrchestratorInner>,
}

impl CaptureOrchestrator {
    pub fn new(
        camera: Arc<dyn CameraCapability>,
        location: Arc<dyn LocationCapability>,
        media_library: Arc<dyn MediaLibraryCapability>,
        navigator: Arc<dyn Navigator>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            camera,
            location,
            media_library,
            navigator,
            event_bus,
            inner: Mutex::new(OrchestratorInner {
                state: CaptureState::AwaitingPermissions,
                permissions: PermissionSnapshot::default(),
                capture_in_flight: false,
            }),
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn state(&self) -> CaptureState {
        self.lock().state.clone()
    }

    pub fn permissions(&self) -> PermissionSnapshot {
        self.lock().permissions
    }

    pub fn session(&self) -> Option<CaptureSession> {
        self.lock().state.session().cloned()
    }

    /// Transition parameters for showing the current capture's location
    /// on the map screen
    pub fn map_route(&self) -> Option<ScreenParams> {
        self.lock()
            .state
            .session()
            .and_then(CaptureSession::coordinate)
            .map(|coordinate| ScreenParams::for_coordinate(&coordinate))
    }

    // ========================================================================
    // PERMISSIONS
    // ========================================================================

    /// Read every permission status and request the undetermined ones.
    ///
    /// Camera and location are settled before leaving
    /// `AwaitingPermissions`. The media library is requested afterwards
    /// and never affects the state. A held capture is kept.
    pub async fn start(&self) -> CaptureState {
        {
            let mut inner = self.lock();
            if inner.state.session().is_none() {
                inner.state = CaptureState::AwaitingPermissions;
            }
        }

        let camera_status = self.camera.status().await;
        let camera = self
            .settle(Capability::Camera, camera_status, || self.camera.request())
            .await;

        let location_status = self.location.status().await;
        let location = self
            .settle(Capability::Location, location_status, || self.location.request())
            .await;

        if location == PermissionState::Denied {
            log::info!("Location permission denied. Features requiring location may not work.");
        }

        let state = {
            let mut inner = self.lock();
            if inner.state.session().is_none() {
                inner.state = if camera.is_granted() {
                    CaptureState::Live
                } else {
                    CaptureState::PermissionDenied {
                        capability: Capability::Camera,
                    }
                };
            }
            inner.state.clone()
        };

        let media_status = self.media_library.status().await;
        self.settle(Capability::MediaLibrary, media_status, || {
            self.media_library.request()
        })
        .await;

        log::debug!("[CaptureOrchestrator] started in state {}", state);
        state
    }

    /// Re-request camera permission from the denied prompt
    pub async fn retry_camera_permission(&self) -> CaptureState {
        if !matches!(self.state(), CaptureState::PermissionDenied { .. }) {
            log::debug!("[CaptureOrchestrator] retry ignored outside the permission prompt");
            return self.state();
        }

        self.event_bus
            .emit(PermissionRequested::new(Capability::Camera));
        let camera = self.camera.request().await;
        self.event_bus
            .emit(PermissionResolved::new(Capability::Camera, camera));

        let mut inner = self.lock();
        inner.permissions.set(Capability::Camera, camera);
        if camera.is_granted() && matches!(inner.state, CaptureState::PermissionDenied { .. }) {
            inner.state = CaptureState::Live;
        }
        inner.state.clone()
    }

    /// Request `capability` if undetermined, then record the final status
    async fn settle<F, Fut>(
        &self,
        capability: Capability,
        current: PermissionState,
        request: F,
    ) -> PermissionState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = PermissionState>,
    {
        let resolved = if current.is_undetermined() {
            self.event_bus.emit(PermissionRequested::new(capability));
            request().await
        } else {
            current
        };

        self.lock().permissions.set(capability, resolved);
        self.event_bus
            .emit(PermissionResolved::new(capability, resolved));
        resolved
    }

    // ========================================================================
    // CAPTURE
    // ========================================================================

    /// Take a photo and, when location permission is granted, tag it with
    /// the position sampled after the image resolved.
    pub async fn capture(&self) -> CaptureOutcome {
        let (blocked, state_name) = {
            let mut inner = self.lock();
            let blocked = inner.capture_blocker();
            if blocked.is_none() {
                inner.capture_in_flight = true;
            }
            (blocked, inner.state.name())
        };

        if let Some(reason) = blocked {
            log::debug!("[CaptureOrchestrator] capture ignored: {}", reason);
            self.event_bus
                .emit(CaptureIgnored::new(state_name.to_string(), reason.to_string()));
            return CaptureOutcome::Ignored(reason);
        }

        let result = self.camera.capture_photo().await;

        let session = match result {
            Ok(image) => CaptureSession::new(image),
            Err(err) => {
                self.lock().capture_in_flight = false;
                self.event_bus.emit(CaptureFailed::new(err.to_string()));
                return CaptureOutcome::Failed(err);
            }
        };

        if let Err(err) = validate_capture_session(&session) {
            self.lock().capture_in_flight = false;
            let err = CaptureError::Failed(err.to_string());
            self.event_bus.emit(CaptureFailed::new(err.to_string()));
            return CaptureOutcome::Failed(err);
        }

        let session_id = session.id;
        let image_uri = session.image.uri.clone();
        let (accepted, sample_location) = {
            let mut inner = self.lock();
            inner.capture_in_flight = false;
            // Permission may have been revoked by a concurrent start()
            let accepted = inner.state.is_live();
            if accepted {
                inner.state = CaptureState::Captured { session };
            }
            (accepted, inner.permissions.is_granted(Capability::Location))
        };

        if !accepted {
            log::warn!("[CaptureOrchestrator] photo arrived after the preview closed; dropped");
            return CaptureOutcome::Ignored(IgnoreReason::NotLive);
        }

        self.event_bus.emit(PhotoCaptured::new(session_id, image_uri));

        let location_attached = if sample_location {
            self.tag_location(session_id).await
        } else {
            false
        };

        CaptureOutcome::Captured {
            session_id,
            location_attached,
        }
    }

    /// Sample the position and attach it to `session_id` if that capture is
    /// still held. Returns whether a coordinate was attached.
    async fn tag_location(&self, session_id: Uuid) -> bool {
        let coordinate = match self.location.current_position().await {
            Ok(coordinate) => coordinate,
            Err(err) => {
                self.report_location_failure(session_id, err);
                return false;
            }
        };

        if let Err(err) = validate_coordinate(&coordinate) {
            self.report_location_failure(session_id, LocationError::OutOfRange(err));
            return false;
        }

        let attached = {
            let mut inner = self.lock();
            match inner.state.session_mut() {
                Some(session) if session.id == session_id => {
                    Some(session.attach_location(LocationTag::new(coordinate)))
                }
                _ => None,
            }
        };

        match attached {
            Some(Ok(())) => {
                log::info!("Location: {}", coordinate.label());
                self.event_bus.emit(LocationTagged::new(
                    session_id,
                    coordinate.latitude,
                    coordinate.longitude,
                ));
                true
            }
            Some(Err(err)) => {
                self.report_location_failure(session_id, LocationError::Failed(err.to_string()));
                false
            }
            None => {
                log::debug!(
                    "[CaptureOrchestrator] location for discarded capture {} dropped",
                    session_id
                );
                false
            }
        }
    }

    fn report_location_failure(&self, session_id: Uuid, err: LocationError) {
        self.event_bus
            .emit(LocationSampleFailed::new(session_id, err.to_string()));
    }

    /// Drop the held image and coordinate and go back to the preview
    pub fn retake(&self) -> CaptureState {
        let discarded = {
            let mut inner = self.lock();
            match &inner.state {
                CaptureState::Captured { session } => {
                    let discarded = (session.id, session.location.is_some());
                    inner.state = CaptureState::Live;
                    Some(discarded)
                }
                _ => None,
            }
        };

        match discarded {
            Some((session_id, had_location)) => {
                self.event_bus
                    .emit(CaptureDiscarded::new(session_id, had_location));
            }
            None => log::debug!("[CaptureOrchestrator] retake ignored: nothing captured"),
        }

        self.state()
    }

    /// Hand the current capture's coordinate to the map screen.
    /// Returns false when no coordinate is attached.
    pub fn open_map(&self) -> bool {
        match self.map_route() {
            Some(params) => {
                self.navigator.navigate(MAP_ROUTE, params);
                true
            }
            None => {
                log::debug!("[CaptureOrchestrator] no location to show on the map");
                false
            }
        }
    }

    /// Coordinate of the held capture, if any
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.lock().state.session().and_then(CaptureSession::coordinate)
    }

    fn lock(&self) -> MutexGuard<'_, OrchestratorInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OrchestratorInner {
    fn capture_blocker(&self) -> Option<IgnoreReason> {
        if self.capture_in_flight {
            return Some(IgnoreReason::CaptureInFlight);
        }
        if !self.state.is_live() {
            return Some(IgnoreReason::NotLive);
        }
        if !self.permissions.is_granted(Capability::Camera) {
            return Some(IgnoreReason::CameraPermissionNotGranted);
        }
        None
    }
}
