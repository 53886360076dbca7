// src/services/test_support.rs
//
// Hand-written fakes for tests where a capability call has to stay
// suspended while the test acts on the service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::capabilities::{CameraCapability, LocationCapability, MapRenderer, Navigator};
use crate::domain::{CapturedImage, Coordinate, MapRenderRequest, PermissionState, ScreenParams};
use crate::error::{CaptureError, LocationError, MapError};

/// Camera whose capture call blocks until `release()` is called
pub struct GatedCamera {
    pub calls: AtomicUsize,
    pub started: Notify,
    release: Notify,
}

impl GatedCamera {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraCapability for GatedCamera {
    async fn status(&self) -> PermissionState {
        PermissionState::Granted
    }

    async fn request(&self) -> PermissionState {
        PermissionState::Granted
    }

    async fn capture_photo(&self) -> Result<CapturedImage, CaptureError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(CapturedImage::new(format!("file:///tmp/gated-{}.jpg", n)))
    }
}

/// Location provider whose position call blocks until `release()`
pub struct GatedLocation {
    coordinate: Coordinate,
    pub started: Notify,
    release: Notify,
}

impl GatedLocation {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl LocationCapability for GatedLocation {
    async fn status(&self) -> PermissionState {
        PermissionState::Granted
    }

    async fn request(&self) -> PermissionState {
        PermissionState::Granted
    }

    async fn current_position(&self) -> Result<Coordinate, LocationError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.coordinate)
    }
}

/// Map renderer whose render call blocks until `release()`
pub struct GatedRenderer {
    pub started: Notify,
    release: Notify,
}

impl GatedRenderer {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn release(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl MapRenderer for GatedRenderer {
    async fn render(&self, _request: &MapRenderRequest) -> Result<(), MapError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(())
    }
}

/// Navigator that records calls
#[derive(Default)]
pub struct RecordingNavigator {
    pub pushed: Mutex<Vec<(String, ScreenParams)>>,
    pub backs: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str, params: ScreenParams) {
        self.pushed.lock().unwrap().push((route.to_string(), params));
    }

    fn back(&self) -> bool {
        self.backs.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn current_route(&self) -> Option<String> {
        self.pushed.lock().unwrap().last().map(|(route, _)| route.clone())
    }
}
