// src/capabilities/device.rs
//
// Device capabilities used by the capture screen.
//
// Each capability owns its own permission status. Permission calls are
// infallible at this boundary: a provider that cannot determine a status
// reports `Undetermined`.

use async_trait::async_trait;

use crate::domain::{CapturedImage, Coordinate, PermissionState};
use crate::error::{CaptureError, LocationError};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CameraCapability: Send + Sync {
    async fn status(&self) -> PermissionState;
    async fn request(&self) -> PermissionState;

    /// Take one still image from the active preview
    async fn capture_photo(&self) -> Result<CapturedImage, CaptureError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationCapability: Send + Sync {
    async fn status(&self) -> PermissionState;
    async fn request(&self) -> PermissionState;

    /// Sample the current device position. Timeouts are the provider's.
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}

/// Only the permission is consumed today; it pre-arms saving photos.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaLibraryCapability: Send + Sync {
    async fn status(&self) -> PermissionState;
    async fn request(&self) -> PermissionState;
}
