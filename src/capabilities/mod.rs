// src/capabilities/mod.rs
//
// Capability layer - narrow interfaces to external collaborators
//
// RULES:
// - Capabilities are opaque providers (camera, OS location, media library,
//   map widget, app launcher, router)
// - NO orchestration logic
// - NO event emission
// - Injected into services as Arc<dyn Trait>

pub mod app_resolver;
pub mod device;
pub mod map_renderer;
pub mod navigator;

pub use app_resolver::{AppResolver, ShareResolution};
pub use device::{CameraCapability, LocationCapability, MediaLibraryCapability};
pub use map_renderer::MapRenderer;
pub use navigator::Navigator;

#[cfg(test)]
pub use app_resolver::MockAppResolver;
#[cfg(test)]
pub use device::{MockCameraCapability, MockLocationCapability, MockMediaLibraryCapability};
#[cfg(test)]
pub use map_renderer::MockMapRenderer;
#[cfg(test)]
pub use navigator::MockNavigator;
