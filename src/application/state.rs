// src/application/state.rs

use std::sync::{Arc, Mutex, PoisonError};

use crate::capabilities::{
    AppResolver, CameraCapability, LocationCapability, MapRenderer, MediaLibraryCapability, Navigator,
};
use crate::config::AppConfig;
use crate::events::EventBus;
use crate::services::{CaptureOrchestrator, LocationDispatcher};

/// Concrete capability providers supplied by the host shell
pub struct Providers {
    pub camera: Arc<dyn CameraCapability>,
    pub location: Arc<dyn LocationCapability>,
    pub media_library: Arc<dyn MediaLibraryCapability>,
    pub map_renderer: Arc<dyn MapRenderer>,
    pub app_resolver: Arc<dyn AppResolver>,
    pub navigator: Arc<dyn Navigator>,
}

/// Application state shared by all commands.
///
/// The capture screen lives for the whole session; a map screen is created
/// each time one is opened and replaces the previous one.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub capture_orchestrator: Arc<CaptureOrchestrator>,
    map_renderer: Arc<dyn MapRenderer>,
    app_resolver: Arc<dyn AppResolver>,
    navigator: Arc<dyn Navigator>,
    map_screen: Mutex<Option<Arc<LocationDispatcher>>>,
}

impl AppState {
    pub fn new(config: AppConfig, event_bus: Arc<EventBus>, providers: Providers) -> Self {
        let capture_orchestrator = Arc::new(CaptureOrchestrator::new(
            providers.camera,
            providers.location,
            providers.media_library,
            providers.navigator.clone(),
            event_bus.clone(),
        ));

        Self {
            config,
            event_bus,
            capture_orchestrator,
            map_renderer: providers.map_renderer,
            app_resolver: providers.app_resolver,
            navigator: providers.navigator,
            map_screen: Mutex::new(None),
        }
    }

    /// Fresh dispatcher for a newly opened map screen
    pub fn open_map_screen(&self) -> Arc<LocationDispatcher> {
        let dispatcher = Arc::new(LocationDispatcher::new(
            self.map_renderer.clone(),
            self.app_resolver.clone(),
            self.navigator.clone(),
            self.event_bus.clone(),
            self.config.map.clone(),
            self.config.share.clone(),
        ));
        *self.map_screen.lock().unwrap_or_else(PoisonError::into_inner) = Some(dispatcher.clone());
        dispatcher
    }

    pub fn map_screen(&self) -> Option<Arc<LocationDispatcher>> {
        self.map_screen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
