// src/events/handlers/diagnostic_handler.rs
//
// Routes failure events to the log.
//
// Services swallow capability failures; this is where they become
// visible to whoever reads the diagnostics.

use crate::events::{
    CaptureFailed, EventBus, LocationSampleFailed, MapErrorReported, MapReady, MapRegionChanged,
    PermissionResolved, ShareFailed,
};

pub fn register_diagnostic_handlers(bus: &EventBus) {
    bus.subscribe::<CaptureFailed, _>(|event| {
        log::error!("Failed to take picture: {}", event.reason);
    });

    bus.subscribe::<LocationSampleFailed, _>(|event| {
        log::warn!(
            "Location unavailable for capture {}: {}",
            event.session_id,
            event.reason
        );
    });

    bus.subscribe::<ShareFailed, _>(|event| {
        log::error!(
            "Error showing location ({}): {}",
            event.coordinate,
            event.reason
        );
    });

    bus.subscribe::<MapErrorReported, _>(|event| {
        log::error!("[MapScreen] Map error: {}", event.message);
    });

    bus.subscribe::<MapReady, _>(|_| {
        log::info!("[MapScreen] Map is ready");
    });

    bus.subscribe::<MapRegionChanged, _>(|event| {
        log::debug!(
            "[MapScreen] Region changed: center {} span {}x{}",
            event.region.center,
            event.region.latitude_delta,
            event.region.longitude_delta
        );
    });

    bus.subscribe::<PermissionResolved, _>(|event| {
        log::info!("Permission {} is {}", event.capability, event.state);
    });
}
