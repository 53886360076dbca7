// src/services/location_dispatcher.rs
//
// Location Dispatcher - the map screen.
//
// Validates the coordinate handed over by the previous screen, renders it,
// and on demand hands it to an external navigation app.
//
// RULES:
// - The coordinate is validated once and never re-derived
// - Without a valid coordinate the map is never rendered
// - Map diagnostics (ready/region/error) never change state
// - Share failures are reported, not returned as errors
// - back() is idempotent

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::capabilities::{AppResolver, MapRenderer, Navigator, ShareResolution};
use crate::config::{MapConfig, ShareConfig};
use crate::domain::{
    Coordinate, DomainError, MapMarker, MapRegion, MapRenderRequest, ScreenParams, MAP_ROUTE,
};
use crate::error::{AppError, AppResult, DispatchError};
use crate::events::{
    EventBus, LocationShared, MapErrorReported, MapReady, MapRegionChanged, MapRendered,
    NavigatedBack, ShareFailed,
};

/// Lifecycle of one map screen
#[derive(Debug, Clone, PartialEq)]
pub enum DispatcherState {
    /// Entry parameters not looked at yet
    Uninitialized,

    /// Entry parameters were absent or unusable; shown as a static message
    Invalid { problem: EntryProblem, message: String },

    /// Coordinate validated, map not drawn yet
    Ready { coordinate: Coordinate },

    /// Map handed to the renderer
    Rendered { coordinate: Coordinate, region: MapRegion },

    /// User navigated away
    Closed,
}

impl DispatcherState {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            DispatcherState::Ready { coordinate } | DispatcherState::Rendered { coordinate, .. } => {
                Some(*coordinate)
            }
            _ => None,
        }
    }
}

/// Why the entry parameters were rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryProblem {
    MissingLocation,
    InvalidLocation,
}

/// Result of a share request
#[derive(Debug, Clone, PartialEq)]
pub enum ShareOutcome {
    Dispatched(ShareResolution),
    Failed(DispatchError),
    /// No validated coordinate on an open screen
    Unavailable,
}

pub struct LocationDispatcher {
    map_renderer: Arc<dyn MapRenderer>,
    app_resolver: Arc<dyn AppResolver>,
    navigator: Arc<dyn Navigator>,
    event_bus: Arc<EventBus>,
    map_config: MapConfig,
    share_config: ShareConfig,
    state: Mutex<DispatcherState>,
}

impl LocationDispatcher {
    pub fn new(
        map_renderer: Arc<dyn MapRenderer>,
        app_resolver: Arc<dyn AppResolver>,
        navigator: Arc<dyn Navigator>,
        event_bus: Arc<EventBus>,
        map_config: MapConfig,
        share_config: ShareConfig,
    ) -> Self {
        Self {
            map_renderer,
            app_resolver,
            navigator,
            event_bus,
            map_config,
            share_config,
            state: Mutex::new(DispatcherState::Uninitialized),
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.lock().clone()
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.lock().coordinate()
    }

    /// Validate the two entry parameters.
    ///
    /// Fails with `MissingCoordinate` when either is absent and with
    /// `InvalidCoordinate` when either is not a finite in-range number.
    /// Only the first call on a screen is accepted.
    pub fn initialize(&self, latitude: Option<&str>, longitude: Option<&str>) -> AppResult<Coordinate> {
        let mut state = self.lock();
        if *state != DispatcherState::Uninitialized {
            return Err(AppError::Domain(DomainError::InvalidStateTransition(
                "map screen is already initialized".to_string(),
            )));
        }

        match Coordinate::from_params(latitude, longitude) {
            Ok(coordinate) => {
                *state = DispatcherState::Ready { coordinate };
                log::debug!("[MapScreen] showing {}", coordinate);
                Ok(coordinate)
            }
            Err(err) => {
                let err = AppError::from(err);
                log::error!("[MapScreen] {}", err);
                let problem = match err {
                    AppError::MissingCoordinate { .. } => EntryProblem::MissingLocation,
                    _ => EntryProblem::InvalidLocation,
                };
                *state = DispatcherState::Invalid {
                    problem,
                    message: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// `initialize` from screen-transition parameters
    pub fn initialize_from(&self, params: &ScreenParams) -> AppResult<Coordinate> {
        self.initialize(params.latitude(), params.longitude())
    }

    /// Draw the map centered on the coordinate with one marker
    pub async fn render(&self) -> AppResult<MapRenderRequest> {
        let coordinate = self.coordinate().ok_or_else(|| {
            AppError::Domain(DomainError::InvalidStateTransition(
                "map cannot render without a validated coordinate".to_string(),
            ))
        })?;

        let region = MapRegion::around(coordinate, self.map_config.zoom_span)?;
        let request = MapRenderRequest {
            region,
            markers: vec![MapMarker {
                coordinate,
                title: self.map_config.marker_title.clone(),
            }],
        };

        let rendered = self.map_renderer.render(&request).await;

        // The screen may have been left while the renderer was working
        {
            let mut state = self.lock();
            if state.coordinate().is_none() {
                log::debug!("[MapScreen] render result discarded: screen already closed");
                return Err(AppError::Domain(DomainError::InvalidStateTransition(
                    "map screen was closed during rendering".to_string(),
                )));
            }
            if rendered.is_ok() {
                *state = DispatcherState::Rendered { coordinate, region };
            }
        }

        if let Err(err) = rendered {
            self.on_map_error(&err.0);
            return Err(err.into());
        }

        self.event_bus.emit(MapRendered::new(region));
        Ok(request)
    }

    pub fn on_map_ready(&self) {
        self.event_bus.emit(MapReady::new());
    }

    pub fn on_region_changed(&self, region: MapRegion) {
        self.event_bus.emit(MapRegionChanged::new(region));
    }

    pub fn on_map_error(&self, message: &str) {
        self.event_bus
            .emit(MapErrorReported::new(message.to_string()));
    }

    /// Hand the coordinate to the navigation-app resolver.
    /// Exactly one resolution call per invocation; failures are reported.
    pub async fn share(&self) -> ShareOutcome {
        let coordinate = match self.coordinate() {
            Some(coordinate) => coordinate,
            None => {
                log::warn!("[MapScreen] share requested without a location");
                return ShareOutcome::Unavailable;
            }
        };

        let request = self.share_config.request_for(coordinate);
        match self.app_resolver.show_location(&request).await {
            Ok(resolution) => {
                let app = match resolution {
                    ShareResolution::Launched(app) => Some(app.id().to_string()),
                    ShareResolution::Cancelled => None,
                };
                self.event_bus.emit(LocationShared::new(coordinate, app));
                ShareOutcome::Dispatched(resolution)
            }
            Err(err) => {
                self.event_bus
                    .emit(ShareFailed::new(coordinate, err.to_string()));
                ShareOutcome::Failed(err)
            }
        }
    }

    /// Leave the map screen. Returns false if it was already left.
    pub fn back(&self) -> bool {
        {
            let mut state = self.lock();
            if *state == DispatcherState::Closed {
                log::debug!("[MapScreen] back ignored: already navigated away");
                return false;
            }
            *state = DispatcherState::Closed;
        }

        if !self.navigator.back() {
            log::debug!("[MapScreen] navigator had no previous screen");
        }
        self.event_bus.emit(NavigatedBack::new(MAP_ROUTE.to_string()));
        true
    }

    fn lock(&self) -> MutexGuard<'_, DispatcherState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
