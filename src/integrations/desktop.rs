// src/integrations/desktop.rs
//
// Headless stand-ins for the map widget and the screen router, used by
// the command-line build.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::capabilities::{MapRenderer, Navigator};
use crate::domain::{MapRenderRequest, ScreenParams};
use crate::error::MapError;

/// Logs the map it would draw and keeps the last request
#[derive(Default)]
pub struct LoggingMapRenderer {
    last: Mutex<Option<MapRenderRequest>>,
}

impl LoggingMapRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_request(&self) -> Option<MapRenderRequest> {
        self.last.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl MapRenderer for LoggingMapRenderer {
    async fn render(&self, request: &MapRenderRequest) -> Result<(), MapError> {
        if request.markers.is_empty() {
            return Err(MapError("nothing to show".to_string()));
        }

        let region = &request.region;
        log::info!(
            "[MapScreen] centered on {} (span {} x {})",
            region.center,
            region.latitude_delta,
            region.longitude_delta
        );
        for marker in &request.markers {
            log::info!("[MapScreen] marker {:?} at {}", marker.title, marker.coordinate);
        }

        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = Some(request.clone());
        Ok(())
    }
}

/// In-memory route stack. The root screen is never popped.
pub struct HistoryNavigator {
    stack: Mutex<Vec<(String, ScreenParams)>>,
}

impl HistoryNavigator {
    pub fn new(root: &str) -> Self {
        Self {
            stack: Mutex::new(vec![(root.to_string(), ScreenParams::new())]),
        }
    }

    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    pub fn current_params(&self) -> Option<ScreenParams> {
        self.lock().last().map(|(_, params)| params.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(String, ScreenParams)>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str, params: ScreenParams) {
        log::debug!("navigate {}?{}", route, params.to_query());
        self.lock().push((route.to_string(), params));
    }

    fn back(&self) -> bool {
        let mut stack = self.lock();
        if stack.len() <= 1 {
            return false;
        }
        stack.pop();
        true
    }

    fn current_route(&self) -> Option<String> {
        self.lock().last().map(|(route, _)| route.clone())
    }
}
