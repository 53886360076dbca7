// events/map_events.rs
//
// Diagnostic events of the location map screen.
// Map readiness and viewport changes never alter dispatcher state;
// they exist to be observed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Coordinate, MapRegion};
use crate::events::DomainEvent;

/// Emitted when the map view was handed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRendered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub region: MapRegion,
}

impl MapRendered {
    pub fn new(region: MapRegion) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            region,
        }
    }
}

impl DomainEvent for MapRendered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MapRendered" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapReady {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl MapReady {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for MapReady {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for MapReady {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MapReady" }
}

/// Emitted after the user pans or zooms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRegionChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub region: MapRegion,
}

impl MapRegionChanged {
    pub fn new(region: MapRegion) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            region,
        }
    }
}

impl DomainEvent for MapRegionChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MapRegionChanged" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapErrorReported {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

impl MapErrorReported {
    pub fn new(message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            message,
        }
    }
}

impl DomainEvent for MapErrorReported {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MapErrorReported" }
}

/// Emitted when a navigation app was launched for the location,
/// or the user dismissed the chooser (`app` is `None`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationShared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coordinate: Coordinate,
    pub app: Option<String>,
}

impl LocationShared {
    pub fn new(coordinate: Coordinate, app: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coordinate,
            app,
        }
    }
}

impl DomainEvent for LocationShared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LocationShared" }
}

/// Emitted when app resolution failed. The user stays on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coordinate: Coordinate,
    pub reason: String,
}

impl ShareFailed {
    pub fn new(coordinate: Coordinate, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coordinate,
            reason,
        }
    }
}

impl DomainEvent for ShareFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ShareFailed" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigatedBack {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from_route: String,
}

impl NavigatedBack {
    pub fn new(from_route: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from_route,
        }
    }
}

impl DomainEvent for NavigatedBack {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "NavigatedBack" }
}
