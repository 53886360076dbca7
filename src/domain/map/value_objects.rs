// src/domain/map/value_objects.rs
//
// Map Value Objects
//
// Immutable payloads handed to the map-render and app-resolution
// capabilities. No I/O here.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, DomainError, DomainResult};

// ============================================================================
// MAP RENDERING
// ============================================================================

/// Visible window of the map: a center plus the span in degrees per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Street-level window used when a map screen opens
    pub const DEFAULT_SPAN: f64 = 0.005;

    /// Square window of `span` degrees around `center`
    pub fn around(center: Coordinate, span: f64) -> DomainResult<Self> {
        if !span.is_finite() || span <= 0.0 {
            return Err(DomainError::InvariantViolation(format!(
                "map span must be a positive number, got {}",
                span
            )));
        }
        Ok(Self {
            center,
            latitude_delta: span,
            longitude_delta: span,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub coordinate: Coordinate,
    pub title: String,
}

/// Everything the map renderer needs to draw the location screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRenderRequest {
    pub region: MapRegion,
    pub markers: Vec<MapMarker>,
}

// ============================================================================
// DEEP-LINK DISPATCH
// ============================================================================

/// Navigation apps a location can be handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationApp {
    GoogleMaps,
    AppleMaps,
    Waze,
}

impl NavigationApp {
    pub const ALL: [NavigationApp; 3] = [
        NavigationApp::GoogleMaps,
        NavigationApp::AppleMaps,
        NavigationApp::Waze,
    ];

    /// Stable identifier used in config files and allow-lists
    pub fn id(self) -> &'static str {
        match self {
            NavigationApp::GoogleMaps => "google-maps",
            NavigationApp::AppleMaps => "apple-maps",
            NavigationApp::Waze => "waze",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NavigationApp::GoogleMaps => "Google Maps",
            NavigationApp::AppleMaps => "Apple Maps",
            NavigationApp::Waze => "Waze",
        }
    }
}

impl std::fmt::Display for NavigationApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for NavigationApp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NavigationApp::ALL
            .into_iter()
            .find(|app| app.id() == s.trim())
            .ok_or_else(|| DomainError::InvariantViolation(format!("Unknown navigation app: {}", s)))
    }
}

/// Payload for one app-resolution call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRequest {
    pub coordinate: Coordinate,
    pub title: String,
    pub dialog_title: String,
    pub dialog_message: String,
    pub cancel_text: String,
    pub allow_list: Vec<NavigationApp>,
}
