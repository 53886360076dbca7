// src/config/mod.rs
//
// Application configuration
//
// Loaded from JSON. Every section has defaults, so an empty object
// (or no file at all) yields the stock Park & Snap behavior.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use url::Url;

use crate::domain::{Coordinate, MapRegion, NavigationApp, ScreenParams, ShareRequest};
use crate::error::{AppError, AppResult};

const CONFIG_DIR_NAME: &str = "park-snap";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfo,
    pub map: MapConfig,
    pub share: ShareConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub name: String,
    /// URL scheme the app registers for deep links into itself
    pub scheme: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            name: "Park & Snap".to_string(),
            scheme: "parkandsnap".to_string(),
        }
    }
}

impl AppInfo {
    /// Link into one of the app's own screens,
    /// e.g. `parkandsnap:///MapScreen?latitude=..&longitude=..`
    pub fn route_link(&self, route: &str, params: &ScreenParams) -> AppResult<Url> {
        let route = route.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}:///{}", self.scheme, route))
            .map_err(|e| AppError::Config(format!("Invalid app scheme {:?}: {}", self.scheme, e)))?;
        let query = params.to_query();
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    /// Split a link into the app's own screens into route and parameters.
    /// Accepts both `scheme:///Route` and `scheme://Route`.
    pub fn parse_route_link(&self, link: &str) -> AppResult<(String, ScreenParams)> {
        let url = Url::parse(link.trim()).map_err(|e| AppError::Other(format!("Invalid link {:?}: {}", link, e)))?;
        if url.scheme() != self.scheme {
            return Err(AppError::Other(format!("Not a {} link: {}", self.name, link)));
        }

        let route = match url.host_str() {
            Some(host) if !host.is_empty() => format!("/{}{}", host, url.path()),
            _ => url.path().to_string(),
        };
        let params = ScreenParams::from_query(url.query().unwrap_or_default());
        Ok((route, params))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial span of the map window in degrees, both axes
    pub zoom_span: f64,
    pub marker_title: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_span: MapRegion::DEFAULT_SPAN,
            marker_title: "Photo Location".to_string(),
        }
    }
}

/// Strings and allow-list passed to the app resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub title: String,
    pub dialog_title: String,
    pub dialog_message: String,
    pub cancel_text: String,
    pub allow_list: Vec<NavigationApp>,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "Photo Location".to_string(),
            dialog_title: "Open with...".to_string(),
            dialog_message: "Choose an app to open the location".to_string(),
            cancel_text: "Cancel".to_string(),
            allow_list: vec![
                NavigationApp::GoogleMaps,
                NavigationApp::AppleMaps,
                NavigationApp::Waze,
            ],
        }
    }
}

impl ShareConfig {
    pub fn request_for(&self, coordinate: Coordinate) -> ShareRequest {
        ShareRequest {
            coordinate,
            title: self.title.clone(),
            dialog_title: self.dialog_title.clone(),
            dialog_message: self.dialog_message.clone(),
            cancel_text: self.cancel_text.clone(),
            allow_list: self.allow_list.clone(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        let config: AppConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path must exist. Without one, the per-user config file
    /// is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> AppResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// `<config_dir>/park-snap/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.map.zoom_span.is_finite() || self.map.zoom_span <= 0.0 {
            return Err(AppError::Config(format!(
                "map.zoom_span must be a positive number, got {}",
                self.map.zoom_span
            )));
        }
        if self.share.allow_list.is_empty() {
            return Err(AppError::Config(
                "share.allow_list must name at least one navigation app".to_string(),
            ));
        }
        Ok(())
    }
}
