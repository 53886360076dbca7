// src/integrations/map_link/links.rs
//
// Deep-link URLs for the supported navigation apps.
//
// All three apps accept plain https links, so the same URL works from a
// browser when the native app is absent.

use url::Url;

use crate::domain::{Coordinate, NavigationApp};

const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/";
const APPLE_MAPS: &str = "https://maps.apple.com/";
const WAZE: &str = "https://waze.com/ul";

/// Launch URL that opens `app` centered on `coordinate`, labelled `title`
/// where the app supports a label.
pub fn deep_link(app: NavigationApp, coordinate: Coordinate, title: &str) -> Result<Url, url::ParseError> {
    let ll = coordinate.to_string();
    match app {
        NavigationApp::GoogleMaps => {
            Url::parse_with_params(GOOGLE_MAPS_SEARCH, &[("api", "1"), ("query", ll.as_str())])
        }
        NavigationApp::AppleMaps => Url::parse_with_params(APPLE_MAPS, &[("ll", ll.as_str()), ("q", title)]),
        NavigationApp::Waze => Url::parse_with_params(WAZE, &[("ll", ll.as_str()), ("navigate", "yes")]),
    }
}
