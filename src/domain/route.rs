// src/domain/route.rs
//
// Screen-transition parameters.
//
// The map screen is entered with two string-typed query parameters.
// Values stay as untrusted text here; parsing happens in Coordinate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Coordinate;

pub const MAP_ROUTE: &str = "/MapScreen";
pub const LATITUDE_PARAM: &str = "latitude";
pub const LONGITUDE_PARAM: &str = "longitude";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenParams {
    values: BTreeMap<String, String>,
}

impl ScreenParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters that hand a coordinate to the map screen
    pub fn for_coordinate(coordinate: &Coordinate) -> Self {
        let mut params = Self::new();
        params.insert(LATITUDE_PARAM, coordinate.latitude.to_string());
        params.insert(LONGITUDE_PARAM, coordinate.longitude.to_string());
        params
    }

    /// Parse an `a=b&c=d` query string. Later duplicates win.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let values = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { values }
    }

    pub fn to_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.values.iter())
            .finish()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn latitude(&self) -> Option<&str> {
        self.get(LATITUDE_PARAM)
    }

    pub fn longitude(&self) -> Option<&str> {
        self.get(LONGITUDE_PARAM)
    }
}
