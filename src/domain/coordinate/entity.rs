// src/domain/coordinate/entity.rs
//
// Coordinate - a latitude/longitude pair in decimal degrees.
//
// Two producers exist:
// - live location samples (trusted, validated on arrival)
// - screen-transition parameters (untrusted strings, parsed here)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::invariants::validate_coordinate;
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Why a pair of textual parameters could not become a Coordinate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateInputError {
    #[error("Missing coordinate parameter: {param}")]
    Missing { param: &'static str },

    #[error("Parameter {param} is not a number: {value:?}")]
    NotANumber { param: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

impl Coordinate {
    pub const MIN_LATITUDE: f64 = -90.0;
    pub const MAX_LATITUDE: f64 = 90.0;
    pub const MIN_LONGITUDE: f64 = -180.0;
    pub const MAX_LONGITUDE: f64 = 180.0;

    /// Create a Coordinate, enforcing the geographic range invariant
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        validate_coordinate(&coordinate)?;
        Ok(coordinate)
    }

    /// Parse the two optional textual parameters carried by a screen
    /// transition.
    ///
    /// Order of checks: presence of both, then numeric parse of both,
    /// then the range invariant.
    pub fn from_params(
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Self, CoordinateInputError> {
        let lat_str = non_empty(latitude).ok_or(CoordinateInputError::Missing {
            param: crate::domain::LATITUDE_PARAM,
        })?;
        let lon_str = non_empty(longitude).ok_or(CoordinateInputError::Missing {
            param: crate::domain::LONGITUDE_PARAM,
        })?;

        let latitude = parse_component(crate::domain::LATITUDE_PARAM, lat_str)?;
        let longitude = parse_component(crate::domain::LONGITUDE_PARAM, lon_str)?;

        Ok(Self::new(latitude, longitude)?)
    }

    /// Short label used by the captured-photo review view
    pub fn label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_component(param: &'static str, value: &str) -> Result<f64, CoordinateInputError> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(CoordinateInputError::NotANumber {
            param,
            value: value.to_string(),
        }),
    }
}
