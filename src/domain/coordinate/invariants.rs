use super::entity::Coordinate;
use crate::domain::{DomainError, DomainResult};

/// Validates all Coordinate invariants
pub fn validate_coordinate(coordinate: &Coordinate) -> DomainResult<()> {
    validate_finite(coordinate)?;
    validate_range(coordinate)?;
    Ok(())
}

fn validate_finite(coordinate: &Coordinate) -> DomainResult<()> {
    if !coordinate.latitude.is_finite() || !coordinate.longitude.is_finite() {
        return Err(DomainError::NonFiniteCoordinate);
    }
    Ok(())
}

/// Range invariants:
/// 1. latitude in [-90, 90]
/// 2. longitude in [-180, 180]
fn validate_range(coordinate: &Coordinate) -> DomainResult<()> {
    let latitude_ok = (Coordinate::MIN_LATITUDE..=Coordinate::MAX_LATITUDE)
        .contains(&coordinate.latitude);
    let longitude_ok = (Coordinate::MIN_LONGITUDE..=Coordinate::MAX_LONGITUDE)
        .contains(&coordinate.longitude);

    if !latitude_ok || !longitude_ok {
        return Err(DomainError::CoordinateOutOfRange {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_coordinate(&raw(90.0, 180.0)).is_ok());
        assert!(validate_coordinate(&raw(-90.0, -180.0)).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range_fails() {
        assert!(matches!(
            validate_coordinate(&raw(-90.0001, 0.0)),
            Err(DomainError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_longitude_out_of_range_fails() {
        assert!(validate_coordinate(&raw(0.0, 180.5)).is_err());
    }

    #[test]
    fn test_non_finite_fails() {
        assert_eq!(
            validate_coordinate(&raw(f64::NAN, 0.0)),
            Err(DomainError::NonFiniteCoordinate)
        );
    }
}
