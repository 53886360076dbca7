pub mod entity;
pub mod invariants;

pub use entity::{Coordinate, CoordinateInputError};
pub use invariants::validate_coordinate;
