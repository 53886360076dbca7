pub mod entity;
pub mod invariants;

pub use entity::{CaptureSession, CaptureState, CapturedImage, LocationTag};
pub use invariants::validate_capture_session;
