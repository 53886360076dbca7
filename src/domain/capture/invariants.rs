use super::entity::CaptureSession;
use crate::domain::{validate_coordinate, DomainError, DomainResult};

/// Validates all CaptureSession invariants
pub fn validate_capture_session(session: &CaptureSession) -> DomainResult<()> {
    validate_image(session)?;
    validate_location(session)?;
    Ok(())
}

fn validate_image(session: &CaptureSession) -> DomainResult<()> {
    if session.image.uri.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "captured image has an empty URI".to_string(),
        ));
    }
    Ok(())
}

/// Location invariants:
/// 1. An attached coordinate is within geographic range
/// 2. It was sampled strictly after the image was captured
fn validate_location(session: &CaptureSession) -> DomainResult<()> {
    if let Some(tag) = session.location {
        validate_coordinate(&tag.coordinate)?;
        if tag.sampled_at <= session.image.captured_at {
            return Err(DomainError::SampledBeforeCapture {
                captured_at: session.image.captured_at.to_rfc3339(),
                sampled_at: tag.sampled_at.to_rfc3339(),
            });
        }
    }
    Ok(())
}
