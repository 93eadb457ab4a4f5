use thiserror::Error;
use tracing::error;

use crate::constants::{MIN_CONTROL_POINTS, MIN_RESOLUTION};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("Too few control points: {count} (need at least {})", MIN_CONTROL_POINTS)]
    InvalidControlPoints { count: usize },
    #[error("Invalid resolution: {0} (need at least {min})", min = MIN_RESOLUTION)]
    InvalidResolution(usize),
}

/// Validate the control point count
pub fn validate_control_points(count: usize) -> Result<(), SplineError> {
    if count < MIN_CONTROL_POINTS {
        error!("Catmull-Rom: {} control points is too few", count);
        return Err(SplineError::InvalidControlPoints { count });
    }
    Ok(())
}

/// Validate the per-segment resolution
pub fn validate_resolution(resolution: usize) -> Result<(), SplineError> {
    if resolution < MIN_RESOLUTION {
        error!("Catmull-Rom: resolution {} is too small", resolution);
        return Err(SplineError::InvalidResolution(resolution));
    }
    Ok(())
}

/// Validate a full build configuration
pub fn validate_build(control_points: usize, resolution: usize) -> Result<(), SplineError> {
    validate_control_points(control_points)?;
    validate_resolution(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_point_bounds() {
        assert_eq!(
            validate_control_points(0),
            Err(SplineError::InvalidControlPoints { count: 0 })
        );
        assert_eq!(
            validate_control_points(2),
            Err(SplineError::InvalidControlPoints { count: 2 })
        );
        assert!(validate_control_points(3).is_ok());
    }

    #[test]
    fn test_resolution_bounds() {
        assert_eq!(validate_resolution(1), Err(SplineError::InvalidResolution(1)));
        assert!(validate_resolution(2).is_ok());
    }

    #[test]
    fn test_control_points_checked_first() {
        assert_eq!(
            validate_build(1, 0),
            Err(SplineError::InvalidControlPoints { count: 1 })
        );
        assert_eq!(validate_build(4, 0), Err(SplineError::InvalidResolution(0)));
    }

    #[test]
    fn test_error_messages() {
        let err = SplineError::InvalidControlPoints { count: 2 };
        assert_eq!(
            err.to_string(),
            "Too few control points: 2 (need at least 3)"
        );
        assert_eq!(
            SplineError::InvalidResolution(1).to_string(),
            "Invalid resolution: 1 (need at least 2)"
        );
    }
}
