//! Physics errors

use thiserror::Error;

use crate::physics::limits::MIN_RADIUS;

/// Hard failures of the kinematics model.
///
/// Every variant is an invalid-argument failure: the caller handed the model
/// a value it refuses to store. Soft corrections (speed clamping, ignored
/// thrusts and durations) never produce an error.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    /// Radius not strictly greater than the minimum radius
    #[error("Invalid radius {0}: must be greater than {}", MIN_RADIUS)]
    InvalidRadius(f64),

    /// Position with a NaN coordinate
    #[error("Invalid position ({x}, {y}): coordinates must not be NaN")]
    InvalidPosition {
        /// Rejected x coordinate
        x: f64,
        /// Rejected y coordinate
        y: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PhysicsError::InvalidRadius(-20.0).to_string(),
            "Invalid radius -20: must be greater than 10"
        );
        let err = PhysicsError::InvalidPosition { x: f64::NAN, y: 200.0 };
        assert!(err.to_string().starts_with("Invalid position (NaN, 200)"));
    }
}
