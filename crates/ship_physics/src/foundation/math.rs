//! Math utilities and types
//!
//! Provides the 2D math types used by the kinematics model. Everything is
//! double precision: positions are unbounded and speeds reach 300000.

pub use nalgebra::Vector2;

/// 2D vector type (velocities, displacements, headings)
pub type Vec2 = Vector2<f64>;

/// 2D point type (body centers, contact points)
pub type Point2 = nalgebra::Point2<f64>;

/// Unit vector pointing along the given angle, measured in radians from +x
pub fn heading(angle: f64) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Rescale `v` to exactly `max_len` if it is longer, keeping its direction.
///
/// A vector whose length is NaN fails the `<=` test and goes through the
/// division, so the NaN spreads to both components.
pub fn clamp_magnitude(v: Vec2, max_len: f64) -> Vec2 {
    let len = v.norm();
    if len <= max_len {
        v
    } else {
        v / len * max_len
    }
}

/// Point `part / whole` of the way from `from` to `to`.
///
/// The offset is scaled by `part` before dividing by `whole`, so the result
/// rounds the same way as `from + (to - from) * part / whole` written out.
pub fn lerp_points(from: &Point2, to: &Point2, part: f64, whole: f64) -> Point2 {
    from + (to - from) * part / whole
}

/// Common math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// Tau (2π) constant, one full revolution
    pub const TAU: f64 = std::f64::consts::TAU;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_heading_cardinal_directions() {
        assert_abs_diff_eq!(heading(0.0), Vec2::new(1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(heading(constants::PI / 2.0), Vec2::new(0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(heading(constants::PI), Vec2::new(-1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_keeps_short_vectors() {
        let v = Vec2::new(3.0, -4.0);
        assert_eq!(clamp_magnitude(v, 5.0), v);
        assert_eq!(clamp_magnitude(v, 10.0), v);
    }

    #[test]
    fn test_clamp_rescales_long_vectors() {
        let clamped = clamp_magnitude(Vec2::new(30.0, 40.0), 5.0);
        assert_relative_eq!(clamped, Vec2::new(3.0, 4.0), epsilon = 1e-12);
    }

    #[test]
    fn test_clamp_spreads_nan() {
        let clamped = clamp_magnitude(Vec2::new(f64::NAN, 10.0), 5.0);
        assert!(clamped.x.is_nan());
        assert!(clamped.y.is_nan());
    }

    #[test]
    fn test_lerp_points() {
        let a = Point2::new(0.0, 10.0);
        let b = Point2::new(0.0, 60.0);
        assert_eq!(lerp_points(&a, &b, 25.0, 50.0), Point2::new(0.0, 35.0));
        assert_eq!(lerp_points(&a, &b, 0.0, 50.0), a);
        assert_eq!(lerp_points(&a, &b, 13.0, 42.0), a + (b - a) * 13.0 / 42.0);
    }
}
