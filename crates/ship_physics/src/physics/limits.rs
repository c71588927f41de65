//! Physical limits of the ship model
//!
//! Lengths are kilometers, times seconds, angles radians.

use crate::foundation::math::constants::TAU;

/// Maximum speed of any body (km/s), the speed of light of the model
pub const SPEED_LIMIT: f64 = 300_000.0;

/// Radii must be strictly greater than this (km)
pub const MIN_RADIUS: f64 = 10.0;

/// Radius of a default-constructed body (km)
pub const DEFAULT_RADIUS: f64 = 15.0;

/// One full revolution; orientations satisfy `|θ| <= FULL_TURN`
pub const FULL_TURN: f64 = TAU;
