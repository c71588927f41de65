//! # Ship Physics
//!
//! Kinematics and analytic collision prediction for circular ships moving
//! freely in an unbounded 2D plane.
//!
//! ## Features
//!
//! - **Kinematic Bodies**: Position, velocity, immutable radius and orientation
//!   with validated, invariant-preserving mutators
//! - **Speed Ceiling**: Velocities above the speed limit are rescaled, never rejected
//! - **Exact Collision Prediction**: Closed-form time-to-contact and contact point
//!   between two bodies under constant-velocity motion (no time stepping)
//! - **Configuration**: TOML/RON loading for any serde type via [`config::Config`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ship_physics::prelude::*;
//!
//! fn main() -> Result<(), PhysicsError> {
//!     let resting = KinematicBody::new(0.0, 0.0, 0.0, 0.0, 20.0, 0.0)?;
//!     let incoming = KinematicBody::new(0.0, -60.0, 0.0, 1.0, 20.0, std::f64::consts::FRAC_PI_2)?;
//!
//!     assert_eq!(time_to_collision(&resting, &incoming), 20.0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod physics;
pub mod config;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        foundation::math::{Point2, Vec2},
        physics::{
            KinematicBody, PhysicsError,
            collision::{collision_position, distance_between, overlap, time_to_collision},
            limits::{DEFAULT_RADIUS, FULL_TURN, MIN_RADIUS, SPEED_LIMIT},
        },
        config::{Config, ConfigError},
    };
}
