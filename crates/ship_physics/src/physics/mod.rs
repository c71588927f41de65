//! Physics module for ship kinematics and collision prediction
//!
//! Provides the kinematic body model and exact, closed-form collision
//! prediction between pairs of circular bodies.
//!
//! # Module Organization
//!
//! - [`body`] - [`KinematicBody`] state, validation and state transitions
//! - [`collision`] - Pairwise distance, overlap, time-to-collision and contact point
//! - [`limits`] - Physical constants of the model
//! - [`error`] - [`PhysicsError`]

pub mod body;
pub mod collision;
pub mod error;
pub mod limits;

#[cfg(test)]
mod tests;

pub use body::KinematicBody;
pub use collision::{collision_position, distance_between, overlap, time_to_collision};
pub use error::PhysicsError;
