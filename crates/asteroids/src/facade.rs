//! Game-facing facade over the ship physics model
//!
//! One call per game action or query. Coordinates cross this boundary as
//! plain `[x, y]` arrays, and every failure of the model is wrapped in a
//! [`ModelError`].

use ship_physics::config::ConfigError;
use ship_physics::physics::{self, KinematicBody, PhysicsError};
use thiserror::Error;

/// A ship as seen by the game
pub type Ship = KinematicBody;

/// Errors surfaced to the game
#[derive(Error, Debug)]
pub enum ModelError {
    /// The physics model rejected an argument
    #[error("Model error: {0}")]
    Physics(#[from] PhysicsError),

    /// Scenario configuration could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario entry that would break a caller precondition of the model
    #[error("Scenario error: {0}")]
    Scenario(String),
}

/// Thin accessor/mutator surface used by the game and its tests
#[derive(Debug, Default, Clone, Copy)]
pub struct Facade;

#[allow(clippy::unused_self)]
impl Facade {
    /// Create a new facade
    pub const fn new() -> Self {
        Self
    }

    /// Create a ship at rest at the origin with the default radius
    pub fn create_ship(&self) -> Ship {
        Ship::default()
    }

    /// Create a ship from its full initial state
    pub fn create_ship_with(
        &self,
        x: f64,
        y: f64,
        x_velocity: f64,
        y_velocity: f64,
        radius: f64,
        orientation: f64,
    ) -> Result<Ship, ModelError> {
        Ok(Ship::new(x, y, x_velocity, y_velocity, radius, orientation)?)
    }

    /// Ship center as `[x, y]`
    pub fn ship_position(&self, ship: &Ship) -> [f64; 2] {
        [ship.x(), ship.y()]
    }

    /// Ship velocity as `[vx, vy]`
    pub fn ship_velocity(&self, ship: &Ship) -> [f64; 2] {
        [ship.vx(), ship.vy()]
    }

    /// Ship radius
    pub fn ship_radius(&self, ship: &Ship) -> f64 {
        ship.radius()
    }

    /// Ship orientation in radians
    pub fn ship_orientation(&self, ship: &Ship) -> f64 {
        ship.orientation()
    }

    /// Teleport a ship
    pub fn set_ship_position(&self, ship: &mut Ship, x: f64, y: f64) -> Result<(), ModelError> {
        Ok(ship.set_position(x, y)?)
    }

    /// Set a ship's velocity, clamped to the speed limit
    pub fn set_ship_velocity(&self, ship: &mut Ship, x_velocity: f64, y_velocity: f64) {
        ship.set_velocity(x_velocity, y_velocity);
    }

    /// Set a ship's orientation; must be within `[-2π, 2π]`
    pub fn set_ship_orientation(&self, ship: &mut Ship, orientation: f64) {
        ship.set_orientation(orientation);
    }

    /// Move a ship along its velocity for `dt` seconds
    pub fn move_ship(&self, ship: &mut Ship, dt: f64) -> Result<(), ModelError> {
        Ok(ship.advance(dt)?)
    }

    /// Fire a ship's engine along its orientation
    pub fn thrust(&self, ship: &mut Ship, amount: f64) {
        ship.thrust(amount);
    }

    /// Turn a ship by `angle` radians
    pub fn turn(&self, ship: &mut Ship, angle: f64) {
        ship.turn(angle);
    }

    /// Signed edge-to-edge distance between two ships
    pub fn distance_between(&self, ship: &Ship, other: &Ship) -> f64 {
        physics::distance_between(ship, other)
    }

    /// Whether two ships overlap
    pub fn overlap(&self, ship: &Ship, other: &Ship) -> bool {
        physics::overlap(ship, other)
    }

    /// Seconds until two ships first touch, infinite if never
    pub fn time_to_collision(&self, ship: &Ship, other: &Ship) -> f64 {
        physics::time_to_collision(ship, other)
    }

    /// Where two ships first touch as `[x, y]`, if they ever do
    pub fn collision_position(&self, ship: &Ship, other: &Ship) -> Option<[f64; 2]> {
        physics::collision_position(ship, other).map(|point| [point.x, point.y])
    }
}
