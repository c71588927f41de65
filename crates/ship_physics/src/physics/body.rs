//! Kinematic body: a circular ship with position, velocity, radius and orientation
//!
//! Mutators keep the body's invariants at all times:
//! - neither position coordinate is NaN
//! - speed never exceeds [`SPEED_LIMIT`] (excess is clamped, not rejected)
//! - radius is greater than [`MIN_RADIUS`] and never changes
//! - `|orientation| <= FULL_TURN` (a caller precondition, checked in debug builds)

use crate::foundation::math::{self, Point2, Vec2};
use crate::physics::collision;
use crate::physics::error::PhysicsError;
use crate::physics::limits::{DEFAULT_RADIUS, FULL_TURN, MIN_RADIUS, SPEED_LIMIT};

/// A circular rigid body moving at constant velocity between updates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    position: Point2,
    velocity: Vec2,
    radius: f64,
    orientation: f64,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            position: Point2::origin(),
            velocity: Vec2::zeros(),
            radius: DEFAULT_RADIUS,
            orientation: 0.0,
        }
    }
}

impl KinematicBody {
    /// Create a body from its full initial state.
    ///
    /// The velocity is clamped to [`SPEED_LIMIT`]. The orientation must
    /// satisfy [`Self::is_valid_orientation`].
    ///
    /// # Errors
    /// [`PhysicsError::InvalidPosition`] if `x` or `y` is NaN,
    /// [`PhysicsError::InvalidRadius`] if `radius <= MIN_RADIUS`.
    pub fn new(
        x: f64,
        y: f64,
        vx: f64,
        vy: f64,
        radius: f64,
        orientation: f64,
    ) -> Result<Self, PhysicsError> {
        if !Self::is_valid_position(x, y) {
            return Err(PhysicsError::InvalidPosition { x, y });
        }
        debug_assert!(
            Self::is_valid_orientation(orientation),
            "orientation {orientation} outside [-2π, 2π]"
        );
        if !Self::is_valid_radius(radius) {
            return Err(PhysicsError::InvalidRadius(radius));
        }

        let mut body = Self {
            position: Point2::new(x, y),
            velocity: Vec2::zeros(),
            radius,
            orientation,
        };
        body.set_velocity(vx, vy);
        Ok(body)
    }

    // Position

    /// Center of the body (km)
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// x coordinate of the center
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// y coordinate of the center
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Whether `(x, y)` can be a body position: any value but NaN, infinities included
    pub fn is_valid_position(x: f64, y: f64) -> bool {
        !x.is_nan() && !y.is_nan()
    }

    /// Replace both coordinates, or neither.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidPosition`] if either coordinate is NaN.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<(), PhysicsError> {
        if !Self::is_valid_position(x, y) {
            return Err(PhysicsError::InvalidPosition { x, y });
        }
        self.position = Point2::new(x, y);
        Ok(())
    }

    /// Where the center will be after `time` seconds at the current velocity.
    /// Pure projection: the body itself is not touched.
    pub fn position_at(&self, time: f64) -> Point2 {
        self.position + self.velocity * time
    }

    // Velocity

    /// Velocity (km/s)
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// x component of the velocity
    pub fn vx(&self) -> f64 {
        self.velocity.x
    }

    /// y component of the velocity
    pub fn vy(&self) -> f64 {
        self.velocity.y
    }

    /// Magnitude of the velocity
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Whether `(vx, vy)` is within the speed limit
    pub fn is_valid_velocity(vx: f64, vy: f64) -> bool {
        Vec2::new(vx, vy).norm() <= SPEED_LIMIT
    }

    /// Set the velocity. Never fails: a vector faster than [`SPEED_LIMIT`] is
    /// rescaled to exactly that speed in the same direction. A NaN component
    /// ends up as NaN in both components.
    pub fn set_velocity(&mut self, vx: f64, vy: f64) {
        let requested = Vec2::new(vx, vy);
        if !Self::is_valid_velocity(vx, vy) {
            log::debug!(
                "Clamping velocity ({vx}, {vy}) with speed {} to the speed limit {SPEED_LIMIT}",
                requested.norm()
            );
        }
        self.velocity = math::clamp_magnitude(requested, SPEED_LIMIT);
    }

    // Radius

    /// Radius (km), fixed at construction
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether `radius` is strictly greater than [`MIN_RADIUS`]
    pub fn is_valid_radius(radius: f64) -> bool {
        radius > MIN_RADIUS
    }

    // Orientation

    /// Facing direction in radians
    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    /// Whether `|orientation| <= 2π`. Both `2π` and `-2π` are valid and
    /// distinct from `0`.
    pub fn is_valid_orientation(orientation: f64) -> bool {
        orientation.abs() <= FULL_TURN
    }

    /// Set the orientation. The caller guarantees [`Self::is_valid_orientation`].
    pub fn set_orientation(&mut self, orientation: f64) {
        debug_assert!(
            Self::is_valid_orientation(orientation),
            "orientation {orientation} outside [-2π, 2π]"
        );
        self.orientation = orientation;
    }

    /// Turn by `angle` radians. The caller guarantees `angle` is itself a valid
    /// orientation.
    ///
    /// A sum reaching `±2π` is wrapped once towards zero. Both operands lie in
    /// `[-2π, 2π]`, so one wrap always lands back in `(-2π, 2π)`.
    pub fn turn(&mut self, angle: f64) {
        debug_assert!(
            Self::is_valid_orientation(angle),
            "turn angle {angle} outside [-2π, 2π]"
        );
        let turned = self.orientation + angle;
        let wrapped = if turned.abs() >= FULL_TURN {
            if turned > 0.0 {
                turned - FULL_TURN
            } else {
                turned + FULL_TURN
            }
        } else {
            turned
        };
        self.set_orientation(wrapped);
    }

    // Motion

    /// Whether `duration` is a usable time step: strictly positive
    pub fn is_valid_duration(duration: f64) -> bool {
        duration > 0.0
    }

    /// Whether `amount` is a usable thrust: not negative, not NaN
    pub fn is_valid_thrust_amount(amount: f64) -> bool {
        amount >= 0.0
    }

    /// Move along the current velocity for `duration` seconds.
    ///
    /// Invalid durations and a body at rest leave the position untouched.
    ///
    /// # Errors
    /// [`PhysicsError::InvalidPosition`] if the new position would contain NaN
    /// (e.g. an infinite coordinate pushed back by an infinite displacement).
    /// The position is left unchanged in that case.
    pub fn advance(&mut self, duration: f64) -> Result<(), PhysicsError> {
        if !Self::is_valid_duration(duration) || self.speed() == 0.0 {
            return Ok(());
        }
        let target = self.position_at(duration);
        self.set_position(target.x, target.y).map_err(|err| {
            log::debug!("Rejected move over {duration}s from {:?}: {err}", self.position);
            err
        })
    }

    /// Apply an instantaneous impulse of `amount` along the orientation.
    ///
    /// Negative (or NaN) amounts are ignored. The resulting velocity goes
    /// through the same clamp as [`Self::set_velocity`].
    pub fn thrust(&mut self, amount: f64) {
        if !Self::is_valid_thrust_amount(amount) {
            return;
        }
        let boosted = self.velocity + math::heading(self.orientation) * amount;
        self.set_velocity(boosted.x, boosted.y);
    }

    // Pairwise queries

    /// Signed edge-to-edge distance to `other`; see [`collision::distance_between`]
    pub fn distance_to(&self, other: &Self) -> f64 {
        collision::distance_between(self, other)
    }

    /// Whether this body and `other` overlap; see [`collision::overlap`]
    pub fn overlaps(&self, other: &Self) -> bool {
        collision::overlap(self, other)
    }

    /// Seconds until first contact with `other`; see [`collision::time_to_collision`]
    pub fn time_to_collision(&self, other: &Self) -> f64 {
        collision::time_to_collision(self, other)
    }

    /// Point of first contact with `other`; see [`collision::collision_position`]
    pub fn collision_position(&self, other: &Self) -> Option<Point2> {
        collision::collision_position(self, other)
    }
}
