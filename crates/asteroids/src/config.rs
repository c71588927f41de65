//! Scenario configuration
//!
//! A scenario lists ships by name with their initial state, plus the
//! commands each ship performs before the collision report is taken.
//!
//! ```toml
//! [[ships]]
//! name = "hunter"
//! x = 0.0
//! vy = 1.0
//! radius = 25.0
//! commands = [{ thrust = 2.0 }, { turn = 1.5707963 }, { move = 3.0 }]
//! ```

use serde::{Deserialize, Serialize};
use ship_physics::config::Config;
use ship_physics::physics::limits::DEFAULT_RADIUS;

/// A single action applied to a ship, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipCommand {
    /// Move along the current velocity for this many seconds
    Move(f64),

    /// Fire the engine with this impulse along the orientation
    Thrust(f64),

    /// Turn by this many radians
    Turn(f64),
}

/// Initial state of one ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Name used in the report
    pub name: String,

    /// Initial x coordinate (km)
    pub x: f64,

    /// Initial y coordinate (km)
    pub y: f64,

    /// Initial x velocity (km/s)
    pub vx: f64,

    /// Initial y velocity (km/s)
    pub vy: f64,

    /// Radius (km)
    pub radius: f64,

    /// Initial orientation (radians)
    pub orientation: f64,

    /// Commands applied before the report
    pub commands: Vec<ShipCommand>,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            name: "ship".to_string(),
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            radius: DEFAULT_RADIUS,
            orientation: 0.0,
            commands: Vec::new(),
        }
    }
}

/// A full scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Ships taking part
    pub ships: Vec<ShipConfig>,
}

impl Config for ScenarioConfig {}

impl Default for ScenarioConfig {
    /// Three ships: one approaching a resting target head-on, one drifting away
    fn default() -> Self {
        Self {
            ships: vec![
                ShipConfig {
                    name: "hunter".to_string(),
                    vy: 1.0,
                    radius: 25.0,
                    ..ShipConfig::default()
                },
                ShipConfig {
                    name: "target".to_string(),
                    y: 60.0,
                    radius: 25.0,
                    ..ShipConfig::default()
                },
                ShipConfig {
                    name: "drifter".to_string(),
                    x: 35.0,
                    y: -120.0,
                    vx: -20.0,
                    vy: 30.0,
                    radius: 25.0,
                    commands: vec![ShipCommand::Thrust(5.0), ShipCommand::Move(1.0)],
                    ..ShipConfig::default()
                },
            ],
        }
    }
}
