//! Asteroids collision report
//!
//! Loads a scenario (TOML or RON, or the built-in default), builds every
//! ship through the facade, applies each ship's commands and then reports
//! distance, overlap, time to collision and collision point for every pair.
//!
//! Usage: `asteroids [scenario.toml|scenario.ron]`

use asteroids::config::{ScenarioConfig, ShipCommand, ShipConfig};
use asteroids::{Facade, ModelError, Ship};
use ship_physics::config::Config;
use ship_physics::foundation::logging;

/// A ship together with its scenario name
struct NamedShip {
    name: String,
    ship: Ship,
}

/// Build one ship and run its commands in order
fn launch_ship(facade: &Facade, config: &ShipConfig) -> Result<NamedShip, ModelError> {
    if !Ship::is_valid_orientation(config.orientation) {
        return Err(ModelError::Scenario(format!(
            "ship '{}' has orientation {} outside [-2π, 2π]",
            config.name, config.orientation
        )));
    }

    let mut ship = facade.create_ship_with(
        config.x,
        config.y,
        config.vx,
        config.vy,
        config.radius,
        config.orientation,
    )?;

    for command in &config.commands {
        log::debug!("Ship '{}': {:?}", config.name, command);
        match *command {
            ShipCommand::Move(dt) => facade.move_ship(&mut ship, dt)?,
            ShipCommand::Thrust(amount) => facade.thrust(&mut ship, amount),
            ShipCommand::Turn(angle) => {
                if !Ship::is_valid_orientation(angle) {
                    return Err(ModelError::Scenario(format!(
                        "ship '{}' turns by {angle}, outside [-2π, 2π]",
                        config.name
                    )));
                }
                facade.turn(&mut ship, angle);
            }
        }
    }

    Ok(NamedShip { name: config.name.clone(), ship })
}

/// Build the whole fleet of a scenario
fn launch_fleet(facade: &Facade, scenario: &ScenarioConfig) -> Result<Vec<NamedShip>, ModelError> {
    scenario.ships.iter().map(|config| launch_ship(facade, config)).collect()
}

/// One line of the pairwise report
fn describe_pair(facade: &Facade, a: &NamedShip, b: &NamedShip) -> String {
    let distance = facade.distance_between(&a.ship, &b.ship);
    let overlap = facade.overlap(&a.ship, &b.ship);
    let time = facade.time_to_collision(&a.ship, &b.ship);
    let contact = facade.collision_position(&a.ship, &b.ship).map_or_else(
        || "never".to_string(),
        |[x, y]| format!("({x:.3}, {y:.3})"),
    );
    format!(
        "{} / {}: distance {distance:.3} km, overlap {overlap}, collision in {time:.3} s at {contact}",
        a.name, b.name
    )
}

fn run(scenario: &ScenarioConfig) -> Result<(), ModelError> {
    let facade = Facade::new();
    let fleet = launch_fleet(&facade, scenario)?;

    for named in &fleet {
        let [x, y] = facade.ship_position(&named.ship);
        let [vx, vy] = facade.ship_velocity(&named.ship);
        log::info!(
            "{}: position ({x:.3}, {y:.3}), velocity ({vx:.3}, {vy:.3}), radius {}, orientation {:.4}",
            named.name,
            facade.ship_radius(&named.ship),
            facade.ship_orientation(&named.ship)
        );
    }

    for (i, a) in fleet.iter().enumerate() {
        for b in &fleet[i + 1..] {
            log::info!("{}", describe_pair(&facade, a, b));
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading scenario from {path}");
            ScenarioConfig::load_from_file(&path).map_err(ModelError::from)?
        }
        None => {
            log::info!("No scenario given, using the built-in default");
            ScenarioConfig::default()
        }
    };

    run(&scenario)?;
    Ok(())
}
