//! # Asteroids
//!
//! Game-facing layer over [`ship_physics`]: the [`facade::Facade`] the game
//! and its tests talk to, and the scenario configuration read by the
//! `asteroids` collision report binary.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod config;
pub mod facade;

pub use facade::{Facade, ModelError, Ship};
