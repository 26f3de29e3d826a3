//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the presentation layer.

pub mod camera;
pub mod collision;
pub mod engine;
pub mod player;
pub mod systems;
pub mod world_setup;

pub use holdout_core as core;
pub use engine::{SimConfig, SimulationEngine};
