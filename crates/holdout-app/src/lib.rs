//! HOLDOUT headless host.
//!
//! Wires the simulation crates to a paced game loop thread, a built-in
//! autopilot input source and the CLI.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod session;
pub mod state;

pub use holdout_core as core;
