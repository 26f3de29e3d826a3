//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use holdout_core::commands::{HeldInput, PlayerCommand};
use holdout_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Replace the held inputs sampled from the next tick on.
    SetInput(HeldInput),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after every tick and read
/// by whoever drives input. `None` until the first tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
