//! Player input sent from the host to the simulation.
//!
//! Held inputs are sampled every tick; commands are edge-triggered and
//! queued for processing at the next tick boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Level-triggered inputs, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeldInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer location in world space.
    pub pointer: Vec2,
}

/// Edge-triggered player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Build the world and start wave 1.
    StartSession,
    Pause,
    Resume,
    /// End the session immediately.
    Quit,

    // --- Gameplay ---
    /// Fire one round toward the pointer.
    Fire,
    /// Begin reloading the magazine from reserve.
    Reload,
    /// Buy from the station in range, if any.
    Interact,
    /// Skip the cooldown and spawn the next wave now.
    ForceNextWave,
}
