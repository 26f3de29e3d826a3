//! Cue events emitted by the simulation for the audio layer.
//!
//! The simulation decides when a cue fires and how loud it should be;
//! it never owns a sound buffer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::StationKind;

/// Audio cues produced during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round left the muzzle.
    Gunshot { position: Vec2 },
    /// Fire was requested with an empty magazine.
    DryFire,
    ReloadStarted,
    ReloadFinished { loaded: u32 },
    /// Nearest hostile is within earshot. `intensity` is 1.0 at zero
    /// distance and falls linearly to 0.0 at the cue range.
    HostileNearby { intensity: f32 },
    HostileKilled { position: Vec2 },
    BossSpawned { position: Vec2 },
    BossHit { remaining: i32 },
    BossDefeated { position: Vec2 },
    PlayerHurt { damage: i32 },
    Purchase { station: StationKind },
    WaveStarted { wave: u32 },
    PlayerDied,
}
