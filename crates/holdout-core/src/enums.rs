//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `StartSession`; no world exists yet.
    #[default]
    Ready,
    Active,
    Paused,
    /// Player health reached zero; the end screen is being presented.
    GameOver,
    /// Session finished. Ticking has no further effect.
    Ended,
}

/// Behaviour tag of a hostile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    /// One-hit kill; dies on contact with the player.
    #[default]
    Basic,
    /// Takes fixed damage per hit; survives contact.
    Boss,
}

/// Resource station type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationKind {
    Ammo,
    Health,
}

/// Wave director state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum WavePhase {
    /// Hostiles (or a boss) remain alive.
    #[default]
    Active,
    /// Population just hit zero; cooldown not stamped yet.
    ClearedPending,
    /// Waiting for the next wave.
    Cooldown {
        /// Simulation time (seconds) at which the cooldown started.
        started_at_secs: f64,
    },
}

/// Kind of a drawable handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Hostile,
    Boss,
    Projectile,
    Obstacle,
    AmmoStation,
    HealthStation,
}

impl From<HostileKind> for EntityKind {
    fn from(kind: HostileKind) -> Self {
        match kind {
            HostileKind::Basic => EntityKind::Hostile,
            HostileKind::Boss => EntityKind::Boss,
        }
    }
}

impl From<StationKind> for EntityKind {
    fn from(kind: StationKind) -> Self {
        match kind {
            StationKind::Ammo => EntityKind::AmmoStation,
            StationKind::Health => EntityKind::HealthStation,
        }
    }
}
