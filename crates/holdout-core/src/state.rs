//! Game state snapshot: everything the presentation layer needs each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete visible state handed to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    /// On-screen drawables, in draw order (scenery first, player last).
    pub drawables: Vec<Drawable>,
    /// Screen-space markers for hostiles outside the viewport.
    pub indicators: Vec<Vec2>,
    pub hud: HudView,
    pub audio_events: Vec<AudioEvent>,
}

/// Camera placement: world position of the viewport's top-left corner.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub offset: Vec2,
    pub viewport: Vec2,
}

/// One thing to draw. Positions are world space; subtract the camera
/// offset to get screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub kind: EntityKind,
    pub position: Vec2,
    pub facing: f32,
}

/// Scalar UI values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub wave: u32,
    pub wave_phase: WavePhase,
    /// Seconds until the next wave while in cooldown.
    pub next_wave_in_secs: Option<f64>,
    pub health: i32,
    pub max_health: i32,
    pub bullets_in_magazine: u32,
    pub magazine_capacity: u32,
    pub reserve_ammo: u32,
    pub reloading: bool,
    pub hostiles_alive: u32,
    /// Boss hit points as `(current, max)` while a boss is alive.
    pub boss_health: Option<(i32, i32)>,
    /// Station the player is standing at, if any.
    pub station_in_range: Option<StationKind>,
}
