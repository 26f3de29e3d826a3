//! ECS components for hecs entities, plus the static world records.
//!
//! Components are plain data structs with no behaviour beyond geometry
//! accessors. Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Aabb;

/// World-space placement shared by every moving or static object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spatial {
    /// Center of the object.
    pub position: Vec2,
    /// Orientation in radians.
    pub facing: f32,
    /// Bounding box extent, centered on `position`.
    pub size: Vec2,
}

impl Spatial {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            facing: 0.0,
            size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }

    /// Bounds if the object were at `position` instead.
    pub fn bounds_at(&self, position: Vec2) -> Aabb {
        Aabb::from_center(position, self.size)
    }
}

/// Marks a pursuing enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: HostileKind,
    /// Spawn order; hit resolution walks hostiles in ascending serial.
    pub serial: u32,
    /// Movement per tick.
    pub speed: f32,
}

/// Hit points. Only bosses carry this; basic hostiles die in one hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

/// Last time a surviving hostile damaged the player by contact.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContactCooldown {
    pub last_contact_secs: Option<f64>,
}

/// A fired round travelling on a fixed heading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Heading in radians, fixed at fire time.
    pub angle: f32,
    pub speed: f32,
    pub radius: f32,
    /// Simulation time (seconds) at which the round was fired.
    pub spawned_at_secs: f64,
}

/// Immovable scenery. The collision footprint may be smaller than, and
/// offset from, the visual footprint (e.g. only a tree trunk blocks).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left corner of the visual footprint.
    pub position: Vec2,
    pub visual_size: Vec2,
    /// Blocking rectangle relative to `position`.
    pub footprint_offset: Vec2,
    pub footprint_size: Vec2,
}

impl Obstacle {
    pub fn footprint(&self) -> Aabb {
        Aabb::from_origin(self.position + self.footprint_offset, self.footprint_size)
    }

    pub fn visual_bounds(&self) -> Aabb {
        Aabb::from_origin(self.position, self.visual_size)
    }
}

/// Proximity-gated purchase point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Station {
    pub kind: StationKind,
    /// Center of the station.
    pub position: Vec2,
    pub size: Vec2,
    pub cost: u32,
}

impl Station {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.position, self.size)
    }
}
