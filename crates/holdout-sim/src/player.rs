//! Player data model. Stored on `SimulationEngine`, not as an ECS entity.
//!
//! Invariants: `0 <= health <= max_health`,
//! `bullets_in_magazine <= magazine_capacity`.

use glam::Vec2;

use holdout_core::components::Spatial;
use holdout_core::config::Tuning;
use holdout_core::types::Aabb;

/// Magazine reload progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ReloadState {
    #[default]
    Idle,
    Reloading {
        started_at_secs: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Player {
    pub spatial: Spatial,
    /// Movement per tick along each held axis.
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub magazine_capacity: u32,
    pub bullets_in_magazine: u32,
    pub reserve_ammo: u32,
    pub reload: ReloadState,
}

impl Player {
    /// A fresh player at `position` with a full magazine.
    pub fn new(tuning: &Tuning, position: Vec2) -> Self {
        Self {
            spatial: Spatial::new(position, Vec2::splat(tuning.player_size)),
            speed: tuning.player_speed,
            health: tuning.player_start_health,
            max_health: tuning.player_start_health,
            magazine_capacity: tuning.magazine_capacity,
            bullets_in_magazine: tuning.magazine_capacity,
            reserve_ammo: tuning.starting_reserve_ammo,
            reload: ReloadState::Idle,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.spatial.position
    }

    pub fn bounds(&self) -> Aabb {
        self.spatial.bounds()
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.reload, ReloadState::Reloading { .. })
    }

    /// Apply damage, clamping health at zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).clamp(0, self.max_health);
    }

    /// Start a reload. Rejected when already reloading, the magazine is
    /// full, or there is nothing in reserve.
    pub fn begin_reload(&mut self, now_secs: f64) -> bool {
        if self.is_reloading()
            || self.bullets_in_magazine >= self.magazine_capacity
            || self.reserve_ammo == 0
        {
            return false;
        }
        self.reload = ReloadState::Reloading {
            started_at_secs: now_secs,
        };
        true
    }

    /// Complete a reload whose duration has elapsed. Moves
    /// `min(capacity - loaded, reserve)` rounds and returns that count.
    pub fn finish_reload_if_due(&mut self, now_secs: f64, duration_secs: f64) -> Option<u32> {
        let ReloadState::Reloading { started_at_secs } = self.reload else {
            return None;
        };
        if now_secs - started_at_secs < duration_secs {
            return None;
        }

        let missing = self.magazine_capacity.saturating_sub(self.bullets_in_magazine);
        let moved = missing.min(self.reserve_ammo);
        self.bullets_in_magazine += moved;
        self.reserve_ammo -= moved;
        self.reload = ReloadState::Idle;
        Some(moved)
    }
}
