//! Gameplay tuning loaded from JSON, defaulting to [`crate::constants`].
//!
//! Any field missing from the file keeps its compiled-in default, so a
//! config only needs to name what it changes.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading a [`Tuning`] file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Every gameplay number the simulation reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,

    pub player_speed: f32,
    pub player_size: f32,
    pub player_start_health: i32,
    pub magazine_capacity: u32,
    pub starting_reserve_ammo: u32,
    pub max_reserve_ammo: u32,
    pub reload_duration_secs: f64,

    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub projectile_ttl_secs: f64,
    pub muzzle_offset: f32,

    pub hostile_speed: f32,
    pub hostile_size: f32,
    pub hostile_contact_damage: i32,
    pub hostile_kill_score: u32,
    pub spawn_margin: f32,
    pub spawn_min_player_distance: f32,

    pub boss_speed: f32,
    pub boss_size: f32,
    pub boss_health: i32,
    pub boss_damage_per_hit: i32,
    pub boss_contact_damage: i32,
    pub boss_contact_cooldown_secs: f64,
    pub boss_kill_score: u32,

    pub wave_base_hostiles: u32,
    pub wave_hostile_increment: u32,
    pub wave_cooldown_secs: f64,
    pub boss_wave_interval: u32,

    pub station_size: f32,
    pub station_proximity_radius: f32,
    pub ammo_station_cost: u32,
    pub ammo_purchase_amount: u32,
    pub health_station_cost: u32,
    pub max_health_increment: i32,

    pub obstacle_count: u32,
    pub obstacle_clearing_radius: f32,

    pub ambient_cue_range: f32,
    pub ambient_cue_cooldown_secs: f64,

    pub game_over_delay_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            player_start_health: PLAYER_START_HEALTH,
            magazine_capacity: MAGAZINE_CAPACITY,
            starting_reserve_ammo: STARTING_RESERVE_AMMO,
            max_reserve_ammo: MAX_RESERVE_AMMO,
            reload_duration_secs: RELOAD_DURATION_SECS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            projectile_ttl_secs: PROJECTILE_TTL_SECS,
            muzzle_offset: MUZZLE_OFFSET,

            hostile_speed: HOSTILE_SPEED,
            hostile_size: HOSTILE_SIZE,
            hostile_contact_damage: HOSTILE_CONTACT_DAMAGE,
            hostile_kill_score: HOSTILE_KILL_SCORE,
            spawn_margin: SPAWN_MARGIN,
            spawn_min_player_distance: SPAWN_MIN_PLAYER_DISTANCE,

            boss_speed: BOSS_SPEED,
            boss_size: BOSS_SIZE,
            boss_health: BOSS_HEALTH,
            boss_damage_per_hit: BOSS_DAMAGE_PER_HIT,
            boss_contact_damage: BOSS_CONTACT_DAMAGE,
            boss_contact_cooldown_secs: BOSS_CONTACT_COOLDOWN_SECS,
            boss_kill_score: BOSS_KILL_SCORE,

            wave_base_hostiles: WAVE_BASE_HOSTILES,
            wave_hostile_increment: WAVE_HOSTILE_INCREMENT,
            wave_cooldown_secs: WAVE_COOLDOWN_SECS,
            boss_wave_interval: BOSS_WAVE_INTERVAL,

            station_size: STATION_SIZE,
            station_proximity_radius: STATION_PROXIMITY_RADIUS,
            ammo_station_cost: AMMO_STATION_COST,
            ammo_purchase_amount: AMMO_PURCHASE_AMOUNT,
            health_station_cost: HEALTH_STATION_COST,
            max_health_increment: MAX_HEALTH_INCREMENT,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_clearing_radius: OBSTACLE_CLEARING_RADIUS,

            ambient_cue_range: AMBIENT_CUE_RANGE,
            ambient_cue_cooldown_secs: AMBIENT_CUE_COOLDOWN_SECS,

            game_over_delay_secs: GAME_OVER_DELAY_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive_f32 = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("player_speed", self.player_speed),
            ("player_size", self.player_size),
            ("projectile_speed", self.projectile_speed),
            ("projectile_radius", self.projectile_radius),
            ("hostile_speed", self.hostile_speed),
            ("hostile_size", self.hostile_size),
            ("boss_speed", self.boss_speed),
            ("boss_size", self.boss_size),
            ("station_size", self.station_size),
            ("station_proximity_radius", self.station_proximity_radius),
            ("ambient_cue_range", self.ambient_cue_range),
        ];
        for (name, value) in positive_f32 {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let positive_secs = [
            ("reload_duration_secs", self.reload_duration_secs),
            ("projectile_ttl_secs", self.projectile_ttl_secs),
            ("wave_cooldown_secs", self.wave_cooldown_secs),
        ];
        for (name, value) in positive_secs {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.player_start_health <= 0 || self.boss_health <= 0 {
            return Err(ConfigError::Invalid("starting health values must be positive".into()));
        }
        if self.magazine_capacity == 0 {
            return Err(ConfigError::Invalid("magazine_capacity must be at least 1".into()));
        }
        if self.boss_wave_interval == 0 {
            return Err(ConfigError::Invalid("boss_wave_interval must be at least 1".into()));
        }
        if self.max_reserve_ammo < self.starting_reserve_ammo {
            return Err(ConfigError::Invalid(format!(
                "max_reserve_ammo ({}) is below starting_reserve_ammo ({})",
                self.max_reserve_ammo, self.starting_reserve_ammo
            )));
        }
        if self.world_width < self.viewport_width || self.world_height < self.viewport_height {
            return Err(ConfigError::Invalid("world must be at least as large as the viewport".into()));
        }

        let non_negative = [
            ("spawn_margin", self.spawn_margin as f64),
            ("spawn_min_player_distance", self.spawn_min_player_distance as f64),
            ("muzzle_offset", self.muzzle_offset as f64),
            ("obstacle_clearing_radius", self.obstacle_clearing_radius as f64),
            ("boss_contact_cooldown_secs", self.boss_contact_cooldown_secs),
            ("ambient_cue_cooldown_secs", self.ambient_cue_cooldown_secs),
            ("game_over_delay_secs", self.game_over_delay_secs),
        ];
        for (name, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        // Spawns are drawn from the world shrunk by the margin on every side.
        if 2.0 * self.spawn_margin >= self.world_width || 2.0 * self.spawn_margin >= self.world_height {
            return Err(ConfigError::Invalid(format!(
                "spawn_margin {} leaves no spawn area in a {}x{} world",
                self.spawn_margin, self.world_width, self.world_height
            )));
        }
        if self.player_size > self.world_width || self.player_size > self.world_height {
            return Err(ConfigError::Invalid(format!(
                "player_size {} does not fit in the world",
                self.player_size
            )));
        }
        if self.world_width <= OBSTACLE_VISUAL_SIZE || self.world_height <= OBSTACLE_VISUAL_SIZE {
            return Err(ConfigError::Invalid(format!(
                "world must be larger than an obstacle ({OBSTACLE_VISUAL_SIZE})"
            )));
        }

        let damage = [
            ("hostile_contact_damage", self.hostile_contact_damage),
            ("boss_contact_damage", self.boss_contact_damage),
            ("max_health_increment", self.max_health_increment),
        ];
        for (name, value) in damage {
            if value < 0 {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        if self.boss_damage_per_hit <= 0 {
            return Err(ConfigError::Invalid(format!(
                "boss_damage_per_hit must be positive, got {}",
                self.boss_damage_per_hit
            )));
        }
        Ok(())
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.world_width, self.world_height)
    }

    pub fn viewport_size(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    pub fn world_center(&self) -> Vec2 {
        self.world_size() * 0.5
    }

    /// Population of a wave spawned by the director: `base + wave * increment`,
    /// saturating at `u32::MAX`.
    pub fn hostiles_for_wave(&self, wave: u32) -> u32 {
        wave.saturating_mul(self.wave_hostile_increment).saturating_add(self.wave_base_hostiles)
    }
}
