//! Simulation constants and tuning defaults.
//!
//! Speeds are in world units per tick; durations are in seconds of
//! simulation time. Gameplay numbers seed the defaults of
//! [`crate::config::Tuning`], which is what the simulation reads for them.
//! The obstacle geometry, station offsets, spawn attempt budget, pursuit
//! deflections and indicator inset are fixed and read directly.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World and viewport ---

pub const WORLD_WIDTH: f32 = 3000.0;
pub const WORLD_HEIGHT: f32 = 2000.0;

pub const VIEWPORT_WIDTH: f32 = 1200.0;
pub const VIEWPORT_HEIGHT: f32 = 700.0;

/// Inset of off-screen hostile indicators from the viewport edge.
pub const INDICATOR_EDGE_INSET: f32 = 10.0;

// --- Player ---

pub const PLAYER_SPEED: f32 = 5.0;
pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_START_HEALTH: i32 = 100;
pub const MAGAZINE_CAPACITY: u32 = 30;
pub const STARTING_RESERVE_AMMO: u32 = 90;
pub const MAX_RESERVE_AMMO: u32 = 240;
pub const RELOAD_DURATION_SECS: f64 = 1.5;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 12.0;
pub const PROJECTILE_RADIUS: f32 = 6.0;
pub const PROJECTILE_TTL_SECS: f64 = 5.0;
/// Distance in front of the player at which projectiles appear.
pub const MUZZLE_OFFSET: f32 = 30.0;

// --- Hostiles ---

pub const HOSTILE_SPEED: f32 = 1.5;
pub const HOSTILE_SIZE: f32 = 30.0;
pub const HOSTILE_CONTACT_DAMAGE: i32 = 10;
pub const HOSTILE_KILL_SCORE: u32 = 10;
/// Hostiles never spawn closer than this to the world edge.
pub const SPAWN_MARGIN: f32 = 100.0;
/// Hostiles never spawn closer than this to the player.
pub const SPAWN_MIN_PLAYER_DISTANCE: f32 = 300.0;
/// Rerolls before a spawn point is accepted regardless of placement rules.
pub const SPAWN_MAX_ATTEMPTS: u32 = 32;

/// Deflection offsets (degrees) tried in order when the direct path is blocked.
pub const DEFLECTION_ANGLES_DEG: [f32; 4] = [30.0, -30.0, 60.0, -60.0];

// --- Boss ---

pub const BOSS_SPEED: f32 = 1.0;
pub const BOSS_SIZE: f32 = 80.0;
pub const BOSS_HEALTH: i32 = 200;
pub const BOSS_DAMAGE_PER_HIT: i32 = 10;
pub const BOSS_CONTACT_DAMAGE: i32 = 20;
pub const BOSS_CONTACT_COOLDOWN_SECS: f64 = 1.0;
pub const BOSS_KILL_SCORE: u32 = 250;

// --- Waves ---

pub const WAVE_BASE_HOSTILES: u32 = 5;
pub const WAVE_HOSTILE_INCREMENT: u32 = 2;
pub const WAVE_COOLDOWN_SECS: f64 = 5.0;
pub const BOSS_WAVE_INTERVAL: u32 = 5;

// --- Economy ---

pub const STATION_SIZE: f32 = 50.0;
pub const STATION_PROXIMITY_RADIUS: f32 = 70.0;
pub const AMMO_STATION_COST: u32 = 200;
pub const AMMO_PURCHASE_AMOUNT: u32 = 120;
pub const HEALTH_STATION_COST: u32 = 500;
pub const MAX_HEALTH_INCREMENT: i32 = 20;
/// Station offsets from the world center.
pub const AMMO_STATION_OFFSET: (f32, f32) = (-250.0, 150.0);
pub const HEALTH_STATION_OFFSET: (f32, f32) = (250.0, 150.0);

// --- Obstacles ---

pub const OBSTACLE_COUNT: u32 = 40;
pub const OBSTACLE_VISUAL_SIZE: f32 = 80.0;
/// Trunk rectangle relative to the obstacle's top-left corner.
pub const OBSTACLE_FOOTPRINT_OFFSET: (f32, f32) = (30.0, 50.0);
pub const OBSTACLE_FOOTPRINT_SIZE: (f32, f32) = (20.0, 30.0);
/// Obstacles keep this much distance from the player start and stations.
pub const OBSTACLE_CLEARING_RADIUS: f32 = 400.0;

// --- Audio ---

pub const AMBIENT_CUE_RANGE: f32 = 600.0;
pub const AMBIENT_CUE_COOLDOWN_SECS: f64 = 3.0;

// --- Session ---

pub const GAME_OVER_DELAY_SECS: f64 = 2.0;
