//! Entity spawn factories and world generation.
//!
//! Obstacles and stations are generated once per session and never change.
//! Hostiles, the boss and projectiles are hecs entities.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::*;
use holdout_core::config::Tuning;
use holdout_core::constants::*;
use holdout_core::enums::{HostileKind, StationKind};
use holdout_core::types::Aabb;

use crate::collision::CollisionResolver;

/// Scatter obstacles over the world, keeping a clearing around each of
/// `keep_clear` (player start, stations). Gives up on an obstacle after
/// a bounded number of rerolls, so the result may hold fewer than
/// `tuning.obstacle_count` entries.
pub fn generate_obstacles(
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    keep_clear: &[Vec2],
) -> Vec<Obstacle> {
    let visual_size = Vec2::splat(OBSTACLE_VISUAL_SIZE);
    let footprint_offset = Vec2::new(OBSTACLE_FOOTPRINT_OFFSET.0, OBSTACLE_FOOTPRINT_OFFSET.1);
    let footprint_size = Vec2::new(OBSTACLE_FOOTPRINT_SIZE.0, OBSTACLE_FOOTPRINT_SIZE.1);
    let clearing_sq = tuning.obstacle_clearing_radius * tuning.obstacle_clearing_radius;

    let mut obstacles = Vec::with_capacity(tuning.obstacle_count as usize);
    for _ in 0..tuning.obstacle_count {
        for _ in 0..SPAWN_MAX_ATTEMPTS {
            let position = Vec2::new(
                rng.gen_range(0.0..tuning.world_width - visual_size.x),
                rng.gen_range(0.0..tuning.world_height - visual_size.y),
            );
            let center = position + visual_size * 0.5;
            if keep_clear
                .iter()
                .any(|point| point.distance_squared(center) < clearing_sq)
            {
                continue;
            }
            obstacles.push(Obstacle {
                position,
                visual_size,
                footprint_offset,
                footprint_size,
            });
            break;
        }
    }
    obstacles
}

/// The two fixed stations, placed relative to the world center.
pub fn build_stations(tuning: &Tuning) -> Vec<Station> {
    let center = tuning.world_center();
    let size = Vec2::splat(tuning.station_size);
    vec![
        Station {
            kind: StationKind::Ammo,
            position: center + Vec2::new(AMMO_STATION_OFFSET.0, AMMO_STATION_OFFSET.1),
            size,
            cost: tuning.ammo_station_cost,
        },
        Station {
            kind: StationKind::Health,
            position: center + Vec2::new(HEALTH_STATION_OFFSET.0, HEALTH_STATION_OFFSET.1),
            size,
            cost: tuning.health_station_cost,
        },
    ]
}

/// Pick a spawn center for a hostile of `size`: inside the world margin,
/// off every obstacle footprint, and away from the player. Falls back to
/// the last roll once the attempt budget runs out.
pub fn pick_spawn_point(
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    resolver: &CollisionResolver,
    player_position: Vec2,
    size: Vec2,
) -> Vec2 {
    let min_distance_sq = tuning.spawn_min_player_distance * tuning.spawn_min_player_distance;
    let mut position = tuning.world_center();
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        position = Vec2::new(
            rng.gen_range(tuning.spawn_margin..tuning.world_width - tuning.spawn_margin),
            rng.gen_range(tuning.spawn_margin..tuning.world_height - tuning.spawn_margin),
        );
        let clear_of_player = position.distance_squared(player_position) >= min_distance_sq;
        let bounds = Aabb::from_center(position, size);
        if clear_of_player && !resolver.blocked(&bounds) {
            break;
        }
    }
    position
}

/// Spawn a basic hostile at `position`.
pub fn spawn_hostile(world: &mut World, tuning: &Tuning, position: Vec2, serial: u32) -> hecs::Entity {
    world.spawn((
        Hostile {
            kind: HostileKind::Basic,
            serial,
            speed: tuning.hostile_speed,
        },
        Spatial::new(position, Vec2::splat(tuning.hostile_size)),
    ))
}

/// Spawn the boss at `position` with full health.
pub fn spawn_boss(world: &mut World, tuning: &Tuning, position: Vec2, serial: u32) -> hecs::Entity {
    world.spawn((
        Hostile {
            kind: HostileKind::Boss,
            serial,
            speed: tuning.boss_speed,
        },
        Spatial::new(position, Vec2::splat(tuning.boss_size)),
        Health {
            current: tuning.boss_health,
            max: tuning.boss_health,
        },
        ContactCooldown::default(),
    ))
}

/// Spawn a projectile at `origin` heading along `angle`.
pub fn spawn_projectile(
    world: &mut World,
    tuning: &Tuning,
    origin: Vec2,
    angle: f32,
    now_secs: f64,
) -> hecs::Entity {
    let radius = tuning.projectile_radius;
    let mut spatial = Spatial::new(origin, Vec2::splat(radius * 2.0));
    spatial.facing = angle;
    world.spawn((
        Projectile {
            angle,
            speed: tuning.projectile_speed,
            radius,
            spawned_at_secs: now_secs,
        },
        spatial,
    ))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_obstacles_respect_clearing() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let center = tuning.world_center();
        let obstacles = generate_obstacles(&mut rng, &tuning, &[center]);

        assert!(!obstacles.is_empty());
        for o in &obstacles {
            let c = o.visual_bounds().center();
            assert!(c.distance(center) >= tuning.obstacle_clearing_radius);
            assert!(o.position.x >= 0.0 && o.visual_bounds().max.x <= tuning.world_width);
            assert!(o.position.y >= 0.0 && o.visual_bounds().max.y <= tuning.world_height);
        }
    }

    #[test]
    fn test_spawn_point_avoids_player_and_obstacles() {
        let tuning = Tuning::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let center = tuning.world_center();
        let resolver = CollisionResolver::new(generate_obstacles(&mut rng, &tuning, &[center]));
        let size = Vec2::splat(tuning.hostile_size);

        for _ in 0..50 {
            let p = pick_spawn_point(&mut rng, &tuning, &resolver, center, size);
            assert!(p.x >= tuning.spawn_margin && p.x <= tuning.world_width - tuning.spawn_margin);
            assert!(p.y >= tuning.spawn_margin && p.y <= tuning.world_height - tuning.spawn_margin);
            assert!(p.distance(center) >= tuning.spawn_min_player_distance);
            assert!(!resolver.blocked(&Aabb::from_center(p, size)));
        }
    }

    #[test]
    fn test_stations_out_of_reach_from_start() {
        let tuning = Tuning::default();
        let center = tuning.world_center();
        for station in build_stations(&tuning) {
            assert!(station.position.distance(center) > tuning.station_proximity_radius);
        }
    }
}
