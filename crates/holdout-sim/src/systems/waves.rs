//! Wave system: reports population to the wave director and applies the
//! respawns it orders.

use hecs::{Entity, World};
use log::info;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::Hostile;
use holdout_core::config::Tuning;
use holdout_core::enums::HostileKind;
use holdout_core::events::AudioEvent;
use holdout_core::Vec2;

use holdout_director::wave::{Respawn, WaveContext, WaveDirector};

use crate::collision::CollisionResolver;
use crate::world_setup;

/// Living population by kind: (basic hostiles, boss alive).
pub fn population(world: &World) -> (u32, bool) {
    let mut basic = 0;
    let mut boss = false;
    for (_entity, hostile) in world.query::<&Hostile>().iter() {
        match hostile.kind {
            HostileKind::Basic => basic += 1,
            HostileKind::Boss => boss = true,
        }
    }
    (basic, boss)
}

/// Spawn sources shared by every respawn.
pub struct Spawner<'a> {
    pub rng: &'a mut ChaCha8Rng,
    pub resolver: &'a CollisionResolver,
    pub tuning: &'a Tuning,
    pub player_position: Vec2,
    pub next_serial: &'a mut u32,
}

/// Evaluate the director for this tick and apply any respawn.
pub fn run(
    world: &mut World,
    director: &mut WaveDirector,
    spawner: &mut Spawner<'_>,
    now_secs: f64,
    force_next: bool,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let (hostiles_alive, boss_alive) = population(world);
    let ctx = WaveContext {
        hostiles_alive,
        boss_alive,
        now_secs,
        force_next,
    };

    if let Some(respawn) = director.evaluate(&ctx, spawner.tuning) {
        apply_respawn(world, &respawn, spawner, audio_events, despawn_buffer);
    }
}

/// Replace the basic population with a fresh wave, plus a boss if ordered.
pub fn apply_respawn(
    world: &mut World,
    respawn: &Respawn,
    spawner: &mut Spawner<'_>,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    for (entity, hostile) in world.query::<&Hostile>().iter() {
        if hostile.kind == HostileKind::Basic {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let tuning = spawner.tuning;
    let hostile_size = Vec2::splat(tuning.hostile_size);
    for _ in 0..respawn.hostile_count {
        let position = world_setup::pick_spawn_point(
            spawner.rng,
            tuning,
            spawner.resolver,
            spawner.player_position,
            hostile_size,
        );
        world_setup::spawn_hostile(world, tuning, position, take_serial(spawner.next_serial));
    }

    if respawn.spawn_boss {
        let position = world_setup::pick_spawn_point(
            spawner.rng,
            tuning,
            spawner.resolver,
            spawner.player_position,
            Vec2::splat(tuning.boss_size),
        );
        world_setup::spawn_boss(world, tuning, position, take_serial(spawner.next_serial));
        info!("boss spawned for wave {} at ({:.0}, {:.0})", respawn.wave, position.x, position.y);
        audio_events.push(AudioEvent::BossSpawned { position });
    }

    audio_events.push(AudioEvent::WaveStarted { wave: respawn.wave });
}

fn take_serial(next_serial: &mut u32) -> u32 {
    let serial = *next_serial;
    *next_serial += 1;
    serial
}
