//! Projectile system: advance, expire, and resolve hits.
//!
//! Hits are first-match-wins per projectile: hostiles are walked in spawn
//! order and the first overlap consumes the round. Removals are collected
//! and applied once at the end, so a hostile killed by one round cannot be
//! hit again by a later round in the same tick.

use hecs::{Entity, World};
use log::info;

use holdout_core::components::{Health, Hostile, Projectile, Spatial};
use holdout_core::config::Tuning;
use holdout_core::enums::HostileKind;
use holdout_core::events::AudioEvent;
use holdout_core::types::{heading, Aabb};

use crate::camera::Viewport;

/// Hostile state captured before resolution.
struct Target {
    entity: Entity,
    kind: HostileKind,
    bounds: Aabb,
    health: i32,
    dead: bool,
}

pub fn run(
    world: &mut World,
    viewport: &Viewport,
    tuning: &Tuning,
    now_secs: f64,
    score: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // 1. Advance, then cull by age or by leaving the viewport.
    let mut live: Vec<(Entity, Aabb)> = Vec::new();
    for (entity, (projectile, spatial)) in world.query_mut::<(&Projectile, &mut Spatial)>() {
        spatial.position += heading(projectile.angle) * projectile.speed;

        let expired = now_secs - projectile.spawned_at_secs >= tuning.projectile_ttl_secs;
        if expired || !viewport.contains_circle(spatial.position, projectile.radius) {
            despawn_buffer.push(entity);
            continue;
        }
        live.push((entity, spatial.bounds()));
    }

    // 2. Snapshot hostiles in spawn order.
    let mut targets: Vec<(u32, Target)> = world
        .query::<(&Hostile, &Spatial, Option<&Health>)>()
        .iter()
        .map(|(entity, (hostile, spatial, health))| {
            (
                hostile.serial,
                Target {
                    entity,
                    kind: hostile.kind,
                    bounds: spatial.bounds(),
                    health: health.map_or(1, |h| h.current),
                    dead: false,
                },
            )
        })
        .collect();
    targets.sort_by_key(|(serial, _)| *serial);

    // 3. Resolve hits.
    for (projectile, bounds) in live {
        let Some((_, target)) = targets
            .iter_mut()
            .find(|(_, t)| !t.dead && t.bounds.intersects(&bounds))
        else {
            continue;
        };
        despawn_buffer.push(projectile);

        match target.kind {
            HostileKind::Basic => {
                target.dead = true;
                *score = score.saturating_add(tuning.hostile_kill_score);
                audio_events.push(AudioEvent::HostileKilled {
                    position: target.bounds.center(),
                });
            }
            HostileKind::Boss => {
                target.health -= tuning.boss_damage_per_hit;
                if target.health <= 0 {
                    target.dead = true;
                    *score = score.saturating_add(tuning.boss_kill_score);
                    info!("boss defeated at {now_secs:.2}s");
                    audio_events.push(AudioEvent::BossDefeated {
                        position: target.bounds.center(),
                    });
                } else {
                    audio_events.push(AudioEvent::BossHit {
                        remaining: target.health,
                    });
                }
            }
        }
    }

    // 4. Write back boss health and collect the dead.
    for (_, target) in &targets {
        if target.dead {
            despawn_buffer.push(target.entity);
        } else if target.kind == HostileKind::Boss {
            if let Ok(mut health) = world.get::<&mut Health>(target.entity) {
                health.current = target.health;
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
