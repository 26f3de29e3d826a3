//! Snapshot system: builds the GameStateSnapshot for the presentation layer.
//!
//! Read-only: never modifies the world. Drawables are
//! culled against the viewport; hostiles outside it become edge markers.

use hecs::World;

use holdout_core::components::*;
use holdout_core::config::Tuning;
use holdout_core::enums::*;
use holdout_core::events::AudioEvent;
use holdout_core::state::*;
use holdout_core::types::SimTime;
use holdout_core::Vec2;

use holdout_director::wave::WaveDirector;

use crate::camera::Viewport;
use crate::collision::CollisionResolver;
use crate::player::Player;
use crate::systems::economy;

/// Everything the snapshot reads besides the ECS world.
pub struct SnapshotSource<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub viewport: &'a Viewport,
    pub resolver: &'a CollisionResolver,
    pub stations: &'a [Station],
    pub player: &'a Player,
    pub director: &'a WaveDirector,
    pub tuning: &'a Tuning,
    pub score: u32,
}

/// Build a complete GameStateSnapshot from the current state.
pub fn build_snapshot(world: &World, source: &SnapshotSource<'_>, audio_events: Vec<AudioEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *source.time,
        phase: source.phase,
        camera: source.viewport.view(),
        drawables: build_drawables(world, source),
        indicators: build_indicators(world, source.viewport),
        hud: build_hud(world, source),
        audio_events,
    }
}

/// Scenery, stations, projectiles, hostiles, then the player.
fn build_drawables(world: &World, source: &SnapshotSource<'_>) -> Vec<Drawable> {
    let viewport = source.viewport;
    let mut drawables = Vec::new();

    if source.phase == GamePhase::Ready {
        return drawables;
    }

    drawables.extend(
        source
            .resolver
            .obstacles()
            .iter()
            .filter(|o| viewport.overlaps(&o.visual_bounds()))
            .map(|o| Drawable {
                kind: EntityKind::Obstacle,
                position: o.visual_bounds().center(),
                facing: 0.0,
            }),
    );

    drawables.extend(
        source
            .stations
            .iter()
            .filter(|s| viewport.overlaps(&s.bounds()))
            .map(|s| Drawable {
                kind: s.kind.into(),
                position: s.position,
                facing: 0.0,
            }),
    );

    drawables.extend(
        world
            .query::<(&Projectile, &Spatial)>()
            .iter()
            .filter(|(_, (_, spatial))| viewport.overlaps(&spatial.bounds()))
            .map(|(_, (_, spatial))| Drawable {
                kind: EntityKind::Projectile,
                position: spatial.position,
                facing: spatial.facing,
            }),
    );

    let mut hostiles: Vec<(u32, Drawable)> = world
        .query::<(&Hostile, &Spatial)>()
        .iter()
        .filter(|(_, (_, spatial))| viewport.overlaps(&spatial.bounds()))
        .map(|(_, (hostile, spatial))| {
            (
                hostile.serial,
                Drawable {
                    kind: hostile.kind.into(),
                    position: spatial.position,
                    facing: spatial.facing,
                },
            )
        })
        .collect();
    hostiles.sort_by_key(|(serial, _)| *serial);
    drawables.extend(hostiles.into_iter().map(|(_, d)| d));

    drawables.push(Drawable {
        kind: EntityKind::Player,
        position: source.player.position(),
        facing: source.player.spatial.facing,
    });

    drawables
}

/// Edge markers for hostiles whose center is off screen.
fn build_indicators(world: &World, viewport: &Viewport) -> Vec<Vec2> {
    let mut markers: Vec<(u32, Vec2)> = world
        .query::<(&Hostile, &Spatial)>()
        .iter()
        .filter_map(|(_, (hostile, spatial))| {
            viewport
                .edge_indicator(spatial.position)
                .map(|marker| (hostile.serial, marker))
        })
        .collect();
    markers.sort_by_key(|(serial, _)| *serial);
    markers.into_iter().map(|(_, m)| m).collect()
}

fn build_hud(world: &World, source: &SnapshotSource<'_>) -> HudView {
    let player = source.player;
    let now = source.time.elapsed_secs;

    let mut hostiles_alive = 0;
    let mut boss_health = None;
    for (_, (hostile, health)) in world.query::<(&Hostile, Option<&Health>)>().iter() {
        match hostile.kind {
            HostileKind::Basic => hostiles_alive += 1,
            HostileKind::Boss => boss_health = health.map(|h| (h.current, h.max)),
        }
    }

    HudView {
        score: source.score,
        wave: source.director.wave(),
        wave_phase: source.director.phase(),
        next_wave_in_secs: source.director.cooldown_remaining(now, source.tuning),
        health: player.health,
        max_health: player.max_health,
        bullets_in_magazine: player.bullets_in_magazine,
        magazine_capacity: player.magazine_capacity,
        reserve_ammo: player.reserve_ammo,
        reloading: player.is_reloading(),
        hostiles_alive,
        boss_health,
        station_in_range: economy::station_in_range(player, source.stations, source.tuning).map(|s| s.kind),
    }
}
