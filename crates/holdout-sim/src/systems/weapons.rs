//! Fire action: gated by reload state and magazine, spawns one projectile
//! ahead of the player toward the pointer.

use glam::Vec2;
use hecs::World;
use log::debug;

use holdout_core::config::Tuning;
use holdout_core::events::AudioEvent;
use holdout_core::types::{angle_to, heading};

use crate::player::Player;
use crate::world_setup;

/// Try to fire once toward `pointer`. Returns whether a round was fired.
pub fn fire(
    world: &mut World,
    player: &mut Player,
    pointer: Vec2,
    tuning: &Tuning,
    now_secs: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    if player.is_reloading() {
        debug!("fire rejected: reloading");
        return false;
    }
    if player.bullets_in_magazine == 0 {
        debug!("fire rejected: magazine empty");
        audio_events.push(AudioEvent::DryFire);
        return false;
    }

    let angle = angle_to(player.position(), pointer);
    let origin = player.position() + heading(angle) * tuning.muzzle_offset;

    player.bullets_in_magazine -= 1;
    world_setup::spawn_projectile(world, tuning, origin, angle, now_secs);
    audio_events.push(AudioEvent::Gunshot { position: origin });
    true
}
