//! Proximity cue: when a hostile is within earshot, emit a cue whose
//! intensity falls off linearly with distance, at most once per cooldown.

use hecs::World;

use holdout_core::components::{Hostile, Spatial};
use holdout_core::config::Tuning;
use holdout_core::events::AudioEvent;

use crate::player::Player;

pub fn run(
    world: &World,
    player: &Player,
    tuning: &Tuning,
    now_secs: f64,
    last_cue_secs: &mut Option<f64>,
    audio_events: &mut Vec<AudioEvent>,
) {
    if let Some(last) = *last_cue_secs {
        if now_secs - last < tuning.ambient_cue_cooldown_secs {
            return;
        }
    }

    let nearest = world
        .query::<(&Hostile, &Spatial)>()
        .iter()
        .map(|(_, (_, spatial))| spatial.position.distance(player.position()))
        .fold(f32::INFINITY, f32::min);

    if nearest > tuning.ambient_cue_range {
        return;
    }

    let intensity = (1.0 - nearest / tuning.ambient_cue_range).clamp(0.0, 1.0);
    audio_events.push(AudioEvent::HostileNearby { intensity });
    *last_cue_secs = Some(now_secs);
}
