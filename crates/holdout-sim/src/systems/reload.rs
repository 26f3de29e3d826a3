//! Reload system: starts reloads on request and completes them once the
//! fixed duration has elapsed.

use log::debug;

use holdout_core::config::Tuning;
use holdout_core::events::AudioEvent;

use crate::player::Player;

/// Handle a reload request. Rejected requests change nothing.
pub fn request(player: &mut Player, now_secs: f64, audio_events: &mut Vec<AudioEvent>) {
    if player.begin_reload(now_secs) {
        debug!(
            "reload started at {now_secs:.2}s ({} in magazine, {} in reserve)",
            player.bullets_in_magazine, player.reserve_ammo
        );
        audio_events.push(AudioEvent::ReloadStarted);
    } else {
        debug!("reload request ignored");
    }
}

/// Finish a pending reload if its duration has elapsed.
pub fn run(player: &mut Player, now_secs: f64, tuning: &Tuning, audio_events: &mut Vec<AudioEvent>) {
    if let Some(loaded) = player.finish_reload_if_due(now_secs, tuning.reload_duration_secs) {
        debug!("reload finished: {loaded} rounds loaded");
        audio_events.push(AudioEvent::ReloadFinished { loaded });
    }
}
