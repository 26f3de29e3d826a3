//! Economy: score-funded purchases at fixed stations.
//!
//! One purchase per interact press. Every rejection (out of range,
//! unaffordable, reserve already full) is a silent no-op.

use log::debug;

use holdout_core::components::Station;
use holdout_core::config::Tuning;
use holdout_core::enums::StationKind;
use holdout_core::events::AudioEvent;

use crate::player::Player;

/// The first station whose center lies within the proximity radius of the
/// player's center. Compared squared; no square root.
pub fn station_in_range<'a>(player: &Player, stations: &'a [Station], tuning: &Tuning) -> Option<&'a Station> {
    let radius_sq = tuning.station_proximity_radius * tuning.station_proximity_radius;
    let center = player.bounds().center();
    stations
        .iter()
        .find(|station| station.bounds().center().distance_squared(center) <= radius_sq)
}

/// Attempt a purchase at the station in range. Returns whether one happened.
pub fn interact(
    player: &mut Player,
    stations: &[Station],
    score: &mut u32,
    tuning: &Tuning,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let Some(station) = station_in_range(player, stations, tuning) else {
        debug!("interact ignored: no station in range");
        return false;
    };

    if *score < station.cost {
        debug!("{:?} purchase rejected: score {} < cost {}", station.kind, score, station.cost);
        return false;
    }

    match station.kind {
        StationKind::Ammo => {
            if player.reserve_ammo >= tuning.max_reserve_ammo {
                debug!("ammo purchase rejected: reserve full");
                return false;
            }
            player.reserve_ammo = player
                .reserve_ammo
                .saturating_add(tuning.ammo_purchase_amount)
                .min(tuning.max_reserve_ammo);
        }
        StationKind::Health => {
            player.max_health = player.max_health.saturating_add(tuning.max_health_increment);
            player.health = player.max_health;
        }
    }

    *score -= station.cost;
    debug!("{:?} purchased for {}; score now {}", station.kind, station.cost, score);
    audio_events.push(AudioEvent::Purchase { station: station.kind });
    true
}
