//! Boss AI: same pursuit rule as basic hostiles, but survives contact.
//! Contact damage repeats at most once per cooldown.

use hecs::World;

use holdout_core::components::{ContactCooldown, Hostile, Spatial};
use holdout_core::config::Tuning;
use holdout_core::enums::HostileKind;
use holdout_core::events::AudioEvent;

use holdout_director::pursuit::pursue;

use crate::collision::CollisionResolver;
use crate::player::Player;

pub fn run(
    world: &mut World,
    player: &mut Player,
    resolver: &CollisionResolver,
    tuning: &Tuning,
    now_secs: f64,
    audio_events: &mut Vec<AudioEvent>,
) {
    for (_entity, (hostile, spatial, cooldown)) in
        world.query_mut::<(&Hostile, &mut Spatial, &mut ContactCooldown)>()
    {
        if hostile.kind != HostileKind::Boss {
            continue;
        }

        let steer = pursue(
            spatial.position,
            spatial.size,
            hostile.speed,
            player.position(),
            |candidate| resolver.blocked(candidate),
        );
        spatial.position = steer.position;
        spatial.facing = steer.facing;

        if !spatial.bounds().intersects(&player.bounds()) {
            continue;
        }
        let ready = cooldown
            .last_contact_secs
            .map_or(true, |last| now_secs - last >= tuning.boss_contact_cooldown_secs);
        if ready {
            player.take_damage(tuning.boss_contact_damage);
            cooldown.last_contact_secs = Some(now_secs);
            audio_events.push(AudioEvent::PlayerHurt {
                damage: tuning.boss_contact_damage,
            });
        }
    }
}
