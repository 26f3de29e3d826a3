//! Basic hostile AI: pursue the player and trade themselves for damage
//! on contact.

use hecs::{Entity, World};

use holdout_core::components::{Hostile, Spatial};
use holdout_core::config::Tuning;
use holdout_core::enums::HostileKind;
use holdout_core::events::AudioEvent;

use holdout_director::pursuit::pursue;

use crate::collision::CollisionResolver;
use crate::player::Player;

/// Move every basic hostile one step toward the player. A hostile that ends
/// its step overlapping the player deals contact damage and is removed.
pub fn run(
    world: &mut World,
    player: &mut Player,
    resolver: &CollisionResolver,
    tuning: &Tuning,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (hostile, spatial)) in world.query_mut::<(&Hostile, &mut Spatial)>() {
        if hostile.kind != HostileKind::Basic {
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

        if spatial.bounds().intersects(&player.bounds()) {
            player.take_damage(tuning.hostile_contact_damage);
            audio_events.push(AudioEvent::PlayerHurt {
                damage: tuning.hostile_contact_damage,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
