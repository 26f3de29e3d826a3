//! Player movement: held directions become a per-tick step, clamped to
//! the world and rejected in full if the clamped box hits an obstacle.

use glam::Vec2;

use holdout_core::commands::HeldInput;
use holdout_core::config::Tuning;
use holdout_core::types::angle_to;

use crate::collision::CollisionResolver;
use crate::player::Player;

/// Sum of the held direction impulses. Diagonals are not normalized, so
/// diagonal movement is faster than axis movement.
pub fn intent(held: &HeldInput, speed: f32) -> Vec2 {
    let mut step = Vec2::ZERO;
    if held.up {
        step.y -= speed;
    }
    if held.down {
        step.y += speed;
    }
    if held.left {
        step.x -= speed;
    }
    if held.right {
        step.x += speed;
    }
    step
}

/// Keep a box of `size` centered on `position` inside the world.
pub fn clamp_to_world(position: Vec2, size: Vec2, tuning: &Tuning) -> Vec2 {
    let half = size * 0.5;
    Vec2::new(
        position.x.clamp(half.x, tuning.world_width - half.x),
        position.y.clamp(half.y, tuning.world_height - half.y),
    )
}

/// Move the player for this tick. Returns whether the position changed.
pub fn run(player: &mut Player, held: &HeldInput, resolver: &CollisionResolver, tuning: &Tuning) -> bool {
    let step = intent(held, player.speed);
    if step == Vec2::ZERO {
        return false;
    }

    let candidate = clamp_to_world(player.position() + step, player.spatial.size, tuning);
    if resolver.blocked(&player.spatial.bounds_at(candidate)) {
        return false;
    }

    let moved = candidate != player.spatial.position;
    player.spatial.position = candidate;
    moved
}

/// Face the pointer.
pub fn update_facing(player: &mut Player, held: &HeldInput) {
    player.spatial.facing = angle_to(player.position(), held.pointer);
}
