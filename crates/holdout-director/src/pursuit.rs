//! Hostile steering: straight-line pursuit with fixed-order deflection.
//!
//! No ECS dependency. Obstacle checks are delegated to a `blocked`
//! predicate so the rule can be tested without a world.

use glam::Vec2;

use holdout_core::constants::DEFLECTION_ANGLES_DEG;
use holdout_core::types::{angle_to, heading, Aabb};

/// Result of one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Always the direct pursuit angle, even when a deflected path was taken.
    pub facing: f32,
    /// Where the hostile ends up; unchanged when every path was blocked.
    pub position: Vec2,
    /// Index into the attempt order that succeeded: 0 = direct,
    /// 1..=4 = deflections. `None` when the hostile stayed put.
    pub path: Option<usize>,
}

/// Step toward `target` by `speed`. Tries the direct heading, then
/// +30°, −30°, +60°, −60°; the first unblocked candidate wins.
pub fn pursue<F>(position: Vec2, size: Vec2, speed: f32, target: Vec2, blocked: F) -> Steering
where
    F: Fn(&Aabb) -> bool,
{
    let direct = angle_to(position, target);

    let attempts = std::iter::once(0.0).chain(DEFLECTION_ANGLES_DEG.iter().copied());
    for (index, offset_deg) in attempts.enumerate() {
        let angle = direct + offset_deg.to_radians();
        let candidate = position + heading(angle) * speed;
        if !blocked(&Aabb::from_center(candidate, size)) {
            return Steering {
                facing: direct,
                position: candidate,
                path: Some(index),
            };
        }
    }

    Steering {
        facing: direct,
        position,
        path: None,
    }
}
