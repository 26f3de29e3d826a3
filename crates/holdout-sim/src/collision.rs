//! Static obstacle blocking.
//!
//! Linear scan over every footprint per query. Fine for tens of obstacles;
//! a uniform grid would be the next step if obstacle or hostile counts grow
//! by an order of magnitude.

use holdout_core::components::Obstacle;
use holdout_core::types::Aabb;

/// Immutable set of obstacles placed at world generation.
#[derive(Debug, Clone, Default)]
pub struct CollisionResolver {
    obstacles: Vec<Obstacle>,
}

impl CollisionResolver {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    /// True if `candidate` overlaps any obstacle's collision footprint.
    pub fn blocked(&self, candidate: &Aabb) -> bool {
        self.obstacles
            .iter()
            .any(|obstacle| obstacle.footprint().intersects(candidate))
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn tree_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            position: Vec2::new(x, y),
            visual_size: Vec2::splat(80.0),
            footprint_offset: Vec2::new(30.0, 50.0),
            footprint_size: Vec2::new(20.0, 30.0),
        }
    }

    #[test]
    fn test_blocked_only_by_footprint() {
        let resolver = CollisionResolver::new(vec![tree_at(0.0, 0.0)]);

        let on_trunk = Aabb::from_center(Vec2::new(40.0, 65.0), Vec2::splat(10.0));
        let under_canopy = Aabb::from_center(Vec2::new(10.0, 10.0), Vec2::splat(10.0));

        assert!(resolver.blocked(&on_trunk));
        assert!(!resolver.blocked(&under_canopy));
    }

    #[test]
    fn test_empty_resolver_never_blocks() {
        let resolver = CollisionResolver::default();
        assert!(resolver.is_empty());
        assert!(!resolver.blocked(&Aabb::from_center(Vec2::ZERO, Vec2::splat(1000.0))));
    }

    #[test]
    fn test_any_of_many_blocks() {
        let resolver = CollisionResolver::new(vec![tree_at(0.0, 0.0), tree_at(500.0, 500.0)]);
        assert_eq!(resolver.len(), 2);
        let near_second = Aabb::from_center(Vec2::new(540.0, 565.0), Vec2::splat(4.0));
        assert!(resolver.blocked(&near_second));
    }
}
