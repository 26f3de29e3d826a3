//! Viewport that follows the player.
//!
//! Only used to translate world to screen coordinates and to cull; it has
//! no say in movement or collision. Not clamped to the world edge.

use glam::Vec2;

use holdout_core::constants::INDICATOR_EDGE_INSET;
use holdout_core::state::CameraView;
use holdout_core::types::Aabb;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    /// World position of the top-left corner.
    pub offset: Vec2,
    pub size: Vec2,
}

impl Viewport {
    /// Viewport of `size` centered on `focus`.
    pub fn centered_on(focus: Vec2, size: Vec2) -> Self {
        Self {
            offset: focus - size * 0.5,
            size,
        }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.offset, self.size)
    }

    /// Whether a circle is within the viewport expanded by its own radius.
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        let s = self.to_screen(center);
        s.x >= -radius && s.x <= self.size.x + radius && s.y >= -radius && s.y <= self.size.y + radius
    }

    /// Whether any part of `bounds` is on screen.
    pub fn overlaps(&self, bounds: &Aabb) -> bool {
        self.bounds().intersects(bounds)
    }

    /// Screen-space edge marker for a point outside the viewport, or
    /// `None` when the point is visible.
    pub fn edge_indicator(&self, world: Vec2) -> Option<Vec2> {
        let s = self.to_screen(world);
        let outside = s.x < 0.0 || s.x > self.size.x || s.y < 0.0 || s.y > self.size.y;
        if !outside {
            return None;
        }

        let clamp_axis = |v: f32, extent: f32| {
            if v < 0.0 {
                INDICATOR_EDGE_INSET
            } else if v > extent {
                extent - INDICATOR_EDGE_INSET
            } else {
                v
            }
        };
        Some(Vec2::new(clamp_axis(s.x, self.size.x), clamp_axis(s.y, self.size.y)))
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            offset: self.offset,
            viewport: self.size,
        }
    }
}
