//! Axis-aligned bounding box collision
//!
//! Hitboxes are inset from the visual sprites so grazing an obstacle does not
//! end the round. The overlap test is the standard AABB test with strict
//! inequalities: rectangles that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Shrink the rect by `padding` on all four sides
    pub fn inset(&self, padding: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(padding),
            width: self.width - padding * 2.0,
            height: self.height - padding * 2.0,
        }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// Do two rectangles overlap?
///
/// Strict inequalities: touching edges (zero-area overlap) is a miss.
/// Symmetric in its arguments.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.pos.x < b.right() && a.right() > b.pos.x && a.pos.y < b.bottom() && a.bottom() > b.pos.y
}
