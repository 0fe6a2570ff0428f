//! Clamping region for computed contour points.

use glam::Vec2;

/// Axis-aligned clamping region anchored at the origin.
///
/// Mirrors the host's valid image area: every point the engine computes is
/// clamped into `[0, width] x [0, height]` before it lands on the contour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Extent along x, in model units.
    pub width: f32,
    /// Extent along y, in model units.
    pub height: f32,
}

impl BoundingBox {
    /// Create a bounding box with the given extents.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp `point` into the box.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(0.0, self.width),
            point.y.clamp(0.0, self.height),
        )
    }

    /// Area of the box, in square model units.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}
