//! The sculpting tool's circular footprint.

use glam::Vec2;

/// Direction used when a point coincides with the brush center.
///
/// The radial direction is undefined at the exact center; projecting along
/// a fixed axis keeps the result stable and never divides by zero.
pub const FALLBACK_DIRECTION: Vec2 = Vec2::X;

/// The brush for one sculpt step: a circle at the cursor position.
///
/// Ephemeral by design - recomputed from cursor and radius policy every
/// step, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Cursor position, in model units.
    pub center: Vec2,
    /// Footprint radius, in model units.
    pub radius: f32,
}

impl Brush {
    /// Create a brush at `center` with the given `radius`.
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "brush radius must be non-negative");
        Self { center, radius }
    }

    /// Distance from the brush center to `point`.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.center.distance(point)
    }

    /// Whether `point` lies inside or on the brush boundary.
    pub fn contains(&self, point: Vec2) -> bool {
        self.distance_to(point) <= self.radius
    }

    /// Project `point` onto the brush boundary along the radial direction
    /// from the center through `point`.
    ///
    /// A point at the exact center is projected along
    /// [`FALLBACK_DIRECTION`].
    pub fn project_to_rim(&self, point: Vec2) -> Vec2 {
        let offset = point - self.center;
        let distance = offset.length();
        let direction = if distance > 0.0 {
            offset / distance
        } else {
            FALLBACK_DIRECTION
        };

        self.center + direction * self.radius
    }
}
