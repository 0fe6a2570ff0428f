//! Core sculpting configuration and the per-step context.

use contour::BoundingBox;
use serde::{Deserialize, Serialize};

use crate::brush::Brush;

/// Default minimum spacing between adjacent vertices, in model units.
pub const DEFAULT_MIN_SPACING: f32 = 1.0;

/// Default alpha the hover cursor fades to when far from the contour.
pub const DEFAULT_HOVER_FADE_ALPHA: f32 = 0.5;

/// Default distance, in units of the (clamped) radius, beyond which the
/// hover cursor fades.
pub const DEFAULT_HOVER_FADE_DISTANCE: f32 = 1.2;

/// Configuration for the sculpting pipeline.
///
/// All fields have documented defaults; range-bound fields also have
/// clamping setters so a config assembled at runtime can never leave its
/// legal range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SculptConfig {
    /// Minimum spacing between adjacent vertices; consolidate merges pairs
    /// closer than this. Must be strictly positive.
    pub min_spacing: f32,
    /// Whether an inert preview circle is shown while hovering.
    pub show_cursor_on_hover: bool,
    /// Limit the brush radius so a circle of that radius covers no more
    /// area than the contour being sculpted.
    pub clamp_radius_to_area: bool,
    /// Alpha the hover preview fades to when the cursor is far from the
    /// contour. Legal range `[0, 1]`.
    pub hover_cursor_fade_alpha: f32,
    /// Distance from the contour, in radii, beyond which the hover preview
    /// fades. Legal range `>= 1.0`.
    pub hover_cursor_fade_distance: f32,
    /// RGBA color of the cursor while actively sculpting.
    pub drag_color: [f32; 4],
    /// RGBA color of the hover preview circle.
    pub hover_color: [f32; 4],
}

impl Default for SculptConfig {
    fn default() -> Self {
        Self {
            min_spacing: DEFAULT_MIN_SPACING,
            show_cursor_on_hover: true,
            clamp_radius_to_area: true,
            hover_cursor_fade_alpha: DEFAULT_HOVER_FADE_ALPHA,
            hover_cursor_fade_distance: DEFAULT_HOVER_FADE_DISTANCE,
            drag_color: [1.0, 1.0, 1.0, 1.0],
            hover_color: [0.0, 1.0, 0.0, 1.0],
        }
    }
}

impl SculptConfig {
    /// Set the minimum vertex spacing. Clamped to stay strictly positive.
    pub fn set_min_spacing(&mut self, value: f32) {
        self.min_spacing = value.max(0.01);
    }

    /// Set the hover fade alpha. Clamped to `[0, 1]`.
    pub fn set_hover_cursor_fade_alpha(&mut self, value: f32) {
        self.hover_cursor_fade_alpha = value.clamp(0.0, 1.0);
    }

    /// Set the hover fade distance. Clamped to at least one radius so the
    /// preview can never fade while the cursor is inside the brush circle.
    pub fn set_hover_cursor_fade_distance(&mut self, value: f32) {
        self.hover_cursor_fade_distance = value.max(1.0);
    }
}

/// Per-step transient bundle handed to the sculpting phases.
///
/// Built fresh for every sculpt step and discarded afterwards; only the
/// contour itself carries state between steps.
#[derive(Debug, Clone, Copy)]
pub struct SculptContext {
    /// The brush footprint for this step.
    pub brush: Brush,
    /// Minimum adjacent spacing enforced by consolidate.
    pub min_spacing: f32,
    /// Maximum adjacent spacing enforced by densify.
    pub max_spacing: f32,
    /// Valid image area; every computed point is clamped into it.
    pub bounds: BoundingBox,
}

impl SculptContext {
    /// Build the context for one step.
    ///
    /// `max_spacing` is derived as `max(radius, 2 * min_spacing)`, which
    /// keeps `min_spacing <= max_spacing` for any positive `min_spacing`.
    pub fn new(brush: Brush, min_spacing: f32, bounds: BoundingBox) -> Self {
        Self {
            max_spacing: brush.radius.max(2.0 * min_spacing),
            brush,
            min_spacing,
            bounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_default_config() {
        let config = SculptConfig::default();
        assert!((config.min_spacing - DEFAULT_MIN_SPACING).abs() < 1e-6);
        assert!(config.show_cursor_on_hover);
        assert!(config.clamp_radius_to_area);
        assert!((config.hover_cursor_fade_alpha - 0.5).abs() < 1e-6);
        assert!((config.hover_cursor_fade_distance - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_setters_clamp_ranges() {
        let mut config = SculptConfig::default();

        config.set_hover_cursor_fade_alpha(1.7);
        assert!((config.hover_cursor_fade_alpha - 1.0).abs() < 1e-6);
        config.set_hover_cursor_fade_alpha(-0.3);
        assert!(config.hover_cursor_fade_alpha.abs() < 1e-6);

        config.set_hover_cursor_fade_distance(0.4);
        assert!((config.hover_cursor_fade_distance - 1.0).abs() < 1e-6);

        config.set_min_spacing(0.0);
        assert!(config.min_spacing > 0.0);
    }

    #[test]
    fn test_max_spacing_derivation() {
        let bounds = BoundingBox::new(100.0, 100.0);

        // Wide brush: the radius dominates.
        let ctx = SculptContext::new(Brush::new(Vec2::ZERO, 10.0), 1.0, bounds);
        assert!((ctx.max_spacing - 10.0).abs() < 1e-6);

        // Narrow brush: twice the minimum spacing dominates.
        let ctx = SculptContext::new(Brush::new(Vec2::ZERO, 1.0), 3.0, bounds);
        assert!((ctx.max_spacing - 6.0).abs() < 1e-6);
        assert!(ctx.min_spacing <= ctx.max_spacing);
    }
}
