//! Sculpt pipeline orchestration.
//!
//! This module coordinates one complete sculpt step:
//! 1. Radius policy → brush footprint for this step
//! 2. Push → in-brush vertices projected onto the brush boundary
//! 3. Densify → insertions where the push left spacing too sparse
//! 4. Consolidate → merges where vertices ended up too close
//!
//! A step runs to completion inside a single pointer callback and mutates
//! the contour in place; densify and consolidate only run when the push
//! actually moved something.

use contour::{BoundingBox, Contour};
use glam::Vec2;
use tracing::debug;

use crate::brush::Brush;
use crate::push::push_vertices;
use crate::radius::{self, CoordinateSpace, HoverPreview};
use crate::respacing::{consolidate_vertices, densify_span};
use crate::types::{SculptConfig, SculptContext};

/// Result of one sculpt step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Vertices pushed onto the brush boundary.
    pub vertices_pushed: usize,
    /// Vertices inserted by densify.
    pub vertices_inserted: usize,
    /// Vertices removed by consolidate.
    pub vertices_removed: usize,
}

impl StepResult {
    /// Whether the step changed the contour at all.
    pub fn changed(&self) -> bool {
        self.vertices_pushed > 0
    }
}

/// The sculpting pipeline: configuration plus per-step orchestration.
///
/// Holds no geometry of its own - the contour belongs to the host and each
/// step builds a fresh [`SculptContext`] that is discarded afterwards.
#[derive(Debug, Clone)]
pub struct SculptPipeline {
    /// Pipeline configuration.
    pub config: SculptConfig,
    /// Valid image area supplied by the host; computed points are clamped
    /// into it.
    bounds: BoundingBox,
}

impl SculptPipeline {
    /// Create a pipeline with the given configuration and clamping bounds.
    pub fn new(config: SculptConfig, bounds: BoundingBox) -> Self {
        Self { config, bounds }
    }

    /// Create a pipeline with default configuration.
    pub fn with_defaults(bounds: BoundingBox) -> Self {
        Self::new(SculptConfig::default(), bounds)
    }

    /// The clamping bounds in use.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Replace the clamping bounds (e.g. when the host image changes).
    pub fn set_bounds(&mut self, bounds: BoundingBox) {
        self.bounds = bounds;
    }

    /// Run one sculpt step with an explicit brush radius.
    ///
    /// Pushes, then densifies and consolidates only if the push moved at
    /// least one vertex. The contour is mutated in place.
    pub fn sculpt(&self, contour: &mut Contour, cursor: Vec2, brush_radius: f32) -> StepResult {
        debug_assert!(brush_radius >= 0.0, "brush radius must be non-negative");

        let ctx = SculptContext::new(
            Brush::new(cursor, brush_radius),
            self.config.min_spacing,
            self.bounds,
        );

        let mut result = StepResult::default();
        if let Some(span) = push_vertices(contour, &ctx) {
            result.vertices_pushed = span.count;
            result.vertices_inserted = densify_span(contour, &ctx, span);
            result.vertices_removed = consolidate_vertices(contour, &ctx);
        }

        debug!(
            "sculpt: pushed={} inserted={} removed={} len={}",
            result.vertices_pushed,
            result.vertices_inserted,
            result.vertices_removed,
            contour.len()
        );

        result
    }

    /// Run one sculpt step with the radius derived from the cursor's
    /// distance to the contour in model space.
    pub fn sculpt_at(&self, contour: &mut Contour, cursor: Vec2) -> StepResult {
        let radius = self.preview_radius(
            contour,
            cursor,
            self.config.clamp_radius_to_area,
            CoordinateSpace::Model,
        );
        self.sculpt(contour, cursor, radius)
    }

    /// Radius the sculpting circle would use for this cursor position.
    ///
    /// In model space the distance is measured against the contour; in
    /// display space the caller supplies it along with the viewport area.
    pub fn preview_radius(
        &self,
        contour: &Contour,
        cursor: Vec2,
        clamp_to_area: bool,
        space: CoordinateSpace,
    ) -> f32 {
        let distance = radius::cursor_distance(contour, cursor, space);
        radius::derive_radius(contour, self.bounds, space, distance, clamp_to_area)
    }

    /// Inert hover preview for the given cursor position, or `None` when
    /// hover rendering is disabled.
    pub fn hover_preview(
        &self,
        contour: &Contour,
        cursor: Vec2,
        space: CoordinateSpace,
    ) -> Option<HoverPreview> {
        if !self.config.show_cursor_on_hover {
            return None;
        }

        Some(radius::hover_preview(
            contour,
            &self.config,
            self.bounds,
            cursor,
            space,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contour::{MIN_VERTICES, ring};

    fn pipeline(min_spacing: f32) -> SculptPipeline {
        let mut config = SculptConfig::default();
        config.min_spacing = min_spacing;
        SculptPipeline::new(config, BoundingBox::new(100.0, 100.0))
    }

    fn square(side: f32) -> Contour {
        Contour::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(side, 0.0),
            Vec2::new(side, side),
            Vec2::new(0.0, side),
        ])
        .unwrap()
    }

    #[test]
    fn test_far_cursor_is_idempotent() {
        let mut contour = square(10.0);
        let before = contour.clone();

        let result = pipeline(1.0).sculpt(&mut contour, Vec2::new(80.0, 80.0), 3.0);

        assert!(!result.changed());
        assert_eq!(result, StepResult::default());
        assert_eq!(contour, before);
    }

    #[test]
    fn test_corner_brush_scenario() {
        // Brush centered exactly on the corner vertex: the vertex is pushed
        // along the fallback direction, and the now-oversized adjacent
        // stretches each gain an inserted vertex.
        let mut contour = square(10.0);

        let result = pipeline(1.0).sculpt(&mut contour, Vec2::new(0.0, 0.0), 3.0);

        assert_eq!(result.vertices_pushed, 1);
        // Zero-distance push lands on the rim along +X.
        assert_eq!(contour.point(0), Vec2::new(3.0, 0.0));

        // Sites at the pushed edge and both junction edges.
        assert_eq!(result.vertices_inserted, 3);
        assert_eq!(result.vertices_removed, 0);
        assert_eq!(contour.len(), 7);

        // Inserted midpoints all fell outside the brush.
        assert!((contour.point(1) - Vec2::new(6.5, 0.0)).length() < 1e-4);
        assert!((contour.point(3) - Vec2::new(10.0, 5.0)).length() < 1e-4);
        assert!((contour.point(6) - Vec2::new(1.5, 5.0)).length() < 1e-4);

        assert!(contour.validate_adjacency().is_ok());
    }

    #[test]
    fn test_step_preserves_minimum_length() {
        // A tiny triangle sculpted with a huge brush and aggressive merge
        // threshold must never drop below the minimum vertex count.
        let mut contour = Contour::new(vec![
            Vec2::new(50.0, 50.0),
            Vec2::new(50.4, 50.0),
            Vec2::new(50.2, 50.4),
        ])
        .unwrap();

        let pipeline = pipeline(10.0);
        for _ in 0..5 {
            pipeline.sculpt(&mut contour, Vec2::new(50.2, 50.1), 0.5);
            assert!(contour.len() >= MIN_VERTICES);
        }
        assert!(contour.validate_adjacency().is_ok());
    }

    #[test]
    fn test_spacing_bounds_hold_after_step() {
        // Dent a 12-gon and check both respacing guarantees afterwards.
        let points: Vec<Vec2> = (0..12)
            .map(|k| {
                let angle = k as f32 * std::f32::consts::TAU / 12.0;
                Vec2::new(50.0 + 10.0 * angle.cos(), 50.0 + 10.0 * angle.sin())
            })
            .collect();
        let mut contour = Contour::new(points).unwrap();

        let pipeline = pipeline(1.0);
        let result = pipeline.sculpt(&mut contour, Vec2::new(40.0, 50.0), 8.0);
        assert!(result.changed());

        let max_spacing = 8.0_f32.max(2.0 * pipeline.config.min_spacing);
        for i in 0..contour.len() {
            let next = ring::next(i, contour.len());
            let spacing = contour.point(i).distance(contour.point(next));
            assert!(spacing <= max_spacing + 1e-3);
            assert!(spacing >= pipeline.config.min_spacing || contour.len() == MIN_VERTICES);
        }
        assert!(contour.validate_adjacency().is_ok());
    }

    #[test]
    fn test_sculpt_at_derives_radius_from_contour() {
        let mut contour = square(10.0);
        // Nearest contour point to the cursor is the corner vertex at
        // distance 3: the derived radius reaches exactly that vertex, whose
        // rim projection is its own position.
        let result = pipeline(1.0).sculpt_at(&mut contour, Vec2::new(-3.0, 0.0));

        assert_eq!(result.vertices_pushed, 1);
        assert_eq!(contour.point(0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_hover_preview_respects_toggle() {
        let contour = square(10.0);
        let mut pipeline = pipeline(1.0);

        assert!(
            pipeline
                .hover_preview(&contour, Vec2::new(5.0, 5.0), CoordinateSpace::Model)
                .is_some()
        );

        pipeline.config.show_cursor_on_hover = false;
        assert!(
            pipeline
                .hover_preview(&contour, Vec2::new(5.0, 5.0), CoordinateSpace::Model)
                .is_none()
        );
    }

    #[test]
    fn test_preview_radius_matches_policy() {
        let contour = square(10.0);
        let pipeline = pipeline(1.0);

        // Unclamped: raw distance to the contour.
        let r = pipeline.preview_radius(
            &contour,
            Vec2::new(0.0, 15.0),
            false,
            CoordinateSpace::Model,
        );
        assert!((r - 5.0).abs() < 1e-4);

        // Clamped: limited by the contour's area.
        let clamped = pipeline.preview_radius(
            &contour,
            Vec2::new(0.0, 25.0),
            true,
            CoordinateSpace::Model,
        );
        assert!((clamped - (100.0_f32 / std::f32::consts::PI).sqrt()).abs() < 1e-3);
    }
}
