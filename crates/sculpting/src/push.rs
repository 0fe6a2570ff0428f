//! Push phase: project in-brush vertices onto the brush boundary.

use contour::Contour;
use tracing::trace;

use crate::types::SculptContext;

/// Inclusive scan span of pushed vertex indices.
///
/// `first` and `last` are the first and last indices *encountered* by the
/// linear scan from index 0. When the pushed set wraps past index 0 the span
/// is not a contiguous arc; densify independently checks the pair just
/// beyond each end, so callers must treat this as the scan span only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushedSpan {
    /// First pushed index in scan order.
    pub first: usize,
    /// Last pushed index in scan order.
    pub last: usize,
    /// Total number of vertices pushed.
    pub count: usize,
}

/// Push every vertex inside the brush out to the brush boundary.
///
/// Vertices farther than the radius are untouched. A pushed vertex moves to
/// `center + radius * direction` (clamped into bounds), where `direction`
/// runs from the brush center through the vertex's old position; the
/// predecessor's segment is re-pointed by the contour itself. Returns the
/// scan span, or `None` when the brush touched nothing.
pub fn push_vertices(contour: &mut Contour, ctx: &SculptContext) -> Option<PushedSpan> {
    let mut span: Option<PushedSpan> = None;

    for i in 0..contour.len() {
        let position = contour.point(i);
        if ctx.brush.distance_to(position) > ctx.brush.radius {
            continue;
        }

        let pushed = ctx.bounds.clamp(ctx.brush.project_to_rim(position));
        contour.set_point(i, pushed);
        trace!(
            "push_vertices: vertex {} -> ({:.2}, {:.2})",
            i, pushed.x, pushed.y
        );

        if let Some(span) = &mut span {
            span.last = i;
            span.count += 1;
        } else {
            span = Some(PushedSpan { first: i, last: i, count: 1 });
        }
    }

    span
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::{Brush, FALLBACK_DIRECTION};
    use contour::BoundingBox;
    use glam::Vec2;

    fn context(center: Vec2, radius: f32) -> SculptContext {
        SculptContext::new(Brush::new(center, radius), 1.0, BoundingBox::new(100.0, 100.0))
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
    fn test_far_brush_pushes_nothing() {
        let mut contour = square(10.0);
        let before = contour.clone();

        let span = push_vertices(&mut contour, &context(Vec2::new(50.0, 50.0), 2.0));

        assert!(span.is_none());
        assert_eq!(contour, before);
    }

    fn diamond() -> Contour {
        Contour::new(vec![
            Vec2::new(48.0, 50.0),
            Vec2::new(50.0, 48.0),
            Vec2::new(52.0, 50.0),
            Vec2::new(50.0, 52.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_pushed_vertices_land_on_boundary() {
        let mut contour = diamond();
        let ctx = context(Vec2::new(50.0, 50.0), 3.0);

        let span = push_vertices(&mut contour, &ctx).unwrap();

        assert_eq!(span.first, 0);
        assert_eq!(span.last, 3);
        assert_eq!(span.count, 4);
        for i in 0..contour.len() {
            assert!((ctx.brush.distance_to(contour.point(i)) - 3.0).abs() < 1e-4);
        }
        assert!(contour.validate_adjacency().is_ok());
    }

    #[test]
    fn test_pushed_vertex_stays_on_radial_line() {
        let mut contour = diamond();
        let center = Vec2::new(49.0, 49.0);
        let ctx = context(center, 4.0);
        let original = contour.point(0);

        push_vertices(&mut contour, &ctx);

        let pushed = contour.point(0);
        let expected_dir = (original - center).normalize();
        let actual_dir = (pushed - center).normalize();
        assert!((expected_dir - actual_dir).length() < 1e-4);
    }

    #[test]
    fn test_vertex_at_center_uses_fallback_direction() {
        let mut contour = square(10.0);
        let ctx = context(Vec2::ZERO, 3.0);

        push_vertices(&mut contour, &ctx);

        let expected = Vec2::ZERO + FALLBACK_DIRECTION * 3.0;
        assert!((contour.point(0) - expected).length() < 1e-5);
    }

    #[test]
    fn test_span_covers_scan_extent_when_wrapping() {
        // Brush near the corner (0, 0) touches vertices 0 and 3: the span
        // reports the scan extent [0, 3], not a contiguous arc.
        let mut contour = Contour::new(vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(1.0, 0.0),
        ])
        .unwrap();

        let span = push_vertices(&mut contour, &context(Vec2::ZERO, 2.0)).unwrap();

        assert_eq!(span.first, 0);
        assert_eq!(span.last, 3);
        assert_eq!(span.count, 2);
    }

    #[test]
    fn test_pushed_positions_are_clamped_to_bounds() {
        let mut contour = square(10.0);
        // Pushing the corner vertex aims it at negative coordinates.
        let ctx = context(Vec2::new(1.0, 1.0), 5.0);

        push_vertices(&mut contour, &ctx);

        for v in contour.vertices() {
            assert!(v.position().x >= 0.0 && v.position().y >= 0.0);
        }
    }
}
