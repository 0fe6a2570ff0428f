//! Brush radius policy: distance-derived radius, area clamp, hover fade.
//!
//! The radius is never a fixed tool size: it is the cursor's distance to
//! the contour, optionally limited so the brush circle covers no more area
//! than the contour it edits. Model and display space are clamped
//! independently because the mapping between them need not be isotropic.

use std::f32::consts::PI;

use contour::{BoundingBox, Contour};
use glam::Vec2;

use crate::types::SculptConfig;

/// Coordinate space a radius is computed in.
///
/// Model space holds the raw contour data; display space is the host
/// viewport's rendering of it. The engine never transforms between the two:
/// display-space measurements are supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateSpace {
    /// Raw data space. Distances are computed from the contour directly.
    Model,
    /// Rendered space. The caller supplies the cursor-to-contour distance
    /// and the viewport's area (the model bounding box as displayed).
    Display {
        /// Cursor-to-contour nearest distance, in display units.
        distance_to_contour: f32,
        /// Area the model bounding box covers on screen, in display units.
        viewport_area: f32,
    },
}

/// Hover preview output: where and how to draw the inert cursor circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPreview {
    /// Cursor position clamped into the model bounds.
    pub center: Vec2,
    /// Radius to draw, in the units of the requested space.
    pub radius: f32,
    /// Alpha to draw with; drops to the configured fade alpha when the
    /// cursor is far from the contour.
    pub alpha: f32,
}

/// Radius of the sculpting circle for the given cursor distance.
///
/// The base radius equals the distance; with `clamp_to_area` set it is
/// limited to the radius of a circle with the contour's own area. In
/// display space the contour's model-space area is first re-expressed via
/// the viewport-to-model area ratio.
pub fn derive_radius(
    contour: &Contour,
    bounds: BoundingBox,
    space: CoordinateSpace,
    distance: f32,
    clamp_to_area: bool,
) -> f32 {
    if !clamp_to_area {
        return distance;
    }

    let area_modifier = match space {
        CoordinateSpace::Model => 1.0,
        CoordinateSpace::Display { viewport_area, .. } => viewport_area / bounds.area(),
    };

    let area = contour.area() * area_modifier;
    distance.min((area / PI).sqrt())
}

/// Cursor-to-contour distance in the requested space.
pub(crate) fn cursor_distance(contour: &Contour, cursor: Vec2, space: CoordinateSpace) -> f32 {
    match space {
        CoordinateSpace::Model => contour.distance_to(cursor),
        CoordinateSpace::Display { distance_to_contour, .. } => distance_to_contour,
    }
}

/// Build the inert hover preview for a cursor position.
///
/// Geometry is unaffected by the fade: a preview farther from the contour
/// than `fade_distance` radii only renders dimmer.
pub fn hover_preview(
    contour: &Contour,
    config: &SculptConfig,
    bounds: BoundingBox,
    cursor: Vec2,
    space: CoordinateSpace,
) -> HoverPreview {
    let distance = cursor_distance(contour, cursor, space);
    let radius = derive_radius(contour, bounds, space, distance, config.clamp_radius_to_area);

    let faded = config.clamp_radius_to_area
        && distance > config.hover_cursor_fade_distance * radius;
    let alpha = if faded { config.hover_cursor_fade_alpha } else { 1.0 };

    HoverPreview {
        center: bounds.clamp(cursor),
        radius,
        alpha,
    }
}
