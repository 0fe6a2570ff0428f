//! Densify: insert vertices where pushed spacing exceeds the maximum.

use contour::{Contour, ring};
use tracing::trace;

use crate::push::PushedSpan;
use crate::types::SculptContext;

/// Insert vertices wherever adjacent spacing within the pushed span, or in
/// the one pair just beyond each of its ends, exceeds `max_spacing`.
///
/// Returns the number of vertices inserted.
pub fn densify_span(contour: &mut Contour, ctx: &SculptContext, span: PushedSpan) -> usize {
    let sites = find_insert_sites(contour, ctx, span);

    // Sites are processed in ascending index order; every insertion shifts
    // the indices of all later sites up by one.
    for (offset, &site) in sites.iter().enumerate() {
        let insert_index = site + 1 + offset;
        insert_between(contour, ctx, insert_index);
    }

    sites.len()
}

/// Indices whose outgoing spacing exceeds the maximum, ascending.
///
/// Only the pushed span and the single pair beyond each of its ends are
/// checked: push cannot have changed spacing anywhere else, and the rest of
/// the ring was already within bounds after the previous step. The junction
/// checks are skipped when they would fold back onto the span or onto each
/// other, so no pair is recorded twice.
fn find_insert_sites(contour: &Contour, ctx: &SculptContext, span: PushedSpan) -> Vec<usize> {
    let mut sites = Vec::new();

    for i in span.first..=span.last {
        check_spacing(contour, ctx, i, &mut sites);
    }

    let after_last = ring::next(span.last, contour.len());
    if after_last != span.first {
        check_spacing(contour, ctx, after_last, &mut sites);

        let before_first = ring::prev(span.first, contour.len());
        if before_first != after_last {
            check_spacing(contour, ctx, before_first, &mut sites);
        }
    }

    sites.sort_unstable();
    sites
}

/// Record `i` as an insert-after site if the segment to its successor is
/// longer than the maximum spacing.
fn check_spacing(contour: &Contour, ctx: &SculptContext, i: usize, sites: &mut Vec<usize>) {
    let next = ring::next(i, contour.len());
    let spacing = contour.point(i).distance(contour.point(next));
    if spacing > ctx.max_spacing {
        trace!(
            "densify: spacing {:.2} after vertex {} exceeds {:.2}",
            spacing, i, ctx.max_spacing
        );
        sites.push(i);
    }
}

/// Insert a vertex at `insert_index`, midway between its neighbors.
///
/// A midpoint that falls inside the brush is projected out onto the brush
/// boundary along the center-to-midpoint direction, so the inserted vertex
/// follows the circular dent the push carved. Clamped to bounds either way.
fn insert_between(contour: &mut Contour, ctx: &SculptContext, insert_index: usize) {
    let previous = insert_index - 1;
    let next = ring::next_before_insert(insert_index, contour.len());

    let midpoint = (contour.point(previous) + contour.point(next)) / 2.0;
    let position = if ctx.brush.distance_to(midpoint) < ctx.brush.radius {
        ctx.brush.project_to_rim(midpoint)
    } else {
        midpoint
    };

    contour.insert(insert_index, ctx.bounds.clamp(position));
}
