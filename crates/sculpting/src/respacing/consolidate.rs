//! Consolidate: merge adjacent vertices closer than the minimum spacing.

use contour::{Contour, MIN_VERTICES, ring};
use tracing::trace;

use crate::types::SculptContext;

/// Merge close adjacent pairs until none remain or the contour has shrunk
/// to its minimum size. Returns the number of vertices removed.
///
/// Each pass records non-overlapping pairs only, then merges them; a single
/// dense cluster therefore shrinks gradually across passes instead of
/// collapsing to one point. The rescan repeats as a fixed-point loop capped
/// at the entry vertex count - every productive pass removes at least one
/// vertex, so the cap cannot be hit by a converging input.
pub fn consolidate_vertices(contour: &mut Contour, ctx: &SculptContext) -> usize {
    if contour.len() <= MIN_VERTICES {
        return 0;
    }

    let mut removed_total = 0;
    let max_passes = contour.len();

    for pass in 0..max_passes {
        if contour.len() <= MIN_VERTICES {
            break;
        }

        let pairs = find_close_pairs(contour, ctx);
        if pairs.is_empty() {
            break;
        }

        let removed = merge_pairs(contour, ctx, &pairs);
        trace!(
            "consolidate: pass {} merged {} pairs, {} vertices remain",
            pass, removed, contour.len()
        );
        removed_total += removed;

        if removed == 0 {
            break;
        }
    }

    removed_total
}

/// Find non-overlapping adjacent pairs closer than the minimum spacing.
///
/// After recording a pair the scan skips the pair's second member, so no
/// vertex participates in two pairs in the same pass. A pair anchored at
/// index 0 also shortens the scan by one, so the closing wrap pair cannot
/// count vertex 0 a second time.
fn find_close_pairs(contour: &Contour, ctx: &SculptContext) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    let mut length = contour.len();
    let mut i = 0;

    while i < length {
        let next = ring::next(i, contour.len());
        if contour.point(i).distance(contour.point(next)) < ctx.min_spacing {
            pairs.push((i, next));

            if i == 0 {
                length -= 1;
            }
            // Skip the pair's second member.
            i += 1;
        }
        i += 1;
    }

    pairs
}

/// Merge recorded pairs left to right.
///
/// Raw pair indices were taken before any merge; each merge deletes one
/// vertex, so a running removed count re-maps them to live indices. The
/// wrap pair `(len - 1, 0)` re-maps its second index to 0.
fn merge_pairs(contour: &mut Contour, ctx: &SculptContext, pairs: &[(usize, usize)]) -> usize {
    let mut removed = 0;

    for &(first, second) in pairs {
        if contour.len() <= MIN_VERTICES {
            break;
        }

        let first = first - removed;
        let second = if second >= removed { second - removed } else { 0 };

        if !merge_pair(contour, ctx, first, second) {
            break;
        }
        removed += 1;
    }

    removed
}

/// Combine one adjacent pair into a single vertex at their midpoint.
///
/// The first vertex moves to the clamped midpoint and, through the removal,
/// its segment is re-pointed at the vertex after the pair; the second
/// vertex is deleted. Returns false if the removal was refused at the
/// minimum contour size.
fn merge_pair(contour: &mut Contour, ctx: &SculptContext, first: usize, second: usize) -> bool {
    let midpoint = (contour.point(first) + contour.point(second)) / 2.0;
    contour.set_point(first, ctx.bounds.clamp(midpoint));
    contour.remove(second).is_ok()
}
