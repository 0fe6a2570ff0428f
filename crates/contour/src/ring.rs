//! Circular index arithmetic for contour traversal.
//!
//! Every phase of the sculpting engine walks the contour through these
//! helpers; nothing may assume a non-circular array.

/// Successor index in the circular order.
#[inline]
pub fn next(i: usize, len: usize) -> usize {
    if i == len - 1 { 0 } else { i + 1 }
}

/// Predecessor index in the circular order.
#[inline]
pub fn prev(i: usize, len: usize) -> usize {
    if i == 0 { len - 1 } else { i - 1 }
}

/// Successor of an insertion position that has not been materialized yet.
///
/// When a vertex is about to be inserted at position `i` into a ring of
/// length `len`, the vertex that will follow it is the one currently at `i`
/// (or at `0` when inserting past the end). No existing successor
/// relationship shifts until the insertion actually happens.
#[inline]
pub fn next_before_insert(i: usize, len: usize) -> usize {
    if i == len { 0 } else { i }
}
