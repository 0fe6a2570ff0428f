//! Contour types: a circular vertex ring with explicit forward adjacency.

use glam::Vec2;

use crate::ring;

/// Minimum number of vertices a contour may hold.
pub const MIN_VERTICES: usize = 3;

/// Errors that can occur when building or shrinking a contour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContourError {
    #[error("contour requires at least {min} vertices, got {0}", min = MIN_VERTICES)]
    TooFewVertices(usize),
}

/// Outgoing segment of a vertex: the edge to its circular successor.
///
/// Renderers read segments directly instead of re-deriving edges from index
/// order, so the endpoint must always equal the successor's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    end: Vec2,
}

impl Segment {
    /// Position of the successor vertex this segment ends at.
    pub fn end(&self) -> Vec2 {
        self.end
    }
}

/// A contour vertex: a 2D position plus its outgoing segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Vec2,
    segment: Segment,
}

impl Vertex {
    /// Position of this vertex.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Outgoing segment to this vertex's successor.
    pub fn segment(&self) -> Segment {
        self.segment
    }
}

/// A closed, circularly-ordered sequence of vertices.
///
/// Index `len - 1`'s successor is index `0`. The contour never holds fewer
/// than [`MIN_VERTICES`] vertices, and [`insert`](Contour::insert),
/// [`remove`](Contour::remove) and [`set_point`](Contour::set_point) are the
/// only operations that touch adjacency, so the per-vertex segment view and
/// the index-order view cannot diverge.
///
/// The contour is owned by the host and mutated in place; the sculpting
/// engine never copies or reallocates it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    vertices: Vec<Vertex>,
}

impl Contour {
    /// Build a contour from at least [`MIN_VERTICES`] points in ring order.
    pub fn new(points: Vec<Vec2>) -> Result<Self, ContourError> {
        if points.len() < MIN_VERTICES {
            return Err(ContourError::TooFewVertices(points.len()));
        }

        let n = points.len();
        let vertices = points
            .iter()
            .enumerate()
            .map(|(i, &position)| Vertex {
                position,
                segment: Segment {
                    end: points[ring::next(i, n)],
                },
            })
            .collect();

        Ok(Self { vertices })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a constructed contour; kept for iterator ergonomics.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Position of the vertex at `index`.
    pub fn point(&self, index: usize) -> Vec2 {
        self.vertices[index].position
    }

    /// Vertex at `index`.
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// All vertices in ring order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Move the vertex at `index` to `position`.
    ///
    /// Re-points the predecessor's outgoing segment at the new position. The
    /// vertex's own segment is untouched: its successor did not move.
    pub fn set_point(&mut self, index: usize, position: Vec2) {
        self.vertices[index].position = position;
        let prev = ring::prev(index, self.len());
        self.vertices[prev].segment.end = position;
    }

    /// Insert a new vertex at `index`; existing vertices at `index` and
    /// beyond shift up by one, `index == len` appends before the wrap.
    ///
    /// The predecessor's segment is re-pointed at the new vertex, and the
    /// new vertex's segment at the former successor.
    pub fn insert(&mut self, index: usize, position: Vec2) {
        let successor = ring::next_before_insert(index, self.len());
        let end = self.vertices[successor].position;

        self.vertices.insert(index, Vertex {
            position,
            segment: Segment { end },
        });

        let prev = ring::prev(index, self.len());
        self.vertices[prev].segment.end = position;
    }

    /// Remove the vertex at `index`, refusing to shrink below
    /// [`MIN_VERTICES`].
    ///
    /// The predecessor's segment is re-pointed at the removed vertex's
    /// successor.
    pub fn remove(&mut self, index: usize) -> Result<(), ContourError> {
        if self.len() <= MIN_VERTICES {
            return Err(ContourError::TooFewVertices(self.len() - 1));
        }

        let prev = ring::prev(index, self.len());
        let successor = ring::next(index, self.len());
        self.vertices[prev].segment.end = self.vertices[successor].position;
        self.vertices.remove(index);
        Ok(())
    }

    /// Iterate the contour's segments as `(start, end)` position pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.vertices.iter().map(|v| (v.position, v.segment.end))
    }

    /// Absolute area enclosed by the contour.
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Signed shoelace area: positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        let n = self.len();
        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i].position;
            let b = self.vertices[ring::next(i, n)].position;
            area += a.x * b.y - b.x * a.y;
        }
        area / 2.0
    }

    /// Total length of the contour's boundary.
    pub fn perimeter(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }

    /// Nearest Euclidean distance from `point` to the contour's boundary.
    pub fn distance_to(&self, point: Vec2) -> f32 {
        self.segments()
            .map(|(a, b)| point_segment_distance(point, a, b))
            .fold(f32::INFINITY, f32::min)
    }
}

/// Distance from `point` to the closed segment `a`-`b`.
fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
