//! Contour data model for the sculpting system
//!
//! This crate provides the vertex ring that the sculpting engine deforms:
//! - [`types::Contour`] - A closed, circularly-ordered sequence of vertices
//! - [`types::Vertex`] - A 2D position plus its explicit outgoing segment
//! - [`ring`] - Circular index arithmetic shared by all traversals
//! - [`bounds`] - The clamping region for computed points
//!
//! The contour keeps a per-vertex segment reference (the edge to the
//! vertex's successor) alongside index order. Renderers read those segments
//! directly, so the two views must never diverge: `insert`, `remove` and
//! `set_point` on [`types::Contour`] are the only operations that mutate
//! adjacency.

pub mod bounds;
pub mod ring;
pub mod types;
pub mod validation;

pub use bounds::*;
pub use types::*;
