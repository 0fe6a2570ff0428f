//! Circular-brush contour sculpting for Linea.
//!
//! This crate deforms a closed 2D contour with a circular brush:
//! - **Push**: vertices inside the brush are projected onto its boundary
//! - **Densify**: vertices are inserted where the push left spacing too
//!   sparse
//! - **Consolidate**: vertices pushed too close together are merged
//! - **Radius policy**: the brush radius is derived from the cursor's
//!   distance to the contour and optionally clamped to the contour's area
//!
//! # Architecture
//!
//! One sculpt step runs radius policy → push → densify → consolidate to
//! completion inside a single pointer callback; the contour is mutated in
//! place through the `contour` crate's adjacency-preserving operations.
//!
//! ## Key Components
//!
//! - **Types**: configuration and the per-step sculpt context
//! - **Brush**: the circular footprint and rim projection
//! - **Push**: radial vertex displacement
//! - **Respacing**: densify and consolidate passes
//! - **Radius**: radius derivation, area clamp, hover preview

pub mod brush;
pub mod pipeline;
pub mod push;
pub mod radius;
pub mod respacing;
pub mod types;

pub use brush::{Brush, FALLBACK_DIRECTION};
pub use pipeline::{SculptPipeline, StepResult};
pub use push::PushedSpan;
pub use radius::{CoordinateSpace, HoverPreview};
pub use types::{SculptConfig, SculptContext};
