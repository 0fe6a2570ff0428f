//! Vertex respacing: densify sparse stretches, consolidate dense ones.
//!
//! Push only alters spacing within the pushed region and at its boundary,
//! so densify restricts its checks to the pushed span plus one pair beyond
//! each end, while consolidate re-checks the whole ring because merges can
//! cascade.

mod consolidate;
mod densify;

pub use consolidate::consolidate_vertices;
pub use densify::densify_span;
