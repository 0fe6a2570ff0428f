//! Adjacency validation for [`Contour`].

use crate::types::Contour;

impl Contour {
    /// Debug-only adjacency check.
    ///
    /// Validates that every vertex's outgoing segment ends at its circular
    /// successor's position. The index-order view and the segment view of
    /// adjacency must never diverge; a mismatch means a mutator failed to
    /// re-wire.
    #[cfg(debug_assertions)]
    pub fn validate_adjacency(&self) -> Result<(), String> {
        use crate::ring;

        let n = self.len();
        for i in 0..n {
            let expected = self.point(ring::next(i, n));
            let actual = self.vertex(i).segment().end();
            if actual != expected {
                return Err(format!(
                    "vertex {}: segment ends at ({}, {}), successor is at ({}, {})",
                    i, actual.x, actual.y, expected.x, expected.y
                ));
            }
        }

        Ok(())
    }

    /// No-op in release builds.
    #[cfg(not(debug_assertions))]
    pub fn validate_adjacency(&self) -> Result<(), String> {
        Ok(())
    }
}
