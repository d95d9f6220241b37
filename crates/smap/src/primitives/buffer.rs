//! Reusable scratch buffers for per-query computation.
//!
//! ## Purpose
//!
//! Every target row drives the same distance → weight → solve pipeline. The
//! intermediate vectors (surviving neighbor indices, their distances, their
//! weights) have the same upper bound for every query, so a single
//! [`QueryScratch`] is allocated once per pass (or once per worker thread in
//! parallel execution) and cleared between rows.
//!
//! ## Invariants
//!
//! * `neighbors`, `distances`, and `weights` always have equal lengths after
//!   a pipeline stage completes.
//! * `neighbors[k]` indexes a library embedding row that has a defined
//!   Tp-ahead continuation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Query Scratch
// ============================================================================

/// Scratch buffers reused across the per-query prediction pipeline.
#[derive(Debug, Clone)]
pub struct QueryScratch<T> {
    /// Indices of library embedding rows that survived exclusion.
    pub neighbors: Vec<usize>,

    /// Euclidean distance from the query to each surviving row.
    pub distances: Vec<T>,

    /// S-map kernel weight for each surviving row.
    pub weights: Vec<T>,
}

impl<T: Float> QueryScratch<T> {
    /// Create an empty scratch.
    pub fn new() -> Self {
        Self {
            neighbors: Vec::new(),
            distances: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Create a scratch sized for a library with `capacity` candidate rows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(capacity),
            distances: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    /// Clear all buffers, retaining their allocations.
    pub fn clear(&mut self) {
        self.neighbors.clear();
        self.distances.clear();
        self.weights.clear();
    }
}

impl<T: Float> Default for QueryScratch<T> {
    fn default() -> Self {
        Self::new()
    }
}
