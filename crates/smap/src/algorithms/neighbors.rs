//! Neighbor collection and exclusion policy.
//!
//! ## Purpose
//!
//! For one query state vector, this module collects the Euclidean distances
//! to every *usable* library state vector. A library row is usable when it
//! has a defined Tp-ahead continuation (the engine passes only that many
//! candidate rows) and, when library and target are the same series, when it
//! is not temporally coincident with the query.
//!
//! ## Design notes
//!
//! * **No zero-fill**: Excluded rows are omitted from the candidate set, not
//!   recorded with a placeholder distance.
//! * **Empty result is legal**: A query whose candidate set comes up empty
//!   produces a per-row gap downstream, never an error here.
//! * **Scratch reuse**: Results land in a caller-provided [`QueryScratch`]
//!   so tight prediction loops allocate nothing per row.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::embedding::EmbeddingMatrix;
use crate::math::distance::DistanceAccum;
use crate::primitives::buffer::QueryScratch;

// ============================================================================
// Self-Match Policy
// ============================================================================

/// Policy for temporally coincident library rows when the library and
/// target are the same series.
///
/// Forecasting a series against itself makes every query trivially its own
/// nearest neighbor at distance zero; excluding the coincident row avoids
/// that degenerate fit. `Allow` keeps it for callers who want in-sample
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfMatchPolicy {
    /// Exclude the temporally coincident row (default).
    #[default]
    Exclude,

    /// Keep the temporally coincident row.
    Allow,
}

// ============================================================================
// Neighbor Collection
// ============================================================================

/// Collect distances from `query` to every usable library row.
///
/// `candidates` is the number of leading library rows that have a defined
/// Tp-ahead continuation; rows past it are never considered. `skip` names
/// the temporally coincident row to drop, if any. Surviving row indices and
/// their distances are written to `scratch`.
pub fn collect_neighbors<T>(
    query: &[T],
    library: &EmbeddingMatrix<T>,
    candidates: usize,
    skip: Option<usize>,
    scratch: &mut QueryScratch<T>,
) where
    T: Float + DistanceAccum,
{
    debug_assert!(candidates <= library.rows());
    debug_assert_eq!(query.len(), library.dim());

    scratch.clear();

    for i in 0..candidates {
        if skip == Some(i) {
            continue;
        }

        let d = T::sq_dist(query, library.row(i)).sqrt();
        scratch.neighbors.push(i);
        scratch.distances.push(d);
    }
}
