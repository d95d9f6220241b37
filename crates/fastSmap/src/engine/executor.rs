//! Parallel execution engine for S-map prediction.
//!
//! ## Purpose
//!
//! This module provides the parallel prediction pass that is injected into
//! the `smap` crate's execution engine. Every target row's weighted fit is
//! independent, so the rows are distributed across all available CPU cores.
//!
//! ## Design notes
//!
//! * **Implementation**: Provides a drop-in replacement for the sequential prediction pass.
//! * **Parallelism**: Uses `rayon` for data-parallel execution across CPU cores.
//! * **Optimization**: Thread-local scratch buffers via `for_each_init` to avoid per-row allocation.
//! * **Ordering**: Output position is fixed by row index, so results match the sequential pass exactly.
//!
//! ## Key concepts
//!
//! * **Integration**: Plugs into the `smap` executor via the `PredictPassFn` hook.
//! * **Gap sentinel**: Rows with no usable neighbor are written as `NaN`,
//!   identical to the sequential pass.
//!
//! ## Invariants
//!
//! * `predictions.len()` equals the number of query rows.
//! * The library embedding and continuations are read-only during the pass.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by the `smap` validator).
//! * This module does not compute skill (handled by the `smap` executor).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;

// Export dependencies from smap crate
use smap::internals::algorithms::embedding::EmbeddingMatrix;
use smap::internals::algorithms::solver::FloatLinalg;
use smap::internals::engine::executor::predict_query;
use smap::internals::math::distance::DistanceAccum;
use smap::internals::primitives::buffer::QueryScratch;

// ============================================================================
// Parallel Prediction Pass
// ============================================================================

/// Perform the prediction pass over all target rows in parallel.
#[cfg(feature = "cpu")]
pub fn predict_pass_parallel<T>(
    library: &EmbeddingMatrix<T>,
    continuations: &[T],
    queries: &EmbeddingMatrix<T>,
    theta: T,
    exclude_self: bool,
    predictions: &mut [T],
) where
    T: Float + DistanceAccum + FloatLinalg + Send + Sync,
{
    predictions
        .par_iter_mut()
        .enumerate()
        .for_each_init(
            || QueryScratch::with_capacity(continuations.len()),
            |scratch, (i, out)| {
                let skip = if exclude_self && i < continuations.len() {
                    Some(i)
                } else {
                    None
                };

                *out = predict_query(
                    library,
                    continuations,
                    queries.row(i),
                    theta,
                    skip,
                    scratch,
                )
                .unwrap_or_else(T::nan);
            },
        );
}
