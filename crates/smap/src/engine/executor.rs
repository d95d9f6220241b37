//! Execution engine for S-map prediction.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates one
//! `smap` call: embedding both series, pairing library rows with their
//! Tp-ahead continuations, and driving the per-query
//! distance → weight → solve pipeline in target-row order.
//!
//! ## Design notes
//!
//! * Every target row's prediction is independent; the sequential per-row
//!   loop can be replaced wholesale via the [`PredictPassFn`] hook (the
//!   fastSmap crate injects a rayon-parallel pass through it). Output
//!   position is determined by row index, so any execution order yields the
//!   same ordered result.
//! * One [`QueryScratch`] is reused across rows to keep the hot loop free
//!   of allocations (nalgebra's solve still allocates per row).
//! * Rows with no usable neighbor receive the `NaN` gap sentinel, never a
//!   numeric zero and never an error.
//!
//! ## Invariants
//!
//! * Inputs are already validated (handled by `validator` via the adapters).
//! * `predictions.len() == target.len() - (E-1)*tau`.
//! * Library embedding and continuation values are read-only during a pass.
//!
//! ## Non-goals
//!
//! * This module does not validate input data (handled by `validator`).
//! * This module does not provide public-facing result formatting.
//! * This module does not handle parallel execution directly (injected by
//!   extension crates through the pass hook).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::embedding::{embed, EmbeddingMatrix};
use crate::algorithms::neighbors::{collect_neighbors, SelfMatchPolicy};
use crate::algorithms::solver::{fit_and_predict, FloatLinalg};
use crate::algorithms::weights::smap_weights;
use crate::evaluation::skill::ForecastSkill;
use crate::math::distance::DistanceAccum;
use crate::primitives::buffer::QueryScratch;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom prediction pass function.
///
/// Arguments: library embedding, Tp-ahead continuations (one per leading
/// library row), target embedding, theta, whether to exclude temporally
/// coincident rows, and the output buffer (one slot per target row,
/// pre-filled with the gap sentinel).
#[doc(hidden)]
pub type PredictPassFn<T> = fn(
    &EmbeddingMatrix<T>, // library embedding
    &[T],                // continuations
    &EmbeddingMatrix<T>, // target embedding (queries)
    T,                   // theta
    bool,                // exclude self matches
    &mut [T],            // predictions
);

/// Output from S-map execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// One prediction per target embedding row, in row order. Gap rows hold
    /// `NaN`.
    pub predictions: Vec<T>,

    /// Forecast skill against the target's known continuations (if
    /// requested).
    pub skill: Option<ForecastSkill<T>>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for one S-map execution.
#[derive(Debug, Clone)]
pub struct SmapConfig<T> {
    /// Embedding dimension E (lagged coordinates per state vector).
    pub embedding_dim: usize,

    /// Lag tau between successive coordinates.
    pub lag: usize,

    /// Prediction horizon Tp (steps ahead).
    pub horizon: usize,

    /// Kernel nonlinearity parameter theta.
    pub theta: T,

    /// Policy for temporally coincident rows when library == target.
    pub self_match: SelfMatchPolicy,

    /// Whether to score predictions against known target continuations.
    pub return_skill: bool,

    /// Custom prediction pass function (enables parallel execution).
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,
}

// ============================================================================
// Sequential Prediction Pass
// ============================================================================

/// Predict one target row. Returns `None` when the row has no usable
/// library neighbor or the local solve fails.
pub fn predict_query<T>(
    library: &EmbeddingMatrix<T>,
    continuations: &[T],
    query: &[T],
    theta: T,
    skip: Option<usize>,
    scratch: &mut QueryScratch<T>,
) -> Option<T>
where
    T: Float + DistanceAccum + FloatLinalg,
{
    collect_neighbors(query, library, continuations.len(), skip, scratch);
    if scratch.neighbors.is_empty() {
        return None;
    }

    smap_weights(&scratch.distances, theta, &mut scratch.weights);

    fit_and_predict(
        library,
        &scratch.neighbors,
        continuations,
        &scratch.weights,
        query,
    )
}

/// Perform the prediction pass over all target rows, sequentially.
pub fn predict_pass_sequential<T>(
    library: &EmbeddingMatrix<T>,
    continuations: &[T],
    queries: &EmbeddingMatrix<T>,
    theta: T,
    exclude_self: bool,
    predictions: &mut [T],
) where
    T: Float + DistanceAccum + FloatLinalg,
{
    let mut scratch = QueryScratch::with_capacity(continuations.len());

    for i in 0..queries.rows() {
        let skip = if exclude_self && i < continuations.len() {
            Some(i)
        } else {
            None
        };

        predictions[i] = predict_query(library, continuations, queries.row(i), theta, skip, &mut scratch)
            .unwrap_or_else(T::nan);
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Unified S-map execution engine.
pub struct SmapExecutor<T: Float> {
    _marker: PhantomData<T>,
}

impl<T> SmapExecutor<T>
where
    T: Float + DistanceAccum + FloatLinalg + Debug,
{
    /// Run one S-map call with the given configuration.
    ///
    /// Inputs are assumed validated. The call is atomic: it runs to
    /// completion and returns one prediction slot per target embedding row.
    pub fn run_with_config(library: &[T], target: &[T], config: SmapConfig<T>) -> ExecutorOutput<T> {
        let offset = (config.embedding_dim - 1) * config.lag;

        let library_embedding = embed(library, config.embedding_dim, config.lag);
        let target_embedding = embed(target, config.embedding_dim, config.lag);

        // Leading library rows with a defined Tp-ahead continuation. Row i
        // sits at time offset + i, so its continuation is library[offset +
        // i + Tp]; validation guarantees at least one such row.
        let usable = library.len() - offset - config.horizon;
        let continuations: Vec<T> = (0..usable)
            .map(|i| library[offset + i + config.horizon])
            .collect();

        // Self-exclusion only applies when the two series are actually the
        // same; then target row i shares the time index of library row i.
        let exclude_self =
            config.self_match == SelfMatchPolicy::Exclude && library == target;

        let mut predictions = vec![T::nan(); target_embedding.rows()];

        let pass = config
            .custom_predict_pass
            .unwrap_or(predict_pass_sequential);
        pass(
            &library_embedding,
            &continuations,
            &target_embedding,
            config.theta,
            exclude_self,
            &mut predictions,
        );

        let skill = if config.return_skill {
            // Prediction i forecasts target time offset + i + Tp; pairs
            // exist only while that index stays inside the target series.
            let scored = target.len().saturating_sub(offset + config.horizon);
            let start = target.len() - scored;
            Some(ForecastSkill::compute(
                &predictions[..scored],
                &target[start..],
            ))
        } else {
            None
        };

        ExecutorOutput { predictions, skill }
    }
}
