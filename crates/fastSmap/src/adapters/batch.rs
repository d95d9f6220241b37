//! Batch adapter for standard S-map prediction with parallel support.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for S-map prediction.
//! It handles complete series in memory with optional parallel processing of
//! the per-query fits.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates validation and orchestration to the `smap` crate.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastSmap extension).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Parallel Execution**: Injects the rayon prediction pass through the
//!   core engine's pass hook.
//!
//! ## Invariants
//!
//! * Parallel and sequential passes produce identical output for identical input.
//!
//! ## Non-goals
//!
//! * This adapter does not evaluate theta grids (use the sweep adapter).
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::predict_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from smap crate
use smap::internals::adapters::batch::BatchSmapBuilder;
use smap::internals::algorithms::neighbors::SelfMatchPolicy;
use smap::internals::algorithms::solver::FloatLinalg;
use smap::internals::engine::output::SmapResult;
use smap::internals::math::distance::DistanceAccum;
use smap::internals::primitives::errors::SmapError;

// Internal dependencies
use crate::input::SmapInput;

// ============================================================================
// Extended Batch S-map Builder
// ============================================================================

/// Builder for batch S-map processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSmapBuilder<T: Float> {
    /// Base builder from the smap crate
    pub base: BatchSmapBuilder<T>,
}

impl<T: Float> Default for ParallelBatchSmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelBatchSmapBuilder<T> {
    /// Create a new batch S-map builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the smap `BatchSmapBuilder`
    /// * parallel: true (fastSmap extension)
    fn new() -> Self {
        let base = BatchSmapBuilder::default().parallel(true); // Default to parallel in fastSmap
        Self { base }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the embedding dimension E.
    pub fn embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.base = self.base.embedding_dim(embedding_dim);
        self
    }

    /// Set the lag tau between embedding coordinates.
    pub fn lag(mut self, lag: usize) -> Self {
        self.base = self.base.lag(lag);
        self
    }

    /// Set the prediction horizon Tp.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.base = self.base.horizon(horizon);
        self
    }

    /// Set the kernel nonlinearity parameter theta.
    pub fn theta(mut self, theta: T) -> Self {
        self.base = self.base.theta(theta);
        self
    }

    /// Set the policy for temporally coincident library rows.
    pub fn self_matches(mut self, policy: SelfMatchPolicy) -> Self {
        self.base = self.base.self_matches(policy);
        self
    }

    /// Enable computing forecast skill in the result.
    pub fn return_skill(mut self, enabled: bool) -> Self {
        self.base = self.base.return_skill(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<ParallelBatchSmap<T>, SmapError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        // This reuses the validation logic centralized in the smap crate
        let _ = self.base.clone().build()?;

        Ok(ParallelBatchSmap { config: self })
    }
}

// ============================================================================
// Extended Batch S-map Processor
// ============================================================================

/// Batch S-map processor with parallel support.
pub struct ParallelBatchSmap<T: Float> {
    config: ParallelBatchSmapBuilder<T>,
}

impl<T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync + 'static> ParallelBatchSmap<T> {
    /// Predict every target state from the library manifold.
    pub fn predict<I1, I2>(self, library: &I1, target: &I2) -> Result<SmapResult<T>, SmapError>
    where
        I1: SmapInput<T> + ?Sized,
        I2: SmapInput<T> + ?Sized,
    {
        let library_slice = library.as_smap_slice()?;
        let target_slice = target.as_smap_slice()?;

        // Configure the base builder with the parallel callback if enabled
        let mut builder = self.config.base;

        #[cfg(feature = "cpu")]
        {
            if builder.parallel.unwrap_or(true) {
                builder = builder.custom_predict_pass(predict_pass_parallel);
            } else {
                builder.custom_predict_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if the cpu feature is disabled
            builder.custom_predict_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;
        processor.predict(library_slice, target_slice)
    }
}
