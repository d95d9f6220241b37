//! Sweep adapter for theta-grid skill evaluation with parallel support.
//!
//! ## Purpose
//!
//! This module provides the sweep execution adapter. It predicts the target
//! series once per theta grid point, with the grid points distributed across
//! CPU cores.
//!
//! ## Design notes
//!
//! * **Delegation**: Delegates validation and orchestration to the `smap` crate.
//! * **Granularity**: Parallelism is across grid points; within each point
//!   the prediction pass runs sequentially.
//!
//! ## Invariants
//!
//! * Parallel and sequential sweeps produce identical output for identical input.
//!
//! ## Non-goals
//!
//! * This adapter does not pick a "best" theta; callers inspect the profile.
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::evaluation::sweep::sweep_pass_parallel;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;

// Export dependencies from smap crate
use smap::internals::adapters::sweep::SweepSmapBuilder;
use smap::internals::algorithms::neighbors::SelfMatchPolicy;
use smap::internals::algorithms::solver::FloatLinalg;
use smap::internals::evaluation::sweep::ThetaSkill;
use smap::internals::math::distance::DistanceAccum;
use smap::internals::primitives::errors::SmapError;

// Internal dependencies
use crate::input::SmapInput;

// ============================================================================
// Extended Sweep S-map Builder
// ============================================================================

/// Builder for theta-sweep S-map processor with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelSweepSmapBuilder<T: Float> {
    /// Base builder from the smap crate
    pub base: SweepSmapBuilder<T>,
}

impl<T: Float> Default for ParallelSweepSmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ParallelSweepSmapBuilder<T> {
    /// Create a new sweep builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the smap `SweepSmapBuilder`
    /// * parallel: true (fastSmap extension)
    fn new() -> Self {
        let base = SweepSmapBuilder::default().parallel(true); // Default to parallel in fastSmap
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

    /// Set the theta grid to evaluate.
    pub fn thetas(mut self, thetas: Vec<T>) -> Self {
        self.base = self.base.thetas(thetas);
        self
    }

    /// Set the policy for temporally coincident library rows.
    pub fn self_matches(mut self, policy: SelfMatchPolicy) -> Self {
        self.base = self.base.self_matches(policy);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sweep processor.
    pub fn build(self) -> Result<ParallelSweepSmap<T>, SmapError> {
        // Check for deferred errors from adapter conversion
        if let Some(ref err) = self.base.deferred_error {
            return Err(err.clone());
        }

        // Validate by attempting to build the base processor
        // This reuses the validation logic centralized in the smap crate
        let _ = self.base.clone().build()?;

        Ok(ParallelSweepSmap { config: self })
    }
}

// ============================================================================
// Extended Sweep S-map Processor
// ============================================================================

/// Theta-sweep S-map processor with parallel support.
pub struct ParallelSweepSmap<T: Float> {
    config: ParallelSweepSmapBuilder<T>,
}

impl<T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync + 'static> ParallelSweepSmap<T> {
    /// Evaluate forecast skill at every theta in the grid.
    pub fn evaluate<I1, I2>(self, library: &I1, target: &I2) -> Result<Vec<ThetaSkill<T>>, SmapError>
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
                builder = builder.custom_sweep_pass(sweep_pass_parallel);
            } else {
                builder.custom_sweep_pass = None;
            }
        }
        #[cfg(not(feature = "cpu"))]
        {
            // Fallback to sequential if the cpu feature is disabled
            builder.custom_sweep_pass = None;
        }

        // Delegate execution to the base implementation
        let processor = builder.build()?;
        processor.evaluate(library_slice, target_slice)
    }
}
