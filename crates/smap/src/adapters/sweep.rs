//! Sweep adapter for theta-grid skill evaluation.
//!
//! ## Purpose
//!
//! This module provides the sweep execution adapter. It predicts the target
//! series once per theta grid point and returns the skill profile, the
//! standard diagnostic for state-dependent dynamics.
//!
//! ## Design notes
//!
//! * **Delegation**: Each grid point is one full batch prediction, delegated
//!   to the evaluation layer's sweep pass.
//! * **Ordering**: Results come back in grid order.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Nonlinearity test**: Skill rising with theta indicates local linear
//!   maps beat the single global one.
//!
//! ## Invariants
//!
//! * The theta grid must be non-empty and every theta finite and
//!   non-negative.
//! * Series length requirements match the batch adapter's.
//!
//! ## Non-goals
//!
//! * This adapter does not pick a "best" theta; callers inspect the profile.
//! * This adapter does not handle missing values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::neighbors::SelfMatchPolicy;
use crate::algorithms::solver::FloatLinalg;
use crate::engine::executor::{PredictPassFn, SmapConfig};
use crate::engine::validator::Validator;
use crate::evaluation::sweep::{sweep_sequential, SweepPassFn, ThetaSkill};
use crate::math::distance::DistanceAccum;
use crate::primitives::errors::SmapError;

// ============================================================================
// Sweep S-map Builder
// ============================================================================

/// Builder for theta-sweep S-map processor.
#[derive(Debug, Clone)]
pub struct SweepSmapBuilder<T: Float> {
    /// Embedding dimension E
    pub embedding_dim: usize,

    /// Lag tau between embedding coordinates
    pub lag: usize,

    /// Prediction horizon Tp
    pub horizon: usize,

    /// Theta grid to evaluate
    pub thetas: Vec<T>,

    /// Policy for temporally coincident rows when library == target
    pub self_match: SelfMatchPolicy,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SmapError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom prediction pass function (used within each grid point).
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,

    /// Custom sweep pass function (replaces the grid loop).
    #[doc(hidden)]
    pub custom_sweep_pass: Option<SweepPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SweepSmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SweepSmapBuilder<T> {
    /// Create a new sweep builder with default parameters.
    fn new() -> Self {
        Self {
            embedding_dim: 2,
            lag: 1,
            horizon: 1,
            thetas: Vec::new(),
            self_match: SelfMatchPolicy::default(),
            deferred_error: None,
            custom_predict_pass: None,
            custom_sweep_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the embedding dimension E.
    pub fn embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Set the lag tau between embedding coordinates.
    pub fn lag(mut self, lag: usize) -> Self {
        self.lag = lag;
        self
    }

    /// Set the prediction horizon Tp.
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the theta grid to evaluate.
    pub fn thetas(mut self, thetas: Vec<T>) -> Self {
        self.thetas = thetas;
        self
    }

    /// Set the policy for temporally coincident library rows.
    pub fn self_matches(mut self, policy: SelfMatchPolicy) -> Self {
        self.self_match = policy;
        self
    }

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Set a custom prediction pass function.
    #[doc(hidden)]
    pub fn custom_predict_pass(mut self, pass: PredictPassFn<T>) -> Self {
        self.custom_predict_pass = Some(pass);
        self
    }

    /// Set a custom sweep pass function.
    #[doc(hidden)]
    pub fn custom_sweep_pass(mut self, pass: SweepPassFn<T>) -> Self {
        self.custom_sweep_pass = Some(pass);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the sweep processor.
    pub fn build(self) -> Result<SweepSmap<T>, SmapError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_embedding_dim(self.embedding_dim)?;
        Validator::validate_lag(self.lag)?;
        Validator::validate_horizon(self.horizon)?;
        Validator::validate_thetas(&self.thetas)?;

        Ok(SweepSmap { config: self })
    }
}

// ============================================================================
// Sweep S-map Processor
// ============================================================================

/// Theta-sweep S-map processor.
pub struct SweepSmap<T: Float> {
    config: SweepSmapBuilder<T>,
}

impl<T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync + 'static> SweepSmap<T> {
    /// Evaluate forecast skill at every theta in the grid.
    pub fn evaluate(self, library: &[T], target: &[T]) -> Result<Vec<ThetaSkill<T>>, SmapError> {
        Validator::validate_series(library, "library")?;
        Validator::validate_series(target, "target")?;
        Validator::validate_library_len(
            library.len(),
            self.config.embedding_dim,
            self.config.lag,
            self.config.horizon,
        )?;
        Validator::validate_target_len(target.len(), self.config.embedding_dim, self.config.lag)?;

        let base = SmapConfig {
            embedding_dim: self.config.embedding_dim,
            lag: self.config.lag,
            horizon: self.config.horizon,
            theta: T::zero(),
            self_match: self.config.self_match,
            return_skill: true,
            custom_predict_pass: self.config.custom_predict_pass,
        };

        let pass = self.config.custom_sweep_pass.unwrap_or(sweep_sequential);
        Ok(pass(library, target, &base, &self.config.thetas))
    }
}
