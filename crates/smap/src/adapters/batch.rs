//! Batch adapter for standard S-map prediction.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter for S-map prediction.
//! It runs one complete prediction pass over in-memory library and target
//! series at a single theta value.
//!
//! ## Design notes
//!
//! * **Processing**: Embeds both series and predicts every target row in a
//!   single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//! * **Alignment**: Output row `i` forecasts target time `(E-1)*tau + i + Tp`.
//! * **Gap sentinel**: Rows with no usable neighbor come back as `NaN`.
//!
//! ## Invariants
//!
//! * All input values must be finite.
//! * The library must be long enough to yield at least one row with a
//!   defined Tp-ahead continuation.
//! * The target must be long enough to yield at least one embedding row.
//!
//! ## Non-goals
//!
//! * This adapter does not evaluate theta grids (use the sweep adapter).
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
use crate::engine::executor::{PredictPassFn, SmapConfig, SmapExecutor};
use crate::engine::output::SmapResult;
use crate::engine::validator::Validator;
use crate::math::distance::DistanceAccum;
use crate::primitives::errors::SmapError;

// ============================================================================
// Batch S-map Builder
// ============================================================================

/// Builder for batch S-map processor.
#[derive(Debug, Clone)]
pub struct BatchSmapBuilder<T: Float> {
    /// Embedding dimension E
    pub embedding_dim: usize,

    /// Lag tau between embedding coordinates
    pub lag: usize,

    /// Prediction horizon Tp
    pub horizon: usize,

    /// Kernel nonlinearity parameter theta
    pub theta: T,

    /// Policy for temporally coincident rows when library == target
    pub self_match: SelfMatchPolicy,

    /// Whether to compute forecast skill against known continuations
    pub return_skill: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SmapError>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom prediction pass function.
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for BatchSmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> BatchSmapBuilder<T> {
    /// Create a new batch S-map builder with default parameters.
    fn new() -> Self {
        Self {
            embedding_dim: 2,
            lag: 1,
            horizon: 1,
            theta: T::zero(),
            self_match: SelfMatchPolicy::default(),
            return_skill: false,
            deferred_error: None,
            custom_predict_pass: None,
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

    /// Set the kernel nonlinearity parameter theta.
    pub fn theta(mut self, theta: T) -> Self {
        self.theta = theta;
        self
    }

    /// Set the policy for temporally coincident library rows.
    pub fn self_matches(mut self, policy: SelfMatchPolicy) -> Self {
        self.self_match = policy;
        self
    }

    /// Enable computing forecast skill in the result.
    pub fn return_skill(mut self, enabled: bool) -> Self {
        self.return_skill = enabled;
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

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch processor.
    pub fn build(self) -> Result<BatchSmap<T>, SmapError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Validator::validate_embedding_dim(self.embedding_dim)?;
        Validator::validate_lag(self.lag)?;
        Validator::validate_horizon(self.horizon)?;
        Validator::validate_theta(self.theta)?;

        Ok(BatchSmap { config: self })
    }
}

// ============================================================================
// Batch S-map Processor
// ============================================================================

/// Batch S-map processor.
pub struct BatchSmap<T: Float> {
    config: BatchSmapBuilder<T>,
}

impl<T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync + 'static> BatchSmap<T> {
    /// Predict every target state from the library manifold.
    pub fn predict(self, library: &[T], target: &[T]) -> Result<SmapResult<T>, SmapError> {
        Validator::validate_series(library, "library")?;
        Validator::validate_series(target, "target")?;
        Validator::validate_library_len(
            library.len(),
            self.config.embedding_dim,
            self.config.lag,
            self.config.horizon,
        )?;
        Validator::validate_target_len(target.len(), self.config.embedding_dim, self.config.lag)?;

        let config = SmapConfig {
            embedding_dim: self.config.embedding_dim,
            lag: self.config.lag,
            horizon: self.config.horizon,
            theta: self.config.theta,
            self_match: self.config.self_match,
            return_skill: self.config.return_skill,
            custom_predict_pass: self.config.custom_predict_pass,
        };

        let output = SmapExecutor::run_with_config(library, target, config);

        Ok(SmapResult {
            predictions: output.predictions,
            embedding_dim: self.config.embedding_dim,
            lag: self.config.lag,
            horizon: self.config.horizon,
            theta: self.config.theta,
            skill: output.skill,
        })
    }

    /// Predict and return only the prediction sequence.
    pub fn predict_values(self, library: &[T], target: &[T]) -> Result<Vec<T>, SmapError> {
        self.predict(library, target).map(|r| r.predictions)
    }
}
