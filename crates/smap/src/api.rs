//! High-level API for S-map prediction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for S-map
//! forecasting. It implements a fluent builder pattern for configuring
//! embedding and kernel parameters and choosing an execution adapter
//! (Batch or Sweep).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch (single theta) and Sweep (theta grid).
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmapBuilder`] via `Smap::new()`.
//! 2. Chain configuration methods (`.embedding_dim()`, `.theta()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::adapters::batch::BatchSmapBuilder;
use crate::adapters::sweep::SweepSmapBuilder;
use crate::algorithms::solver::FloatLinalg;
use crate::engine::executor::PredictPassFn;
use crate::evaluation::sweep::SweepPassFn;
use crate::math::distance::DistanceAccum;

// Publicly re-exported types
pub use crate::algorithms::neighbors::SelfMatchPolicy;
pub use crate::engine::output::SmapResult;
pub use crate::evaluation::skill::ForecastSkill;
pub use crate::evaluation::sweep::ThetaSkill;
pub use crate::primitives::errors::SmapError;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Sweep};
}

/// Fluent builder for configuring S-map parameters and execution modes.
#[derive(Debug, Clone)]
pub struct SmapBuilder<T> {
    /// Embedding dimension E (lagged coordinates per state vector).
    pub embedding_dim: Option<usize>,

    /// Lag tau between successive embedding coordinates.
    pub lag: Option<usize>,

    /// Prediction horizon Tp (steps ahead).
    pub horizon: Option<usize>,

    /// Kernel nonlinearity parameter theta (Batch only).
    pub theta: Option<T>,

    /// Theta grid to evaluate (Sweep only).
    pub thetas: Option<Vec<T>>,

    /// Policy for temporally coincident rows when library == target.
    pub self_match: Option<SelfMatchPolicy>,

    /// Include forecast skill in the result (Batch only).
    pub return_skill: Option<bool>,

    // ======================================
    // DEV
    // ======================================
    /// Custom prediction pass function.
    #[doc(hidden)]
    pub custom_predict_pass: Option<PredictPassFn<T>>,

    /// Custom sweep pass function.
    #[doc(hidden)]
    pub custom_sweep_pass: Option<SweepPassFn<T>>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for SmapBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SmapBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SmapAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            embedding_dim: None,
            lag: None,
            horizon: None,
            theta: None,
            thetas: None,
            self_match: None,
            return_skill: None,
            custom_predict_pass: None,
            custom_sweep_pass: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the embedding dimension E.
    pub fn embedding_dim(mut self, embedding_dim: usize) -> Self {
        if self.embedding_dim.is_some() {
            self.duplicate_param = Some("embedding_dim");
        }
        self.embedding_dim = Some(embedding_dim);
        self
    }

    /// Set the lag tau between embedding coordinates.
    pub fn lag(mut self, lag: usize) -> Self {
        if self.lag.is_some() {
            self.duplicate_param = Some("lag");
        }
        self.lag = Some(lag);
        self
    }

    /// Set the prediction horizon Tp.
    pub fn horizon(mut self, horizon: usize) -> Self {
        if self.horizon.is_some() {
            self.duplicate_param = Some("horizon");
        }
        self.horizon = Some(horizon);
        self
    }

    /// Set the kernel nonlinearity parameter theta (Batch only).
    pub fn theta(mut self, theta: T) -> Self {
        if self.theta.is_some() {
            self.duplicate_param = Some("theta");
        }
        self.theta = Some(theta);
        self
    }

    /// Set the theta grid to evaluate (Sweep only).
    pub fn thetas(mut self, thetas: Vec<T>) -> Self {
        if self.thetas.is_some() {
            self.duplicate_param = Some("thetas");
        }
        self.thetas = Some(thetas);
        self
    }

    /// Set the policy for temporally coincident library rows.
    pub fn self_matches(mut self, policy: SelfMatchPolicy) -> Self {
        if self.self_match.is_some() {
            self.duplicate_param = Some("self_matches");
        }
        self.self_match = Some(policy);
        self
    }

    /// Include forecast skill in the result (Batch only).
    pub fn return_skill(mut self) -> Self {
        self.return_skill = Some(true);
        self
    }

    // ==========================
    // Development Options
    // ==========================

    /// Set a custom prediction pass function for execution (only for dev)
    #[doc(hidden)]
    pub fn custom_predict_pass(mut self, pass: PredictPassFn<T>) -> Self {
        self.custom_predict_pass = Some(pass);
        self
    }

    /// Set a custom sweep pass function (only for dev)
    #[doc(hidden)]
    pub fn custom_sweep_pass(mut self, pass: SweepPassFn<T>) -> Self {
        self.custom_sweep_pass = Some(pass);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SmapAdapter<T: Float> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SmapBuilder`] into a specialized execution builder.
    fn convert(builder: SmapBuilder<T>) -> Self::Output;
}

/// Marker for in-memory single-theta prediction.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> SmapAdapter<T> for Batch {
    type Output = BatchSmapBuilder<T>;

    fn convert(builder: SmapBuilder<T>) -> Self::Output {
        let mut result = BatchSmapBuilder::default();

        if let Some(embedding_dim) = builder.embedding_dim {
            result.embedding_dim = embedding_dim;
        }
        if let Some(lag) = builder.lag {
            result.lag = lag;
        }
        if let Some(horizon) = builder.horizon {
            result.horizon = horizon;
        }
        if let Some(theta) = builder.theta {
            result.theta = theta;
        }
        if let Some(policy) = builder.self_match {
            result.self_match = policy;
        }
        if let Some(rs) = builder.return_skill {
            result.return_skill = rs;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pp) = builder.custom_predict_pass {
            result.custom_predict_pass = Some(pp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for theta-grid skill evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Sweep;

impl<T: Float> SmapAdapter<T> for Sweep {
    type Output = SweepSmapBuilder<T>;

    fn convert(builder: SmapBuilder<T>) -> Self::Output {
        let mut result = SweepSmapBuilder::default();

        if let Some(embedding_dim) = builder.embedding_dim {
            result.embedding_dim = embedding_dim;
        }
        if let Some(lag) = builder.lag {
            result.lag = lag;
        }
        if let Some(horizon) = builder.horizon {
            result.horizon = horizon;
        }
        if let Some(thetas) = builder.thetas {
            result.thetas = thetas;
        }
        if let Some(policy) = builder.self_match {
            result.self_match = policy;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(pp) = builder.custom_predict_pass {
            result.custom_predict_pass = Some(pp);
        }
        if let Some(sp) = builder.custom_sweep_pass {
            result.custom_sweep_pass = Some(sp);
        }
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

// ============================================================================
// Convenience Function
// ============================================================================

/// One-shot S-map prediction with explicit parameters.
///
/// Embeds `library` and `target` with dimension `embedding_dim` and lag
/// `lag`, then predicts every target state `horizon` steps ahead using the
/// exponential kernel at `theta`. Returns the ordered prediction sequence;
/// rows with no usable neighbor hold `NaN`.
pub fn smap<T>(
    library: &[T],
    target: &[T],
    embedding_dim: usize,
    lag: usize,
    horizon: usize,
    theta: T,
) -> Result<Vec<T>, SmapError>
where
    T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync + 'static,
{
    SmapBuilder::new()
        .embedding_dim(embedding_dim)
        .lag(lag)
        .horizon(horizon)
        .theta(theta)
        .adapter(Batch)
        .build()?
        .predict_values(library, target)
}
