//! Input validation for S-map configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for S-map parameters and input
//! series. It checks requirements such as parameter bounds, finite values,
//! and minimum series lengths for the requested embedding.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered, before
//!   any computation; a failed call produces no partial output.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: `E >= 1`, `tau >= 1`, `Tp >= 1`, `theta >= 0`.
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf), which
//!   also keeps the `NaN` gap sentinel unambiguous in outputs.
//! * **Length Requirements**: The library must support at least one
//!   embedded row with a Tp-ahead continuation; the target at least one
//!   embedded row.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the embedding or prediction itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmapError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for S-map configuration and input data.
///
/// Provides static methods for validating parameters and input series. All
/// methods return `Result<(), SmapError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate one input series: non-empty and all values finite.
    pub fn validate_series<T: Float>(series: &[T], name: &'static str) -> Result<(), SmapError> {
        if series.is_empty() {
            return Err(SmapError::EmptyInput);
        }

        for (i, &v) in series.iter().enumerate() {
            if !v.is_finite() {
                return Err(SmapError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the embedding dimension E.
    pub fn validate_embedding_dim(embedding_dim: usize) -> Result<(), SmapError> {
        if embedding_dim < 1 {
            return Err(SmapError::InvalidEmbeddingDim(embedding_dim));
        }
        Ok(())
    }

    /// Validate the lag tau.
    pub fn validate_lag(lag: usize) -> Result<(), SmapError> {
        if lag < 1 {
            return Err(SmapError::InvalidLag(lag));
        }
        Ok(())
    }

    /// Validate the prediction horizon Tp.
    ///
    /// # Notes
    ///
    /// * `Tp = 0` (and negative horizons in general) have no defined
    ///   semantics here and are rejected rather than guessed at.
    pub fn validate_horizon(horizon: usize) -> Result<(), SmapError> {
        if horizon < 1 {
            return Err(SmapError::InvalidHorizon(horizon));
        }
        Ok(())
    }

    /// Validate the kernel nonlinearity parameter theta.
    pub fn validate_theta<T: Float>(theta: T) -> Result<(), SmapError> {
        if !theta.is_finite() || theta < T::zero() {
            return Err(SmapError::InvalidTheta(theta.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a theta grid for sweep evaluation.
    pub fn validate_thetas<T: Float>(thetas: &[T]) -> Result<(), SmapError> {
        if thetas.is_empty() {
            return Err(SmapError::InvalidInput("theta grid is empty".into()));
        }

        for &theta in thetas {
            Self::validate_theta(theta)?;
        }

        Ok(())
    }

    // ========================================================================
    // Length Requirements
    // ========================================================================

    /// Validate that the library can supply at least one embedded row with
    /// a defined Tp-ahead continuation.
    pub fn validate_library_len(
        len: usize,
        embedding_dim: usize,
        lag: usize,
        horizon: usize,
    ) -> Result<(), SmapError> {
        let min = (embedding_dim - 1) * lag + horizon + 1;
        if len < min {
            return Err(SmapError::SeriesTooShort {
                which: "library",
                got: len,
                min,
            });
        }
        Ok(())
    }

    /// Validate that the target can supply at least one embedded row.
    pub fn validate_target_len(
        len: usize,
        embedding_dim: usize,
        lag: usize,
    ) -> Result<(), SmapError> {
        let min = (embedding_dim - 1) * lag + 1;
        if len < min {
            return Err(SmapError::SeriesTooShort {
                which: "target",
                got: len,
                min,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SmapError> {
        if let Some(parameter) = duplicate_param {
            return Err(SmapError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
