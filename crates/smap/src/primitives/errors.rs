//! Error types for S-map operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during S-map
//! forecasting, including input validation, parameter constraints, and
//! builder misuse.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. required lengths).
//! * **Deferred**: Errors are often caught and stored during builder configuration.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty series, non-finite values.
//! 2. **Parameter validation**: Invalid embedding dimension, lag, horizon, or theta.
//! 3. **Length requirements**: Series too short for the requested embedding.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Per-row numerical degeneracies are not errors; they are resolved by
//!   documented fallbacks in the algorithms layer.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for S-map operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmapError {
    /// Input series is empty.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Embedding dimension must be at least 1.
    InvalidEmbeddingDim(usize),

    /// Lag between successive embedding coordinates must be at least 1.
    InvalidLag(usize),

    /// Prediction horizon must be at least 1 step ahead.
    InvalidHorizon(usize),

    /// Series is too short for the requested embedding parameters.
    SeriesTooShort {
        /// Which series failed the check ("library" or "target").
        which: &'static str,
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Theta must be finite and non-negative.
    InvalidTheta(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input series is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidEmbeddingDim(e) => {
                write!(f, "Invalid embedding dimension: {e} (must be >= 1)")
            }
            Self::InvalidLag(tau) => write!(f, "Invalid lag: {tau} (must be >= 1)"),
            Self::InvalidHorizon(tp) => {
                write!(f, "Invalid prediction horizon: {tp} (must be >= 1)")
            }
            Self::SeriesTooShort { which, got, min } => {
                write!(
                    f,
                    "Series '{which}' too short: got {got} points, need at least {min}"
                )
            }
            Self::InvalidTheta(theta) => {
                write!(f, "Invalid theta: {theta} (must be finite and >= 0)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmapError {}
