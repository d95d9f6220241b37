//! Input abstractions for S-map prediction.
//!
//! ## Purpose
//!
//! This module provides a unified abstraction for S-map series inputs,
//! allowing the `predict` and `evaluate` methods to process multiple data
//! formats (slices, vectors, ndarray) through a single interface.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Provides direct slice access to underlying data buffers.
//! * **Interoperability**: Bridges standard Rust collections with specialized numerical libraries.
//! * **Fail-fast validation**: Ensures memory continuity for multi-dimensional types before processing.
//!
//! ## Key concepts
//!
//! * **SmapInput Trait**: The core abstraction that requires types to provide a contiguous slice view.
//! * **Memory Continuity**: Essential for efficient embedding and distance passes.
//!
//! ## Invariants
//!
//! * Returned slices must represent all elements in the input container.
//! * Inputs must be contiguous in memory; non-contiguous inputs return an error.
//!
//! ## Non-goals
//!
//! * This module does not perform data cleaning or imputation.
//! * This module does not handle data reshaping or dimensionality reduction.

// External dependencies
use ndarray::{ArrayBase, Data, Ix1};
use num_traits::Float;

// Export dependencies from smap crate
use smap::internals::primitives::errors::SmapError;

/// Trait for types that can be used as a time series input.
pub trait SmapInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_smap_slice(&self) -> Result<&[T], SmapError>;
}

impl<T: Float> SmapInput<T> for [T] {
    fn as_smap_slice(&self) -> Result<&[T], SmapError> {
        Ok(self)
    }
}

impl<T: Float> SmapInput<T> for Vec<T> {
    fn as_smap_slice(&self) -> Result<&[T], SmapError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, S> SmapInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_smap_slice(&self) -> Result<&[T], SmapError> {
        self.as_slice().ok_or_else(|| {
            SmapError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
