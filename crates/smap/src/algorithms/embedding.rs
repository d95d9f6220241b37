//! Delay-coordinate embedding of scalar time series.
//!
//! ## Purpose
//!
//! This module reconstructs phase-space state vectors from a scalar series
//! using lagged coordinates (Takens' theorem). Row *i* of the resulting
//! matrix is the state at time `i + (E-1)*tau`:
//!
//! ```text
//! [ s[t], s[t - tau], ..., s[t - (E-1)*tau] ]
//! ```
//!
//! Times earlier than `(E-1)*tau` would require negative indices and are
//! excluded, so the matrix has `len(series) - (E-1)*tau` rows.
//!
//! ## Design notes
//!
//! * **Flat storage**: Row-major flat buffer; `row(i)` returns a slice view.
//! * **Pure**: `embed` is a pure function of its inputs; the matrix owns its
//!   data and never aliases the source series.
//! * **Pre-validated**: Parameter constraints (`E >= 1`, `tau >= 1`, series
//!   long enough) are enforced by the engine validator before this module
//!   runs; violations here are programming errors.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Embedding Matrix
// ============================================================================

/// A matrix of lagged-coordinate state vectors derived from one series.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingMatrix<T> {
    /// Row-major flat buffer, `rows * dim` elements.
    data: Vec<T>,

    /// Number of state vectors.
    rows: usize,

    /// Embedding dimension E (coordinates per state vector).
    dim: usize,

    /// Time index of row 0 in the source series, `(E-1)*tau`.
    offset: usize,
}

impl<T: Float> EmbeddingMatrix<T> {
    /// Number of state vectors.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Embedding dimension E.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Time index of row 0 in the source series.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Slice view of row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        debug_assert!(i < self.rows);
        &self.data[i * self.dim..(i + 1) * self.dim]
    }
}

// ============================================================================
// Embedding
// ============================================================================

/// Build the delay-coordinate embedding of `series` with dimension
/// `embedding_dim` and lag `lag`.
pub fn embed<T: Float>(series: &[T], embedding_dim: usize, lag: usize) -> EmbeddingMatrix<T> {
    debug_assert!(embedding_dim >= 1);
    debug_assert!(lag >= 1);

    let offset = (embedding_dim - 1) * lag;
    debug_assert!(series.len() > offset);

    let rows = series.len() - offset;
    let mut data = Vec::with_capacity(rows * embedding_dim);

    for i in 0..rows {
        let t = i + offset;
        for e in 0..embedding_dim {
            data.push(series[t - e * lag]);
        }
    }

    EmbeddingMatrix {
        data,
        rows,
        dim: embedding_dim,
        offset,
    }
}
