//! Weighted least-squares solver for per-query S-map fits.
//!
//! ## Purpose
//!
//! This module solves the local regression at the heart of S-map. For one
//! query it builds the augmented design matrix whose rows are
//! `sqrt(w_i) * [1, x_1, ..., x_E]` for each surviving library row, the
//! right-hand side `sqrt(w_i) * y_i` of Tp-ahead continuations, and solves
//! the least-squares system for the coefficient vector. The prediction is
//! `[1, query] . c`.
//!
//! ## Design notes
//!
//! * Uses an SVD-based solve with an epsilon-scaled singular-value cutoff
//!   for numerical robustness against rank-deficient or near-singular
//!   systems (collinear neighbor sets are common in embedded attractors).
//! * Underdetermined systems (fewer neighbors than `E + 1`) yield the
//!   minimum-norm solution, matching pseudo-inverse solvers.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to the
//!   nalgebra backend.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::embedding::EmbeddingMatrix;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the least-squares problem `A c ~= b` for a row-major
    /// `nrows x ncols` design matrix, returning the minimum-norm solution
    /// when the system is rank-deficient or underdetermined.
    fn solve_least_squares(design: &[Self], rhs: &[Self], nrows: usize, ncols: usize)
        -> Option<Vec<Self>>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rhs: &[Self],
        nrows: usize,
        ncols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(design, rhs, nrows, ncols)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rhs: &[Self],
        nrows: usize,
        ncols: usize,
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(design, rhs, nrows, ncols)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve a rectangular least-squares system using f64 precision.
    pub fn solve_least_squares_f64(
        design: &[f64],
        rhs: &[f64],
        nrows: usize,
        ncols: usize,
    ) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_row_slice(nrows, ncols, design);
        let b = DVector::from_column_slice(rhs);

        matrix
            .svd(true, true)
            .solve(&b, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Solve a rectangular least-squares system using f32 precision.
    pub fn solve_least_squares_f32(
        design: &[f32],
        rhs: &[f32],
        nrows: usize,
        ncols: usize,
    ) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_row_slice(nrows, ncols, design);
        let b = DVector::from_column_slice(rhs);

        matrix
            .svd(true, true)
            .solve(&b, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }
}

// ============================================================================
// Fit and Predict
// ============================================================================

/// Fit the weighted local linear map and evaluate it at `query`.
///
/// `neighbors` indexes library embedding rows, `continuations[i]` is the
/// Tp-ahead value of library row `i`, and `weights[k]` belongs to
/// `neighbors[k]`. Returns `None` when the candidate set is empty or the
/// solve fails; callers surface that as a per-row gap.
pub fn fit_and_predict<T>(
    library: &EmbeddingMatrix<T>,
    neighbors: &[usize],
    continuations: &[T],
    weights: &[T],
    query: &[T],
) -> Option<T>
where
    T: FloatLinalg,
{
    let n = neighbors.len();
    if n == 0 {
        return None;
    }

    debug_assert_eq!(weights.len(), n);
    debug_assert_eq!(query.len(), library.dim());

    let ncols = library.dim() + 1;
    let mut design = Vec::with_capacity(n * ncols);
    let mut rhs = Vec::with_capacity(n);

    for (k, &row) in neighbors.iter().enumerate() {
        let sw = weights[k].sqrt();
        design.push(sw);
        for &coord in library.row(row) {
            design.push(sw * coord);
        }
        rhs.push(sw * continuations[row]);
    }

    let coeffs = T::solve_least_squares(&design, &rhs, n, ncols)?;

    let mut prediction = coeffs[0];
    for (e, &coord) in query.iter().enumerate() {
        prediction = prediction + coeffs[e + 1] * coord;
    }

    Some(prediction)
}
