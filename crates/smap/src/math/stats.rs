//! Streaming statistics for forecast evaluation.
//!
//! ## Purpose
//!
//! This module provides a single-pass accumulator for the Pearson
//! correlation coefficient between predicted and observed values, plus the
//! arithmetic mean used by the weight kernel.
//!
//! ## Design notes
//!
//! * **Streaming**: `CorrcoefState` folds one pair at a time; no second pass
//!   over the data is needed.
//! * **Degeneracy**: Zero variance in either sequence yields `NaN` rather
//!   than a division error.

// External dependencies
use num_traits::Float;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of a slice. Returns zero for an empty slice.
#[inline]
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }

    let sum = values.iter().copied().fold(T::zero(), |acc, v| acc + v);
    sum / T::from(values.len()).unwrap_or(T::one())
}

// ============================================================================
// Pearson Correlation
// ============================================================================

/// Cumulative state for computing a Pearson correlation in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrcoefState<T> {
    /// Number of pairs folded so far.
    pub n: usize,
    /// Sum of first-sequence values.
    pub sum_a: T,
    /// Sum of second-sequence values.
    pub sum_b: T,
    /// Sum of squared first-sequence values.
    pub sum_aa: T,
    /// Sum of squared second-sequence values.
    pub sum_bb: T,
    /// Sum of cross products.
    pub sum_ab: T,
}

impl<T: Float> Default for CorrcoefState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> CorrcoefState<T> {
    /// Create a new, empty state.
    pub fn new() -> Self {
        Self {
            n: 0,
            sum_a: T::zero(),
            sum_b: T::zero(),
            sum_aa: T::zero(),
            sum_bb: T::zero(),
            sum_ab: T::zero(),
        }
    }

    /// Fold one (a, b) pair into the state.
    #[inline]
    pub fn add(&mut self, a: T, b: T) {
        self.n += 1;
        self.sum_a = self.sum_a + a;
        self.sum_b = self.sum_b + b;
        self.sum_aa = self.sum_aa + a * a;
        self.sum_bb = self.sum_bb + b * b;
        self.sum_ab = self.sum_ab + a * b;
    }

    /// Finalize the Pearson correlation coefficient.
    ///
    /// Returns `NaN` when fewer than two pairs were folded or when either
    /// sequence has zero variance.
    pub fn rho(&self) -> T {
        if self.n < 2 {
            return T::nan();
        }

        let n_t = T::from(self.n).unwrap_or(T::one());
        let cov = n_t * self.sum_ab - self.sum_a * self.sum_b;
        let var_a = n_t * self.sum_aa - self.sum_a * self.sum_a;
        let var_b = n_t * self.sum_bb - self.sum_b * self.sum_b;

        let denom_sq = var_a * var_b;
        if denom_sq <= T::zero() {
            return T::nan();
        }

        cov / denom_sq.sqrt()
    }
}
