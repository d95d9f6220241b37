//! S-map kernel weighting.
//!
//! ## Purpose
//!
//! This module converts a set of query-to-library distances into regression
//! weights via the exponential S-map kernel:
//!
//! ```text
//! w_i = exp(-theta * d_i / mean(d))
//! ```
//!
//! `theta` governs locality: `theta = 0` weights every neighbor equally
//! (a single global linear map), while large `theta` concentrates weight on
//! the nearest neighbors and approaches nearest-neighbor forecasting.
//!
//! ## Design notes
//!
//! * **Degenerate mean**: When every neighbor coincides with the query in
//!   embedding space the mean distance is zero; the kernel falls back to
//!   uniform weights instead of dividing by zero.
//! * **Scale-free**: Normalizing by the mean distance makes `theta`
//!   comparable across series with different amplitudes.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::mean;

// ============================================================================
// S-map Kernel
// ============================================================================

/// Compute S-map kernel weights for `distances` into `weights`.
///
/// `weights` is cleared and refilled to the same length as `distances`.
pub fn smap_weights<T: Float>(distances: &[T], theta: T, weights: &mut Vec<T>) {
    weights.clear();

    if theta == T::zero() {
        weights.resize(distances.len(), T::one());
        return;
    }

    let mean_d = mean(distances);
    if mean_d <= T::zero() {
        // All neighbors coincide with the query; uniform weights keep the
        // regression well-defined.
        weights.resize(distances.len(), T::one());
        return;
    }

    for &d in distances {
        weights.push((-theta * d / mean_d).exp());
    }
}
