//! Distance computation in embedding space.
//!
//! ## Purpose
//!
//! This module provides squared-Euclidean distance accumulation between
//! embedding rows, with SIMD-optimized paths for `f32`/`f64` and a generic
//! scalar fallback for other `Float` types.
//!
//! ## Design notes
//!
//! * **Squared first**: Callers accumulate squared distances and take a
//!   single square root at the end.
//! * **SIMD**: Uses `wide` lanes (f64x2 / f32x8) with a scalar tail.
//! * **Dispatch**: The [`DistanceAccum`] trait routes `f32`/`f64` to the
//!   specialized kernels without exposing the distinction to callers.

// External dependencies
use num_traits::Float;
use wide::{f32x8, f64x2};

// ============================================================================
// Generic Accumulation
// ============================================================================

/// Scalar squared-Euclidean distance between two equal-length rows.
#[inline]
pub fn sq_dist_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());

    let mut acc = T::zero();
    for i in 0..a.len() {
        let d = a[i] - b[i];
        acc = acc + d * d;
    }
    acc
}

// ============================================================================
// Specialized Accumulation (SIMD)
// ============================================================================

/// SIMD-optimized squared-Euclidean distance (f64).
#[inline]
pub fn sq_dist_simd_f64(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();

    let mut i = 0;
    let mut acc = f64x2::splat(0.0);

    unsafe {
        while i + 2 <= n {
            let av = f64x2::new([*a.get_unchecked(i), *a.get_unchecked(i + 1)]);
            let bv = f64x2::new([*b.get_unchecked(i), *b.get_unchecked(i + 1)]);
            let d = av - bv;
            acc += d * d;
            i += 2;
        }
    }

    let mut total = acc.reduce_add();

    unsafe {
        while i < n {
            let d = *a.get_unchecked(i) - *b.get_unchecked(i);
            total += d * d;
            i += 1;
        }
    }

    total
}

/// SIMD-optimized squared-Euclidean distance (f32).
#[inline]
pub fn sq_dist_simd_f32(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();

    let mut i = 0;
    let mut acc = f32x8::splat(0.0);

    unsafe {
        while i + 8 <= n {
            let av = f32x8::new([
                *a.get_unchecked(i),
                *a.get_unchecked(i + 1),
                *a.get_unchecked(i + 2),
                *a.get_unchecked(i + 3),
                *a.get_unchecked(i + 4),
                *a.get_unchecked(i + 5),
                *a.get_unchecked(i + 6),
                *a.get_unchecked(i + 7),
            ]);
            let bv = f32x8::new([
                *b.get_unchecked(i),
                *b.get_unchecked(i + 1),
                *b.get_unchecked(i + 2),
                *b.get_unchecked(i + 3),
                *b.get_unchecked(i + 4),
                *b.get_unchecked(i + 5),
                *b.get_unchecked(i + 6),
                *b.get_unchecked(i + 7),
            ]);
            let d = av - bv;
            acc += d * d;
            i += 8;
        }
    }

    let mut total = acc.reduce_add();

    unsafe {
        while i < n {
            let d = *a.get_unchecked(i) - *b.get_unchecked(i);
            total += d * d;
            i += 1;
        }
    }

    total
}

// ============================================================================
// Dispatch Trait
// ============================================================================

/// Trait for type-specific squared-distance accumulation.
pub trait DistanceAccum: Float {
    /// Squared Euclidean distance between two equal-length rows.
    #[inline]
    fn sq_dist(a: &[Self], b: &[Self]) -> Self {
        sq_dist_scalar(a, b)
    }
}

impl DistanceAccum for f64 {
    #[inline]
    fn sq_dist(a: &[f64], b: &[f64]) -> f64 {
        sq_dist_simd_f64(a, b)
    }
}

impl DistanceAccum for f32 {
    #[inline]
    fn sq_dist(a: &[f32], b: &[f32]) -> f32 {
        sq_dist_simd_f32(a, b)
    }
}
