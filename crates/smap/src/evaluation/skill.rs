//! Forecast skill metrics.
//!
//! ## Purpose
//!
//! This module measures how well a prediction sequence tracks the observed
//! continuations of the target series. The headline metric is the Pearson
//! correlation rho, the conventional skill score in empirical dynamic
//! modeling, alongside RMSE and MAE.
//!
//! ## Design notes
//!
//! * **Gap-aware**: Prediction rows holding the `NaN` gap sentinel are
//!   skipped, not treated as zeros; `n` reports how many pairs were scored.
//! * **Streaming**: One pass over the pairs via [`CorrcoefState`].
//! * **Degeneracy**: Fewer than two scored pairs, or zero variance, yields
//!   `NaN` rho rather than an error.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::CorrcoefState;

// ============================================================================
// Forecast Skill
// ============================================================================

/// Skill metrics for one prediction sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastSkill<T> {
    /// Pearson correlation between predictions and observations.
    pub rho: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Number of (prediction, observation) pairs scored.
    pub n: usize,
}

impl<T: Float> ForecastSkill<T> {
    /// Skill with no scored pairs; all metrics are `NaN`.
    pub fn undefined() -> Self {
        Self {
            rho: T::nan(),
            rmse: T::nan(),
            mae: T::nan(),
            n: 0,
        }
    }

    /// Score `predicted` against `observed`, pairing by index and skipping
    /// non-finite predictions (gap rows).
    pub fn compute(predicted: &[T], observed: &[T]) -> Self {
        debug_assert_eq!(predicted.len(), observed.len());

        let mut state = CorrcoefState::new();
        let mut sum_sq = T::zero();
        let mut sum_abs = T::zero();
        let mut n = 0usize;

        for (&p, &o) in predicted.iter().zip(observed.iter()) {
            if !p.is_finite() {
                continue;
            }
            let err = p - o;
            state.add(p, o);
            sum_sq = sum_sq + err * err;
            sum_abs = sum_abs + err.abs();
            n += 1;
        }

        if n == 0 {
            return Self::undefined();
        }

        let n_t = T::from(n).unwrap_or(T::one());
        Self {
            rho: state.rho(),
            rmse: (sum_sq / n_t).sqrt(),
            mae: sum_abs / n_t,
            n,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for ForecastSkill<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Forecast Skill:")?;
        writeln!(f, "  rho:  {}", self.rho)?;
        writeln!(f, "  RMSE: {}", self.rmse)?;
        writeln!(f, "  MAE:  {}", self.mae)?;
        writeln!(f, "  n:    {}", self.n)
    }
}
