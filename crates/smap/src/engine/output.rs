//! Output types and result structures for S-map prediction.
//!
//! ## Purpose
//!
//! This module defines the `SmapResult` struct which encapsulates the
//! outputs of one S-map call: the ordered prediction sequence, the
//! parameters that produced it, and (optionally) forecast skill.
//!
//! ## Key concepts
//!
//! * **Alignment**: `predictions[i]` forecasts the target value at time
//!   index `(E-1)*tau + i + Tp`.
//! * **Gap sentinel**: rows with no usable library neighbor hold `NaN`.
//! * **Metadata**: the embedding and kernel parameters are echoed back so a
//!   result is self-describing.
//!
//! ## Invariants
//!
//! * `predictions.len() == target.len() - (embedding_dim - 1) * lag`.
//! * Predictions stay in target-row order regardless of execution order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not validate result consistency (responsibility of the engine).
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::evaluation::skill::ForecastSkill;

// ============================================================================
// Result Structure
// ============================================================================

/// Comprehensive S-map output containing predictions and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SmapResult<T> {
    /// Predicted values, one per target embedding row. `predictions[i]`
    /// forecasts the target at time `(embedding_dim - 1) * lag + i + horizon`.
    pub predictions: Vec<T>,

    /// Embedding dimension E used for the fit.
    pub embedding_dim: usize,

    /// Lag tau between embedding coordinates.
    pub lag: usize,

    /// Prediction horizon Tp.
    pub horizon: usize,

    /// Kernel nonlinearity parameter theta.
    pub theta: T,

    /// Forecast skill against known target continuations (if requested).
    pub skill: Option<ForecastSkill<T>>,
}

impl<T: Float> SmapResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Check if forecast skill was computed.
    pub fn has_skill(&self) -> bool {
        self.skill.is_some()
    }

    /// Number of gap rows (predictions holding the `NaN` sentinel).
    pub fn gap_count(&self) -> usize {
        self.predictions.iter().filter(|p| p.is_nan()).count()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmapResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Predictions: {}", self.predictions.len())?;
        writeln!(f, "  Embedding:   E={}, tau={}", self.embedding_dim, self.lag)?;
        writeln!(f, "  Horizon:     {}", self.horizon)?;
        writeln!(f, "  Theta:       {}", self.theta)?;

        let gaps = self.gap_count();
        if gaps > 0 {
            writeln!(f, "  Gaps:        {}", gaps)?;
        }
        writeln!(f)?;

        if let Some(skill) = &self.skill {
            writeln!(f, "{}", skill)?;
        }

        writeln!(f, "Predictions:")?;
        write!(f, "{:>8} {:>12}", "Index", "Predicted")?;
        writeln!(f)?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.predictions.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8} {:>12.6}", idx, self.predictions[idx])?;
        }

        Ok(())
    }
}
