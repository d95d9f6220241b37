//! Theta-grid skill evaluation.
//!
//! ## Purpose
//!
//! This module evaluates S-map forecast skill across a grid of theta
//! values. The resulting skill-versus-theta profile is the standard
//! diagnostic for state-dependent (nonlinear) dynamics: skill that improves
//! as theta leaves zero indicates that local linear maps outperform the
//! single global one.
//!
//! ## Design notes
//!
//! * Grid points are independent of each other; the sequential pass here can
//!   be replaced wholesale through the `SweepPassFn` hook (the fastSmap
//!   crate injects a rayon-parallel version).
//! * Results are returned in grid order regardless of evaluation order.
//! * Embeddings are rebuilt per grid point; they are cheap next to the
//!   per-query solves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::solver::FloatLinalg;
use crate::engine::executor::{SmapConfig, SmapExecutor};
use crate::evaluation::skill::ForecastSkill;
use crate::math::distance::DistanceAccum;

// ============================================================================
// Type Definitions
// ============================================================================

/// Signature for a custom theta-sweep pass function.
///
/// Arguments: library series, target series, base configuration (theta and
/// `return_skill` are overridden per grid point), and the theta grid.
#[doc(hidden)]
pub type SweepPassFn<T> = fn(
    &[T],           // library series
    &[T],           // target series
    &SmapConfig<T>, // base configuration
    &[T],           // theta grid
) -> Vec<ThetaSkill<T>>;

// ============================================================================
// Theta Skill
// ============================================================================

/// Forecast skill at one theta grid point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaSkill<T> {
    /// Kernel nonlinearity parameter evaluated.
    pub theta: T,

    /// Skill of the resulting prediction sequence.
    pub skill: ForecastSkill<T>,
}

// ============================================================================
// Sequential Sweep
// ============================================================================

/// Evaluate `base` at every theta in `thetas`, sequentially.
///
/// Inputs are assumed validated by the adapter. The `theta` and
/// `return_skill` fields of `base` are overridden per grid point.
pub fn sweep_sequential<T>(
    library: &[T],
    target: &[T],
    base: &SmapConfig<T>,
    thetas: &[T],
) -> Vec<ThetaSkill<T>>
where
    T: Float + DistanceAccum + FloatLinalg + Debug,
{
    thetas
        .iter()
        .map(|&theta| {
            let mut config = base.clone();
            config.theta = theta;
            config.return_skill = true;

            let output = SmapExecutor::run_with_config(library, target, config);
            ThetaSkill {
                theta,
                skill: output.skill.unwrap_or_else(ForecastSkill::undefined),
            }
        })
        .collect()
}
