//! Parallel theta-grid skill evaluation.
//!
//! ## Purpose
//!
//! This module provides the parallel sweep pass that is injected into the
//! `smap` crate's sweep adapter. Each theta grid point is an independent
//! prediction-and-scoring run, so the grid is distributed across CPU cores.
//!
//! ## Design notes
//!
//! * **Granularity**: Parallelism is across grid points; each grid point
//!   runs its prediction pass sequentially. For long grids this saturates
//!   the cores without nested parallelism overhead.
//! * **Ordering**: Results come back in grid order regardless of which
//!   thread finished first.
//!
//! ## Non-goals
//!
//! * This module does not validate the grid (handled by the `smap` validator).
//! * This module does not pick a "best" theta; callers inspect the profile.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Export dependencies from smap crate
use smap::internals::algorithms::solver::FloatLinalg;
use smap::internals::engine::executor::{SmapConfig, SmapExecutor};
use smap::internals::evaluation::skill::ForecastSkill;
use smap::internals::evaluation::sweep::ThetaSkill;
use smap::internals::math::distance::DistanceAccum;

// ============================================================================
// Parallel Sweep Pass
// ============================================================================

/// Evaluate `base` at every theta in `thetas`, grid points in parallel.
#[cfg(feature = "cpu")]
pub fn sweep_pass_parallel<T>(
    library: &[T],
    target: &[T],
    base: &SmapConfig<T>,
    thetas: &[T],
) -> Vec<ThetaSkill<T>>
where
    T: Float + DistanceAccum + FloatLinalg + Debug + Send + Sync,
{
    thetas
        .par_iter()
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
