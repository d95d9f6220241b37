//! High-level API for S-map prediction with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for S-map with
//! multi-threaded execution. It extends the `smap` API with adapters that
//! distribute the independent per-query fits across all CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `smap` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution where beneficial.
//! * **Transparent**: Marker types (Batch, Sweep) select the parallel builders.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for CPU acceleration.
//! * **Extended Adapters**: Wraps core adapters with parallel implementation logic.
//! * **Feature-Gated**: Parallelism is configurable via crate features.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmapBuilder`] via `Smap::new()`.
//! 2. Chain configuration methods (`.embedding_dim()`, `.theta()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchSmapBuilder;
use crate::adapters::sweep::ParallelSweepSmapBuilder;

// External dependencies
use num_traits::Float;

// Import base marker types for delegation
use smap::internals::api::Batch as BaseBatch;
use smap::internals::api::Sweep as BaseSweep;

// Publicly re-exported types
pub use smap::internals::algorithms::neighbors::SelfMatchPolicy;
pub use smap::internals::api::{SmapAdapter, SmapBuilder};
pub use smap::internals::engine::output::SmapResult;
pub use smap::internals::evaluation::skill::ForecastSkill;
pub use smap::internals::evaluation::sweep::ThetaSkill;
pub use smap::internals::primitives::errors::SmapError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Sweep};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory single-theta prediction.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: Float> SmapAdapter<T> for Batch {
    type Output = ParallelBatchSmapBuilder<T>;

    fn convert(builder: SmapBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastSmap Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as SmapAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchSmapBuilder { base }
    }
}

/// Marker for parallel theta-grid skill evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Sweep;

impl<T: Float> SmapAdapter<T> for Sweep {
    type Output = ParallelSweepSmapBuilder<T>;

    fn convert(builder: SmapBuilder<T>) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastSmap Sweep
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseSweep as SmapAdapter<T>>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelSweepSmapBuilder { base }
    }
}
