//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the core S-map algorithms:
//! - Delay-coordinate embedding of scalar time series
//! - Neighbor collection with validity and self-match exclusion
//! - Exponential distance-kernel weighting
//! - Per-query weighted least-squares fitting
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Delay-coordinate embedding.
pub mod embedding;

/// Neighbor collection and exclusion policy.
pub mod neighbors;

/// S-map kernel weighting.
pub mod weights;

/// Weighted least-squares solver.
pub mod solver;
