//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different prediction modes:
//!
//! - **Batch**: Unified adapter for single-theta prediction
//! - **Sweep**: Skill evaluation across a theta grid
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified batch adapter for S-map prediction.
pub mod batch;

/// Theta-sweep adapter for nonlinearity diagnostics.
pub mod sweep;
