//! Layer 6: Adapters
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different prediction modes:
//!
//! - **Batch**: Unified adapter for parallel/sequential single-theta prediction
//! - **Sweep**: Parallel skill evaluation across a theta grid

// Unified batch adapter for S-map prediction.
pub mod batch;

// Theta-sweep adapter for nonlinearity diagnostics.
pub mod sweep;
