//! Layer 4: Evaluation
//!
//! This layer provides the parallel theta sweep: each grid point is one full
//! prediction-and-scoring run, and the grid points execute concurrently.

// Parallel theta sweep for nonlinearity diagnostics
pub mod sweep;
