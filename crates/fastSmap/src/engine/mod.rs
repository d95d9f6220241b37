//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for S-map prediction.
//! It distributes the independent per-query fits across CPU cores.

// Parallel prediction pass using CPU threads
pub mod executor;
