//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer assesses forecast quality:
//! - Forecast skill metrics (Pearson rho, RMSE, MAE)
//! - Skill evaluation across a theta grid
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Forecast skill metrics.
pub mod skill;

/// Theta-grid skill evaluation.
pub mod sweep;
