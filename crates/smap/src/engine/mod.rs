//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the prediction process by coordinating between
//! primitives (buffers, errors) and algorithms (embedding, neighbors,
//! weights, solver). It hosts the per-call pipeline and the injection seam
//! for alternative execution strategies.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for S-map prediction.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for S-map operations.
pub mod output;
