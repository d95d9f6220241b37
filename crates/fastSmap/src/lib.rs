//! # Fast S-map: Parallel Empirical Dynamic Modeling for Rust
//!
//! A multi-threaded front end for the `smap` crate: the same delay-embedding
//! S-map forecasting engine, with the per-query prediction pass and the
//! theta sweep distributed across all available CPU cores.
//!
//! ## What is S-map?
//!
//! S-map (sequential locally weighted global linear map) forecasts a time
//! series by reconstructing its attractor with lagged-coordinate vectors,
//! then fitting an independent distance-weighted linear map for every query
//! point. Because each query's fit is independent, the workload is
//! embarrassingly parallel.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastSmap::prelude::*;
//! use ndarray::Array1;
//!
//! let mut series = vec![0.23_f64];
//! for i in 0..399 {
//!     let x = series[i];
//!     series.push(3.8 * x * (1.0 - x));
//! }
//! let library = Array1::from_vec(series[..200].to_vec());
//! let target = Array1::from_vec(series[200..].to_vec());
//!
//! // Build the model with parallel execution (default)
//! let model = Smap::new()
//!     .embedding_dim(2)
//!     .theta(2.0)
//!     .adapter(Batch)     // Parallel by default
//!     .build()?;
//!
//! let result = model.predict(&library, &target)?;
//! println!("{}", result);
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ### Theta Exploration
//!
//! The sweep adapter evaluates a whole theta grid, one full prediction per
//! grid point, with the grid points themselves running in parallel:
//!
//! ```rust
//! use fastSmap::prelude::*;
//! # let mut series = vec![0.23_f64];
//! # for i in 0..399 { let x = series[i]; series.push(3.8 * x * (1.0 - x)); }
//! # let (library, target) = series.split_at(200);
//!
//! let table = Smap::new()
//!     .embedding_dim(2)
//!     .thetas(vec![0.0, 0.5, 1.0, 2.0, 4.0, 8.0])
//!     .adapter(Sweep)
//!     .build()?
//!     .evaluate(library, target)?;
//!
//! for entry in &table {
//!     println!("theta = {:>4}: rho = {:.4}", entry.theta, entry.skill.rho);
//! }
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ### ndarray Integration
//!
//! `fastSmap` accepts `&Array1<T>`, `&[T]`, or `Vec<T>` wherever a series is
//! expected, so it drops into existing numerical pipelines without copies.
//!
//! ## References
//!
//! - Sugihara, G. (1994). "Nonlinear forecasting for the classification of
//!   natural time series"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 4: Evaluation - parallel theta sweeps.
mod evaluation;

// Layer 5: Engine - parallel prediction pass.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for S-map forecasting.
mod api;

// Input data handling.
mod input;

// Standard fastSmap prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Sweep},
        ForecastSkill, SelfMatchPolicy,
        SelfMatchPolicy::{Allow, Exclude},
        SmapBuilder as Smap, SmapError, SmapResult, ThetaSkill,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
