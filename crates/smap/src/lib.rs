//! # S-map: Sequential Locally Weighted Global Linear Maps for Rust
//!
//! An empirical dynamic modeling (EDM) forecasting engine built around the
//! S-map algorithm: delay-coordinate embedding of a scalar time series,
//! exponential distance-kernel weighting, and an independent weighted linear
//! regression per query point.
//!
//! ## What is S-map?
//!
//! S-map (sequential locally weighted global linear map) forecasts a time
//! series by reconstructing its attractor with lagged-coordinate vectors
//! (Takens' theorem), then fitting, for every query point, a linear map whose
//! observations are weighted by their distance to the query. A nonlinearity
//! parameter `theta` controls the locality of the fit: `theta = 0` reduces to
//! a single global linear autoregression, while large `theta` concentrates
//! weight on the nearest neighbors and tracks state-dependent dynamics.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use smap::prelude::*;
//!
//! // A short nonlinear series; the first half is the library, the rest the
//! // forecast target.
//! let mut series = vec![0.23_f64];
//! for i in 0..199 {
//!     let x = series[i];
//!     series.push(3.8 * x * (1.0 - x));
//! }
//! let (library, target) = series.split_at(100);
//!
//! let model = Smap::new()
//!     .embedding_dim(2)   // E lagged coordinates per state vector
//!     .lag(1)             // tau steps between coordinates
//!     .horizon(1)         // forecast Tp steps ahead
//!     .theta(2.0)         // kernel nonlinearity
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = model.predict(library, target)?;
//!
//! // One prediction per embeddable target row.
//! assert_eq!(result.predictions.len(), target.len() - 1);
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ### Theta Exploration
//!
//! The forecast skill of S-map as a function of `theta` is itself a test for
//! nonlinearity in the data. The `Sweep` adapter evaluates a whole grid:
//!
//! ```rust
//! use smap::prelude::*;
//! # let mut series = vec![0.23_f64];
//! # for i in 0..199 { let x = series[i]; series.push(3.8 * x * (1.0 - x)); }
//! # let (library, target) = series.split_at(100);
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
//! ### Result and Error Handling
//!
//! `predict` returns a `Result<SmapResult<T>, SmapError>`. Parameter and
//! input validation happens eagerly; no partial output is ever produced.
//! Target rows with no usable library neighbor are reported as `NaN` gap
//! markers in `result.predictions` (see [`SmapResult`] for the sentinel
//! contract); `SmapResult::gap_count()` counts them.
//!
//! ```rust
//! use smap::prelude::*;
//! # let library = vec![0.1_f64, 0.4, 0.9, 0.3, 0.8, 0.5];
//! # let target = vec![0.2_f64, 0.6, 0.7, 0.1];
//!
//! let model = Smap::new().theta(1.0).adapter(Batch).build()?;
//!
//! match model.predict(&library, &target) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("Prediction failed: {}", e),
//! }
//! # Result::<(), SmapError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smap = { version = "0.1", default-features = false }
//! ```
//!
//! ## References
//!
//! - Sugihara, G. (1994). "Nonlinear forecasting for the classification of
//!   natural time series"
//! - Takens, F. (1981). "Detecting strange attractors in turbulence"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - core S-map algorithms.
mod algorithms;

// Layer 4: Evaluation - forecast skill and theta exploration.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// Layer 6: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for S-map forecasting.
mod api;

// Standard S-map prelude.
pub mod prelude {
    pub use crate::api::{
        smap,
        Adapter::{Batch, Sweep},
        ForecastSkill, SelfMatchPolicy,
        SelfMatchPolicy::{Allow, Exclude},
        SmapBuilder as Smap, SmapError, SmapResult, ThetaSkill,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
