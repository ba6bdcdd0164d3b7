//! kf-rates: reaction rate coefficient evaluation for kinflow.
//!
//! Provides:
//! - Arrhenius rate expressions (the shared primitive)
//! - PLOG rates: Arrhenius tables interpolated in log-pressure space
//! - Chebyshev rates: bivariate polynomial fits over reduced (T, P)
//! - RateModel trait shared by all rate variants
//!
//! # Architecture
//!
//! This crate defines a stable API (`RateModel` trait) that isolates the
//! reaction-network layer from the concrete rate parameterizations. Each
//! reaction owns one model instance; models are immutable after
//! construction and safe to evaluate concurrently. Mechanism file parsing
//! and rate-of-progress assembly live outside this crate; it consumes
//! already-validated parameter sets and a (temperature, pressure) query,
//! and produces one forward rate constant.
//!
//! # Example
//!
//! ```
//! use kf_core::units::{atm, k};
//! use kf_rates::{Arrhenius, PlogRate, RateModel};
//!
//! let table = PlogRate::new(&[
//!     (atm(0.01), Arrhenius::new(1.2124e13, -0.5779, 4.549e7)),
//!     (atm(1.0), Arrhenius::new(4.9108e28, -4.8507, 1.0365e8)),
//!     (atm(100.0), Arrhenius::new(5.9632e53, -11.529, 2.2008e8)),
//! ])
//! .unwrap();
//!
//! let kf = table.eval(k(1000.0), atm(2.0)).unwrap();
//! assert!(kf > 0.0);
//! ```

pub mod arrhenius;
pub mod chebyshev;
pub mod error;
pub mod model;
pub mod plog;

// Re-exports for ergonomics
pub use arrhenius::Arrhenius;
pub use chebyshev::{ChebyshevRate, chebyshev};
pub use error::{RateError, RateResult};
pub use model::RateModel;
pub use plog::PlogRate;
