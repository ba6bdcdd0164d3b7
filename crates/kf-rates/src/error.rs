//! Rate model errors.

use kf_core::KfError;
use thiserror::Error;

/// Result type for rate model operations.
pub type RateResult<T> = Result<T, RateError>;

/// Errors that can occur while building or evaluating rate models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RateError {
    /// Malformed rate parameterization (empty tables, non-positive
    /// pressures, inverted domain bounds, ragged coefficient grids).
    /// Raised at construction time; the mechanism-loading layer aborts
    /// the offending reaction.
    #[error("Invalid rate specification: {what}")]
    InvalidSpec { what: &'static str },

    /// A PLOG node's summed rate is non-positive at the query
    /// temperature, so the log-space interpolation has no defined value.
    /// Raised at evaluation time; never converted to NaN or zero.
    #[error("Non-positive rate at T = {temperature} K, P = {pressure} Pa; log-pressure interpolation is undefined")]
    NonPositiveRate { temperature: f64, pressure: f64 },
}

impl From<RateError> for KfError {
    fn from(err: RateError) -> Self {
        // Convert to KfError while preserving context
        match err {
            RateError::InvalidSpec { what } => KfError::InvalidArg {
                what: Box::leak(format!("Invalid rate specification: {}", what).into_boxed_str()),
            },
            RateError::NonPositiveRate {
                temperature,
                pressure,
            } => KfError::Invariant {
                what: Box::leak(
                    format!(
                        "Non-positive rate at T = {} K, P = {} Pa",
                        temperature, pressure
                    )
                    .into_boxed_str(),
                ),
            },
        }
    }
}
