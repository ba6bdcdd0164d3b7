//! Rate model trait and construction-time validation helpers.

use crate::error::{RateError, RateResult};
use kf_core::units::{Pressure, Temperature};

/// Trait for reaction rate coefficient models.
///
/// Implementations must be thread-safe (Send + Sync): tables are
/// immutable after construction, so independent reactions can be
/// evaluated in parallel without synchronization. The fixed
/// implementation set is `Arrhenius`, `PlogRate`, and `ChebyshevRate`;
/// the reaction-network layer holds one model per reaction through this
/// trait without knowing the concrete variant.
pub trait RateModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Forward rate constant at the given temperature and pressure.
    ///
    /// Units of the result follow the units the pre-exponential factors
    /// were normalized to upstream; this crate is agnostic to reaction
    /// order. Callers guarantee `T > 0` and `P > 0`: the thermodynamic
    /// state layer validates its own state once, and it is not
    /// re-checked per call.
    fn eval(&self, t: Temperature, p: Pressure) -> RateResult<f64>;
}

/// Validation helpers for rate model construction.
pub(crate) mod validation {
    use super::*;

    /// Ensure a tabulated pressure is positive and finite.
    pub fn validate_pressure(p: Pressure, what: &'static str) -> RateResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(RateError::InvalidSpec { what });
        }
        Ok(())
    }

    /// Ensure a domain-bound temperature is positive and finite.
    pub fn validate_temperature(t: Temperature, what: &'static str) -> RateResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(RateError::InvalidSpec { what });
        }
        Ok(())
    }
}
