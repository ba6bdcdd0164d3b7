//! Modified Arrhenius rate expressions.

use crate::error::RateResult;
use crate::model::RateModel;
use kf_core::units::{Pressure, Temperature, constants};

/// A modified Arrhenius rate expression `k = A * T^n * exp(-Ea / RT)`.
///
/// This is the shared primitive underneath the pressure-dependent rate
/// models. The pre-exponential factor may be negative: duplicate PLOG
/// entries at one pressure are allowed to cancel algebraically, and the
/// sign of the *summed* rate is checked by the callers that need it.
///
/// Fields use the SI + kmol basis of `kf_core::units::constants`:
/// - `a`: pre-exponential factor, units set by reaction order (caller
///   normalizes before construction)
/// - `n`: dimensionless temperature exponent
/// - `ea`: activation energy [J/kmol]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrhenius {
    a: f64,
    n: f64,
    ea: f64,
}

impl Arrhenius {
    /// Create an expression from (A, n, Ea), Ea in J/kmol.
    pub fn new(a: f64, n: f64, ea: f64) -> Self {
        Self { a, n, ea }
    }

    /// Pre-exponential factor.
    pub fn pre_exponential(&self) -> f64 {
        self.a
    }

    /// Temperature exponent.
    pub fn temperature_exponent(&self) -> f64 {
        self.n
    }

    /// Activation energy [J/kmol].
    pub fn activation_energy(&self) -> f64 {
        self.ea
    }

    /// Evaluate at temperature `t` [K] with `rt = R * t` [J/kmol]
    /// precomputed by the caller.
    ///
    /// Several expressions evaluated at one temperature (a PLOG node, or
    /// both nodes of an interpolation bracket) share a single `rt`
    /// product. Pure; `t > 0` is the caller's precondition.
    #[inline]
    pub fn rate(&self, t: f64, rt: f64) -> f64 {
        self.a * t.powf(self.n) * (-self.ea / rt).exp()
    }
}

impl RateModel for Arrhenius {
    fn name(&self) -> &str {
        "Arrhenius"
    }

    /// Pressure-independent: `p` is ignored.
    fn eval(&self, t: Temperature, _p: Pressure) -> RateResult<f64> {
        let tv = t.value;
        Ok(self.rate(tv, constants::GAS_CONSTANT * tv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kf_core::units::{k, pa};

    #[test]
    fn rate_matches_formula() {
        let expr = Arrhenius::new(1.23e1, 2.68, 6335.0 * 4184.0);
        let t = 500.0;
        let rt = constants::GAS_CONSTANT * t;
        let expected = 1.23e1 * t.powf(2.68) * (-6335.0 * 4184.0 / rt).exp();
        assert_eq!(expr.rate(t, rt), expected);
    }

    #[test]
    fn zero_activation_energy_is_power_law() {
        let expr = Arrhenius::new(2.0, 1.5, 0.0);
        let t = 400.0;
        let rate = expr.rate(t, constants::GAS_CONSTANT * t);
        let expected = 2.0 * t.powf(1.5);
        assert!((rate - expected).abs() <= 1e-9 * expected);
    }

    #[test]
    fn negative_pre_exponential_is_allowed() {
        let expr = Arrhenius::new(-7.41e27, -5.54, 12108.0 * 4184.0);
        let t = 500.0;
        assert!(expr.rate(t, constants::GAS_CONSTANT * t) < 0.0);
    }

    #[test]
    fn rate_model_ignores_pressure() {
        let expr = Arrhenius::new(3.46e9, 0.442, 5463.0 * 4184.0);
        let t = k(800.0);
        let k1 = expr.eval(t, pa(1e3)).unwrap();
        let k2 = expr.eval(t, pa(1e8)).unwrap();
        assert_eq!(k1, k2);

        let tv = 800.0;
        let direct = expr.rate(tv, constants::GAS_CONSTANT * tv);
        assert_eq!(k1, direct);
    }
}
