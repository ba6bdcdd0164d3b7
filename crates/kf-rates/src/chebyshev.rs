//! Chebyshev rate model: bivariate polynomial fit over reduced (T, P).

use crate::error::{RateError, RateResult};
use crate::model::{RateModel, validation};
use kf_core::units::{Pressure, Temperature, k, pa};

/// Value of the Chebyshev polynomial of the first kind, `T_k(x)`.
///
/// Uses the three-term recurrence `T_k = 2x T_{k-1} - T_{k-2}` rather
/// than the explicit power expansion, which loses accuracy for higher
/// orders.
pub fn chebyshev(order: usize, x: f64) -> f64 {
    match order {
        0 => 1.0,
        1 => x,
        _ => {
            let mut t_km1 = 1.0;
            let mut t_k = x;
            for _ in 2..=order {
                let next = 2.0 * x * t_k - t_km1;
                t_km1 = t_k;
                t_k = next;
            }
            t_k
        }
    }
}

/// Sum of a Chebyshev series `Σ_k c_k T_k(x)` via the recurrence.
fn series(coeffs: &[f64], x: f64) -> f64 {
    let mut sum = 0.0;
    let mut t_km1 = 1.0;
    let mut t_k = x;
    for (order, &c) in coeffs.iter().enumerate() {
        let basis = match order {
            0 => 1.0,
            1 => x,
            _ => {
                let next = 2.0 * x * t_k - t_km1;
                t_km1 = t_k;
                t_k = next;
                next
            }
        };
        sum += c * basis;
    }
    sum
}

/// Rate model expressing `log10 k` as a Chebyshev expansion over reduced
/// reciprocal temperature and reduced log pressure.
///
/// `coeffs[i][j]` weights `T_i(T̃) * T_j(P̃)` with both reduced
/// coordinates mapped into [-1, 1] over the fitted domain. Queries
/// outside the domain are clamped to its boundary before mapping:
/// Chebyshev polynomials diverge rapidly outside [-1, 1], so the fit is
/// never extrapolated. Immutable after construction; evaluation is total
/// on the clamped domain.
#[derive(Debug, Clone)]
pub struct ChebyshevRate {
    /// Fitted temperature range [K].
    tmin: f64,
    tmax: f64,
    /// Natural logs of the fitted pressure range.
    ln_pmin: f64,
    ln_pmax: f64,
    /// Rectangular coefficient grid, nT rows by nP columns.
    coeffs: Vec<Vec<f64>>,
}

impl ChebyshevRate {
    /// Build a model from its fitted domain and coefficient grid.
    ///
    /// Fails with [`RateError::InvalidSpec`] on inverted or degenerate
    /// bounds, non-positive pressures, or an empty, ragged, or non-finite
    /// coefficient grid.
    pub fn new(
        tmin: Temperature,
        tmax: Temperature,
        pmin: Pressure,
        pmax: Pressure,
        coeffs: Vec<Vec<f64>>,
    ) -> RateResult<Self> {
        validation::validate_temperature(tmin, "Chebyshev Tmin must be positive and finite")?;
        validation::validate_temperature(tmax, "Chebyshev Tmax must be positive and finite")?;
        validation::validate_pressure(pmin, "Chebyshev Pmin must be positive and finite")?;
        validation::validate_pressure(pmax, "Chebyshev Pmax must be positive and finite")?;
        if tmin.value >= tmax.value {
            return Err(RateError::InvalidSpec {
                what: "Chebyshev temperature bounds must satisfy Tmin < Tmax",
            });
        }
        if pmin.value >= pmax.value {
            return Err(RateError::InvalidSpec {
                what: "Chebyshev pressure bounds must satisfy Pmin < Pmax",
            });
        }
        if coeffs.is_empty() || coeffs[0].is_empty() {
            return Err(RateError::InvalidSpec {
                what: "Chebyshev coefficient grid needs at least one row and one column",
            });
        }
        let n_p = coeffs[0].len();
        if coeffs.iter().any(|row| row.len() != n_p) {
            return Err(RateError::InvalidSpec {
                what: "Chebyshev coefficient grid must be rectangular",
            });
        }
        if coeffs.iter().flatten().any(|c| !c.is_finite()) {
            return Err(RateError::InvalidSpec {
                what: "Chebyshev coefficients must be finite",
            });
        }

        tracing::debug!(
            n_temperature = coeffs.len(),
            n_pressure = n_p,
            "built Chebyshev rate"
        );
        Ok(Self {
            tmin: tmin.value,
            tmax: tmax.value,
            ln_pmin: pmin.value.ln(),
            ln_pmax: pmax.value.ln(),
            coeffs,
        })
    }

    /// Fitted temperature range.
    pub fn temperature_range(&self) -> (Temperature, Temperature) {
        (k(self.tmin), k(self.tmax))
    }

    /// Fitted pressure range.
    pub fn pressure_range(&self) -> (Pressure, Pressure) {
        (pa(self.ln_pmin.exp()), pa(self.ln_pmax.exp()))
    }

    /// Grid shape as (temperature order count, pressure order count).
    pub fn shape(&self) -> (usize, usize) {
        (self.coeffs.len(), self.coeffs[0].len())
    }

    /// Coefficient grid, `[i][j]` over (temperature, pressure) orders.
    pub fn coeffs(&self) -> &[Vec<f64>] {
        &self.coeffs
    }

    /// Map temperature [K] to the reduced coordinate in [-1, 1].
    ///
    /// Reciprocal-temperature mapping, matching the Arrhenius-like
    /// curvature the fit assumes. Clamps to the fitted range first.
    fn reduced_temperature(&self, t: f64) -> f64 {
        let t = t.clamp(self.tmin, self.tmax);
        (2.0 / t - 1.0 / self.tmin - 1.0 / self.tmax) / (1.0 / self.tmax - 1.0 / self.tmin)
    }

    /// Map pressure [Pa] to the reduced log-pressure coordinate in [-1, 1].
    fn reduced_pressure(&self, p: f64) -> f64 {
        let ln_p = p.ln().clamp(self.ln_pmin, self.ln_pmax);
        (2.0 * ln_p - self.ln_pmin - self.ln_pmax) / (self.ln_pmax - self.ln_pmin)
    }
}

impl RateModel for ChebyshevRate {
    fn name(&self) -> &str {
        "Chebyshev"
    }

    fn eval(&self, t: Temperature, p: Pressure) -> RateResult<f64> {
        let t_red = self.reduced_temperature(t.value);
        let p_red = self.reduced_pressure(p.value);

        let mut log10_k = 0.0;
        let mut ti_km1 = 1.0;
        let mut ti_k = t_red;
        for (order, row) in self.coeffs.iter().enumerate() {
            let basis = match order {
                0 => 1.0,
                1 => t_red,
                _ => {
                    let next = 2.0 * t_red * ti_k - ti_km1;
                    ti_km1 = ti_k;
                    ti_k = next;
                    next
                }
            };
            log10_k += basis * series(row, p_red);
        }
        Ok(10f64.powf(log10_k))
    }
}
