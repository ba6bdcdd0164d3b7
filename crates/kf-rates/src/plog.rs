//! Pressure-logarithmic (PLOG) rate model.
//!
//! A PLOG reaction tabulates Arrhenius expressions at discrete pressures
//! and interpolates linearly in (ln P, ln k) space between them. Rate
//! data spans many orders of magnitude with pressure, so log-log
//! interpolation reproduces the fitted curvature far better than linear
//! interpolation and is the established convention for this rate family.

use crate::arrhenius::Arrhenius;
use crate::error::{RateError, RateResult};
use crate::model::{RateModel, validation};
use kf_core::numeric::{Tolerances, nearly_equal};
use kf_core::units::{Pressure, Temperature, constants, pa};

/// Temperatures [K] probed by [`PlogRate::validate`].
const PROBE_TEMPERATURES_K: [f64; 6] = [200.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0];

/// Rate model interpolating Arrhenius tables over log pressure.
///
/// The table maps strictly increasing pressures to non-empty lists of
/// Arrhenius expressions. Input entries sharing a pressure stay separate
/// expressions under one node: two mechanistically distinct channels
/// reported at the same nominal pressure keep their own parameters, and
/// their evaluated rates are summed per query. Immutable after
/// construction.
#[derive(Debug, Clone)]
pub struct PlogRate {
    /// Distinct tabulated pressures [Pa], ascending.
    pressures: Vec<f64>,
    /// Natural logs of `pressures`, kept alongside for interpolation.
    ln_pressures: Vec<f64>,
    /// One non-empty expression list per pressure, parallel to `pressures`.
    nodes: Vec<Vec<Arrhenius>>,
}

impl PlogRate {
    /// Build a table from `(pressure, expression)` pairs, in any order.
    ///
    /// Entries are grouped by exact pressure value (bit-equal f64, not by
    /// log-pressure, which would reintroduce float round-trip mismatch)
    /// and distinct pressures sorted ascending. Fails with
    /// [`RateError::InvalidSpec`] on an empty list or a non-positive or
    /// non-finite pressure.
    pub fn new(entries: &[(Pressure, Arrhenius)]) -> RateResult<Self> {
        if entries.is_empty() {
            return Err(RateError::InvalidSpec {
                what: "PLOG table needs at least one pressure entry",
            });
        }
        for (p, _) in entries {
            validation::validate_pressure(*p, "PLOG pressure must be positive and finite")?;
        }

        let mut sorted: Vec<(f64, Arrhenius)> =
            entries.iter().map(|(p, expr)| (p.value, *expr)).collect();
        sorted.sort_by(|x, y| x.0.total_cmp(&y.0));

        let mut pressures: Vec<f64> = Vec::new();
        let mut nodes: Vec<Vec<Arrhenius>> = Vec::new();
        for (p, expr) in sorted {
            match nodes.last_mut() {
                Some(list) if pressures.last() == Some(&p) => list.push(expr),
                _ => {
                    pressures.push(p);
                    nodes.push(vec![expr]);
                }
            }
        }
        let ln_pressures = pressures.iter().map(|p| p.ln()).collect();

        tracing::debug!(
            nodes = pressures.len(),
            expressions = entries.len(),
            "built PLOG table"
        );
        Ok(Self {
            pressures,
            ln_pressures,
            nodes,
        })
    }

    /// Number of distinct tabulated pressures.
    pub fn n_pressures(&self) -> usize {
        self.pressures.len()
    }

    /// Tabulated `(pressure, expressions)` pairs, ascending in pressure.
    pub fn rates(&self) -> impl Iterator<Item = (Pressure, &[Arrhenius])> + '_ {
        self.pressures
            .iter()
            .zip(self.nodes.iter())
            .map(|(&p, list)| (pa(p), list.as_slice()))
    }

    /// Summed rate of node `i` at temperature `t` with `rt` precomputed.
    fn node_rate(&self, i: usize, t: f64, rt: f64) -> f64 {
        self.nodes[i].iter().map(|expr| expr.rate(t, rt)).sum()
    }

    /// Check that every node's summed rate is positive at a spread of
    /// probe temperatures (200 K to 10000 K).
    ///
    /// Tables with signed pre-exponential factors can sum to a
    /// non-positive rate over part of the temperature range, which makes
    /// interpolation near that node fail at evaluation time. This
    /// surfaces such tables when the mechanism is loaded instead.
    pub fn validate(&self) -> RateResult<()> {
        let mut ok = true;
        for (i, &p) in self.pressures.iter().enumerate() {
            for &t in &PROBE_TEMPERATURES_K {
                let sum = self.node_rate(i, t, constants::GAS_CONSTANT * t);
                if sum <= 0.0 {
                    tracing::warn!(
                        pressure_pa = p,
                        temperature_k = t,
                        rate = sum,
                        "PLOG node sums to a non-positive rate"
                    );
                    ok = false;
                }
            }
        }
        if ok {
            Ok(())
        } else {
            Err(RateError::InvalidSpec {
                what: "PLOG node has a non-positive summed rate at a probe temperature",
            })
        }
    }
}

impl RateModel for PlogRate {
    fn name(&self) -> &str {
        "P-log"
    }

    /// Evaluate k(T, P).
    ///
    /// Below the lowest tabulated pressure the lowest node's summed rate
    /// is returned unchanged, and symmetrically above the highest: PLOG
    /// fits are not trusted outside their tabulated range, so the policy
    /// is to clamp, not to extrapolate the log-log slope. A query whose
    /// `ln P` is within `Tolerances::default()` (rel 1e-9) of a node's
    /// `ln P_i` returns that node's rate directly rather than
    /// interpolating over a vanishingly small interval. Strictly interior
    /// queries interpolate `ln k` linearly in `ln P` between the
    /// bracketing nodes; a non-positive endpoint rate there fails with
    /// [`RateError::NonPositiveRate`].
    fn eval(&self, t: Temperature, p: Pressure) -> RateResult<f64> {
        let tv = t.value;
        let rt = constants::GAS_CONSTANT * tv;
        let ln_p = p.value.ln();

        let last = self.ln_pressures.len() - 1;
        if ln_p <= self.ln_pressures[0] {
            return Ok(self.node_rate(0, tv, rt));
        }
        if ln_p >= self.ln_pressures[last] {
            return Ok(self.node_rate(last, tv, rt));
        }

        // First node with ln P_i >= ln P; in (0, last] here.
        let hi = self.ln_pressures.partition_point(|&lp| lp < ln_p);
        let lo = hi - 1;

        let tol = Tolerances::default();
        if nearly_equal(ln_p, self.ln_pressures[lo], tol) {
            return Ok(self.node_rate(lo, tv, rt));
        }
        if nearly_equal(ln_p, self.ln_pressures[hi], tol) {
            return Ok(self.node_rate(hi, tv, rt));
        }

        let k_lo = self.node_rate(lo, tv, rt);
        let k_hi = self.node_rate(hi, tv, rt);
        if k_lo <= 0.0 || k_hi <= 0.0 {
            return Err(RateError::NonPositiveRate {
                temperature: tv,
                pressure: p.value,
            });
        }

        let frac = (ln_p - self.ln_pressures[lo]) / (self.ln_pressures[hi] - self.ln_pressures[lo]);
        let ln_k = k_lo.ln() + (k_hi.ln() - k_lo.ln()) * frac;
        Ok(ln_k.exp())
    }
}
