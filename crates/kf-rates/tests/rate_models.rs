//! Rate model integration tests.
//!
//! Scenario tests exercising the models the way a reaction-network layer
//! does: a mixed set of reactions held as trait objects, queried over the
//! state points a mechanism actually sees, with the pressure-dependence
//! corner cases a Chemkin/RMG-derived mechanism exposes.

use kf_core::units::{atm, constants, k, pa};
use kf_rates::{Arrhenius, ChebyshevRate, PlogRate, RateModel};

/// Expression with Ea in cal/mol (1 cal/mol = 4184 J/kmol).
fn ar(a: f64, n: f64, ea_cal: f64) -> Arrhenius {
    Arrhenius::new(a, n, ea_cal * 4184.0)
}

/// Reference Arrhenius evaluation on the cal/mol basis.
fn kref(a: f64, n: f64, ea_cal: f64, t: f64) -> f64 {
    a * t.powf(n) * (-ea_cal / (constants::GAS_CONSTANT_CAL_MOL * t)).exp()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-9 * expected.abs(),
        "actual = {actual}, expected = {expected}"
    );
}

/// PLOG reaction spanning three decades of pressure.
fn plog_reaction() -> PlogRate {
    PlogRate::new(&[
        (atm(0.01), ar(1.2124e13, -0.5779, 10872.7)),
        (atm(1.0), ar(4.9108e28, -4.8507, 24772.8)),
        (atm(100.0), ar(5.9632e53, -11.529, 52599.6)),
    ])
    .unwrap()
}

/// PLOG reaction with two channels reported at each of its pressures.
fn plog_duplicate_reaction() -> PlogRate {
    PlogRate::new(&[
        (atm(0.01), ar(1.23e5, 1.53, 4737.0)),
        (atm(1.0), ar(1.23e17, -1.83, 15003.0)),
        (atm(1.0), ar(1.23e1, 2.68, 6335.0)),
        (atm(100.0), ar(1.37e14, -0.79, 17603.0)),
        (atm(100.0), ar(1.28e3, 1.71, 9774.0)),
    ])
    .unwrap()
}

fn chebyshev_reaction() -> ChebyshevRate {
    ChebyshevRate::new(
        k(300.0),
        k(2000.0),
        pa(1000.0),
        pa(1.0e7),
        vec![
            vec![8.2883, -1.1397, -0.12059, 0.016308],
            vec![1.9764, 1.0037, 0.0072865, -0.030432],
            vec![0.3177, 0.26889, 0.094806, -0.0076385],
            vec![-0.031285, 0.039397, 0.043375, 0.0089178],
        ],
    )
    .unwrap()
}

#[test]
fn plog_low_pressure_limit() {
    // Far below the tabulated range the lowest node's fit is held
    // constant, bit-for-bit, with no log-log slope extrapolation.
    let reaction = plog_reaction();
    let kf = reaction.eval(k(500.0), pa(1e-7)).unwrap();
    assert_close(kf, kref(1.2124e13, -0.5779, 10872.7, 500.0));
    assert_eq!(kf, reaction.eval(k(500.0), atm(0.01)).unwrap());
}

#[test]
fn plog_high_pressure_limit() {
    let reaction = plog_reaction();
    let kf = reaction.eval(k(500.0), pa(1e10)).unwrap();
    assert_close(kf, kref(5.9632e53, -11.529, 52599.6, 500.0));
}

#[test]
fn plog_corner_case_at_tabulated_pressure() {
    // Exactly at 1 atm both duplicate channels contribute and no
    // interpolation happens: the result is the literal sum of the two
    // Arrhenius terms at T = 500 K.
    let reaction = plog_duplicate_reaction();
    let kf = reaction.eval(k(500.0), pa(101325.0)).unwrap();
    let expected = kref(1.23e17, -1.83, 15003.0, 500.0) + kref(1.23e1, 2.68, 6335.0, 500.0);
    assert_close(kf, expected);
}

#[test]
fn plog_duplicates_sum_at_high_pressure_limit() {
    let reaction = plog_duplicate_reaction();
    let kf = reaction.eval(k(500.0), pa(1e10)).unwrap();
    let expected = kref(1.37e14, -0.79, 17603.0, 500.0) + kref(1.28e3, 1.71, 9774.0, 500.0);
    assert_close(kf, expected);
}

#[test]
fn plog_intermediate_pressure_brackets_endpoints() {
    // 20 atm sits between the 1 atm and 100 atm nodes; log-log
    // interpolation must land strictly between the node rates.
    let reaction = plog_reaction();
    let t = k(1100.0);

    let k_mid = reaction.eval(t, atm(20.0)).unwrap();
    let k_lo = reaction.eval(t, atm(1.0)).unwrap();
    let k_hi = reaction.eval(t, atm(100.0)).unwrap();

    let (lower, upper) = if k_lo < k_hi { (k_lo, k_hi) } else { (k_hi, k_lo) };
    assert!(lower < k_mid && k_mid < upper, "k_mid = {k_mid} outside [{lower}, {upper}]");

    // And it must land exactly on the (ln P, ln k) chord.
    let frac = (20.0_f64.ln() - 0.0) / 100.0_f64.ln();
    let expected = (k_lo.ln() + (k_hi.ln() - k_lo.ln()) * frac).exp();
    assert_close(k_mid, expected);
}

#[test]
fn chebyshev_edge_cases_clamp_to_fitted_domain() {
    let reaction = chebyshev_reaction();

    // Pressure edges of the fitted domain
    let at_pmin = reaction.eval(k(500.0), pa(1000.0)).unwrap();
    assert_eq!(reaction.eval(k(500.0), pa(1.0)).unwrap(), at_pmin);

    let at_pmax = reaction.eval(k(500.0), pa(1.0e7)).unwrap();
    assert_eq!(reaction.eval(k(500.0), pa(1.0e9)).unwrap(), at_pmax);

    // Temperature edges
    let at_tmin = reaction.eval(k(300.0), pa(101325.0)).unwrap();
    assert_eq!(reaction.eval(k(200.0), pa(101325.0)).unwrap(), at_tmin);

    let at_tmax = reaction.eval(k(2000.0), pa(101325.0)).unwrap();
    assert_eq!(reaction.eval(k(2500.0), pa(101325.0)).unwrap(), at_tmax);
}

#[test]
fn molecule_basis_rate_scales_by_avogadro() {
    // A reaction specified in molecule count instead of moles carries a
    // pre-exponential larger by Avogadro's number (per mol). For a
    // Chebyshev fit that conversion is a constant shift of c00 by
    // log10(N_A), and the evaluated rates keep exactly that ratio.
    let n_a_per_mol = constants::AVOGADRO * 1e-3;

    let mol_basis = chebyshev_reaction();
    let mut coeffs = mol_basis.coeffs().to_vec();
    coeffs[0][0] += n_a_per_mol.log10();
    let molecule_basis = ChebyshevRate::new(
        k(300.0),
        k(2000.0),
        pa(1000.0),
        pa(1.0e7),
        coeffs,
    )
    .unwrap();

    let t = k(1100.0);
    let p = atm(20.0);
    let ratio = molecule_basis.eval(t, p).unwrap() / mol_basis.eval(t, p).unwrap();
    assert!(
        (ratio - n_a_per_mol).abs() <= 1e-6 * n_a_per_mol,
        "ratio = {ratio}"
    );
}

#[test]
fn mixed_reaction_set_through_trait_objects() {
    // The network layer holds one model per reaction without knowing the
    // concrete variant.
    let reactions: Vec<Box<dyn RateModel>> = vec![
        Box::new(ar(3.46e9, 0.442, 5463.0)),
        Box::new(plog_reaction()),
        Box::new(plog_duplicate_reaction()),
        Box::new(chebyshev_reaction()),
    ];

    let t = k(900.0);
    let p = atm(8.0);
    for reaction in &reactions {
        let kf = reaction.eval(t, p).unwrap();
        assert!(
            kf.is_finite() && kf > 0.0,
            "{} gave non-physical kf = {kf}",
            reaction.name()
        );
    }
}

#[test]
fn concurrent_evaluation_matches_serial() {
    use rayon::prelude::*;

    // Tables are immutable after construction; many state points may be
    // evaluated against one shared model with no synchronization.
    let plog = plog_duplicate_reaction();
    let cheb = chebyshev_reaction();

    let states: Vec<(f64, f64)> = (0..1000)
        .map(|i| {
            let t = 300.0 + (i as f64) * 2.0;
            let p = 100.0 * 1.02_f64.powi(i);
            (t, p)
        })
        .collect();

    let serial: Vec<(f64, f64)> = states
        .iter()
        .map(|&(t, p)| {
            (
                plog.eval(k(t), pa(p)).unwrap(),
                cheb.eval(k(t), pa(p)).unwrap(),
            )
        })
        .collect();

    let parallel: Vec<(f64, f64)> = states
        .par_iter()
        .map(|&(t, p)| {
            (
                plog.eval(k(t), pa(p)).unwrap(),
                cheb.eval(k(t), pa(p)).unwrap(),
            )
        })
        .collect();

    assert_eq!(serial, parallel);
}
