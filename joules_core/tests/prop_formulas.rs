//! Property-based tests for the formula library using proptest.
//!
//! Covers: geometric identities between formulas, the half-life / decay
//! constant inverse, the zero-only division error, and purity.

use std::f64::consts::PI;

use joules_core::formulas::geometry::*;
use joules_core::formulas::pressure::pressure;
use joules_core::formulas::quantum::{decay_constant, half_life};
use joules_core::formulas::{Formula, ALL_FORMULAS};
use proptest::prelude::*;

fn rel_close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * b.abs().max(f64::MIN_POSITIVE)
}

// ── Geometry Identities ──────────────────────────────────────────────

proptest! {
    /// Circle area is πr².
    #[test]
    fn circle_area_is_pi_r_squared(r in 0.0f64..1e6) {
        prop_assert!(rel_close(circle_area(r), PI * r * r, 1e-9) || r == 0.0);
    }

    /// Sphere volume is 4/3 of circle area times radius.
    #[test]
    fn sphere_volume_from_circle_area(r in 0.0f64..1e6) {
        let expected = 4.0 / 3.0 * circle_area(r) * r;
        prop_assert!(rel_close(sphere_volume(r), expected, 1e-12) || r == 0.0);
    }

    /// Cylinder volume is three cones.
    #[test]
    fn cylinder_is_three_cones(r in 0.0f64..1e4, h in 0.0f64..1e4) {
        let cylinder = cylinder_volume(r, h);
        prop_assert!((3.0 * cone_volume(r, h) - cylinder).abs() <= 1e-9 * cylinder.max(1.0));
    }

    /// Lateral cylinder area unrolls to a rectangle of circumference × height.
    #[test]
    fn cylinder_surface_unrolls(r in 0.0f64..1e4, h in 0.0f64..1e4) {
        prop_assert_eq!(cylinder_surface_area(r, h), rectangle_area(circumference(r), h));
    }

    /// Cone surface always includes at least its base.
    #[test]
    fn cone_surface_covers_base(r in 0.0f64..1e4, l in 0.0f64..1e4) {
        prop_assert!(cone_surface_area(r, l) >= circle_area(r));
    }

    /// A trapezium with equal bases is a rectangle.
    #[test]
    fn trapezium_with_equal_bases(b in 0.0f64..1e6, h in 0.0f64..1e6) {
        let trap = trapezium_area(b, b, h);
        prop_assert!((trap - rectangle_area(b, h)).abs() <= 1e-9 * trap.max(1.0));
    }

    /// Arc length over a full turn is the circumference.
    #[test]
    fn full_turn_arc(r in 0.0f64..1e6) {
        prop_assert!((arc_length(r, 2.0 * PI) - circumference(r)).abs() <= 1e-9 * r.max(1.0));
    }
}

// ── Pressure ─────────────────────────────────────────────────────────

proptest! {
    /// Pressure times area recovers the force.
    #[test]
    fn pressure_times_area(force in 0.0f64..1e9, area in 1e-6f64..1e6) {
        let p = pressure(force, area);
        prop_assert!((p * area - force).abs() <= 1e-9 * force.max(1.0));
    }

    /// Zero area never panics and follows IEEE division.
    #[test]
    fn pressure_zero_area(force in 1e-9f64..1e9) {
        prop_assert_eq!(pressure(force, 0.0), f64::INFINITY);
        prop_assert_eq!(pressure(-force, 0.0), f64::NEG_INFINITY);
    }
}

// ── Decay ────────────────────────────────────────────────────────────

proptest! {
    /// Half-life and decay constant are mutual inverses.
    #[test]
    fn decay_inverse(x in 1e-9f64..1e9) {
        let back = decay_constant(half_life(x).unwrap()).unwrap();
        prop_assert!(rel_close(back, x, 1e-12), "x = {}, back = {}", x, back);

        let back = half_life(decay_constant(x).unwrap()).unwrap();
        prop_assert!(rel_close(back, x, 1e-12), "x = {}, back = {}", x, back);
    }

    /// Only an exact zero raises DivisionByZero.
    #[test]
    fn only_zero_is_rejected(x in proptest::num::f64::ANY) {
        if x == 0.0 {
            prop_assert!(half_life(x).is_err());
            prop_assert!(decay_constant(x).is_err());
        } else {
            prop_assert!(half_life(x).is_ok());
            prop_assert!(decay_constant(x).is_ok());
        }
    }
}

// ── Purity ───────────────────────────────────────────────────────────

proptest! {
    /// Evaluating any formula twice with the same arguments gives the same bits.
    #[test]
    fn evaluation_is_idempotent(
        index in 0usize..18,
        args in proptest::collection::vec(-1e6f64..1e6, 3),
    ) {
        let formula: Formula = ALL_FORMULAS[index];
        let args = &args[..formula.arity()];

        let first = formula.evaluate(args);
        let second = formula.evaluate(args);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.to_bits(), b.to_bits()),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "diverged: {:?} vs {:?}", a, b),
        }
    }
}

#[test]
fn all_formulas_len_matches_index_range() {
    assert_eq!(ALL_FORMULAS.len(), 18);
}
