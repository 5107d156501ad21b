// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng};

fn is_unitary(matrix: &Array2<Complex<f64>>) -> bool {
    let adjoint = matrix.t().map(Complex::<f64>::conj);
    (matrix.dot(&adjoint) - Array2::<Complex<f64>>::eye(2))
        .map(|x| x.norm())
        .sum()
        < 1e-9
}

#[test]
fn all_unitaries_are_unitary() {
    let group = CliffordGroup::new();
    for clifford in Clifford::all() {
        assert!(is_unitary(group.unitary(clifford)), "{clifford} is not unitary");
    }
}

#[test]
fn identity_unitary_is_identity_matrix() {
    let group = CliffordGroup::new();
    let diff = group.unitary(Clifford::IDENTITY) - &Array2::<Complex<f64>>::eye(2);
    assert!(diff.map(|x| x.norm()).sum() < 1e-12);
}

#[test]
fn overlap_is_maximal_only_on_the_diagonal() {
    let group = CliffordGroup::new();
    for a in Clifford::all() {
        for b in Clifford::all() {
            let overlap = OverlapResolver::overlap(group.unitary(a), group.unitary(b));
            if a == b {
                assert!((overlap - 2.0).abs() < 1e-9, "{a} overlaps itself by {overlap}");
            } else {
                assert!(overlap < 1.5, "{a} and {b} overlap by {overlap}");
            }
        }
    }
}

#[test]
fn resolver_ignores_global_phase() {
    let group = CliffordGroup::new();
    let resolver = OverlapResolver::new(&group);
    let phase = Complex::from_polar(1.0, 0.731);
    for clifford in Clifford::all() {
        let rotated = group.unitary(clifford).map(|x| x * phase);
        assert_eq!(resolver.resolve(&rotated).expect("should resolve"), clifford);
    }
}

#[test]
fn resolver_rejects_ambiguous_unitary() {
    // Halfway between the identity and the quarter turn about X.
    let group = CliffordGroup::new();
    let resolver = OverlapResolver::new(&group);
    let ambiguous = Rotation::new(X_AXIS, FRAC_PI_2 / 2.0).unitary();
    let error = resolver
        .resolve(&ambiguous)
        .expect_err("should be ambiguous");
    assert!(matches!(error, Error::DegenerateOverlap { .. }), "{error:?}");
}

#[test]
fn minus_pi_rotation_resolves_to_pi_rotation() {
    let group = CliffordGroup::new();
    let resolver = OverlapResolver::new(&group);
    let xm = Rotation::new(X_AXIS, -PI).unitary();
    assert_eq!(resolver.resolve(&xm).expect("should resolve"), Clifford::X);
}

#[test]
fn inverse_is_an_involution() {
    for clifford in Clifford::all() {
        assert_eq!(clifford.inverse().inverse(), clifford);
    }
}

#[test]
fn inverse_unitary_is_adjoint_up_to_phase() {
    let group = CliffordGroup::new();
    for clifford in Clifford::all() {
        let adjoint = group.unitary(clifford).t().map(Complex::<f64>::conj);
        let overlap = OverlapResolver::overlap(&adjoint, group.unitary(clifford.inverse()));
        assert!((overlap - 2.0).abs() < 1e-9, "{clifford}");
    }
}

#[test]
fn try_from_rejects_out_of_range_ids() {
    assert_eq!(Clifford::try_from(23).expect("in range").index(), 23);
    assert!(matches!(
        Clifford::try_from(24),
        Err(Error::CliffordOutOfRange(24))
    ));
}

#[test]
fn display_uses_element_id() {
    assert_eq!(Clifford::X.to_string(), "C2");
}

#[test]
fn sampling_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; CLIFFORD_COUNT];
    for _ in 0..2000 {
        let clifford: Clifford = rng.sample(Standard);
        seen[clifford.index()] = true;
    }
    assert!(seen.iter().all(|seen| *seen));
}
