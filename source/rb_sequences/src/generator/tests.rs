// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn standard_catalogue_is_valid() {
    let set = GeneratorSet::new(STANDARD.to_vec()).expect("standard catalogue should validate");
    assert_eq!(set.len(), 9);
    let described = set
        .generators()
        .map(|generator| set.describe(generator))
        .join(", ");
    assert_eq!(
        described,
        "QId, X90p, X90m, Y90p, Y90m, Xp|Xm, Xp|Xm, Yp|Ym, Yp|Ym"
    );
}

#[test]
fn empty_catalogue_is_rejected() {
    assert!(matches!(
        GeneratorSet::new(Vec::new()),
        Err(Error::EmptyGeneratorSet)
    ));
}

#[test]
fn generator_without_labels_is_rejected() {
    let specs = vec![spec(0, &[PulseLabel::QId]), spec(1, &[])];
    assert!(matches!(
        GeneratorSet::new(specs),
        Err(Error::GeneratorWithoutLabels(1))
    ));
}

#[test]
fn generator_with_three_labels_is_rejected() {
    let specs = vec![spec(2, &[PulseLabel::Xp, PulseLabel::Xm, PulseLabel::Xp])];
    assert!(matches!(
        GeneratorSet::new(specs),
        Err(Error::TooManyLabels {
            generator: 0,
            count: 3
        })
    ));
}

#[test]
fn label_for_wrong_element_is_rejected() {
    let specs = vec![spec(2, &[PulseLabel::Xp, PulseLabel::Yp])];
    let error = GeneratorSet::new(specs).expect_err("Yp is not a π rotation about X");
    assert_eq!(
        error.to_string(),
        "pulse label Yp of generator 0 implements C5, expected C2"
    );
}

#[test]
fn get_rejects_out_of_range_ids() {
    let set = GeneratorSet::standard();
    assert_eq!(set.get(8).expect("in range").index(), 8);
    assert!(matches!(
        set.get(9),
        Err(Error::GeneratorOutOfRange { id: 9, count: 9 })
    ));
}

#[test]
fn single_label_generators_always_emit_their_label() {
    let set = GeneratorSet::standard();
    let mut rng = StdRng::seed_from_u64(0);
    let x90p = set.get(1).expect("in range");
    for _ in 0..20 {
        assert_eq!(set.choose_label(x90p, &mut rng), PulseLabel::X90p);
    }
}

#[test]
fn two_label_generators_emit_both_labels() {
    let set = GeneratorSet::standard();
    let mut rng = StdRng::seed_from_u64(0);
    let x180 = set.get(5).expect("in range");
    let mut seen_xp = false;
    let mut seen_xm = false;
    for _ in 0..100 {
        match set.choose_label(x180, &mut rng) {
            PulseLabel::Xp => seen_xp = true,
            PulseLabel::Xm => seen_xm = true,
            other => panic!("unexpected label {other}"),
        }
    }
    assert!(seen_xp && seen_xm);
}

#[test]
fn labels_parse_from_their_names() {
    for label in enum_iterator::all::<PulseLabel>() {
        assert_eq!(label.as_str().parse::<PulseLabel>().expect("known label"), label);
    }
    assert!(matches!(
        "X45p".parse::<PulseLabel>(),
        Err(Error::UnknownPulseLabel(name)) if name == "X45p"
    ));
}
