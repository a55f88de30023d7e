use inherit_core::{
    ChildSex, EstimateError, EyeColor, HairColor, HeightInputs, InputField, InputProblem, Outcome,
    ParentTraits, Resolution, RuleBook, SkinTone, TraitCategory, TraitValue, bundle, describe,
    estimate_height, estimate_traits,
};

fn ordered_pairs<V: TraitValue>() -> impl Iterator<Item = (V, V)> {
    V::ALL
        .iter()
        .flat_map(|&a| V::ALL.iter().map(move |&b| (a, b)))
}

#[test]
fn lookups_are_symmetric_for_every_pair() {
    let book = RuleBook::default_book();
    for (a, b) in ordered_pairs::<EyeColor>() {
        assert_eq!(book.resolve_eye(a, b), book.resolve_eye(b, a), "eye {a:?}/{b:?}");
    }
    for (a, b) in ordered_pairs::<HairColor>() {
        assert_eq!(book.resolve_hair(a, b), book.resolve_hair(b, a), "hair {a:?}/{b:?}");
    }
    for (a, b) in ordered_pairs::<SkinTone>() {
        assert_eq!(book.resolve_skin(a, b), book.resolve_skin(b, a), "skin {a:?}/{b:?}");
    }
}

#[test]
fn every_authored_distribution_totals_one_hundred_percent() {
    let book = RuleBook::default_book();
    let totals = book
        .eye
        .iter()
        .map(|(_, d)| d.total_per_mille())
        .chain(book.hair.iter().map(|(_, d)| d.total_per_mille()))
        .chain(book.skin.iter().map(|(_, d)| d.total_per_mille()));
    for total in totals {
        assert_eq!(total, 1_000);
    }
}

#[test]
fn resolution_is_total_over_enumerations() {
    let book = RuleBook::default_book();
    let mut authored = 0;
    let mut insufficient = 0;
    for (a, b) in ordered_pairs::<HairColor>() {
        match book.resolve_hair(a, b) {
            Resolution::Authored(dist) => {
                assert!(!dist.shares().is_empty());
                authored += 1;
            }
            Resolution::InsufficientData => insufficient += 1,
        }
    }
    assert_eq!(authored + insufficient, 16);
    assert_eq!(authored, 6);
}

#[test]
fn named_lookup_rejects_values_outside_enumeration() {
    let err = RuleBook::default_book()
        .resolve_by_name(TraitCategory::Eye, "Purple", "Brown")
        .unwrap_err();
    assert_eq!(
        err,
        EstimateError::InvalidInput {
            field: InputField::MotherEye,
            problem: InputProblem::Unrecognized("Purple".to_string()),
        }
    );
}

#[test]
fn height_properties() {
    let a = estimate_height(&HeightInputs::new(Some(170), Some(180), ChildSex::Male));
    let b = estimate_height(&HeightInputs::new(Some(180), Some(170), ChildSex::Male));
    assert_eq!(a, b);
    assert_eq!((a.expected_cm, a.low_cm, a.high_cm), (182, 174, 190));

    let boy = estimate_height(&HeightInputs::new(Some(168), Some(168), ChildSex::Male));
    let girl = estimate_height(&HeightInputs::new(Some(168), Some(168), ChildSex::Female));
    assert_eq!(boy.expected_cm - girl.expected_cm, 13);

    let fallback = estimate_height(&HeightInputs::from_f64(f64::NAN, f64::NAN, ChildSex::Male));
    assert_eq!(fallback.expected_cm, 177);
}

#[test]
fn end_to_end_example() {
    let mother = ParentTraits {
        eye: EyeColor::Brown,
        hair: HairColor::Black,
        skin: SkinTone::Medium,
        height_cm: Some(165),
    };
    let father = ParentTraits {
        eye: EyeColor::Blue,
        hair: HairColor::Blonde,
        skin: SkinTone::Medium,
        height_cm: Some(180),
    };
    let result = estimate_traits(&mother, &father, ChildSex::Male);

    let eye = result.eye.distribution().expect("brown/blue is authored");
    let eye_shares: Vec<(Outcome, u16)> = eye
        .shares()
        .iter()
        .map(|s| (s.outcome, s.share.per_mille()))
        .collect();
    assert_eq!(
        eye_shares,
        vec![(Outcome::Brown, 500), (Outcome::Green, 375), (Outcome::Blue, 125)]
    );
    assert_eq!(result.height.expected_cm, 179);
    assert_eq!((result.height.low_cm, result.height.high_cm), (171, 187));

    let rendered = describe(&result, bundle("en"));
    assert_eq!(rendered.eye, "Brown 50% — Green 37.5% — Blue 12.5%  (NIH)");
    assert_eq!(rendered.hair, "Black 50% — Brown/Blonde 50%");
    assert_eq!(rendered.skin, "Medium 70% — Light 15% — Dark 15%");
    assert!(!rendered.rtl);

    let rendered = describe(&result, bundle("ar"));
    assert_eq!(rendered.skin, "متوسطة 70% — فاتحة 15% — غامقة 15%");
    assert!(rendered.rtl);
}

#[test]
fn results_serialize_for_calling_layers() {
    let mother = ParentTraits {
        eye: EyeColor::Hazel,
        hair: HairColor::Red,
        skin: SkinTone::Dark,
        height_cm: None,
    };
    let result = estimate_traits(&mother, &mother, ChildSex::Female);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["eye"]["status"], "insufficient_data");
    assert_eq!(value["skin"]["status"], "authored");
    assert_eq!(value["skin"]["outcomes"][0]["citation"], "nhgri");
    assert_eq!(value["height"]["citation"], "johns_hopkins");
    // (165 + 175 - 13) / 2 = 163.5 -> 164
    assert_eq!(value["height"]["expected_cm"], 164);
}
