//! Property-based tests for the prognosis engine.
//!
//! These tests verify invariants that should hold for all inputs:
//! - An age-only input composes to the pure baseline
//! - Tubal ligation always yields 0 and BAJO
//! - Evaluation is deterministic and its output round-trips through JSON
//! - Simulations never lower the prognosis and never touch the evaluated state

use fertility_prognosis::prognosis::{
    simulate_all_improvements, simulate_factor, AdenomyosisType, EvaluationState, FactorKind,
    Factors, HsgResult, MyomaType, PolypType, PrognosisCategory, PrognosisEngine, UserInput,
};
use proptest::prelude::*;

fn myoma() -> impl Strategy<Value = MyomaType> {
    prop_oneof![
        Just(MyomaType::None),
        Just(MyomaType::Submucosal),
        Just(MyomaType::IntramuralLarge),
        Just(MyomaType::Subserosal),
    ]
}

fn adenomyosis() -> impl Strategy<Value = AdenomyosisType> {
    prop_oneof![
        Just(AdenomyosisType::None),
        Just(AdenomyosisType::Focal),
        Just(AdenomyosisType::Diffuse),
    ]
}

fn polyp() -> impl Strategy<Value = PolypType> {
    prop_oneof![
        Just(PolypType::None),
        Just(PolypType::Small),
        Just(PolypType::Large),
        Just(PolypType::Multiple),
    ]
}

fn hsg() -> impl Strategy<Value = Option<HsgResult>> {
    proptest::option::of(prop_oneof![
        Just(HsgResult::Normal),
        Just(HsgResult::Unilateral),
        Just(HsgResult::Bilateral),
        Just(HsgResult::Malformation),
    ])
}

fn factor_kind() -> impl Strategy<Value = FactorKind> {
    (0usize..17).prop_map(|index| FactorKind::ordered()[index])
}

prop_compose! {
    fn user_input()(
        age in 16.0f64..60.0,
        body in (
            proptest::option::of(15.0f64..45.0),
            proptest::option::of(18.0f64..60.0),
            proptest::option::of(0.0f64..10.0),
        ),
        history in (
            any::<bool>(),
            0u8..=4,
            myoma(),
            adenomyosis(),
            polyp(),
            hsg(),
            any::<bool>(),
            proptest::option::of(0u8..5),
        ),
        labs in (
            proptest::option::of(0.0f64..8.0),
            proptest::option::of(2.0f64..60.0),
            proptest::option::of(0.01f64..8.0),
            proptest::option::of(any::<bool>()),
            proptest::option::of(0.5f64..6.0),
        ),
        male in (
            proptest::option::of(0.0f64..80.0),
            proptest::option::of(0.0f64..70.0),
            proptest::option::of(0.0f64..12.0),
        ),
    ) -> UserInput {
        let (bmi, cycle_duration, infertility_duration) = body;
        let (
            has_pcos,
            endometriosis_grade,
            myoma_type,
            adenomyosis_type,
            polyp_type,
            hsg_result,
            has_pelvic_surgery,
            pelvic_surgeries_number,
        ) = history;
        let (amh, prolactin, tsh, tpo_ab_positive, homa_ir) = labs;
        let (sperm_concentration, sperm_progressive_motility, sperm_normal_morphology) = male;

        UserInput {
            bmi,
            cycle_duration,
            infertility_duration,
            has_pcos,
            endometriosis_grade,
            myoma_type,
            adenomyosis_type,
            polyp_type,
            hsg_result,
            has_pelvic_surgery,
            pelvic_surgeries_number,
            amh,
            prolactin,
            tsh,
            tpo_ab_positive,
            homa_ir,
            sperm_concentration,
            sperm_progressive_motility,
            sperm_normal_morphology,
            ..UserInput::new(age)
        }
    }
}

fn evaluate(input: &UserInput) -> EvaluationState {
    PrognosisEngine::default().evaluate(input)
}

proptest! {
    #[test]
    fn prop_age_only_input_is_the_baseline(age in -10.0f64..90.0) {
        let state = evaluate(&UserInput::new(age));

        prop_assert_eq!(state.report.numeric_prognosis, state.factors.base_age_probability);
        prop_assert!(state.factors.suboptimal().is_empty());
    }

    #[test]
    fn prop_tubal_ligation_always_blocks(input in user_input()) {
        let input = UserInput { has_tubal_ligation: true, ..input };

        let state = evaluate(&input);

        prop_assert_eq!(state.report.numeric_prognosis, 0.0);
        prop_assert_eq!(state.report.category, PrognosisCategory::Bajo);
    }

    #[test]
    fn prop_multipliers_stay_in_the_unit_interval(input in user_input()) {
        let state = evaluate(&input);

        for kind in FactorKind::ordered() {
            let value = state.factors.get(kind);
            prop_assert!((0.0..=1.0).contains(&value), "{:?} = {}", kind, value);
        }
        prop_assert!(state.report.numeric_prognosis <= state.factors.base_age_probability);
    }

    #[test]
    fn prop_evaluation_is_deterministic(input in user_input()) {
        prop_assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn prop_output_round_trips_through_json(input in user_input()) {
        let state = evaluate(&input);

        let json = serde_json::to_string(&state).expect("serializes");
        let restored: EvaluationState = serde_json::from_str(&json).expect("deserializes");

        prop_assert_eq!(restored, state);
    }

    #[test]
    fn prop_non_finite_age_still_round_trips(
        input in user_input(),
        age in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let state = evaluate(&UserInput { age, ..input });

        let json = serde_json::to_string(&state).expect("serializes");
        let restored: EvaluationState = serde_json::from_str(&json).expect("deserializes");

        prop_assert_eq!(restored, state);
    }

    #[test]
    fn prop_simulations_are_monotone_and_pure(input in user_input()) {
        let state = evaluate(&input);
        let snapshot = state.clone();

        let all = simulate_all_improvements(&state);
        for kind in state.factors.suboptimal() {
            let single = simulate_factor(&state, kind, "");
            prop_assert!(all.new_prognosis >= single.new_prognosis);
            prop_assert!(single.new_prognosis >= state.report.numeric_prognosis);
        }

        prop_assert_eq!(state, snapshot);
    }

    #[test]
    fn prop_two_overrides_compose_multiplicatively(
        base in 0.5f64..25.0,
        first in factor_kind(),
        second in factor_kind(),
        f1 in 0.0f64..=1.0,
        f2 in 0.0f64..=1.0,
    ) {
        prop_assume!(first != second);

        let factors = Factors::neutral(base).with(first, f1).with(second, f2);

        let expected = base * f1 * f2;
        prop_assert!((factors.prognosis() - expected).abs() <= 1e-9 * base.max(1.0));
    }

    #[test]
    fn prop_missing_amh_and_hsg_are_both_reported(input in user_input()) {
        let input = UserInput { amh: None, hsg_result: None, ..input };

        let state = evaluate(&input);

        let missing = &state.diagnostics.missing_data;
        prop_assert!(missing.iter().any(|notice| notice.contains("AMH")));
        prop_assert!(missing.iter().any(|notice| notice.contains("HSG")));
    }
}
