use super::common::*;
use crate::prognosis::domain::{HsgResult, MyomaType, UserInput};
use crate::prognosis::factors::FactorKind;
use crate::prognosis::report::{BenchmarkComparison, FindingKey, PrognosisCategory};

#[test]
fn scenario_a_compares_above_the_age_benchmark() {
    let report = evaluate(&scenario_a()).report;

    assert_eq!(report.emoji, "🟢");
    assert_eq!(report.prognosis_label, "17.5%");
    assert_eq!(report.benchmark.bracket.as_deref(), Some("30 a 34 años"));
    assert_eq!(report.benchmark.benchmark_value, Some(15.0));
    assert_eq!(report.benchmark.comparison, BenchmarkComparison::NotablyAbove);
}

#[test]
fn scenario_c_replaces_benchmark_with_not_applicable_text() {
    let report = evaluate(&scenario_c()).report;

    assert_eq!(report.category, PrognosisCategory::Bajo);
    assert_eq!(report.emoji, "🔴");
    assert_eq!(report.benchmark.comparison, BenchmarkComparison::NotApplicable);
    assert!(report.benchmark.bracket.is_none());
    assert!(report.benchmark.phrase.contains("no aplica"));
    assert!(report.phrases[0].contains("oclusión tubárica"));
}

#[test]
fn moderate_prognosis_below_its_bracket() {
    let input = UserInput {
        tsh: Some(6.0),
        prolactin: Some(40.0),
        ..scenario_a()
    };

    let report = evaluate(&input).report;

    assert_eq!(report.category, PrognosisCategory::Moderado);
    assert_eq!(report.emoji, "🟡");
    assert_eq!(report.benchmark.comparison, BenchmarkComparison::NotablyBelow);
}

#[test]
fn findings_follow_fixed_order_with_sub_type_keys() {
    let input = UserInput {
        tsh: Some(3.0),
        myoma_type: MyomaType::Submucosal,
        hsg_result: Some(HsgResult::Unilateral),
        bmi: Some(17.0),
        ..scenario_a()
    };

    let report = evaluate(&input).report;

    let order: Vec<(FactorKind, FindingKey)> = report
        .findings
        .iter()
        .map(|finding| (finding.factor, finding.key))
        .collect();
    assert_eq!(
        order,
        vec![
            (FactorKind::Hsg, FindingKey::UnilateralTubalObstruction),
            (FactorKind::Myoma, FindingKey::SubmucosalMyoma),
            (FactorKind::Bmi, FindingKey::Underweight),
            (FactorKind::Tsh, FindingKey::SubclinicalHypothyroidism),
        ]
    );
    for finding in &report.findings {
        assert!(finding.multiplier < 1.0);
        assert!(!finding.definition.is_empty());
        assert!(!finding.justification.is_empty());
        assert!(!finding.recommendations.is_empty());
    }
}

#[test]
fn narrative_names_the_most_limiting_finding() {
    let input = UserInput {
        tsh: Some(3.0),
        myoma_type: MyomaType::Submucosal,
        ..scenario_a()
    };

    let report = evaluate(&input).report;

    assert!(report
        .phrases
        .iter()
        .any(|phrase| phrase.contains("2 factores") && phrase.contains("Mioma submucoso")));
}

#[test]
fn missing_data_is_surfaced_as_is() {
    let state = evaluate(&UserInput::new(33.0));

    assert_eq!(state.report.missing_data, state.diagnostics.missing_data);
    assert!(!state.report.missing_data.is_empty());
    assert!(state
        .report
        .phrases
        .iter()
        .any(|phrase| phrase.starts_with("Faltan")));
}

#[test]
fn amh_finding_depends_on_reserve_category() {
    let very_low = evaluate(&UserInput {
        amh: Some(0.2),
        ..scenario_a()
    })
    .report;
    let low = evaluate(&UserInput {
        amh: Some(0.8),
        ..scenario_a()
    })
    .report;

    assert_eq!(very_low.findings[0].key, FindingKey::VeryLowOvarianReserve);
    assert_eq!(low.findings[0].key, FindingKey::LowOvarianReserve);
}
