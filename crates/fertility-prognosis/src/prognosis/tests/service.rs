use super::common::*;
use crate::prognosis::factors::FactorKind;
use crate::prognosis::repository::{ReportRepository, RepositoryError};
use crate::prognosis::{PrognosisService, ServiceError};
use std::sync::Arc;

#[test]
fn evaluate_and_store_persists_a_rehydratable_payload() {
    let (service, repository) = build_service();

    let (stored, state) = service
        .evaluate_and_store(&scenario_a())
        .expect("evaluation stored");

    assert!(stored.key.starts_with("report-"));
    assert_eq!(stored.key.len(), "report-000000".len());
    assert_eq!(repository.len(), 1);

    let raw = repository
        .fetch(&stored.key)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(raw.payload, stored.payload);

    let loaded = service.load(&stored.key).expect("report loads");
    assert_eq!(loaded, state);
}

#[test]
fn non_numeric_age_reports_reload_from_storage() {
    let (service, _) = build_service();

    let (stored, state) = service
        .evaluate_and_store(&crate::prognosis::UserInput::new(f64::NAN))
        .expect("evaluation stored");

    let loaded = service.load(&stored.key).expect("report loads");
    assert_eq!(loaded, state);
}

#[test]
fn keys_are_unique_per_evaluation() {
    let (service, _) = build_service();

    let (first, _) = service.evaluate_and_store(&scenario_a()).expect("stored");
    let (second, _) = service.evaluate_and_store(&scenario_a()).expect("stored");

    assert_ne!(first.key, second.key);
}

#[test]
fn corrupt_payload_is_reported_as_unloadable() {
    let (service, repository) = build_service();
    repository.put_raw("report-corrupt", "{\"input\": {\"age\": 30");

    match service.load("report-corrupt") {
        Err(ServiceError::CorruptReport { key }) => assert_eq!(key, "report-corrupt"),
        other => panic!("expected corrupt report, got {other:?}"),
    }

    let error = service.simulate_all("report-corrupt").expect_err("corrupt");
    assert!(error.to_string().contains("could not load report"));
}

#[test]
fn load_propagates_not_found() {
    let (service, _) = build_service();

    match service.load("report-missing") {
        Err(ServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn store_propagates_repository_failures() {
    let service = PrognosisService::new(Arc::new(UnavailableRepository), engine());

    match service.evaluate_and_store(&scenario_a()) {
        Err(ServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected unavailable error, got {other:?}"),
    }
}

#[test]
fn simulations_run_on_rehydrated_state() {
    let (service, _) = build_service();
    let (stored, state) = service.evaluate_and_store(&scenario_c()).expect("stored");

    let single = service
        .simulate_factor(&stored.key, FactorKind::Otb, None)
        .expect("simulation");
    assert_eq!(single.original_prognosis, state.report.numeric_prognosis);
    assert!(single.explanation.contains(FactorKind::Otb.label()));

    let all = service.simulate_all(&stored.key).expect("simulation");
    assert_eq!(all.new_prognosis, state.factors.base_age_probability);

    let ranked = service.improvements(&stored.key).expect("ranking");
    assert_eq!(ranked.len(), 1);
}

#[test]
fn preview_does_not_touch_the_store() {
    let (service, repository) = build_service();

    let state = service.preview(&scenario_a());

    assert_eq!(state.report.numeric_prognosis, 17.5);
    assert_eq!(repository.len(), 0);
}
