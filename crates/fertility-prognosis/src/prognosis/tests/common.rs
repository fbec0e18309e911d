use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::prognosis::domain::{HsgResult, UserInput};
use crate::prognosis::evaluation::{EvaluationState, PrognosisEngine};
use crate::prognosis::repository::{ReportRepository, RepositoryError, StoredReport};
use crate::prognosis::{prognosis_router, PrognosisService};

/// Healthy 30 year old couple with every study reported and normal.
pub(super) fn scenario_a() -> UserInput {
    UserInput {
        bmi: Some(22.0),
        cycle_duration: Some(28.0),
        hsg_result: Some(HsgResult::Normal),
        amh: Some(2.5),
        prolactin: Some(15.0),
        tsh: Some(2.0),
        tpo_ab_positive: Some(false),
        homa_ir: Some(1.5),
        sperm_concentration: Some(40.0),
        sperm_progressive_motility: Some(50.0),
        sperm_normal_morphology: Some(5.0),
        ..UserInput::new(30.0)
    }
}

pub(super) fn scenario_c() -> UserInput {
    UserInput {
        has_tubal_ligation: true,
        ..scenario_a()
    }
}

pub(super) fn engine() -> PrognosisEngine {
    PrognosisEngine::default()
}

pub(super) fn evaluate(input: &UserInput) -> EvaluationState {
    engine().evaluate(input)
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn build_service() -> (PrognosisService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = PrognosisService::new(repository.clone(), engine());
    (service, repository)
}

pub(super) fn router_with_service(service: PrognosisService<MemoryRepository>) -> axum::Router {
    prognosis_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<String, StoredReport>>>,
}

impl MemoryRepository {
    /// Stores a raw payload, bypassing the service.
    pub(super) fn put_raw(&self, key: &str, payload: &str) {
        self.records
            .lock()
            .expect("repository mutex poisoned")
            .insert(
                key.to_string(),
                StoredReport {
                    key: key.to_string(),
                    payload: payload.to_string(),
                    stored_at: Utc::now(),
                },
            );
    }

    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.key) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.key.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, key: &str) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(key).cloned())
    }
}

pub(super) struct ConflictRepository;

impl ReportRepository for ConflictRepository {
    fn insert(&self, _record: StoredReport) -> Result<StoredReport, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _key: &str) -> Result<Option<StoredReport>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: StoredReport) -> Result<StoredReport, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _key: &str) -> Result<Option<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
