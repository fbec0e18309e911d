use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::UserInput;
use super::evaluation::{EvaluationState, PrognosisEngine};
use super::factors::FactorKind;
use super::repository::{ReportRepository, RepositoryError, StoredReport};
use super::simulation::{self, SimulationResult};

/// Service composing the engine with the report store.
pub struct PrognosisService<R> {
    repository: Arc<R>,
    engine: Arc<PrognosisEngine>,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_key() -> String {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("report-{id:06}")
}

impl<R> PrognosisService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: PrognosisEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
        }
    }

    pub fn engine(&self) -> &PrognosisEngine {
        &self.engine
    }

    /// Evaluate without storing anything.
    pub fn preview(&self, input: &UserInput) -> EvaluationState {
        self.engine.evaluate(input)
    }

    /// Evaluate and persist the serialized state under a fresh key.
    pub fn evaluate_and_store(
        &self,
        input: &UserInput,
    ) -> Result<(StoredReport, EvaluationState), ServiceError> {
        let state = self.engine.evaluate(input);
        let payload = serde_json::to_string(&state).map_err(ServiceError::Serialize)?;

        let stored = self.repository.insert(StoredReport {
            key: next_report_key(),
            payload,
            stored_at: Utc::now(),
        })?;

        info!(
            key = %stored.key,
            prognosis = state.report.numeric_prognosis,
            "prognosis report stored"
        );
        Ok((stored, state))
    }

    /// Rehydrate a stored evaluation.
    pub fn load(&self, key: &str) -> Result<EvaluationState, ServiceError> {
        let stored = self
            .repository
            .fetch(key)?
            .ok_or(RepositoryError::NotFound)?;

        serde_json::from_str(&stored.payload).map_err(|error| {
            warn!(%key, %error, "stored report could not be deserialized");
            ServiceError::CorruptReport {
                key: key.to_string(),
            }
        })
    }

    pub fn simulate_factor(
        &self,
        key: &str,
        kind: FactorKind,
        explanation: Option<String>,
    ) -> Result<SimulationResult, ServiceError> {
        let state = self.load(key)?;
        let explanation = explanation.unwrap_or_else(|| {
            format!(
                "Simulación con el factor {} en su valor óptimo.",
                kind.label()
            )
        });
        Ok(simulation::simulate_factor(&state, kind, explanation))
    }

    pub fn simulate_all(&self, key: &str) -> Result<SimulationResult, ServiceError> {
        let state = self.load(key)?;
        Ok(simulation::simulate_all_improvements(&state))
    }

    pub fn improvements(&self, key: &str) -> Result<Vec<SimulationResult>, ServiceError> {
        let state = self.load(key)?;
        Ok(simulation::rank_improvements(&state))
    }
}

/// Error raised by the prognosis service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("could not load report {key}")]
    CorruptReport { key: String },
    #[error("could not serialize evaluation: {0}")]
    Serialize(serde_json::Error),
}
