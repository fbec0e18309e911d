use fertility_prognosis::config::AppConfig;
use fertility_prognosis::error::AppError;
use fertility_prognosis::prognosis::{
    ClinicalConstants, ClinicalTableLoader, FactorKind, ReportRepository, RepositoryError,
    StoredReport, UserInput,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reports kept before the oldest ones are evicted.
const DEFAULT_REPORT_CAPACITY: usize = 10_000;

/// Process-local report store holding at most `capacity` reports; the oldest is evicted first.
#[derive(Clone)]
pub(crate) struct InMemoryReportRepository {
    store: Arc<Mutex<ReportStore>>,
}

#[derive(Default)]
struct ReportStore {
    records: HashMap<String, StoredReport>,
    order: VecDeque<String>,
    capacity: usize,
}

impl InMemoryReportRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            store: Arc::new(Mutex::new(ReportStore {
                capacity: capacity.max(1),
                ..ReportStore::default()
            })),
        }
    }
}

impl Default for InMemoryReportRepository {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_REPORT_CAPACITY)
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self.store.lock().map_err(|_| poisoned())?;
        if guard.records.contains_key(&record.key) {
            return Err(RepositoryError::Conflict);
        }

        while guard.records.len() >= guard.capacity {
            let Some(oldest) = guard.order.pop_front() else {
                break;
            };
            guard.records.remove(&oldest);
            debug!(key = %oldest, "evicted stored report");
        }

        guard.order.push_back(record.key.clone());
        guard.records.insert(record.key.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, key: &str) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self.store.lock().map_err(|_| poisoned())?;
        Ok(guard.records.get(key).cloned())
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("report store mutex poisoned".to_string())
}

/// Built-in clinical table, or the CSV overrides named by `APP_CLINICAL_TABLE`.
pub(crate) fn load_constants(config: &AppConfig) -> Result<ClinicalConstants, AppError> {
    match &config.clinical.constants_table {
        Some(path) => {
            let constants = ClinicalTableLoader::from_path(path)?;
            info!(path = %path.display(), "clinical table overrides applied");
            Ok(constants)
        }
        None => Ok(ClinicalConstants::default()),
    }
}

/// Reads a `UserInput` JSON document from disk.
pub(crate) fn read_input(path: &Path) -> Result<UserInput, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn parse_factor(raw: &str) -> Result<FactorKind, String> {
    FactorKind::parse(raw).ok_or_else(|| {
        let known: Vec<String> = FactorKind::ordered()
            .iter()
            .filter_map(|kind| serde_json::to_value(kind).ok())
            .filter_map(|value| value.as_str().map(str::to_string))
            .collect();
        format!("unknown factor '{raw}' (expected one of: {})", known.join(", "))
    })
}
