//! Fertility prognosis engine: factor evaluators, multiplicative composer, report generator and
//! simulator, plus the report-store boundary used by the HTTP host.

pub mod clinical_table;
pub mod domain;
pub mod evaluation;
pub mod factors;
pub mod report;
pub mod repository;
pub mod router;
pub mod service;
pub mod simulation;

#[cfg(test)]
mod tests;

pub use clinical_table::{ClinicalTableError, ClinicalTableLoader};
pub use domain::{AdenomyosisType, HsgResult, MyomaType, PolypType, UserInput};
pub use evaluation::{ClinicalConstants, ConstantsError, EvaluationState, PrognosisEngine};
pub use factors::{
    Diagnostics, FactorKind, Factors, MaleFactorSeverity, OvarianReserve, PcosSeverity, NEUTRAL,
};
pub use report::{
    Benchmark, BenchmarkComparison, Finding, FindingKey, PrognosisCategory, Report,
};
pub use repository::{ReportRepository, RepositoryError, StoredReport};
pub use router::{prognosis_router, SimulationRequest, StoredEvaluationView};
pub use service::{PrognosisService, ServiceError};
pub use simulation::{
    rank_improvements, simulate_all_improvements, simulate_factor, SimulationResult,
    SimulationTarget,
};
