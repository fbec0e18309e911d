mod content;
mod insights;
mod summary;
pub mod views;

pub use views::{
    Benchmark, BenchmarkComparison, Finding, FindingKey, PrognosisCategory, Report,
};

pub(crate) use summary::{blocker_active, generate_report};
