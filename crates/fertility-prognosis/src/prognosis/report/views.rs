use serde::{Deserialize, Serialize};

use crate::prognosis::factors::FactorKind;

/// Prognosis band shown to the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrognosisCategory {
    Bueno,
    Moderado,
    Bajo,
    /// The numeric prognosis could not be computed.
    Error,
}

impl PrognosisCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bueno => "BUENO",
            Self::Moderado => "MODERADO",
            Self::Bajo => "BAJO",
            Self::Error => "ERROR",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Bueno => "🟢",
            Self::Moderado => "🟡",
            Self::Bajo => "🔴",
            Self::Error => "⚠️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkComparison {
    NotablyAbove,
    Similar,
    NotablyBelow,
    NotApplicable,
}

/// Patient prognosis against the average for the same age bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub bracket: Option<String>,
    pub benchmark_value: Option<f64>,
    pub comparison: BenchmarkComparison,
    pub phrase: String,
}

/// Lookup key into the clinical content library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKey {
    TubalLigation,
    UnilateralTubalObstruction,
    BilateralTubalObstruction,
    UterineMalformation,
    MildEndometriosis,
    SevereEndometriosis,
    SubmucosalMyoma,
    IntramuralMyoma,
    SubserosalMyoma,
    FocalAdenomyosis,
    DiffuseAdenomyosis,
    EndometrialPolyp,
    MultiplePolyps,
    Pcos,
    LowOvarianReserve,
    VeryLowOvarianReserve,
    MaleFactor,
    Azoospermia,
    Underweight,
    Overweight,
    Obesity,
    ShortCycle,
    LongCycle,
    SubclinicalHypothyroidism,
    Hypothyroidism,
    Hyperthyroidism,
    ThyroidAutoimmunity,
    Hyperprolactinemia,
    InsulinResistance,
    ProlongedInfertility,
    PelvicAdhesionRisk,
}

/// Clinical insight tied to one sub-optimal factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub factor: FactorKind,
    pub key: FindingKey,
    pub title: String,
    pub multiplier: f64,
    pub definition: String,
    pub justification: String,
    pub recommendations: Vec<String>,
}

/// Display-oriented summary of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Percentage in `[0, 100]`.
    pub numeric_prognosis: f64,
    pub prognosis_label: String,
    pub category: PrognosisCategory,
    pub emoji: String,
    pub phrases: Vec<String>,
    pub benchmark: Benchmark,
    pub findings: Vec<Finding>,
    pub missing_data: Vec<String>,
}
