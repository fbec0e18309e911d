pub mod config;
pub(crate) mod rules;

pub use config::{ClinicalConstants, ConstantsError};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::UserInput;
use super::factors::{Diagnostics, FactorKind, Factors, NEUTRAL};
use super::report::{generate_report, Report};
use rules::{FactorDetail, FactorOutcome};

/// Everything produced by one calculation. Never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationState {
    pub input: UserInput,
    pub factors: Factors,
    pub diagnostics: Diagnostics,
    pub report: Report,
}

/// Stateless engine applying the clinical table to one patient snapshot.
#[derive(Debug, Clone, Default)]
pub struct PrognosisEngine {
    constants: ClinicalConstants,
}

impl PrognosisEngine {
    pub fn new(constants: ClinicalConstants) -> Self {
        Self { constants }
    }

    /// Validates the table before accepting it.
    pub fn try_new(constants: ClinicalConstants) -> Result<Self, ConstantsError> {
        constants.validate()?;
        Ok(Self::new(constants))
    }

    pub fn constants(&self) -> &ClinicalConstants {
        &self.constants
    }

    pub fn evaluate(&self, input: &UserInput) -> EvaluationState {
        let baseline = rules::base_age_probability(input.age, &self.constants);

        let mut anomalies: Vec<String> = baseline.anomaly.into_iter().collect();
        anomalies.extend(
            input
                .non_finite_fields()
                .into_iter()
                .map(|field| format!("{field} no es un número finito; se ignora")),
        );
        anomalies.extend(
            input
                .negative_fields()
                .into_iter()
                .map(|(field, value)| format!("{field} negativo ({value}); se ignora")),
        );

        let seed = Accumulator {
            factors: Factors::neutral(baseline.probability),
            diagnostics: Diagnostics {
                age_comment: baseline.comment,
                anomalies,
                ..Diagnostics::default()
            },
        };

        let Accumulator {
            factors,
            diagnostics,
        } = FactorKind::ordered()
            .into_iter()
            .fold(seed, |acc, kind| {
                acc.merge(kind, rules::evaluate(kind, input, &self.constants))
            });

        for anomaly in &diagnostics.anomalies {
            warn!(age = input.age, %anomaly, "substituted input during prognosis evaluation");
        }

        let numeric_prognosis = factors.prognosis();
        let report = generate_report(
            numeric_prognosis,
            &diagnostics,
            input,
            &factors,
            &self.constants,
        );

        debug!(
            base = factors.base_age_probability,
            prognosis = numeric_prognosis,
            category = ?report.category,
            findings = report.findings.len(),
            missing = diagnostics.missing_data.len(),
            "prognosis evaluated"
        );

        EvaluationState {
            input: input.sanitized(),
            factors,
            diagnostics,
            report,
        }
    }
}

/// Fold state: each evaluator's partial result is merged into a fresh value.
struct Accumulator {
    factors: Factors,
    diagnostics: Diagnostics,
}

impl Accumulator {
    fn merge(self, kind: FactorKind, outcome: FactorOutcome) -> Self {
        let FactorOutcome {
            factor,
            comment,
            missing_data,
            anomalies,
            detail,
        } = outcome;

        let mut diagnostics = self.diagnostics;
        diagnostics.comments.insert(kind, comment);
        diagnostics.missing_data.extend(missing_data);
        diagnostics.anomalies.extend(anomalies);
        match detail {
            Some(FactorDetail::Pcos(severity)) => diagnostics.pcos_severity = Some(severity),
            Some(FactorDetail::OvarianReserve(reserve)) => {
                diagnostics.ovarian_reserve = Some(reserve)
            }
            Some(FactorDetail::Male(severity)) => diagnostics.male_severity = Some(severity),
            None => {}
        }

        Self {
            factors: self.factors.with(kind, bounded_multiplier(factor)),
            diagnostics,
        }
    }
}

/// Keeps multipliers inside `[0, 1]`; a non-finite value falls back to neutral.
fn bounded_multiplier(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        NEUTRAL
    }
}
