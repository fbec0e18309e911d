//! Independent clinical factor evaluators.
//!
//! Each evaluator reads only the raw fields of its own dimension and returns a multiplier in
//! `[0, 1]`. None of them sees another evaluator's result, so any single multiplier can be
//! overridden later without invalidating the others.

mod gynecology;
mod history;
mod laboratory;
mod male;

pub(crate) use gynecology::{
    adenomyosis_factor, endometriosis_factor, hsg_factor, myoma_factor, otb_factor, pcos_factor,
    polyp_factor,
};
pub(crate) use history::{bmi_factor, cycle_factor, infertility_duration_factor, pelvic_surgery_factor};
pub(crate) use laboratory::{amh_factor, homa_factor, prolactin_factor, tpo_factor, tsh_factor};
pub(crate) use male::male_factor;

use super::config::{AgeBracket, ClinicalConstants};
use crate::prognosis::domain::{measured, UserInput};
use crate::prognosis::factors::{
    FactorKind, MaleFactorSeverity, OvarianReserve, PcosSeverity, NEUTRAL,
};

/// Categorical detail some evaluators expose for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FactorDetail {
    Pcos(PcosSeverity),
    OvarianReserve(OvarianReserve),
    Male(MaleFactorSeverity),
}

/// Partial result of one evaluator.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FactorOutcome {
    pub factor: f64,
    pub comment: String,
    pub missing_data: Vec<String>,
    pub anomalies: Vec<String>,
    pub detail: Option<FactorDetail>,
}

impl FactorOutcome {
    pub fn neutral(comment: impl Into<String>) -> Self {
        Self::penalty(NEUTRAL, comment)
    }

    pub fn penalty(factor: f64, comment: impl Into<String>) -> Self {
        Self {
            factor,
            comment: comment.into(),
            missing_data: Vec::new(),
            anomalies: Vec::new(),
            detail: None,
        }
    }

    /// Neutral multiplier plus a missing-data notice; absent labs are surfaced, never dropped.
    pub fn missing(comment: impl Into<String>, notice: impl Into<String>) -> Self {
        Self {
            missing_data: vec![notice.into()],
            ..Self::neutral(comment)
        }
    }

    pub fn with_detail(mut self, detail: FactorDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_anomaly(mut self, anomaly: impl Into<String>) -> Self {
        self.anomalies.push(anomaly.into());
        self
    }
}

/// Age baseline lookup result.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BaselineOutcome {
    pub probability: f64,
    pub comment: String,
    pub anomaly: Option<String>,
}

/// Maps age to the base per-cycle probability (a percentage, not a multiplier).
pub(crate) fn base_age_probability(age: f64, constants: &ClinicalConstants) -> BaselineOutcome {
    let table = &constants.age;
    match AgeBracket::find(&table.brackets, table.min_age, age) {
        Some(bracket) => BaselineOutcome {
            probability: bracket.value,
            comment: format!(
                "Probabilidad basal por ciclo para {}: {:.1}%",
                bracket.label, bracket.value
            ),
            anomaly: None,
        },
        None => BaselineOutcome {
            probability: table.fallback_probability,
            comment: format!(
                "Edad fuera de los rangos evaluables; se usa una probabilidad basal conservadora de {:.1}%",
                table.fallback_probability
            ),
            anomaly: Some(if age.is_finite() {
                format!("edad {age} fuera del rango evaluable")
            } else {
                "edad no numérica".to_string()
            }),
        },
    }
}

/// Runs the evaluator owning `kind`. Total over [`FactorKind`], one evaluator per identifier.
pub(crate) fn evaluate(
    kind: FactorKind,
    input: &UserInput,
    constants: &ClinicalConstants,
) -> FactorOutcome {
    match kind {
        FactorKind::Otb => otb_factor(input.has_tubal_ligation),
        FactorKind::Hsg => hsg_factor(input.hsg_result, &constants.hsg),
        FactorKind::Endometriosis => {
            endometriosis_factor(input.endometriosis_grade, &constants.endometriosis)
        }
        FactorKind::Myoma => myoma_factor(input.myoma_type, &constants.myoma),
        FactorKind::Adenomyosis => {
            adenomyosis_factor(input.adenomyosis_type, &constants.adenomyosis)
        }
        FactorKind::Polyp => polyp_factor(input.polyp_type, &constants.polyp),
        FactorKind::Pcos => pcos_factor(
            input.has_pcos,
            input.resolved_bmi(),
            measured(input.cycle_duration),
            &constants.pcos,
            &constants.cycle,
        ),
        FactorKind::Amh => amh_factor(measured(input.amh), &constants.amh),
        FactorKind::Male => male_factor(
            measured(input.sperm_concentration),
            measured(input.sperm_progressive_motility),
            measured(input.sperm_normal_morphology),
            &constants.male,
        ),
        FactorKind::Bmi => bmi_factor(input.resolved_bmi(), &constants.bmi),
        FactorKind::Cycle => cycle_factor(measured(input.cycle_duration), &constants.cycle),
        FactorKind::Tsh => tsh_factor(measured(input.tsh), &constants.tsh),
        FactorKind::Tpo => tpo_factor(input.tpo_ab_positive, &constants.tpo),
        FactorKind::Prolactin => prolactin_factor(measured(input.prolactin), &constants.prolactin),
        FactorKind::Homa => homa_factor(input.resolved_homa_ir(), &constants.homa),
        FactorKind::InfertilityDuration => infertility_duration_factor(
            measured(input.infertility_duration),
            &constants.infertility_duration,
        ),
        FactorKind::PelvicSurgery => pelvic_surgery_factor(
            input.has_pelvic_surgery,
            input.pelvic_surgeries_number,
            &constants.pelvic_surgery,
        ),
    }
}
