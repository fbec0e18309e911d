use super::content::clinical_content;
use super::views::{Finding, FindingKey};
use crate::prognosis::domain::{AdenomyosisType, HsgResult, MyomaType, PolypType, UserInput};
use crate::prognosis::evaluation::ClinicalConstants;
use crate::prognosis::factors::{
    Diagnostics, FactorKind, Factors, MaleFactorSeverity, OvarianReserve, NEUTRAL,
};

/// One finding per factor strictly below neutral, in `FactorKind` order.
pub(crate) fn collect_findings(
    factors: &Factors,
    diagnostics: &Diagnostics,
    input: &UserInput,
    constants: &ClinicalConstants,
) -> Vec<Finding> {
    FactorKind::ordered()
        .into_iter()
        .filter(|kind| factors.get(*kind) < NEUTRAL)
        .map(|kind| {
            let key = finding_key(kind, diagnostics, input, constants);
            let content = clinical_content(key);
            let title = match (kind, diagnostics.pcos_severity) {
                (FactorKind::Pcos, Some(severity)) => {
                    format!("{} ({})", content.title, severity.label().to_lowercase())
                }
                _ => content.title.to_string(),
            };

            Finding {
                factor: kind,
                key,
                title,
                multiplier: factors.get(kind),
                definition: content.definition.to_string(),
                justification: content.justification.to_string(),
                recommendations: content
                    .recommendations
                    .iter()
                    .map(|line| line.to_string())
                    .collect(),
            }
        })
        .collect()
}

/// Selects the content entry for a sub-optimal factor. Sub-typed factors pick the specific entry
/// from the input; each arm also has a fallback so a forced multiplier still resolves.
fn finding_key(
    kind: FactorKind,
    diagnostics: &Diagnostics,
    input: &UserInput,
    constants: &ClinicalConstants,
) -> FindingKey {
    match kind {
        FactorKind::Otb => FindingKey::TubalLigation,
        FactorKind::Hsg => match input.hsg_result {
            Some(HsgResult::Bilateral) => FindingKey::BilateralTubalObstruction,
            Some(HsgResult::Malformation) => FindingKey::UterineMalformation,
            _ => FindingKey::UnilateralTubalObstruction,
        },
        FactorKind::Endometriosis if input.endometriosis_grade >= 3 => {
            FindingKey::SevereEndometriosis
        }
        FactorKind::Endometriosis => FindingKey::MildEndometriosis,
        FactorKind::Myoma => match input.myoma_type {
            MyomaType::IntramuralLarge => FindingKey::IntramuralMyoma,
            MyomaType::Subserosal => FindingKey::SubserosalMyoma,
            MyomaType::Submucosal | MyomaType::None => FindingKey::SubmucosalMyoma,
        },
        FactorKind::Adenomyosis => match input.adenomyosis_type {
            AdenomyosisType::Diffuse => FindingKey::DiffuseAdenomyosis,
            AdenomyosisType::Focal | AdenomyosisType::None => FindingKey::FocalAdenomyosis,
        },
        FactorKind::Polyp => match input.polyp_type {
            PolypType::Multiple => FindingKey::MultiplePolyps,
            PolypType::Small | PolypType::Large | PolypType::None => FindingKey::EndometrialPolyp,
        },
        FactorKind::Pcos => FindingKey::Pcos,
        FactorKind::Amh => match diagnostics.ovarian_reserve {
            Some(OvarianReserve::VeryLow) => FindingKey::VeryLowOvarianReserve,
            _ => FindingKey::LowOvarianReserve,
        },
        FactorKind::Male => match diagnostics.male_severity {
            Some(MaleFactorSeverity::Azoospermia) => FindingKey::Azoospermia,
            _ => FindingKey::MaleFactor,
        },
        FactorKind::Bmi => match input.resolved_bmi() {
            Some(bmi) if bmi < constants.bmi.underweight_below => FindingKey::Underweight,
            Some(bmi) if bmi >= constants.bmi.obese_from => FindingKey::Obesity,
            _ => FindingKey::Overweight,
        },
        FactorKind::Cycle => match input.cycle_duration {
            Some(days) if days <= constants.cycle.short_at_or_below => FindingKey::ShortCycle,
            _ => FindingKey::LongCycle,
        },
        FactorKind::Tsh => match input.tsh {
            Some(tsh) if tsh < constants.tsh.low_below => FindingKey::Hyperthyroidism,
            Some(tsh) if tsh > constants.tsh.high_above => FindingKey::Hypothyroidism,
            _ => FindingKey::SubclinicalHypothyroidism,
        },
        FactorKind::Tpo => FindingKey::ThyroidAutoimmunity,
        FactorKind::Prolactin => FindingKey::Hyperprolactinemia,
        FactorKind::Homa => FindingKey::InsulinResistance,
        FactorKind::InfertilityDuration => FindingKey::ProlongedInfertility,
        FactorKind::PelvicSurgery => FindingKey::PelvicAdhesionRisk,
    }
}
