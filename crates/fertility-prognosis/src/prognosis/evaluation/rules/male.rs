use super::{FactorDetail, FactorOutcome};
use crate::prognosis::evaluation::config::MaleConstants;
use crate::prognosis::factors::MaleFactorSeverity;

/// Combines the semen analysis into a single severity tier.
///
/// The tier counts how many measured parameters fall below their reference limit; any value
/// below its severe limit jumps straight to `Severo`, and a zero concentration is azoospermia.
pub(crate) fn male_factor(
    concentration: Option<f64>,
    motility: Option<f64>,
    morphology: Option<f64>,
    constants: &MaleConstants,
) -> FactorOutcome {
    if concentration.is_none() && motility.is_none() && morphology.is_none() {
        return FactorOutcome::missing(
            "Factor masculino no evaluado",
            "Espermatograma: no reportado; no se pudo evaluar el factor masculino",
        );
    }

    if concentration == Some(0.0) {
        return FactorOutcome::penalty(
            constants.azoospermia,
            "Espermatograma: azoospermia, ausencia de espermatozoides en el eyaculado",
        )
        .with_detail(FactorDetail::Male(MaleFactorSeverity::Azoospermia));
    }

    let parameters = [
        (
            concentration,
            constants.concentration_min,
            constants.severe_concentration_below,
            "oligozoospermia",
            "concentración",
        ),
        (
            motility,
            constants.motility_min,
            constants.severe_motility_below,
            "astenozoospermia",
            "motilidad progresiva",
        ),
        (
            morphology,
            constants.morphology_min,
            constants.severe_morphology_below,
            "teratozoospermia",
            "morfología",
        ),
    ];

    let mut alterations = Vec::new();
    let mut absent = Vec::new();
    let mut severe = false;
    for (value, minimum, severe_below, alteration, name) in parameters {
        match value {
            Some(value) if value < minimum => {
                alterations.push(alteration);
                severe |= value < severe_below;
            }
            Some(_) => {}
            None => absent.push(name),
        }
    }

    let severity = match (severe, alterations.len()) {
        (true, _) | (_, 3) => MaleFactorSeverity::Severo,
        (_, 2) => MaleFactorSeverity::Moderado,
        (_, 1) => MaleFactorSeverity::Leve,
        _ => MaleFactorSeverity::Normal,
    };

    let factor = match severity {
        MaleFactorSeverity::Normal => 1.0,
        MaleFactorSeverity::Leve => constants.leve,
        MaleFactorSeverity::Moderado => constants.moderado,
        MaleFactorSeverity::Severo => constants.severo,
        MaleFactorSeverity::Azoospermia => constants.azoospermia,
    };

    let comment = if alterations.is_empty() {
        "Espermatograma: parámetros dentro de la normalidad".to_string()
    } else {
        format!(
            "Espermatograma: {} (factor masculino {})",
            alterations.join(", "),
            severity.label().to_lowercase()
        )
    };

    let mut outcome =
        FactorOutcome::penalty(factor, comment).with_detail(FactorDetail::Male(severity));
    if !absent.is_empty() {
        outcome.missing_data.push(format!(
            "Espermatograma incompleto: falta {}",
            absent.join(", ")
        ));
    }
    outcome
}
