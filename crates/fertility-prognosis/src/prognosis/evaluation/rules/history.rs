use super::FactorOutcome;
use crate::prognosis::evaluation::config::{BmiConstants, CycleConstants, ThresholdBand};

/// Converts a likelihood ratio into a multiplier relative to `reference` probability.
///
/// The reference is turned into odds, scaled by the ratio and converted back; the resulting
/// probability divided by the reference is the multiplier.
pub(crate) fn likelihood_ratio_factor(likelihood_ratio: f64, reference: f64) -> f64 {
    let prior_odds = reference / (1.0 - reference);
    let posterior_odds = prior_odds * likelihood_ratio;
    let posterior = posterior_odds / (1.0 + posterior_odds);
    (posterior / reference).clamp(0.0, 1.0)
}

pub(crate) fn bmi_factor(bmi: Option<f64>, constants: &BmiConstants) -> FactorOutcome {
    let Some(bmi) = bmi else {
        return FactorOutcome::missing(
            "IMC no disponible",
            "IMC: falta peso y talla (o el IMC) para valorar el impacto del peso",
        );
    };

    let reference = constants.reference_probability;
    if bmi < constants.underweight_below {
        FactorOutcome::penalty(
            likelihood_ratio_factor(constants.underweight_lr, reference),
            format!("IMC {bmi:.1}: bajo peso, asociado a disfunción ovulatoria"),
        )
    } else if bmi >= constants.obese_from {
        FactorOutcome::penalty(
            likelihood_ratio_factor(constants.obese_lr, reference),
            format!("IMC {bmi:.1}: obesidad, reduce la fecundabilidad"),
        )
    } else if bmi >= constants.overweight_from {
        FactorOutcome::penalty(
            likelihood_ratio_factor(constants.overweight_lr, reference),
            format!("IMC {bmi:.1}: sobrepeso, impacto leve en la fecundabilidad"),
        )
    } else {
        FactorOutcome::neutral(format!("IMC {bmi:.1}: peso saludable"))
    }
}

pub(crate) fn cycle_factor(cycle_days: Option<f64>, constants: &CycleConstants) -> FactorOutcome {
    let Some(days) = cycle_days else {
        return FactorOutcome::neutral("Duración del ciclo no informada");
    };

    if days <= constants.short_at_or_below {
        FactorOutcome::penalty(
            constants.irregular,
            format!("Ciclo de {days:.0} días: ciclo corto, posible fase lútea insuficiente"),
        )
    } else if days > constants.long_above {
        FactorOutcome::penalty(
            constants.irregular,
            format!("Ciclo de {days:.0} días: ciclo largo, sugiere ovulación infrecuente"),
        )
    } else {
        FactorOutcome::neutral(format!("Ciclo de {days:.0} días: regular"))
    }
}

pub(crate) fn infertility_duration_factor(
    years: Option<f64>,
    bands: &[ThresholdBand],
) -> FactorOutcome {
    let Some(years) = years else {
        return FactorOutcome::missing(
            "Tiempo buscando embarazo no informado",
            "Tiempo de infertilidad: indica cuántos años llevan buscando embarazo",
        );
    };

    let factor = ThresholdBand::factor_for(bands, years);
    if factor < 1.0 {
        FactorOutcome::penalty(
            factor,
            format!(
                "{years:.1} años buscando embarazo: la probabilidad mensual disminuye con el tiempo"
            ),
        )
    } else {
        FactorOutcome::neutral(format!("{years:.1} años buscando embarazo"))
    }
}

pub(crate) fn pelvic_surgery_factor(
    has_pelvic_surgery: bool,
    surgeries: Option<u8>,
    bands: &[ThresholdBand],
) -> FactorOutcome {
    let count = match (has_pelvic_surgery, surgeries) {
        (_, Some(count)) => count,
        (true, None) => 1,
        (false, None) => 0,
    };

    if count == 0 {
        return FactorOutcome::neutral("Sin cirugías pélvicas previas");
    }

    let factor = ThresholdBand::factor_for(bands, f64::from(count));
    FactorOutcome::penalty(
        factor,
        format!("{count} cirugía(s) pélvica(s) previa(s): riesgo de adherencias"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prognosis::evaluation::config::ClinicalConstants;

    #[test]
    fn likelihood_ratio_of_one_is_neutral() {
        assert!((likelihood_ratio_factor(1.0, 0.2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn bmi_bands_map_to_increasing_penalties() {
        let constants = ClinicalConstants::default().bmi;

        let normal = bmi_factor(Some(22.0), &constants).factor;
        let overweight = bmi_factor(Some(27.0), &constants).factor;
        let obese = bmi_factor(Some(33.0), &constants).factor;
        let underweight = bmi_factor(Some(17.0), &constants).factor;

        assert_eq!(normal, 1.0);
        assert!(overweight < 1.0 && obese < overweight);
        assert!(underweight < 1.0);
        assert!((obese - 0.6993).abs() < 1e-3);
    }

    #[test]
    fn bmi_boundaries_are_inclusive_upwards() {
        let constants = ClinicalConstants::default().bmi;

        assert_eq!(bmi_factor(Some(18.5), &constants).factor, 1.0);
        assert!(bmi_factor(Some(25.0), &constants).factor < 1.0);
        assert_eq!(
            bmi_factor(Some(30.0), &constants).factor,
            likelihood_ratio_factor(constants.obese_lr, constants.reference_probability)
        );
    }

    #[test]
    fn irregular_cycles_are_penalized() {
        let constants = ClinicalConstants::default().cycle;

        assert_eq!(cycle_factor(Some(24.0), &constants).factor, 0.85);
        assert_eq!(cycle_factor(Some(25.0), &constants).factor, 1.0);
        assert_eq!(cycle_factor(Some(35.0), &constants).factor, 1.0);
        assert_eq!(cycle_factor(Some(36.0), &constants).factor, 0.85);
        assert_eq!(cycle_factor(None, &constants).factor, 1.0);
    }

    #[test]
    fn infertility_duration_penalty_grows_with_years() {
        let bands = ClinicalConstants::default().infertility_duration;

        let one = infertility_duration_factor(Some(1.0), &bands).factor;
        let three = infertility_duration_factor(Some(3.0), &bands).factor;
        let seven = infertility_duration_factor(Some(7.0), &bands).factor;

        assert_eq!(one, 1.0);
        assert!(three < one && seven < three);
    }

    #[test]
    fn surgery_flag_without_count_counts_as_one() {
        let bands = ClinicalConstants::default().pelvic_surgery;

        assert_eq!(pelvic_surgery_factor(true, None, &bands).factor, 0.90);
        assert_eq!(pelvic_surgery_factor(false, Some(3), &bands).factor, 0.70);
        assert_eq!(pelvic_surgery_factor(false, None, &bands).factor, 1.0);
        assert_eq!(pelvic_surgery_factor(true, Some(0), &bands).factor, 1.0);
    }
}
