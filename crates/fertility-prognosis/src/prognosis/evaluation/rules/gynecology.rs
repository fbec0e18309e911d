use super::{FactorDetail, FactorOutcome};
use crate::prognosis::domain::{AdenomyosisType, HsgResult, MyomaType, PolypType};
use crate::prognosis::evaluation::config::{
    AdenomyosisConstants, CycleConstants, EndometriosisConstants, HsgConstants, MyomaConstants,
    PcosConstants, PolypConstants,
};
use crate::prognosis::factors::PcosSeverity;

/// Multiplier for a tubal ligation. Always exactly 0.0 when present.
pub(crate) const TUBAL_LIGATION_BLOCKER: f64 = 0.0;

pub(crate) fn otb_factor(has_tubal_ligation: bool) -> FactorOutcome {
    if has_tubal_ligation {
        FactorOutcome::penalty(
            TUBAL_LIGATION_BLOCKER,
            "Oclusión tubárica bilateral: la concepción espontánea no es posible",
        )
    } else {
        FactorOutcome::neutral("Sin ligadura tubárica")
    }
}

pub(crate) fn hsg_factor(result: Option<HsgResult>, constants: &HsgConstants) -> FactorOutcome {
    match result {
        None => FactorOutcome::missing(
            "Permeabilidad tubárica no evaluada",
            "Histerosalpingografía (HSG): no realizada; no se pudo confirmar la permeabilidad tubárica",
        ),
        Some(HsgResult::Normal) => FactorOutcome::neutral(format!("HSG: {}", HsgResult::Normal.label())),
        Some(result @ HsgResult::Unilateral) => FactorOutcome::penalty(
            constants.unilateral,
            format!("HSG: {}", result.label()),
        ),
        Some(result @ HsgResult::Bilateral) => FactorOutcome::penalty(
            constants.bilateral,
            format!("HSG: {}, la concepción espontánea es muy improbable", result.label()),
        ),
        Some(result @ HsgResult::Malformation) => FactorOutcome::penalty(
            constants.malformation,
            format!("HSG: {}", result.label()),
        ),
    }
}

/// Severity is stratified by metabolic (BMI) and ovulatory (cycle length) involvement.
pub(crate) fn pcos_factor(
    has_pcos: bool,
    bmi: Option<f64>,
    cycle_days: Option<f64>,
    constants: &PcosConstants,
    cycle: &CycleConstants,
) -> FactorOutcome {
    if !has_pcos {
        return FactorOutcome::neutral("Sin diagnóstico de SOP");
    }

    let oligo_ovulatory = cycle_days.is_some_and(|days| days > cycle.long_above);
    let obese = bmi.is_some_and(|value| value >= constants.obese_bmi);
    let overweight = bmi.is_some_and(|value| value >= constants.overweight_bmi);

    let (severity, factor, comment) = if obese && oligo_ovulatory {
        (
            PcosSeverity::Severo,
            constants.severo,
            "SOP severo: obesidad y ciclos oligo-ovulatorios",
        )
    } else if overweight || oligo_ovulatory {
        (
            PcosSeverity::Moderado,
            constants.moderado,
            "SOP moderado: sobrepeso o ciclos irregulares",
        )
    } else {
        (
            PcosSeverity::Leve,
            constants.leve,
            "SOP leve: peso adecuado y ciclos regulares",
        )
    };

    FactorOutcome::penalty(factor, comment).with_detail(FactorDetail::Pcos(severity))
}

pub(crate) fn endometriosis_factor(grade: u8, constants: &EndometriosisConstants) -> FactorOutcome {
    match grade {
        0 => FactorOutcome::neutral("Sin endometriosis"),
        1 | 2 => FactorOutcome::penalty(
            constants.mild,
            format!("Endometriosis grado {grade} (leve): afecta la calidad ovocitaria y la implantación"),
        ),
        3 | 4 => FactorOutcome::penalty(
            constants.severe,
            format!("Endometriosis grado {grade} (severa): distorsión anatómica y posible daño tubárico"),
        ),
        other => FactorOutcome::penalty(
            constants.severe,
            "Endometriosis grado 4 (severa): distorsión anatómica y posible daño tubárico",
        )
        .with_anomaly(format!("grado de endometriosis {other} fuera de escala; se usa grado 4")),
    }
}

pub(crate) fn myoma_factor(kind: MyomaType, constants: &MyomaConstants) -> FactorOutcome {
    let factor = match kind {
        MyomaType::None => return FactorOutcome::neutral("Sin miomas"),
        MyomaType::Submucosal => constants.submucosal,
        MyomaType::IntramuralLarge => constants.intramural_large,
        MyomaType::Subserosal => constants.subserosal,
    };

    let comment = if factor < 1.0 {
        format!("Mioma {}: puede interferir con la implantación", kind.label())
    } else {
        format!("Mioma {}: sin impacto relevante en la fertilidad", kind.label())
    };
    FactorOutcome::penalty(factor, comment)
}

pub(crate) fn adenomyosis_factor(
    kind: AdenomyosisType,
    constants: &AdenomyosisConstants,
) -> FactorOutcome {
    match kind {
        AdenomyosisType::None => FactorOutcome::neutral("Sin adenomiosis"),
        AdenomyosisType::Focal => FactorOutcome::penalty(
            constants.focal,
            "Adenomiosis focal: impacto moderado en la receptividad endometrial",
        ),
        AdenomyosisType::Diffuse => FactorOutcome::penalty(
            constants.diffuse,
            "Adenomiosis difusa: impacto importante en la implantación",
        ),
    }
}

pub(crate) fn polyp_factor(kind: PolypType, constants: &PolypConstants) -> FactorOutcome {
    let factor = match kind {
        PolypType::None => return FactorOutcome::neutral("Sin pólipos endometriales"),
        PolypType::Small => constants.small,
        PolypType::Large => constants.large,
        PolypType::Multiple => constants.multiple,
    };

    FactorOutcome::penalty(
        factor,
        format!("Pólipos endometriales ({}): alteran la receptividad endometrial", kind.label()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prognosis::evaluation::config::ClinicalConstants;

    #[test]
    fn tubal_ligation_is_an_absolute_blocker() {
        assert_eq!(otb_factor(true).factor, 0.0);
        assert_eq!(otb_factor(false).factor, 1.0);
    }

    #[test]
    fn hsg_tiers_follow_obstruction_extent() {
        let constants = ClinicalConstants::default().hsg;

        assert_eq!(hsg_factor(Some(HsgResult::Normal), &constants).factor, 1.0);
        assert_eq!(hsg_factor(Some(HsgResult::Unilateral), &constants).factor, 0.70);
        assert_eq!(hsg_factor(Some(HsgResult::Malformation), &constants).factor, 0.30);

        let bilateral = hsg_factor(Some(HsgResult::Bilateral), &constants).factor;
        assert!(bilateral > 0.0 && bilateral < 0.1);

        let missing = hsg_factor(None, &constants);
        assert_eq!(missing.factor, 1.0);
        assert_eq!(missing.missing_data.len(), 1);
    }

    #[test]
    fn pcos_severity_is_stratified_by_bmi_and_cycle() {
        let constants = ClinicalConstants::default();
        let pcos = |bmi: Option<f64>, cycle: Option<f64>| {
            pcos_factor(true, bmi, cycle, &constants.pcos, &constants.cycle)
        };

        let mild = pcos(Some(22.0), Some(30.0));
        assert_eq!(mild.detail, Some(FactorDetail::Pcos(PcosSeverity::Leve)));
        assert_eq!(mild.factor, 0.85);

        let moderate = pcos(Some(27.0), Some(30.0));
        assert_eq!(moderate.detail, Some(FactorDetail::Pcos(PcosSeverity::Moderado)));

        let moderate_by_cycle = pcos(Some(22.0), Some(45.0));
        assert_eq!(moderate_by_cycle.factor, 0.70);

        let severe = pcos(Some(32.0), Some(60.0));
        assert_eq!(severe.detail, Some(FactorDetail::Pcos(PcosSeverity::Severo)));
        assert_eq!(severe.factor, 0.50);

        assert_eq!(
            pcos_factor(false, Some(40.0), Some(90.0), &constants.pcos, &constants.cycle).factor,
            1.0
        );
    }

    #[test]
    fn endometriosis_grades_split_into_two_tiers() {
        let constants = ClinicalConstants::default().endometriosis;

        assert_eq!(endometriosis_factor(0, &constants).factor, 1.0);
        assert_eq!(endometriosis_factor(1, &constants).factor, 0.80);
        assert_eq!(endometriosis_factor(2, &constants).factor, 0.80);
        assert_eq!(endometriosis_factor(3, &constants).factor, 0.55);
        assert_eq!(endometriosis_factor(4, &constants).factor, 0.55);

        let out_of_scale = endometriosis_factor(7, &constants);
        assert_eq!(out_of_scale.factor, 0.55);
        assert_eq!(out_of_scale.anomalies.len(), 1);
    }

    #[test]
    fn uterine_lesions_use_lookup_tables() {
        let constants = ClinicalConstants::default();

        assert_eq!(myoma_factor(MyomaType::None, &constants.myoma).factor, 1.0);
        assert_eq!(myoma_factor(MyomaType::Submucosal, &constants.myoma).factor, 0.35);
        assert_eq!(myoma_factor(MyomaType::Subserosal, &constants.myoma).factor, 1.0);
        assert_eq!(
            adenomyosis_factor(AdenomyosisType::Diffuse, &constants.adenomyosis).factor,
            0.60
        );
        assert_eq!(polyp_factor(PolypType::None, &constants.polyp).factor, 1.0);
        assert_eq!(polyp_factor(PolypType::Multiple, &constants.polyp).factor, 0.70);
    }
}
