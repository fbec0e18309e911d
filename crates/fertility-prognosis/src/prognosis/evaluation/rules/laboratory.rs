use super::{FactorDetail, FactorOutcome};
use crate::prognosis::evaluation::config::{
    AmhConstants, HomaConstants, ProlactinConstants, TpoConstants, TshConstants,
};
use crate::prognosis::factors::OvarianReserve;

pub(crate) fn amh_factor(amh: Option<f64>, constants: &AmhConstants) -> FactorOutcome {
    let Some(amh) = amh else {
        return FactorOutcome::missing(
            "Reserva ovárica no evaluada",
            "AMH (hormona antimülleriana): no reportada; no se pudo evaluar la reserva ovárica",
        );
    };

    let (reserve, factor) = if amh < constants.very_low_below {
        (OvarianReserve::VeryLow, constants.very_low)
    } else if amh < constants.low_below {
        (OvarianReserve::Low, constants.low)
    } else if amh >= constants.high_from {
        (OvarianReserve::High, 1.0)
    } else {
        (OvarianReserve::Normal, 1.0)
    };

    let comment = match reserve {
        OvarianReserve::High => format!(
            "AMH {amh:.2} ng/mL: {}, valorar SOP si hay ciclos irregulares",
            reserve.label()
        ),
        _ => format!("AMH {amh:.2} ng/mL: {}", reserve.label()),
    };

    FactorOutcome::penalty(factor, comment).with_detail(FactorDetail::OvarianReserve(reserve))
}

pub(crate) fn prolactin_factor(
    prolactin: Option<f64>,
    constants: &ProlactinConstants,
) -> FactorOutcome {
    match prolactin {
        None => FactorOutcome::missing(
            "Prolactina no evaluada",
            "Prolactina: no reportada; no se pudo descartar hiperprolactinemia",
        ),
        Some(value) if value > constants.high_above => FactorOutcome::penalty(
            constants.high,
            format!("Prolactina {value:.1} ng/mL: hiperprolactinemia, puede inhibir la ovulación"),
        ),
        Some(value) => FactorOutcome::neutral(format!("Prolactina {value:.1} ng/mL: normal")),
    }
}

pub(crate) fn tsh_factor(tsh: Option<f64>, constants: &TshConstants) -> FactorOutcome {
    match tsh {
        None => FactorOutcome::missing(
            "Función tiroidea no evaluada",
            "TSH: no reportada; no se pudo evaluar la función tiroidea",
        ),
        Some(value) if value > constants.high_above => FactorOutcome::penalty(
            constants.high,
            format!("TSH {value:.2} µUI/mL: hipotiroidismo, requiere tratamiento antes de concebir"),
        ),
        Some(value) if value > constants.suboptimal_above => FactorOutcome::penalty(
            constants.suboptimal,
            format!("TSH {value:.2} µUI/mL: por encima del objetivo preconcepcional"),
        ),
        Some(value) if value < constants.low_below => FactorOutcome::penalty(
            constants.low,
            format!("TSH {value:.2} µUI/mL: suprimida, sugiere hipertiroidismo"),
        ),
        Some(value) => FactorOutcome::neutral(format!("TSH {value:.2} µUI/mL: óptima")),
    }
}

pub(crate) fn tpo_factor(positive: Option<bool>, constants: &TpoConstants) -> FactorOutcome {
    match positive {
        None => FactorOutcome::missing(
            "Autoinmunidad tiroidea no evaluada",
            "Anticuerpos antitiroideos (anti-TPO): no reportados",
        ),
        Some(true) => FactorOutcome::penalty(
            constants.positive,
            "Anticuerpos anti-TPO positivos: autoinmunidad tiroidea",
        ),
        Some(false) => FactorOutcome::neutral("Anticuerpos anti-TPO negativos"),
    }
}

pub(crate) fn homa_factor(homa: Option<f64>, constants: &HomaConstants) -> FactorOutcome {
    match homa {
        None => FactorOutcome::missing(
            "Resistencia a la insulina no evaluada",
            "HOMA-IR: falta el índice o la glucosa e insulina en ayunas",
        ),
        Some(value) if value >= constants.resistant_from => FactorOutcome::penalty(
            constants.resistant,
            format!("HOMA-IR {value:.2}: resistencia a la insulina"),
        ),
        Some(value) => FactorOutcome::neutral(format!("HOMA-IR {value:.2}: sensibilidad normal")),
    }
}
