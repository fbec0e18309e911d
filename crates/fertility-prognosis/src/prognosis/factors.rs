use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Neutral multiplier: the condition has no effect on the baseline.
pub const NEUTRAL: f64 = 1.0;

/// Every clinical dimension the engine scores.
///
/// Declaration order is the evaluation order and the order clinical findings are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    Otb,
    Hsg,
    Endometriosis,
    Myoma,
    Adenomyosis,
    Polyp,
    Pcos,
    Amh,
    Male,
    Bmi,
    Cycle,
    Tsh,
    Tpo,
    Prolactin,
    Homa,
    InfertilityDuration,
    PelvicSurgery,
}

impl FactorKind {
    pub const fn ordered() -> [Self; 17] {
        [
            Self::Otb,
            Self::Hsg,
            Self::Endometriosis,
            Self::Myoma,
            Self::Adenomyosis,
            Self::Polyp,
            Self::Pcos,
            Self::Amh,
            Self::Male,
            Self::Bmi,
            Self::Cycle,
            Self::Tsh,
            Self::Tpo,
            Self::Prolactin,
            Self::Homa,
            Self::InfertilityDuration,
            Self::PelvicSurgery,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Otb => "Oclusión tubárica bilateral",
            Self::Hsg => "Histerosalpingografía",
            Self::Endometriosis => "Endometriosis",
            Self::Myoma => "Miomatosis uterina",
            Self::Adenomyosis => "Adenomiosis",
            Self::Polyp => "Pólipos endometriales",
            Self::Pcos => "Síndrome de ovario poliquístico",
            Self::Amh => "Reserva ovárica (AMH)",
            Self::Male => "Factor masculino",
            Self::Bmi => "Índice de masa corporal",
            Self::Cycle => "Duración del ciclo menstrual",
            Self::Tsh => "Función tiroidea (TSH)",
            Self::Tpo => "Autoinmunidad tiroidea",
            Self::Prolactin => "Prolactina",
            Self::Homa => "Resistencia a la insulina (HOMA-IR)",
            Self::InfertilityDuration => "Tiempo buscando embarazo",
            Self::PelvicSurgery => "Cirugía pélvica previa",
        }
    }

    /// Accepts the serialized identifier (`infertilityDuration`) or its snake_case spelling.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ordered().into_iter().find(|kind| {
            let name = format!("{kind:?}").to_ascii_lowercase();
            name == normalized
        })
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Multipliers for one evaluation plus the age baseline they scale.
///
/// `base_age_probability` is a percentage, every other field is a multiplier in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factors {
    pub base_age_probability: f64,
    pub otb: f64,
    pub hsg: f64,
    pub endometriosis: f64,
    pub myoma: f64,
    pub adenomyosis: f64,
    pub polyp: f64,
    pub pcos: f64,
    pub amh: f64,
    pub male: f64,
    pub bmi: f64,
    pub cycle: f64,
    pub tsh: f64,
    pub tpo: f64,
    pub prolactin: f64,
    pub homa: f64,
    pub infertility_duration: f64,
    pub pelvic_surgery: f64,
}

impl Factors {
    /// Every multiplier neutral, scaling the given baseline.
    pub const fn neutral(base_age_probability: f64) -> Self {
        Self {
            base_age_probability,
            otb: NEUTRAL,
            hsg: NEUTRAL,
            endometriosis: NEUTRAL,
            myoma: NEUTRAL,
            adenomyosis: NEUTRAL,
            polyp: NEUTRAL,
            pcos: NEUTRAL,
            amh: NEUTRAL,
            male: NEUTRAL,
            bmi: NEUTRAL,
            cycle: NEUTRAL,
            tsh: NEUTRAL,
            tpo: NEUTRAL,
            prolactin: NEUTRAL,
            homa: NEUTRAL,
            infertility_duration: NEUTRAL,
            pelvic_surgery: NEUTRAL,
        }
    }

    pub const fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Otb => self.otb,
            FactorKind::Hsg => self.hsg,
            FactorKind::Endometriosis => self.endometriosis,
            FactorKind::Myoma => self.myoma,
            FactorKind::Adenomyosis => self.adenomyosis,
            FactorKind::Polyp => self.polyp,
            FactorKind::Pcos => self.pcos,
            FactorKind::Amh => self.amh,
            FactorKind::Male => self.male,
            FactorKind::Bmi => self.bmi,
            FactorKind::Cycle => self.cycle,
            FactorKind::Tsh => self.tsh,
            FactorKind::Tpo => self.tpo,
            FactorKind::Prolactin => self.prolactin,
            FactorKind::Homa => self.homa,
            FactorKind::InfertilityDuration => self.infertility_duration,
            FactorKind::PelvicSurgery => self.pelvic_surgery,
        }
    }

    /// Copy with one multiplier replaced.
    pub fn with(mut self, kind: FactorKind, value: f64) -> Self {
        let slot = match kind {
            FactorKind::Otb => &mut self.otb,
            FactorKind::Hsg => &mut self.hsg,
            FactorKind::Endometriosis => &mut self.endometriosis,
            FactorKind::Myoma => &mut self.myoma,
            FactorKind::Adenomyosis => &mut self.adenomyosis,
            FactorKind::Polyp => &mut self.polyp,
            FactorKind::Pcos => &mut self.pcos,
            FactorKind::Amh => &mut self.amh,
            FactorKind::Male => &mut self.male,
            FactorKind::Bmi => &mut self.bmi,
            FactorKind::Cycle => &mut self.cycle,
            FactorKind::Tsh => &mut self.tsh,
            FactorKind::Tpo => &mut self.tpo,
            FactorKind::Prolactin => &mut self.prolactin,
            FactorKind::Homa => &mut self.homa,
            FactorKind::InfertilityDuration => &mut self.infertility_duration,
            FactorKind::PelvicSurgery => &mut self.pelvic_surgery,
        };
        *slot = value;
        self
    }

    /// Product of every multiplier, folded in `FactorKind` order. Excludes the baseline.
    pub fn product(&self) -> f64 {
        FactorKind::ordered()
            .into_iter()
            .fold(1.0, |acc, kind| acc * self.get(kind))
    }

    /// `base_age_probability × Π multipliers`. A single 0.0 multiplier yields 0.
    pub fn prognosis(&self) -> f64 {
        self.base_age_probability * self.product()
    }

    /// Factors strictly below neutral, in `FactorKind` order.
    pub fn suboptimal(&self) -> Vec<FactorKind> {
        FactorKind::ordered()
            .into_iter()
            .filter(|kind| self.get(*kind) < NEUTRAL)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PcosSeverity {
    Leve,
    Moderado,
    Severo,
}

impl PcosSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Leve => "Leve",
            Self::Moderado => "Moderado",
            Self::Severo => "Severo",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvarianReserve {
    VeryLow,
    Low,
    Normal,
    High,
}

impl OvarianReserve {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "reserva ovárica muy disminuida",
            Self::Low => "reserva ovárica disminuida",
            Self::Normal => "reserva ovárica adecuada",
            Self::High => "reserva ovárica alta",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaleFactorSeverity {
    Normal,
    Leve,
    Moderado,
    Severo,
    Azoospermia,
}

impl MaleFactorSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Leve => "Leve",
            Self::Moderado => "Moderado",
            Self::Severo => "Severo",
            Self::Azoospermia => "Azoospermia",
        }
    }
}

/// Human readable explanation of each evaluated dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub age_comment: String,
    pub comments: BTreeMap<FactorKind, String>,
    pub pcos_severity: Option<PcosSeverity>,
    pub ovarian_reserve: Option<OvarianReserve>,
    pub male_severity: Option<MaleFactorSeverity>,
    /// Notices for measurements the patient has not provided yet.
    pub missing_data: Vec<String>,
    /// Inputs the engine had to substitute or ignore.
    pub anomalies: Vec<String>,
}

impl Diagnostics {
    pub fn comment(&self, kind: FactorKind) -> Option<&str> {
        self.comments.get(&kind).map(String::as_str)
    }
}
