use serde::{Deserialize, Serialize};

/// Clinical snapshot of a couple collected by the intake form.
///
/// Every optional numeric stays `None` when the value was not measured; `Some(0.0)` is a
/// clinically meaningful zero (for example azoospermia) and is never used as a placeholder.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub age: f64,
    #[serde(default)]
    pub bmi: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub cycle_duration: Option<f64>,
    /// Years trying to conceive.
    #[serde(default)]
    pub infertility_duration: Option<f64>,
    #[serde(default)]
    pub has_pcos: bool,
    /// rASRM stage, 0 meaning no endometriosis.
    #[serde(default)]
    pub endometriosis_grade: u8,
    #[serde(default)]
    pub myoma_type: MyomaType,
    #[serde(default)]
    pub adenomyosis_type: AdenomyosisType,
    #[serde(default)]
    pub polyp_type: PolypType,
    #[serde(default)]
    pub hsg_result: Option<HsgResult>,
    #[serde(default)]
    pub has_tubal_ligation: bool,
    #[serde(default)]
    pub has_pelvic_surgery: bool,
    #[serde(default)]
    pub pelvic_surgeries_number: Option<u8>,
    /// Anti-Müllerian hormone, ng/mL.
    #[serde(default)]
    pub amh: Option<f64>,
    /// ng/mL.
    #[serde(default)]
    pub prolactin: Option<f64>,
    /// µUI/mL.
    #[serde(default)]
    pub tsh: Option<f64>,
    #[serde(default)]
    pub tpo_ab_positive: Option<bool>,
    #[serde(default)]
    pub homa_ir: Option<f64>,
    /// Fasting glucose, mg/dL.
    #[serde(default)]
    pub glucose: Option<f64>,
    /// Fasting insulin, µU/mL.
    #[serde(default)]
    pub insulin: Option<f64>,
    /// Millions per mL.
    #[serde(default)]
    pub sperm_concentration: Option<f64>,
    /// Percentage of progressively motile sperm.
    #[serde(default)]
    pub sperm_progressive_motility: Option<f64>,
    /// Percentage of normal forms (strict criteria).
    #[serde(default)]
    pub sperm_normal_morphology: Option<f64>,
}

impl UserInput {
    pub fn new(age: f64) -> Self {
        Self {
            age,
            ..Self::default()
        }
    }

    /// Explicit BMI wins; otherwise it is derived from height and weight when both are known.
    pub fn resolved_bmi(&self) -> Option<f64> {
        if let Some(bmi) = measured(self.bmi) {
            return Some(bmi);
        }

        match (measured(self.height_cm), measured(self.weight_kg)) {
            (Some(height), Some(weight)) if height > 0.0 => {
                let meters = height / 100.0;
                Some(weight / (meters * meters))
            }
            _ => None,
        }
    }

    /// Explicit HOMA-IR wins; otherwise it is derived from fasting glucose and insulin.
    pub fn resolved_homa_ir(&self) -> Option<f64> {
        if let Some(homa) = measured(self.homa_ir) {
            return Some(homa);
        }

        match (measured(self.glucose), measured(self.insulin)) {
            (Some(glucose), Some(insulin)) => Some(glucose * insulin / 405.0),
            _ => None,
        }
    }

    fn measurements(&self) -> [(&'static str, Option<f64>); 14] {
        [
            ("bmi", self.bmi),
            ("heightCm", self.height_cm),
            ("weightKg", self.weight_kg),
            ("cycleDuration", self.cycle_duration),
            ("infertilityDuration", self.infertility_duration),
            ("amh", self.amh),
            ("prolactin", self.prolactin),
            ("tsh", self.tsh),
            ("homaIr", self.homa_ir),
            ("glucose", self.glucose),
            ("insulin", self.insulin),
            ("spermConcentration", self.sperm_concentration),
            ("spermProgressiveMotility", self.sperm_progressive_motility),
            ("spermNormalMorphology", self.sperm_normal_morphology),
        ]
    }

    /// Numeric fields that carry NaN or infinity, by payload name.
    pub fn non_finite_fields(&self) -> Vec<&'static str> {
        self.measurements()
            .into_iter()
            .filter(|(_, value)| value.is_some_and(|v| !v.is_finite()))
            .map(|(name, _)| name)
            .collect()
    }

    /// Measurements below zero, which no instrument reports. They are scored as absent.
    pub fn negative_fields(&self) -> Vec<(&'static str, f64)> {
        self.measurements()
            .into_iter()
            .filter_map(|(name, value)| finite(value).filter(|v| *v < 0.0).map(|v| (name, v)))
            .collect()
    }

    /// Copy with every non-finite number replaced, safe to serialize.
    ///
    /// A non-finite age becomes `0.0`, which still resolves to the fallback baseline.
    pub fn sanitized(&self) -> Self {
        Self {
            age: if self.age.is_finite() { self.age } else { 0.0 },
            bmi: finite(self.bmi),
            height_cm: finite(self.height_cm),
            weight_kg: finite(self.weight_kg),
            cycle_duration: finite(self.cycle_duration),
            infertility_duration: finite(self.infertility_duration),
            amh: finite(self.amh),
            prolactin: finite(self.prolactin),
            tsh: finite(self.tsh),
            homa_ir: finite(self.homa_ir),
            glucose: finite(self.glucose),
            insulin: finite(self.insulin),
            sperm_concentration: finite(self.sperm_concentration),
            sperm_progressive_motility: finite(self.sperm_progressive_motility),
            sperm_normal_morphology: finite(self.sperm_normal_morphology),
            ..self.clone()
        }
    }
}

/// Drops non-finite values so evaluators only ever see usable numbers.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Finite and non-negative; anything else is treated as not measured.
pub(crate) fn measured(value: Option<f64>) -> Option<f64> {
    finite(value).filter(|v| *v >= 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MyomaType {
    #[default]
    None,
    Submucosal,
    IntramuralLarge,
    Subserosal,
}

impl MyomaType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "sin miomas",
            Self::Submucosal => "submucoso",
            Self::IntramuralLarge => "intramural grande",
            Self::Subserosal => "subseroso",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdenomyosisType {
    #[default]
    None,
    Focal,
    Diffuse,
}

impl AdenomyosisType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "sin adenomiosis",
            Self::Focal => "focal",
            Self::Diffuse => "difusa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolypType {
    #[default]
    None,
    /// Single polyp under 1 cm.
    Small,
    /// Single polyp of 1 cm or more.
    Large,
    Multiple,
}

impl PolypType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "sin pólipos",
            Self::Small => "pólipo único menor de 1 cm",
            Self::Large => "pólipo único de 1 cm o más",
            Self::Multiple => "pólipos múltiples",
        }
    }
}

/// Hysterosalpingography outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HsgResult {
    Normal,
    Unilateral,
    Bilateral,
    Malformation,
}

impl HsgResult {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "permeabilidad tubárica bilateral conservada",
            Self::Unilateral => "obstrucción tubárica unilateral",
            Self::Bilateral => "obstrucción tubárica bilateral",
            Self::Malformation => "malformación uterina",
        }
    }
}
