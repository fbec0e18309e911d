use serde::{Deserialize, Serialize};

/// Age range mapped to a fixed percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub label: String,
    /// Ages strictly below this bound (and at or above the previous one) fall in the bracket.
    pub upper_exclusive: f64,
    pub value: f64,
}

impl AgeBracket {
    fn new(label: &str, upper_exclusive: f64, value: f64) -> Self {
        Self {
            label: label.to_string(),
            upper_exclusive,
            value,
        }
    }

    /// First bracket whose upper bound exceeds `age`, provided `age` is at least `min_age`.
    ///
    /// Ages are compared in completed years, so 40.5 belongs to the bracket holding 40.
    pub fn find(brackets: &[AgeBracket], min_age: f64, age: f64) -> Option<&AgeBracket> {
        if !age.is_finite() {
            return None;
        }
        let years = age.floor();
        if years < min_age {
            return None;
        }
        brackets.iter().find(|bracket| years < bracket.upper_exclusive)
    }
}

/// Penalty applied from `from` upwards until the next band starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    pub from: f64,
    pub factor: f64,
}

impl ThresholdBand {
    /// Factor of the highest band reached by `value`, neutral below the first band.
    pub fn factor_for(bands: &[ThresholdBand], value: f64) -> f64 {
        bands
            .iter()
            .filter(|band| value >= band.from)
            .last()
            .map(|band| band.factor)
            .unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeConstants {
    pub min_age: f64,
    pub brackets: Vec<AgeBracket>,
    /// Conservative baseline used when the age falls outside every bracket.
    pub fallback_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConstants {
    pub brackets: Vec<AgeBracket>,
    /// Percentage points either side of the benchmark considered "similar".
    pub tolerance: f64,
}

/// BMI multipliers are derived from likelihood ratios applied to a reference probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiConstants {
    pub underweight_below: f64,
    pub overweight_from: f64,
    pub obese_from: f64,
    pub reference_probability: f64,
    pub underweight_lr: f64,
    pub overweight_lr: f64,
    pub obese_lr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleConstants {
    pub short_at_or_below: f64,
    pub long_above: f64,
    pub irregular: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PcosConstants {
    pub overweight_bmi: f64,
    pub obese_bmi: f64,
    pub leve: f64,
    pub moderado: f64,
    pub severo: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndometriosisConstants {
    /// Grades 1–2.
    pub mild: f64,
    /// Grades 3–4.
    pub severe: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyomaConstants {
    pub submucosal: f64,
    pub intramural_large: f64,
    pub subserosal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdenomyosisConstants {
    pub focal: f64,
    pub diffuse: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolypConstants {
    pub small: f64,
    pub large: f64,
    pub multiple: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsgConstants {
    pub unilateral: f64,
    pub bilateral: f64,
    pub malformation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmhConstants {
    pub very_low_below: f64,
    pub low_below: f64,
    pub high_from: f64,
    pub very_low: f64,
    pub low: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProlactinConstants {
    pub high_above: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TshConstants {
    pub low_below: f64,
    pub suboptimal_above: f64,
    pub high_above: f64,
    pub low: f64,
    pub suboptimal: f64,
    pub high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpoConstants {
    pub positive: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomaConstants {
    pub resistant_from: f64,
    pub resistant: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaleConstants {
    pub concentration_min: f64,
    pub motility_min: f64,
    pub morphology_min: f64,
    pub severe_concentration_below: f64,
    pub severe_motility_below: f64,
    pub severe_morphology_below: f64,
    pub leve: f64,
    pub moderado: f64,
    pub severo: f64,
    pub azoospermia: f64,
}

/// Clinical content table: every threshold, bracket and multiplier the evaluators use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalConstants {
    pub age: AgeConstants,
    pub benchmark: BenchmarkConstants,
    pub bmi: BmiConstants,
    pub cycle: CycleConstants,
    pub pcos: PcosConstants,
    pub endometriosis: EndometriosisConstants,
    pub myoma: MyomaConstants,
    pub adenomyosis: AdenomyosisConstants,
    pub polyp: PolypConstants,
    pub hsg: HsgConstants,
    pub amh: AmhConstants,
    pub prolactin: ProlactinConstants,
    pub tsh: TshConstants,
    pub tpo: TpoConstants,
    pub homa: HomaConstants,
    /// Years trying to conceive.
    pub infertility_duration: Vec<ThresholdBand>,
    /// Number of previous pelvic surgeries.
    pub pelvic_surgery: Vec<ThresholdBand>,
    pub male: MaleConstants,
}

impl Default for ClinicalConstants {
    fn default() -> Self {
        Self {
            age: AgeConstants {
                min_age: 18.0,
                brackets: vec![
                    AgeBracket::new("menores de 30 años", 30.0, 20.0),
                    AgeBracket::new("30 a 34 años", 35.0, 17.5),
                    AgeBracket::new("35 a 37 años", 38.0, 12.5),
                    AgeBracket::new("38 a 40 años", 41.0, 7.5),
                    AgeBracket::new("mayores de 40 años", 56.0, 3.0),
                ],
                fallback_probability: 1.0,
            },
            benchmark: BenchmarkConstants {
                brackets: vec![
                    AgeBracket::new("menores de 30 años", 30.0, 18.0),
                    AgeBracket::new("30 a 34 años", 35.0, 15.0),
                    AgeBracket::new("35 a 37 años", 38.0, 10.0),
                    AgeBracket::new("38 a 40 años", 41.0, 6.0),
                    AgeBracket::new("mayores de 40 años", 56.0, 2.5),
                ],
                tolerance: 2.0,
            },
            bmi: BmiConstants {
                underweight_below: 18.5,
                overweight_from: 25.0,
                obese_from: 30.0,
                reference_probability: 0.20,
                underweight_lr: 0.85,
                overweight_lr: 0.90,
                obese_lr: 0.65,
            },
            cycle: CycleConstants {
                short_at_or_below: 24.0,
                long_above: 35.0,
                irregular: 0.85,
            },
            pcos: PcosConstants {
                overweight_bmi: 25.0,
                obese_bmi: 30.0,
                leve: 0.85,
                moderado: 0.70,
                severo: 0.50,
            },
            endometriosis: EndometriosisConstants {
                mild: 0.80,
                severe: 0.55,
            },
            myoma: MyomaConstants {
                submucosal: 0.35,
                intramural_large: 0.70,
                subserosal: 1.0,
            },
            adenomyosis: AdenomyosisConstants {
                focal: 0.85,
                diffuse: 0.60,
            },
            polyp: PolypConstants {
                small: 0.90,
                large: 0.75,
                multiple: 0.70,
            },
            hsg: HsgConstants {
                unilateral: 0.70,
                bilateral: 0.05,
                malformation: 0.30,
            },
            amh: AmhConstants {
                very_low_below: 0.5,
                low_below: 1.1,
                high_from: 4.0,
                very_low: 0.60,
                low: 0.85,
            },
            prolactin: ProlactinConstants {
                high_above: 25.0,
                high: 0.80,
            },
            tsh: TshConstants {
                low_below: 0.1,
                suboptimal_above: 2.5,
                high_above: 4.5,
                low: 0.85,
                suboptimal: 0.93,
                high: 0.80,
            },
            tpo: TpoConstants { positive: 0.90 },
            homa: HomaConstants {
                resistant_from: 2.5,
                resistant: 0.85,
            },
            infertility_duration: vec![
                ThresholdBand {
                    from: 2.0,
                    factor: 0.85,
                },
                ThresholdBand {
                    from: 4.0,
                    factor: 0.70,
                },
                ThresholdBand {
                    from: 6.0,
                    factor: 0.55,
                },
            ],
            pelvic_surgery: vec![
                ThresholdBand {
                    from: 1.0,
                    factor: 0.90,
                },
                ThresholdBand {
                    from: 2.0,
                    factor: 0.80,
                },
                ThresholdBand {
                    from: 3.0,
                    factor: 0.70,
                },
            ],
            male: MaleConstants {
                concentration_min: 15.0,
                motility_min: 32.0,
                morphology_min: 4.0,
                severe_concentration_below: 5.0,
                severe_motility_below: 10.0,
                severe_morphology_below: 1.0,
                leve: 0.85,
                moderado: 0.65,
                severo: 0.35,
                azoospermia: 0.0,
            },
        }
    }
}

/// Rejected clinical table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstantsError {
    #[error("constant '{key}' must be a finite number (found {value})")]
    NotFinite { key: String, value: f64 },
    #[error("multiplier '{key}' must lie within [0, 1] (found {value})")]
    MultiplierOutOfRange { key: String, value: f64 },
    #[error("percentage '{key}' must lie within [0, 100] (found {value})")]
    PercentageOutOfRange { key: String, value: f64 },
    #[error("benchmark tolerance must not be negative (found {0})")]
    NegativeTolerance(f64),
    #[error("reference probability must lie strictly between 0 and 1 (found {0})")]
    ReferenceProbability(f64),
    #[error("{table} brackets must be non-empty with strictly increasing bounds")]
    UnorderedBrackets { table: &'static str },
}

impl ClinicalConstants {
    /// Checks that every value is usable: finite numbers, multipliers in `[0, 1]`, percentages in
    /// `[0, 100]` and ordered tables.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        for key in Self::scalar_keys() {
            let value = self.scalar(&key).unwrap_or(f64::NAN);
            if !value.is_finite() {
                return Err(ConstantsError::NotFinite { key, value });
            }
            if is_multiplier_key(&key) && !(0.0..=1.0).contains(&value) {
                return Err(ConstantsError::MultiplierOutOfRange { key, value });
            }
            if is_percentage_key(&key) && !(0.0..=100.0).contains(&value) {
                return Err(ConstantsError::PercentageOutOfRange { key, value });
            }
        }

        if self.benchmark.tolerance < 0.0 {
            return Err(ConstantsError::NegativeTolerance(self.benchmark.tolerance));
        }

        let reference = self.bmi.reference_probability;
        if !(reference > 0.0 && reference < 1.0) {
            return Err(ConstantsError::ReferenceProbability(reference));
        }

        check_brackets("age_baseline", &self.age.brackets)?;
        check_brackets("benchmark", &self.benchmark.brackets)?;
        check_bands("infertility_duration", &self.infertility_duration)?;
        check_bands("pelvic_surgery", &self.pelvic_surgery)?;

        Ok(())
    }

    /// Every addressable key, in table order.
    pub fn scalar_keys() -> Vec<String> {
        let mut keys: Vec<String> = SCALAR_KEYS.iter().map(|key| key.to_string()).collect();
        let defaults = Self::default();
        for (table, len) in [
            ("age_baseline", defaults.age.brackets.len()),
            ("benchmark", defaults.benchmark.brackets.len()),
        ] {
            for index in 0..len {
                keys.push(format!("{table}.{index}.upper"));
                keys.push(format!("{table}.{index}.value"));
            }
        }
        for (table, len) in [
            ("infertility_duration", defaults.infertility_duration.len()),
            ("pelvic_surgery", defaults.pelvic_surgery.len()),
        ] {
            for index in 0..len {
                keys.push(format!("{table}.{index}.from"));
                keys.push(format!("{table}.{index}.factor"));
            }
        }
        keys
    }
}

/// Declares every named table key once; `scalar` and `slot_mut` are generated from the same list.
macro_rules! constant_slots {
    ($($key:literal => $($field:ident).+,)+) => {
        const SCALAR_KEYS: &[&str] = &[$($key),+];

        impl ClinicalConstants {
            /// Current value of a table key.
            pub fn scalar(&self, key: &str) -> Option<f64> {
                match key {
                    $($key => Some(self.$($field).+),)+
                    indexed => self.indexed_scalar(indexed),
                }
            }

            /// Mutable handle on a table key, used when applying overrides.
            pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut f64> {
                match key {
                    $($key => Some(&mut self.$($field).+),)+
                    indexed => self.indexed_slot_mut(indexed),
                }
            }
        }
    };
}

constant_slots! {
    "age.min_age" => age.min_age,
    "age.fallback_probability" => age.fallback_probability,
    "benchmark.tolerance" => benchmark.tolerance,
    "bmi.underweight_below" => bmi.underweight_below,
    "bmi.overweight_from" => bmi.overweight_from,
    "bmi.obese_from" => bmi.obese_from,
    "bmi.reference_probability" => bmi.reference_probability,
    "bmi.underweight_lr" => bmi.underweight_lr,
    "bmi.overweight_lr" => bmi.overweight_lr,
    "bmi.obese_lr" => bmi.obese_lr,
    "cycle.short_at_or_below" => cycle.short_at_or_below,
    "cycle.long_above" => cycle.long_above,
    "cycle.irregular" => cycle.irregular,
    "pcos.overweight_bmi" => pcos.overweight_bmi,
    "pcos.obese_bmi" => pcos.obese_bmi,
    "pcos.leve" => pcos.leve,
    "pcos.moderado" => pcos.moderado,
    "pcos.severo" => pcos.severo,
    "endometriosis.mild" => endometriosis.mild,
    "endometriosis.severe" => endometriosis.severe,
    "myoma.submucosal" => myoma.submucosal,
    "myoma.intramural_large" => myoma.intramural_large,
    "myoma.subserosal" => myoma.subserosal,
    "adenomyosis.focal" => adenomyosis.focal,
    "adenomyosis.diffuse" => adenomyosis.diffuse,
    "polyp.small" => polyp.small,
    "polyp.large" => polyp.large,
    "polyp.multiple" => polyp.multiple,
    "hsg.unilateral" => hsg.unilateral,
    "hsg.bilateral" => hsg.bilateral,
    "hsg.malformation" => hsg.malformation,
    "amh.very_low_below" => amh.very_low_below,
    "amh.low_below" => amh.low_below,
    "amh.high_from" => amh.high_from,
    "amh.very_low" => amh.very_low,
    "amh.low" => amh.low,
    "prolactin.high_above" => prolactin.high_above,
    "prolactin.high" => prolactin.high,
    "tsh.low_below" => tsh.low_below,
    "tsh.suboptimal_above" => tsh.suboptimal_above,
    "tsh.high_above" => tsh.high_above,
    "tsh.low" => tsh.low,
    "tsh.suboptimal" => tsh.suboptimal,
    "tsh.high" => tsh.high,
    "tpo.positive" => tpo.positive,
    "homa.resistant_from" => homa.resistant_from,
    "homa.resistant" => homa.resistant,
    "male.concentration_min" => male.concentration_min,
    "male.motility_min" => male.motility_min,
    "male.morphology_min" => male.morphology_min,
    "male.severe_concentration_below" => male.severe_concentration_below,
    "male.severe_motility_below" => male.severe_motility_below,
    "male.severe_morphology_below" => male.severe_morphology_below,
    "male.leve" => male.leve,
    "male.moderado" => male.moderado,
    "male.severo" => male.severo,
    "male.azoospermia" => male.azoospermia,
}

impl ClinicalConstants {
    fn indexed_scalar(&self, key: &str) -> Option<f64> {
        let (table, index, field) = split_indexed_key(key)?;

        match (table, field) {
            ("age_baseline", "upper") => self.age.brackets.get(index).map(|b| b.upper_exclusive),
            ("age_baseline", "value") => self.age.brackets.get(index).map(|b| b.value),
            ("benchmark", "upper") => self.benchmark.brackets.get(index).map(|b| b.upper_exclusive),
            ("benchmark", "value") => self.benchmark.brackets.get(index).map(|b| b.value),
            ("infertility_duration", "from") => self.infertility_duration.get(index).map(|b| b.from),
            ("infertility_duration", "factor") => {
                self.infertility_duration.get(index).map(|b| b.factor)
            }
            ("pelvic_surgery", "from") => self.pelvic_surgery.get(index).map(|b| b.from),
            ("pelvic_surgery", "factor") => self.pelvic_surgery.get(index).map(|b| b.factor),
            _ => None,
        }
    }

    fn indexed_slot_mut(&mut self, key: &str) -> Option<&mut f64> {
        let (table, index, field) = split_indexed_key(key)?;

        match (table, field) {
            ("age_baseline", "upper") => self
                .age
                .brackets
                .get_mut(index)
                .map(|b| &mut b.upper_exclusive),
            ("age_baseline", "value") => self.age.brackets.get_mut(index).map(|b| &mut b.value),
            ("benchmark", "upper") => self
                .benchmark
                .brackets
                .get_mut(index)
                .map(|b| &mut b.upper_exclusive),
            ("benchmark", "value") => self.benchmark.brackets.get_mut(index).map(|b| &mut b.value),
            ("infertility_duration", "from") => {
                self.infertility_duration.get_mut(index).map(|b| &mut b.from)
            }
            ("infertility_duration", "factor") => {
                self.infertility_duration.get_mut(index).map(|b| &mut b.factor)
            }
            ("pelvic_surgery", "from") => self.pelvic_surgery.get_mut(index).map(|b| &mut b.from),
            ("pelvic_surgery", "factor") => {
                self.pelvic_surgery.get_mut(index).map(|b| &mut b.factor)
            }
            _ => None,
        }
    }
}

/// `table.index.field`, e.g. `age_baseline.1.value`.
fn split_indexed_key(key: &str) -> Option<(&str, usize, &str)> {
    let mut parts = key.splitn(3, '.');
    let table = parts.next()?;
    let index = parts.next()?.parse().ok()?;
    let field = parts.next()?;
    Some((table, index, field))
}

/// Keys holding multipliers (or likelihood ratios), which must stay within `[0, 1]`.
fn is_multiplier_key(key: &str) -> bool {
    const THRESHOLD_SUFFIXES: &[&str] = &[
        "_below", "_above", "_from", "_min", "min_age", "_bmi", ".upper", ".from",
    ];
    if key == "age.fallback_probability"
        || key == "benchmark.tolerance"
        || key == "bmi.reference_probability"
        || key.starts_with("age_baseline.")
        || key.starts_with("benchmark.")
    {
        return false;
    }
    !THRESHOLD_SUFFIXES.iter().any(|suffix| key.ends_with(suffix))
}

/// Keys holding per-cycle probabilities, expressed as percentages.
fn is_percentage_key(key: &str) -> bool {
    key == "age.fallback_probability"
        || (key.starts_with("age_baseline.") || key.starts_with("benchmark."))
            && key.ends_with(".value")
}

fn check_brackets(table: &'static str, brackets: &[AgeBracket]) -> Result<(), ConstantsError> {
    let ordered = brackets
        .windows(2)
        .all(|pair| pair[0].upper_exclusive < pair[1].upper_exclusive);
    if brackets.is_empty() || !ordered {
        return Err(ConstantsError::UnorderedBrackets { table });
    }
    Ok(())
}

fn check_bands(table: &'static str, bands: &[ThresholdBand]) -> Result<(), ConstantsError> {
    let ordered = bands.windows(2).all(|pair| pair[0].from < pair[1].from);
    if !ordered {
        return Err(ConstantsError::UnorderedBrackets { table });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_valid() {
        ClinicalConstants::default()
            .validate()
            .expect("built-in table validates");
    }

    #[test]
    fn every_listed_key_is_addressable() {
        let constants = ClinicalConstants::default();
        for key in ClinicalConstants::scalar_keys() {
            assert!(constants.scalar(&key).is_some(), "{key} has no slot");
        }
        assert_eq!(constants.scalar("age_baseline.1.value"), Some(17.5));
        assert_eq!(constants.scalar("pelvic_surgery.2.factor"), Some(0.70));
        assert_eq!(constants.scalar("age_baseline.9.value"), None);
        assert_eq!(constants.scalar("bmi.unknown"), None);
    }

    #[test]
    fn rejects_multiplier_above_one() {
        let mut constants = ClinicalConstants::default();
        constants.tsh.high = 1.2;

        let err = constants.validate().expect_err("multiplier out of range");
        assert_eq!(
            err,
            ConstantsError::MultiplierOutOfRange {
                key: "tsh.high".to_string(),
                value: 1.2
            }
        );
    }

    #[test]
    fn thresholds_are_not_treated_as_multipliers() {
        assert!(!is_multiplier_key("prolactin.high_above"));
        assert!(!is_multiplier_key("male.concentration_min"));
        assert!(!is_multiplier_key("pcos.obese_bmi"));
        assert!(!is_multiplier_key("age_baseline.0.value"));
        assert!(is_multiplier_key("prolactin.high"));
        assert!(is_multiplier_key("infertility_duration.1.factor"));
        assert!(is_multiplier_key("bmi.obese_lr"));
    }

    #[test]
    fn percentages_must_stay_within_zero_and_one_hundred() {
        let mut constants = ClinicalConstants::default();
        constants.age.brackets[1].value = 250.0;
        assert_eq!(
            constants.validate(),
            Err(ConstantsError::PercentageOutOfRange {
                key: "age_baseline.1.value".to_string(),
                value: 250.0
            })
        );

        let mut constants = ClinicalConstants::default();
        constants.age.fallback_probability = -1.0;
        assert!(matches!(
            constants.validate(),
            Err(ConstantsError::PercentageOutOfRange { .. })
        ));

        let mut constants = ClinicalConstants::default();
        constants.benchmark.tolerance = -0.5;
        assert_eq!(
            constants.validate(),
            Err(ConstantsError::NegativeTolerance(-0.5))
        );
    }

    #[test]
    fn percentage_keys_cover_baselines_and_benchmarks() {
        assert!(is_percentage_key("age.fallback_probability"));
        assert!(is_percentage_key("age_baseline.4.value"));
        assert!(is_percentage_key("benchmark.0.value"));
        assert!(!is_percentage_key("benchmark.0.upper"));
        assert!(!is_percentage_key("benchmark.tolerance"));
        assert!(!is_percentage_key("bmi.reference_probability"));
    }

    #[test]
    fn scalar_reads_match_overridden_slots() {
        let mut constants = ClinicalConstants::default();
        for key in ClinicalConstants::scalar_keys() {
            let slot = constants.slot_mut(&key).expect("every key has a slot");
            *slot += 0.25;
        }

        let defaults = ClinicalConstants::default();
        for key in ClinicalConstants::scalar_keys() {
            let before = defaults.scalar(&key).expect("default value");
            assert_eq!(constants.scalar(&key), Some(before + 0.25), "{key}");
        }
    }

    #[test]
    fn rejects_unordered_brackets() {
        let mut constants = ClinicalConstants::default();
        constants.benchmark.brackets[2].upper_exclusive = 31.0;

        assert_eq!(
            constants.validate(),
            Err(ConstantsError::UnorderedBrackets { table: "benchmark" })
        );
    }

    #[test]
    fn bands_pick_the_highest_reached_threshold() {
        let bands = ClinicalConstants::default().infertility_duration;

        assert_eq!(ThresholdBand::factor_for(&bands, 0.5), 1.0);
        assert_eq!(ThresholdBand::factor_for(&bands, 2.0), 0.85);
        assert_eq!(ThresholdBand::factor_for(&bands, 5.5), 0.70);
        assert_eq!(ThresholdBand::factor_for(&bands, 12.0), 0.55);
    }

    #[test]
    fn brackets_respect_bounds_and_minimum_age() {
        let age = ClinicalConstants::default().age;

        let find = |value: f64| AgeBracket::find(&age.brackets, age.min_age, value);
        assert_eq!(find(29.9).map(|b| b.value), Some(20.0));
        assert_eq!(find(30.0).map(|b| b.value), Some(17.5));
        assert_eq!(find(40.0).map(|b| b.value), Some(7.5));
        assert_eq!(find(40.5).map(|b| b.value), Some(7.5));
        assert_eq!(find(41.0).map(|b| b.value), Some(3.0));
        assert_eq!(find(17.9).map(|b| b.value), None);
        assert_eq!(find(55.9).map(|b| b.value), Some(3.0));
        assert_eq!(find(55.0).map(|b| b.value), Some(3.0));
        assert!(find(56.0).is_none());
        assert!(find(15.0).is_none());
        assert!(find(f64::NAN).is_none());
    }
}
