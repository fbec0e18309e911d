use super::insights::collect_findings;
use super::views::{Benchmark, BenchmarkComparison, Finding, PrognosisCategory, Report};
use crate::prognosis::domain::UserInput;
use crate::prognosis::evaluation::config::{AgeBracket, BenchmarkConstants};
use crate::prognosis::evaluation::ClinicalConstants;
use crate::prognosis::factors::{Diagnostics, Factors};

const BUENO_FROM: f64 = 15.0;
const MODERADO_FROM: f64 = 5.0;

const BLOCKER_PHRASE: &str = "La oclusión tubárica bilateral impide la concepción espontánea: \
     la probabilidad natural de embarazo es nula y la alternativa indicada es la fecundación in vitro.";
const NOT_APPLICABLE_PHRASE: &str =
    "La comparación con otras mujeres de tu edad no aplica mientras exista una oclusión tubárica.";

/// Builds the display report for one evaluation.
pub(crate) fn generate_report(
    numeric_prognosis: f64,
    diagnostics: &Diagnostics,
    input: &UserInput,
    factors: &Factors,
    constants: &ClinicalConstants,
) -> Report {
    let blocked = blocker_active(factors);
    let category = categorize(numeric_prognosis, blocked);
    let findings = collect_findings(factors, diagnostics, input, constants);

    let numeric_prognosis = if numeric_prognosis.is_finite() {
        numeric_prognosis
    } else {
        0.0
    };

    let benchmark = if blocked {
        Benchmark {
            bracket: None,
            benchmark_value: None,
            comparison: BenchmarkComparison::NotApplicable,
            phrase: NOT_APPLICABLE_PHRASE.to_string(),
        }
    } else {
        compare_with_benchmark(numeric_prognosis, input.age, &constants.benchmark)
    };

    let prognosis_label = match category {
        PrognosisCategory::Error => "no disponible".to_string(),
        _ => format!("{numeric_prognosis:.1}%"),
    };

    Report {
        numeric_prognosis,
        prognosis_label,
        category,
        emoji: category.emoji().to_string(),
        phrases: narrative(category, blocked, &findings, diagnostics),
        benchmark,
        findings,
        missing_data: diagnostics.missing_data.clone(),
    }
}

/// Tubal ligation collapses the product to zero and overrides everything else.
pub(crate) fn blocker_active(factors: &Factors) -> bool {
    factors.otb <= f64::EPSILON
}

fn categorize(numeric_prognosis: f64, blocked: bool) -> PrognosisCategory {
    if !numeric_prognosis.is_finite() {
        PrognosisCategory::Error
    } else if blocked {
        PrognosisCategory::Bajo
    } else if numeric_prognosis >= BUENO_FROM {
        PrognosisCategory::Bueno
    } else if numeric_prognosis >= MODERADO_FROM {
        PrognosisCategory::Moderado
    } else {
        PrognosisCategory::Bajo
    }
}

fn compare_with_benchmark(
    numeric_prognosis: f64,
    age: f64,
    constants: &BenchmarkConstants,
) -> Benchmark {
    // Older ages than the last bound still compare against the oldest bracket.
    let bracket = AgeBracket::find(&constants.brackets, 0.0, age).or_else(|| {
        constants
            .brackets
            .last()
            .filter(|last| age.is_finite() && age >= last.upper_exclusive)
    });

    let Some(bracket) = bracket else {
        return Benchmark {
            bracket: None,
            benchmark_value: None,
            comparison: BenchmarkComparison::NotApplicable,
            phrase: "No hay un grupo de edad de referencia para comparar tu resultado.".to_string(),
        };
    };

    let difference = numeric_prognosis - bracket.value;
    let (comparison, relation) = if difference > constants.tolerance {
        (BenchmarkComparison::NotablyAbove, "notablemente superior al")
    } else if difference < -constants.tolerance {
        (BenchmarkComparison::NotablyBelow, "notablemente inferior al")
    } else {
        (BenchmarkComparison::Similar, "similar al")
    };

    Benchmark {
        bracket: Some(bracket.label.clone()),
        benchmark_value: Some(bracket.value),
        comparison,
        phrase: format!(
            "Tu pronóstico ({numeric_prognosis:.1}%) es {relation} promedio para el grupo de edad «{}» ({:.1}%).",
            bracket.label, bracket.value
        ),
    }
}

fn narrative(
    category: PrognosisCategory,
    blocked: bool,
    findings: &[Finding],
    diagnostics: &Diagnostics,
) -> Vec<String> {
    let mut phrases = Vec::new();

    phrases.push(match category {
        PrognosisCategory::Error => {
            "No fue posible calcular el pronóstico con los datos ingresados.".to_string()
        }
        _ if blocked => BLOCKER_PHRASE.to_string(),
        PrognosisCategory::Bueno => {
            "Tu pronóstico de embarazo espontáneo por ciclo es bueno.".to_string()
        }
        PrognosisCategory::Moderado => "Tu pronóstico es moderado: la concepción espontánea es \
             posible, aunque puede requerir más tiempo o apoyo médico."
            .to_string(),
        PrognosisCategory::Bajo => "Tu pronóstico es bajo; te recomendamos consultar con un \
             especialista en reproducción."
            .to_string(),
    });

    let main = findings
        .iter()
        .min_by(|a, b| a.multiplier.total_cmp(&b.multiplier));
    match (findings.len(), main) {
        (_, None) => phrases.push(
            "No se identificaron factores que reduzcan tu probabilidad de embarazo.".to_string(),
        ),
        (1, Some(main)) => phrases.push(format!(
            "Se identificó un factor que reduce tu probabilidad: {}.",
            main.title
        )),
        (count, Some(main)) => phrases.push(format!(
            "Se identificaron {count} factores que reducen tu probabilidad; el de mayor impacto es: {}.",
            main.title
        )),
    }

    if !diagnostics.missing_data.is_empty() {
        phrases.push(format!(
            "Faltan {} datos para completar la evaluación; el resultado puede cambiar al completarlos.",
            diagnostics.missing_data.len()
        ));
    }

    if !diagnostics.anomalies.is_empty() {
        phrases.push(
            "Algunos datos estaban fuera de rango y se sustituyeron por valores conservadores."
                .to_string(),
        );
    }

    phrases
}
