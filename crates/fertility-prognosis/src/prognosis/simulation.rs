//! "What if" recomputation over an already evaluated state.
//!
//! Every operation works on a copy of `EvaluationState::factors` and reuses
//! [`Factors::prognosis`], so simulated values compose exactly like the engine does.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::evaluation::EvaluationState;
use super::factors::{FactorKind, Factors, NEUTRAL};

/// Which factors a simulation normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SimulationTarget {
    Factor(FactorKind),
    All,
}

/// Transient comparison between the evaluated and the simulated prognosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub target: SimulationTarget,
    pub explanation: String,
    pub original_prognosis: f64,
    pub new_prognosis: f64,
    pub improvement: f64,
    /// Factors that were below neutral and got forced to 1.0.
    pub normalized: Vec<FactorKind>,
}

/// Recomputes the prognosis with `kind` forced to the optimal value.
pub fn simulate_factor(
    state: &EvaluationState,
    kind: FactorKind,
    explanation: impl Into<String>,
) -> SimulationResult {
    let normalized = if state.factors.get(kind) < NEUTRAL {
        vec![kind]
    } else {
        Vec::new()
    };

    compare(
        &state.factors,
        state.factors.with(kind, NEUTRAL),
        SimulationTarget::Factor(kind),
        explanation.into(),
        normalized,
    )
}

/// Forces every sub-optimal factor to 1.0, holding age fixed.
pub fn simulate_all_improvements(state: &EvaluationState) -> SimulationResult {
    let normalized = state.factors.suboptimal();
    let simulated = normalized
        .iter()
        .fold(state.factors, |factors, kind| factors.with(*kind, NEUTRAL));

    let explanation = if normalized.is_empty() {
        "Todos los factores evaluados ya están en su valor óptimo.".to_string()
    } else {
        let labels: Vec<&str> = normalized.iter().map(|kind| kind.label()).collect();
        format!(
            "Si se corrigieran todos los factores modificables ({}), el pronóstico alcanzaría su máximo para tu edad.",
            labels.join(", ")
        )
    };

    compare(
        &state.factors,
        simulated,
        SimulationTarget::All,
        explanation,
        normalized,
    )
}

/// Single-factor simulations for every sub-optimal factor, largest improvement first.
/// Ties keep `FactorKind` order.
pub fn rank_improvements(state: &EvaluationState) -> Vec<SimulationResult> {
    let mut ranked: Vec<SimulationResult> = state
        .factors
        .suboptimal()
        .into_iter()
        .map(|kind| {
            let explanation = format!(
                "Si el factor {} fuera óptimo, tu pronóstico cambiaría de esta forma.",
                kind.label()
            );
            simulate_factor(state, kind, explanation)
        })
        .collect();

    ranked.sort_by(|a, b| b.improvement.total_cmp(&a.improvement));
    ranked
}

fn compare(
    original: &Factors,
    simulated: Factors,
    target: SimulationTarget,
    explanation: String,
    normalized: Vec<FactorKind>,
) -> SimulationResult {
    let original_prognosis = original.prognosis();
    let new_prognosis = simulated.prognosis();

    debug!(
        ?target,
        original = original_prognosis,
        simulated = new_prognosis,
        "simulation computed"
    );

    SimulationResult {
        target,
        explanation,
        original_prognosis,
        new_prognosis,
        improvement: new_prognosis - original_prognosis,
        normalized,
    }
}
