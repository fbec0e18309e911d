use crate::infra::{read_input, InMemoryReportRepository};
use chrono::SecondsFormat;
use clap::Args;
use fertility_prognosis::error::AppError;
use fertility_prognosis::prognosis::{
    rank_improvements, simulate_all_improvements, simulate_factor, EvaluationState, FactorKind,
    HsgResult, PrognosisEngine, PrognosisService, SimulationResult, SimulationTarget, UserInput,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// JSON document describing the patient snapshot
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Pretty-print the evaluation state
    #[arg(long)]
    pub(crate) pretty: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// JSON document describing the patient snapshot
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Factor to normalize (e.g. `bmi`, `tsh`, `infertility-duration`). Omit to rank every improvement.
    #[arg(long, value_parser = crate::infra::parse_factor)]
    pub(crate) factor: Option<FactorKind>,
}

#[derive(Serialize)]
struct ImprovementOverview {
    all: SimulationResult,
    ranked: Vec<SimulationResult>,
}

pub(crate) fn run_evaluate(engine: &PrognosisEngine, args: EvaluateArgs) -> Result<(), AppError> {
    let input = read_input(&args.input)?;
    let state = engine.evaluate(&input);

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&state)?
    } else {
        serde_json::to_string(&state)?
    };
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_simulate(engine: &PrognosisEngine, args: SimulateArgs) -> Result<(), AppError> {
    let input = read_input(&args.input)?;
    let state = engine.evaluate(&input);

    let payload = match args.factor {
        Some(kind) => {
            let explanation = format!("Simulación con el factor {} en su valor óptimo.", kind.label());
            serde_json::to_value(simulate_factor(&state, kind, explanation))?
        }
        None => serde_json::to_value(ImprovementOverview {
            all: simulate_all_improvements(&state),
            ranked: rank_improvements(&state),
        })?,
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub(crate) fn run_demo(engine: PrognosisEngine) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryReportRepository::default());
    let service = PrognosisService::new(repository, engine);

    println!("Fertility prognosis demo");

    println!("\nScenario A: 30 years old, every study within range");
    let (stored, state) = match service.evaluate_and_store(&baseline_patient()) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Stored report {} at {}",
        stored.key,
        stored.stored_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    render_state(&state);

    println!("\nScenario B: scenario A with BMI forced to 0.85 and TSH forced to 0.80");
    let forced = state
        .factors
        .with(FactorKind::Bmi, 0.85)
        .with(FactorKind::Tsh, 0.80);
    println!(
        "- {:.1} × {:.2} × {:.2} = {:.1}%",
        forced.base_age_probability,
        forced.bmi,
        forced.tsh,
        forced.prognosis()
    );

    println!("\nScenario C: scenario A with a prior tubal ligation");
    let with_ligation = UserInput {
        has_tubal_ligation: true,
        ..baseline_patient()
    };
    let (stored, state) = match service.evaluate_and_store(&with_ligation) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return Ok(());
        }
    };
    println!("- Stored report {}", stored.key);
    render_state(&state);

    println!("\nCounselling view: 38 years old with several modifiable factors");
    let (stored, state) = match service.evaluate_and_store(&counselling_patient()) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("  Evaluation unavailable: {}", err);
            return Ok(());
        }
    };
    render_state(&state);

    match service.improvements(&stored.key) {
        Ok(ranked) if ranked.is_empty() => println!("  No modifiable factors to simulate"),
        Ok(ranked) => {
            println!("  Ranked improvements:");
            for result in &ranked {
                render_simulation(result);
            }
        }
        Err(err) => println!("  Improvements unavailable: {}", err),
    }
    match service.simulate_all(&stored.key) {
        Ok(result) => render_simulation(&result),
        Err(err) => println!("  Combined simulation unavailable: {}", err),
    }

    Ok(())
}

fn render_state(state: &EvaluationState) {
    let report = &state.report;
    println!(
        "  {} {} | pronóstico {}",
        report.emoji,
        report.category.label(),
        report.prognosis_label
    );
    for phrase in &report.phrases {
        println!("  {}", phrase);
    }
    println!("  Benchmark: {}", report.benchmark.phrase);

    if report.findings.is_empty() {
        println!("  Findings: none");
    } else {
        println!("  Findings:");
        for finding in &report.findings {
            println!("    - {} (x{:.2})", finding.title, finding.multiplier);
            if let Some(first) = finding.recommendations.first() {
                println!("      {}", first);
            }
        }
    }

    if !report.missing_data.is_empty() {
        println!("  Missing data:");
        for notice in &report.missing_data {
            println!("    - {}", notice);
        }
    }
}

fn render_simulation(result: &SimulationResult) {
    let target = match result.target {
        SimulationTarget::Factor(kind) => kind.label().to_string(),
        SimulationTarget::All => "todos los factores".to_string(),
    };
    println!(
        "    - {}: {:.1}% -> {:.1}% (+{:.1})",
        target, result.original_prognosis, result.new_prognosis, result.improvement
    );
}

fn baseline_patient() -> UserInput {
    UserInput {
        bmi: Some(22.0),
        cycle_duration: Some(28.0),
        hsg_result: Some(HsgResult::Normal),
        amh: Some(2.5),
        prolactin: Some(15.0),
        tsh: Some(2.0),
        tpo_ab_positive: Some(false),
        homa_ir: Some(1.5),
        sperm_concentration: Some(40.0),
        sperm_progressive_motility: Some(50.0),
        sperm_normal_morphology: Some(5.0),
        ..UserInput::new(30.0)
    }
}

fn counselling_patient() -> UserInput {
    UserInput {
        bmi: Some(32.0),
        tsh: Some(4.2),
        prolactin: Some(38.0),
        infertility_duration: Some(4.0),
        ..UserInput::new(38.0)
    }
}
