use crate::demo::{run_demo, run_evaluate, run_simulate, EvaluateArgs, SimulateArgs};
use crate::infra::load_constants;
use crate::server;
use clap::{Args, Parser, Subcommand};
use fertility_prognosis::config::AppConfig;
use fertility_prognosis::error::AppError;
use fertility_prognosis::prognosis::PrognosisEngine;
use fertility_prognosis::telemetry::{self, LogSink};

#[derive(Parser, Debug)]
#[command(
    name = "Fertility Prognosis",
    about = "Evaluate, simulate and serve fertility prognosis reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a patient snapshot and print the full state as JSON
    Evaluate(EvaluateArgs),
    /// Simulate normalizing one factor, or rank every available improvement
    Simulate(SimulateArgs),
    /// Walk through the reference scenarios with a rendered report
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));
    let config = AppConfig::load()?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Evaluate(args) => run_evaluate(&one_shot_engine(&config)?, args),
        Command::Simulate(args) => run_simulate(&one_shot_engine(&config)?, args),
        Command::Demo => run_demo(one_shot_engine(&config)?),
    }
}

/// One-shot commands log to stderr; stdout carries the command output.
fn one_shot_engine(config: &AppConfig) -> Result<PrognosisEngine, AppError> {
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(PrognosisEngine::new(load_constants(config)?))
}
