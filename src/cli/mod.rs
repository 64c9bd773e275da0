// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, delegates the work to Layer 2, and prints the result.
//
//   1. `evaluate` — build the rule and report its accuracy
//   2. `split`    — print the partition sizes
//   3. `rule`     — print the predicted store

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, EvaluateArgs, OutputFormat, SourceArgs};

use crate::application::evaluate_use_case::EvaluateUseCase;
use crate::data::splitter::TrainFraction;
use crate::infra::report;

#[derive(Parser, Debug)]
#[command(
    name = "store-zeror",
    version,
    about = "Predict the store of the next sale with a ZeroR majority-class baseline."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Split(args)    => run_split(args),
            Commands::Rule(args)     => run_rule(args),
        }
    }
}

fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    tracing::info!("Evaluating ZeroR baseline on: {}", args.source.data);
    println!("{}", evaluate_output(&args)?);
    Ok(())
}

fn run_split(args: SourceArgs) -> Result<()> {
    println!("{}", split_output(args)?);
    Ok(())
}

fn run_rule(args: SourceArgs) -> Result<()> {
    println!("{}", rule_output(args)?);
    Ok(())
}

/// Report text for `evaluate`, without the trailing newline
fn evaluate_output(args: &EvaluateArgs) -> Result<String> {
    let use_case = EvaluateUseCase::new(args.into());
    let report   = use_case.execute()?;

    let rendered = match args.format {
        OutputFormat::Text => report::render_text(&report, args.show_distribution),
        OutputFormat::Json => report::render_json(&report)?,
    };
    Ok(rendered.trim_end().to_string())
}

fn split_output(args: SourceArgs) -> Result<String> {
    let fraction = args.train_fraction;
    let use_case = EvaluateUseCase::new(args.into());
    let (train, test) = use_case.split()?;

    Ok(split_summary(train, test, fraction))
}

/// Index ranges of both partitions: training is [0, k), test is [k, N)
fn split_summary(train: usize, test: usize, fraction: TrainFraction) -> String {
    format!(
        "training: [0, {train})  {train} observations\n\
         test:     [{train}, {total})  {test} observations\n\
         fraction: {fraction}",
        total = train + test,
    )
}

fn rule_output(args: SourceArgs) -> Result<String> {
    let use_case = EvaluateUseCase::new(args.into());
    Ok(use_case.rule()?.to_string())
}
