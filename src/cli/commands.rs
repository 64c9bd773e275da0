// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands share the same data flags:
//   evaluate — full baseline run and report
//   split    — only the partition sizes
//   rule     — only the predicted store
//
// Every data flag can also come from the environment (or a
// `.env` file loaded at startup), e.g. ZEROR_DATA=sales.csv.

use clap::{Args, Subcommand, ValueEnum};

use crate::application::evaluate_use_case::EvaluateConfig;
use crate::data::loader::DEFAULT_LABEL_COLUMN;
use crate::data::splitter::TrainFraction;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the ZeroR rule and measure its accuracy
    Evaluate(EvaluateArgs),

    /// Show how the observations would be partitioned
    Split(SourceArgs),

    /// Print only the store the baseline would predict
    Rule(SourceArgs),
}

/// Where the observations come from and how to split them
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV export of the sales query, one row per order item
    #[arg(long, env = "ZEROR_DATA")]
    pub data: String,

    /// Header of the column holding the store name
    #[arg(long, env = "ZEROR_LABEL_COLUMN", default_value = DEFAULT_LABEL_COLUMN)]
    pub label_column: String,

    /// The file has no header row; the first column is the label
    #[arg(long)]
    pub no_header: bool,

    /// Share of the sequence used for training, as "n/d"
    #[arg(long, env = "ZEROR_TRAIN_FRACTION", default_value_t = TrainFraction::ONE_THIRD)]
    pub train_fraction: TrainFraction,
}

/// How the evaluate report is printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// All arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also list how many training orders each store had
    #[arg(long)]
    pub show_distribution: bool,

    /// Append this run to <dir>/runs.csv
    #[arg(long, env = "ZEROR_METRICS_DIR")]
    pub metrics_dir: Option<String>,
}

/// Convert CLI SourceArgs into the application-layer EvaluateConfig.
/// The application layer never sees clap types.
impl From<SourceArgs> for EvaluateConfig {
    fn from(a: SourceArgs) -> Self {
        EvaluateConfig {
            data_path:      a.data,
            label_column:   a.label_column,
            has_headers:    !a.no_header,
            train_fraction: a.train_fraction,
            metrics_dir:    None,
        }
    }
}

impl From<&EvaluateArgs> for EvaluateConfig {
    fn from(a: &EvaluateArgs) -> Self {
        EvaluateConfig {
            metrics_dir: a.metrics_dir.clone(),
            ..EvaluateConfig::from(a.source.clone())
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_evaluate_defaults() {
        let cli = Cli::try_parse_from(["store-zeror", "evaluate", "--data", "sales.csv"]).unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };

        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.show_distribution);

        let cfg = EvaluateConfig::from(&args);
        assert_eq!(cfg.data_path, "sales.csv");
        assert_eq!(cfg.label_column, "store_name");
        assert!(cfg.has_headers);
        assert_eq!(cfg.train_fraction, TrainFraction::ONE_THIRD);
    }

    #[test]
    fn test_source_flags() {
        let cli = Cli::try_parse_from([
            "store-zeror", "rule",
            "--data", "sales.csv",
            "--label-column", "store",
            "--no-header",
            "--train-fraction", "1/2",
        ])
        .unwrap();
        let Commands::Rule(args) = cli.command else {
            panic!("expected rule");
        };

        let cfg = EvaluateConfig::from(args);
        assert_eq!(cfg.label_column, "store");
        assert!(!cfg.has_headers);
        assert_eq!(cfg.train_fraction, TrainFraction::new(1, 2).unwrap());
        assert_eq!(cfg.metrics_dir, None);
    }

    #[test]
    fn test_bad_fraction_is_rejected() {
        let res = Cli::try_parse_from([
            "store-zeror", "split", "--data", "sales.csv", "--train-fraction", "3/2",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_json_format() {
        let cli = Cli::try_parse_from([
            "store-zeror", "evaluate", "--data", "sales.csv", "--format", "json",
        ])
        .unwrap();
        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }
}
