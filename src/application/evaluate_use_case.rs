// ============================================================
// Layer 2 — EvaluateUseCase
// ============================================================
// Runs the ZeroR baseline end to end:
//
//   Step 1: Load observations         (Layer 4 - data)
//   Step 2: Split training / test     (Layer 4 - data)
//   Step 3: Build the majority rule   (Layer 5 - ml)
//   Step 4: Score it on the test set  (Layer 5 - ml)
//   Step 5: Append to the run log     (Layer 6 - infra, optional)
//
// Steps 2-4 live in `run_baseline`, which takes an in-memory
// sequence and has no I/O, so it can be called directly for any
// number of independent sequences.

use anyhow::{Context, Result};

use crate::data::loader::CsvObservationLoader;
use crate::data::splitter::{split_train_test, Partition, TrainFraction};
use crate::domain::accuracy::Accuracy;
use crate::domain::observation::ObservationSequence;
use crate::domain::rule::Rule;
use crate::domain::traits::ObservationSource;
use crate::infra::metrics::RunLogger;
use crate::ml::evaluator::evaluate;
use crate::ml::rule_builder::{build_rule, rule_from_tally, tally, LabelCount};

// ─── Evaluation Configuration ────────────────────────────────────────────────
// Everything needed to locate the data and split it.
#[derive(Debug, Clone)]
pub struct EvaluateConfig {
    pub data_path:      String,
    pub label_column:   String,
    pub has_headers:    bool,
    pub train_fraction: TrainFraction,
    pub metrics_dir:    Option<String>,
}

impl EvaluateConfig {
    /// Build the loader this config describes
    pub fn loader(&self) -> CsvObservationLoader {
        CsvObservationLoader::new(&self.data_path)
            .with_label_column(&self.label_column)
            .with_headers(self.has_headers)
    }
}

// ─── BaselineReport ───────────────────────────────────────────────────────────
/// Everything one baseline run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct BaselineReport {
    pub observations:   usize,
    pub train_size:     usize,
    pub test_size:      usize,
    pub train_fraction: TrainFraction,
    pub rule:           Rule,
    pub accuracy:       Accuracy,

    /// Training label counts in first-occurrence order
    pub distribution:   Vec<LabelCount>,
}

/// Split, build the rule, and score it. Pure and total.
pub fn run_baseline(sequence: &ObservationSequence, fraction: TrainFraction) -> BaselineReport {
    let Partition { training, test } = split_train_test(sequence.as_slice(), fraction);

    // One tally feeds both the rule and the reported distribution
    let counts   = tally(training);
    let rule     = rule_from_tally(&counts);
    let accuracy = evaluate(test, &rule);

    BaselineReport {
        observations:   sequence.len(),
        train_size:     training.len(),
        test_size:      test.len(),
        train_fraction: fraction,
        rule,
        accuracy,
        distribution:   counts.to_counts(),
    }
}

// ─── EvaluateUseCase ─────────────────────────────────────────────────────────
pub struct EvaluateUseCase<S: ObservationSource> {
    source: S,
    config: EvaluateConfig,
}

impl EvaluateUseCase<CsvObservationLoader> {
    /// Use case reading from the CSV export named in the config
    pub fn new(config: EvaluateConfig) -> Self {
        Self::with_source(config.loader(), config)
    }
}

impl<S: ObservationSource> EvaluateUseCase<S> {
    /// Use case reading from any observation source
    pub fn with_source(source: S, config: EvaluateConfig) -> Self {
        Self { source, config }
    }

    fn load(&self) -> Result<ObservationSequence> {
        self.source
            .load_all()
            .with_context(|| format!("Cannot load observations from '{}'", self.config.data_path))
    }

    /// Load the data and return only the split sizes.
    pub fn split(&self) -> Result<(usize, usize)> {
        let sequence = self.load()?;
        let p = split_train_test(sequence.as_slice(), self.config.train_fraction);
        Ok((p.training.len(), p.test.len()))
    }

    /// Load the data and return only the rule built from the training partition.
    pub fn rule(&self) -> Result<Rule> {
        let sequence = self.load()?;
        let p = split_train_test(sequence.as_slice(), self.config.train_fraction);
        Ok(build_rule(p.training))
    }

    /// Execute the full baseline pipeline end to end
    pub fn execute(&self) -> Result<BaselineReport> {
        let cfg = &self.config;

        // ── Step 1: Load observations ─────────────────────────────────────────
        tracing::info!("Loading observations from '{}'", cfg.data_path);
        let sequence = self.load()?;
        if sequence.is_empty() {
            tracing::warn!("No observations loaded; the report will have no rule");
        }
        tracing::info!("Loaded {} observations", sequence.len());

        // ── Steps 2-4: Split, build rule, evaluate ────────────────────────────
        tracing::info!("Running ZeroR with train fraction {}", cfg.train_fraction);
        let report = run_baseline(&sequence, cfg.train_fraction);
        tracing::info!(
            "Split: {} train, {} test; rule: {}",
            report.train_size,
            report.test_size,
            report.rule,
        );

        // ── Step 5: Append to the run log ─────────────────────────────────────
        if let Some(dir) = &cfg.metrics_dir {
            let logger = RunLogger::new(dir)?;
            logger.log(&report)?;
            tracing::info!("Run appended to '{}'", logger.csv_path().display());
        }

        Ok(report)
    }
}
