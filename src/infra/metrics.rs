// ============================================================
// Layer 6 — Run Logger
// ============================================================
// Records each baseline run as one row of a CSV file.
//
// Columns:
//   - observations:   length of the loaded sequence
//   - train_fraction: the split used, e.g. "1/3"
//   - train_size:     training partition length
//   - test_size:      test partition length
//   - rule:           predicted label, empty when there was no rule
//   - matches:        test observations equal to the rule
//   - accuracy:       matches / test_size, empty when undefined
//
// Output file: <dir>/runs.csv
//
// Example CSV output:
//   observations,train_fraction,train_size,test_size,rule,matches,accuracy
//   4722,1/3,1574,3148,Baldwin Bikes,2147,0.682020
//   2,1/3,0,2,,0,0.000000

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
};

use crate::application::evaluate_use_case::BaselineReport;

/// One row of the run log
#[derive(Debug, Clone, Serialize)]
struct RunRecord<'a> {
    observations:   usize,
    train_fraction: String,
    train_size:     usize,
    test_size:      usize,
    rule:           Option<&'a str>,
    matches:        usize,
    accuracy:       Option<String>,
}

impl<'a> From<&'a BaselineReport> for RunRecord<'a> {
    fn from(r: &'a BaselineReport) -> Self {
        Self {
            observations:   r.observations,
            train_fraction: r.train_fraction.to_string(),
            train_size:     r.train_size,
            test_size:      r.test_size,
            rule:           r.rule.label(),
            matches:        r.accuracy.matches,
            accuracy:       r.accuracy.fraction().map(|f| format!("{f:.6}")),
        }
    }
}

/// Appends baseline runs to a CSV file.
pub struct RunLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl RunLogger {
    /// Create a new RunLogger.
    /// Creates the directory if needed; the header is written by the
    /// first `log` call on a new file.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());

        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create metrics directory '{}'", dir.display()))?;

        Ok(Self { csv_path: dir.join("runs.csv") })
    }

    /// Append one run as a new row in the CSV.
    pub fn log(&self, report: &BaselineReport) -> Result<()> {
        let is_new = !self.csv_path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open run log '{}'", self.csv_path.display()))?;

        // csv quotes store names that contain commas
        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);

        writer.serialize(RunRecord::from(report))?;
        writer.flush()?;

        tracing::debug!(
            "Logged run: {} observations, rule={}",
            report.observations,
            report.rule,
        );

        Ok(())
    }

    /// Return the path to the run log CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
