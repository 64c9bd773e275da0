// ============================================================
// Layer 4 — Observation Loader
// ============================================================
// Loads observations from a CSV export of the sales query
// (order items joined to orders joined to stores), one row per
// order item, in the order the query returned them.
//
// Expected file shape (header row optional):
//
//   store_name
//   Santa Cruz Bikes
//   Baldwin Bikes
//   ...
//
// Extra columns are allowed; only the label column is read.
//
// Rows are never reordered or skipped: a missing or blank label
// fails the whole load, because dropping a row would shift the
// train/test boundary.
//
// The csv reader drops empty lines on its own, and in a one-column
// export a NULL store name is exactly an empty line. Those rows are
// found by scanning the raw bytes before parsing. Blank lines after
// the last record are treated as end-of-file padding.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::domain::observation::ObservationSequence;
use crate::domain::traits::ObservationSource;

/// Column the sales query selects the store name into
pub const DEFAULT_LABEL_COLUMN: &str = "store_name";

/// Error type for observation loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' not found. Available columns: {available:?}")]
    MissingColumn { column: String, available: Vec<String> },

    #[error("Row {row} has an empty label")]
    EmptyLabel { row: usize },
}

/// Reads one label column from a CSV file.
/// Implements the ObservationSource trait from Layer 3.
#[derive(Debug, Clone)]
pub struct CsvObservationLoader {
    path:         PathBuf,
    label_column: String,
    has_headers:  bool,
}

impl CsvObservationLoader {
    /// Loader for a file with a header row and a `store_name` column
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path:         path.into(),
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            has_headers:  true,
        }
    }

    /// Read labels from a differently named column
    pub fn with_label_column(mut self, column: impl Into<String>) -> Self {
        self.label_column = column.into();
        self
    }

    /// When false, the first row is data and the first column is the label
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Load the file, returning the typed error on failure.
    pub fn load(&self) -> std::result::Result<ObservationSequence, LoadError> {
        if !self.path.is_file() {
            return Err(LoadError::FileNotFound(self.path.display().to_string()));
        }

        let bytes = fs::read(&self.path)?;

        if let Some(row) = first_blank_row(&bytes, self.has_headers) {
            return Err(LoadError::EmptyLabel { row });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .from_reader(bytes.as_slice());

        let col_idx = if self.has_headers {
            let headers = reader.headers()?.clone();

            // A completely empty export is an empty sequence, not an error
            if headers.is_empty() {
                tracing::warn!("'{}' is empty", self.path.display());
                return Ok(ObservationSequence::default());
            }

            headers
                .iter()
                .position(|h| h.trim() == self.label_column)
                .ok_or_else(|| LoadError::MissingColumn {
                    column:    self.label_column.clone(),
                    available: headers.iter().map(String::from).collect(),
                })?
        } else {
            0
        };

        let mut labels = Vec::new();

        // With blank lines ruled out, records map one-to-one onto data rows
        for (i, result) in reader.records().enumerate() {
            let record = result?;
            let row    = i + 1;

            // CHAR columns come back space-padded from the database
            let label = record.get(col_idx).map(str::trim).unwrap_or_default();
            if label.is_empty() {
                return Err(LoadError::EmptyLabel { row });
            }

            labels.push(label.to_string());
        }

        tracing::debug!(
            "Read {} rows from '{}' (label column index {})",
            labels.len(),
            self.path.display(),
            col_idx,
        );

        Ok(ObservationSequence::from_labels(labels))
    }
}

/// Split `bytes` into logical lines (newlines inside quoted fields
/// don't count) and report whether each one is blank. A lone `\r`
/// from CRLF endings counts as blank.
fn blank_lines(bytes: &[u8]) -> Vec<bool> {
    let mut lines       = Vec::new();
    let mut in_quotes   = false;
    let mut has_content = false;

    for &b in bytes {
        match b {
            b'"' => {
                // An escaped "" toggles twice and leaves the state unchanged
                in_quotes   = !in_quotes;
                has_content = true;
            }
            b'\n' if !in_quotes => {
                lines.push(!has_content);
                has_content = false;
            }
            b'\r' if !in_quotes => {}
            _ => has_content = true,
        }
    }

    // Last line without a trailing newline
    if has_content {
        lines.push(false);
    }

    lines
}

/// 1-based data row of the first blank line between records, if any.
fn first_blank_row(bytes: &[u8], has_headers: bool) -> Option<usize> {
    let lines = blank_lines(bytes);

    // csv skips blank lines ahead of the header; the header is not data
    let start = if has_headers {
        lines.iter().position(|&blank| !blank).map_or(lines.len(), |h| h + 1)
    } else {
        0
    };
    let data = &lines[start..];

    let end = data.iter().rposition(|&blank| !blank).map_or(0, |last| last + 1);
    data[..end].iter().position(|&blank| blank).map(|i| i + 1)
}

impl ObservationSource for CsvObservationLoader {
    fn load_all(&self) -> Result<ObservationSequence> {
        let seq = self.load()?;
        tracing::info!(
            "Successfully loaded {} observations from '{}'",
            seq.len(),
            self.path.display()
        );
        Ok(seq)
    }
}
