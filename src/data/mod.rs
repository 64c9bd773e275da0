// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the exported result set and the two
// partitions the model layer consumes:
//
//   sales export (.csv)
//       │
//       ▼
//   CsvObservationLoader → reads the label column, keeps row order
//       │
//       ▼
//   split_train_test     → training prefix, test suffix
//
// Each module handles exactly one step and is tested on its own.

/// Loads ordered observations from a CSV export
pub mod loader;

/// Positional train/test partitioning
pub mod splitter;
