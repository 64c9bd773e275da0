// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns used by the outer layers that don't belong to any
// one of them:
//
//   report.rs  — Reporting collaborator
//                Renders a BaselineReport as console text or
//                JSON. "No rule" and "undefined accuracy" are
//                rendered distinctly from a real label or 0%.
//
//   metrics.rs — Run log
//                Appends one row per baseline run to a CSV file
//                so runs over different exports can be compared.

/// Text and JSON rendering of baseline results
pub mod report;

/// Baseline run CSV logger
pub mod metrics;
