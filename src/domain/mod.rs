// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that define the
// concepts of the baseline:
//
//   observation.rs — one labelled sale and the ordered sequence of them
//   rule.rs        — the majority label, or the "no rule" sentinel
//   accuracy.rs    — the fraction of test hits, or "undefined"
//   traits.rs      — the seam to the data-access collaborator
//
// Rules for this layer:
//   - NO file I/O or CSV parsing
//   - NO logging or printing
//   - Only plain Rust data and traits

// A single labelled observation and the ordered sequence of them
pub mod observation;

// The predicted label produced by the rule builder
pub mod rule;

// The accuracy produced by the evaluator
pub mod accuracy;

// Abstractions other layers implement
pub mod traits;
