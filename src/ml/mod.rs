// ============================================================
// Layer 5 — Model Layer (ZeroR)
// ============================================================
// The majority-class baseline itself. Both steps are pure
// functions over borrowed slices:
//
//   rule_builder.rs — tallies training labels and picks the most
//                     frequent one, ties going to the label seen
//                     first in training order
//
//   evaluator.rs    — counts how many test labels equal the rule
//                     and reports the fraction
//
// Nothing here keeps state between calls, so independent
// sequences can be scored on separate threads without locking.

/// Frequency tally and majority rule
pub mod rule_builder;

/// Accuracy of a rule over the test partition
pub mod evaluator;
