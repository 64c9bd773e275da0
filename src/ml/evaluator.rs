// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores a rule against the test partition:
//
//   accuracy = matches / len(test)
//
// computed as f64, never truncated. A `Rule::NoRule` matches no
// label, so it scores 0.0 on a non-empty partition. An empty
// partition yields an Accuracy with total = 0 whose fraction is
// `None`; no division happens.

use crate::domain::accuracy::Accuracy;
use crate::domain::observation::Observation;
use crate::domain::rule::Rule;

/// Count how many test observations the rule predicts correctly.
pub fn evaluate(test: &[Observation], rule: &Rule) -> Accuracy {
    let matches = test.iter().filter(|obs| rule.matches(obs.label())).count();
    let accuracy = Accuracy::new(matches, test.len());

    if accuracy.is_undefined() {
        tracing::warn!("Test partition is empty; accuracy is undefined");
    } else {
        tracing::debug!("{} of {} test observations matched", matches, test.len());
    }

    accuracy
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observation::ObservationSequence;

    fn predict(label: &str) -> Rule {
        Rule::Predict(label.to_string())
    }

    #[test]
    fn test_all_match() {
        let test = ObservationSequence::from_labels(["X"; 8]);
        let acc  = evaluate(test.as_slice(), &predict("X"));
        assert_eq!(acc, Accuracy::new(8, 8));
        assert_eq!(acc.fraction(), Some(1.0));
    }

    #[test]
    fn test_partial_match_is_fractional() {
        let test = ObservationSequence::from_labels(["S1", "S2", "S1", "S3"]);
        let acc  = evaluate(test.as_slice(), &predict("S1"));
        assert_eq!(acc.matches, 2);
        assert_eq!(acc.fraction(), Some(0.5));
    }

    #[test]
    fn test_no_rule_scores_zero() {
        let test = ObservationSequence::from_labels(["A", "B"]);
        let acc  = evaluate(test.as_slice(), &Rule::NoRule);
        assert_eq!(acc.fraction(), Some(0.0));
        assert!(!acc.is_undefined());
    }

    #[test]
    fn test_empty_test_is_undefined() {
        let acc = evaluate(&[], &predict("X"));
        assert!(acc.is_undefined());
        assert_eq!(acc.fraction(), None);
    }

    #[test]
    fn test_comparison_is_exact() {
        let test = ObservationSequence::from_labels(["x", "X ", "X"]);
        let acc  = evaluate(test.as_slice(), &predict("X"));
        assert_eq!(acc.matches, 1);
    }
}
