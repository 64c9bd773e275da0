// ============================================================
// Layer 4 — Train/Test Splitter (Partitioner)
// ============================================================
// Splits an ordered observation sequence into two views:
//   - Training partition: the prefix the rule is built from
//   - Test partition:     the suffix the rule is scored against
//
// The split is positional, never shuffled. Given the same input
// order the rule and the accuracy are always the same.
//
// Split index:
//   k = floor(N * numerator / denominator)
//   training = [0, k), test = [k, N)
//
// With the default fraction of 1/3 this is k = N / 3 in integer
// arithmetic, so any N < 3 yields an empty training partition.

use std::fmt;
use std::str::FromStr;

use crate::domain::observation::Observation;

/// Errors produced while parsing or building a `TrainFraction`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractionError {
    #[error("expected a fraction like \"1/3\", got '{0}'")]
    Malformed(String),

    #[error("denominator must be greater than zero")]
    ZeroDenominator,

    #[error("fraction {numerator}/{denominator} is greater than one")]
    GreaterThanOne { numerator: u32, denominator: u32 },
}

// ─── TrainFraction ────────────────────────────────────────────────────────────
/// Share of the sequence used for training, as an exact rational.
///
/// Kept rational rather than `f64` so `1/3` splits exactly like
/// integer division and never drifts on rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainFraction {
    numerator:   u32,
    denominator: u32,
}

impl TrainFraction {
    /// One third: the reference split for the store baseline
    pub const ONE_THIRD: TrainFraction = TrainFraction { numerator: 1, denominator: 3 };

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, FractionError> {
        if denominator == 0 {
            return Err(FractionError::ZeroDenominator);
        }
        if numerator > denominator {
            return Err(FractionError::GreaterThanOne { numerator, denominator });
        }
        Ok(Self { numerator, denominator })
    }

    /// Number of training observations for a sequence of length `n`.
    /// Widened to u128 so `n * numerator` cannot overflow.
    pub fn split_index(&self, n: usize) -> usize {
        let k = (n as u128 * self.numerator as u128) / self.denominator as u128;
        // k <= n because numerator <= denominator
        k as usize
    }
}

impl Default for TrainFraction {
    fn default() -> Self {
        Self::ONE_THIRD
    }
}

impl fmt::Display for TrainFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Parses "n/d". Whitespace around either number is ignored.
impl FromStr for TrainFraction {
    type Err = FractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || FractionError::Malformed(s.to_string());

        let (num, den) = s.split_once('/').ok_or_else(malformed)?;
        let numerator   = num.trim().parse::<u32>().map_err(|_| malformed())?;
        let denominator = den.trim().parse::<u32>().map_err(|_| malformed())?;

        TrainFraction::new(numerator, denominator)
    }
}

// ─── Partition ────────────────────────────────────────────────────────────────
/// Borrowed training and test views over one observation sequence.
#[derive(Debug, Clone, Copy)]
pub struct Partition<'a> {
    pub training: &'a [Observation],
    pub test:     &'a [Observation],
}

/// Split `observations` positionally into (training, test).
///
/// # Arguments
/// * `observations` - The full ordered sequence
/// * `fraction`     - Share of the sequence used for training
///
/// # Example
/// ```ignore
/// let p = split_train_test(seq.as_slice(), TrainFraction::ONE_THIRD);
/// // 9 observations → 3 training, 6 test
/// ```
pub fn split_train_test(observations: &[Observation], fraction: TrainFraction) -> Partition<'_> {
    let total = observations.len();
    let k     = fraction.split_index(total);

    // split_at(k) gives [0, k) and [k, total) with no gap or overlap
    let (training, test) = observations.split_at(k);

    tracing::debug!(
        "Sequence split at {} with fraction {}: {} training, {} test",
        k,
        fraction,
        training.len(),
        test.len(),
    );

    Partition { training, test }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::observation::ObservationSequence;

    fn labels(slice: &[Observation]) -> Vec<&str> {
        slice.iter().map(Observation::label).collect()
    }

    #[test]
    fn test_nine_observations_split_three_six() {
        let seq = ObservationSequence::from_labels(
            ["S1", "S1", "S1", "S2", "S2", "S3", "S3", "S3", "S3"],
        );
        let p = split_train_test(seq.as_slice(), TrainFraction::ONE_THIRD);
        assert_eq!(labels(p.training), vec!["S1", "S1", "S1"]);
        assert_eq!(labels(p.test), vec!["S2", "S2", "S3", "S3", "S3", "S3"]);
    }

    #[test]
    fn test_all_items_preserved_for_every_length() {
        for n in 0..50 {
            let seq = ObservationSequence::from_labels((0..n).map(|i| format!("L{i}")));
            let p   = split_train_test(seq.as_slice(), TrainFraction::ONE_THIRD);
            assert_eq!(p.training.len() + p.test.len(), n);
            assert_eq!(p.training.len(), n / 3);

            // Concatenating the two views gives back the original order
            let rejoined: Vec<&Observation> = p.training.iter().chain(p.test).collect();
            let original: Vec<&Observation> = seq.as_slice().iter().collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn test_short_sequence_has_empty_training() {
        let seq = ObservationSequence::from_labels(["A", "B"]);
        let p   = split_train_test(seq.as_slice(), TrainFraction::ONE_THIRD);
        assert!(p.training.is_empty());
        assert_eq!(labels(p.test), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_dataset() {
        let seq = ObservationSequence::default();
        let p   = split_train_test(seq.as_slice(), TrainFraction::ONE_THIRD);
        assert!(p.training.is_empty());
        assert!(p.test.is_empty());
    }

    #[test]
    fn test_full_training_split() {
        let seq = ObservationSequence::from_labels(["A"; 10]);
        let p   = split_train_test(seq.as_slice(), TrainFraction::new(1, 1).unwrap());
        assert_eq!(p.training.len(), 10);
        assert!(p.test.is_empty());
    }

    #[test]
    fn test_zero_fraction_puts_everything_in_test() {
        let seq = ObservationSequence::from_labels(["A"; 4]);
        let p   = split_train_test(seq.as_slice(), TrainFraction::new(0, 5).unwrap());
        assert!(p.training.is_empty());
        assert_eq!(p.test.len(), 4);
    }

    #[test]
    fn test_split_index_does_not_overflow() {
        let f = TrainFraction::new(u32::MAX - 1, u32::MAX).unwrap();
        assert!(f.split_index(usize::MAX) < usize::MAX);
    }

    #[test]
    fn test_parse_fraction() {
        assert_eq!("1/3".parse::<TrainFraction>(), Ok(TrainFraction::ONE_THIRD));
        assert_eq!(" 2 / 5 ".parse::<TrainFraction>(), TrainFraction::new(2, 5));
        assert_eq!(TrainFraction::ONE_THIRD.to_string(), "1/3");
    }

    #[test]
    fn test_parse_fraction_rejects_bad_input() {
        assert_eq!(
            "2/1".parse::<TrainFraction>(),
            Err(FractionError::GreaterThanOne { numerator: 2, denominator: 1 })
        );
        assert_eq!("1/0".parse::<TrainFraction>(), Err(FractionError::ZeroDenominator));
        assert!(matches!("abc".parse::<TrainFraction>(), Err(FractionError::Malformed(_))));
        assert!(matches!("0.33".parse::<TrainFraction>(), Err(FractionError::Malformed(_))));
        assert!(matches!("-1/3".parse::<TrainFraction>(), Err(FractionError::Malformed(_))));
    }
}
