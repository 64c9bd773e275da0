// ============================================================
// Layer 3 — Accuracy Domain Type
// ============================================================
// The output of the evaluator. Holds the raw hit counts so the
// reporter can show "m of n", and exposes the fraction only when
// the test partition was non-empty.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accuracy {
    /// Test observations whose label equalled the rule
    pub matches: usize,

    /// Size of the test partition
    pub total: usize,
}

impl Accuracy {
    pub fn new(matches: usize, total: usize) -> Self {
        debug_assert!(matches <= total);
        Self { matches, total }
    }

    /// `matches / total` in [0.0, 1.0], or `None` when the test
    /// partition was empty and the ratio is undefined.
    pub fn fraction(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.matches as f64 / self.total as f64)
        }
    }

    /// Fraction scaled to a percentage, `None` when undefined
    pub fn percent(&self) -> Option<f64> {
        self.fraction().map(|f| f * 100.0)
    }

    pub fn is_undefined(&self) -> bool {
        self.total == 0
    }
}
