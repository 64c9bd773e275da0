// ============================================================
// Layer 5 — Rule Builder
// ============================================================
// Builds the ZeroR rule from the training partition:
//
//   1. Tally how many times each label occurs
//   2. Pick the label with the highest count
//   3. On a tie, pick the label whose first occurrence comes
//      earliest in training order
//
// Example:
//   training = [B, A, B, A]   → A=2, B=2, B seen first → rule = B
//   training = []             → Rule::NoRule
//
// The tally is created fresh on every call and dropped on return.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::observation::Observation;
use crate::domain::rule::Rule;

/// One label and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

// ─── FrequencyTally ───────────────────────────────────────────────────────────
/// Label counts kept in first-occurrence order.
///
/// `entries` is ordered by when a label was first seen; `index`
/// maps a label to its slot so each observation is O(1).
#[derive(Debug, Clone, Default)]
pub struct FrequencyTally<'a> {
    entries: Vec<(&'a str, usize)>,
    index:   HashMap<&'a str, usize>,
}

impl<'a> FrequencyTally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `label`
    pub fn record(&mut self, label: &'a str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(label, self.entries.len());
                self.entries.push((label, 1));
            }
        }
    }

    pub fn count(&self, label: &str) -> usize {
        self.index.get(label).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct labels seen
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total number of observations recorded
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// The most frequent label. Only a strictly greater count replaces
    /// the current best, so the earliest-seen label wins a tie.
    pub fn mode(&self) -> Option<&'a str> {
        let mut best: Option<(&'a str, usize)> = None;

        for &(label, count) in &self.entries {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }

        best.map(|(label, _)| label)
    }

    /// Owned snapshot of the counts in first-occurrence order
    pub fn to_counts(&self) -> Vec<LabelCount> {
        self.entries
            .iter()
            .map(|&(label, count)| LabelCount { label: label.to_string(), count })
            .collect()
    }
}

/// Tally the labels of `observations`, keeping first-occurrence order.
pub fn tally(observations: &[Observation]) -> FrequencyTally<'_> {
    let mut tally = FrequencyTally::new();
    for obs in observations {
        tally.record(obs.label());
    }
    tally
}

/// Build the ZeroR rule from the training partition.
///
/// Returns `Rule::NoRule` for an empty partition; never fails.
pub fn build_rule(training: &[Observation]) -> Rule {
    rule_from_tally(&tally(training))
}

/// Build the ZeroR rule from an existing tally of the training partition.
pub fn rule_from_tally(tally: &FrequencyTally<'_>) -> Rule {
    match tally.mode() {
        Some(label) => {
            tracing::debug!(
                "Rule '{}' chosen with {} of {} training observations ({} distinct labels)",
                label,
                tally.count(label),
                tally.total(),
                tally.distinct(),
            );
            Rule::Predict(label.to_string())
        }
        None => {
            tracing::warn!("Training partition is empty; no rule can be built");
            Rule::NoRule
        }
    }
}
