// ============================================================
// Layer 3 — Rule Domain Type
// ============================================================
// The output of the rule builder: the one store the baseline
// always predicts. When the training partition is empty there
// is nothing to predict, and the rule is `Rule::NoRule`.
//
// Absence is its own variant rather than an empty string, so
// no real store name can ever be mistaken for "no rule".

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Always predict this label
    Predict(String),

    /// The training partition held no observations
    NoRule,
}

impl Rule {
    /// The predicted label, if there is one
    pub fn label(&self) -> Option<&str> {
        match self {
            Rule::Predict(label) => Some(label),
            Rule::NoRule => None,
        }
    }

    /// True when this rule predicts exactly `label`.
    /// `NoRule` matches nothing.
    pub fn matches(&self, label: &str) -> bool {
        self.label() == Some(label)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Predict(label) => f.write_str(label),
            Rule::NoRule => f.write_str("insufficient data"),
        }
    }
}
