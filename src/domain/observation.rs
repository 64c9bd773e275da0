// ============================================================
// Layer 3 — Observation Domain Types
// ============================================================
// An Observation is one sale, labelled with the store that made it.
// An ObservationSequence keeps those sales in the order the data
// source produced them. Order matters: the first part of the
// sequence is always the training partition.

/// One labelled sale. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// The store name this sale belongs to
    label: String,
}

impl Observation {
    /// Create an observation from anything string-like.
    ///
    /// Example:
    ///   let obs = Observation::new("Baldwin Bikes");
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// An ordered, order-significant sequence of observations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservationSequence {
    observations: Vec<Observation>,
}

impl ObservationSequence {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Build a sequence directly from labels, keeping their order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Observation::new).collect())
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
