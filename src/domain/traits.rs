// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer only sees `ObservationSource`, so the
// CSV export loader can be swapped for any other source of
// ordered, labelled observations without touching the pipeline.

use anyhow::Result;

use crate::domain::observation::ObservationSequence;

// ─── ObservationSource ────────────────────────────────────────────────────────
/// Any component that can produce an ordered observation sequence.
///
/// Implementations:
///   - CsvObservationLoader → reads an exported sales result set
///
/// Connection, timeout, and malformed-row failures are reported here,
/// before any of the baseline steps run.
pub trait ObservationSource {
    /// Load every observation, preserving the source's order.
    fn load_all(&self) -> Result<ObservationSequence>;
}
