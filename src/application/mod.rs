// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to produce a baseline report.
//
// Rules for this layer:
//   - No counting or scoring here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file parsing (that's Layer 4)
//   - Only workflow coordination

// Load → split → build rule → evaluate → log
pub mod evaluate_use_case;
