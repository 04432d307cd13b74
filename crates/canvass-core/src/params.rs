//! Simulation parameters — the operator's perturbation of the scoring model.

use serde::{Deserialize, Serialize};

use crate::enums::FocusArea;

/// The full perturbation state of the scoring model.
///
/// Treated as an immutable value: every mutation produces a new value
/// that replaces the old one wholesale, so an in-flight recomputation
/// can never observe a half-updated parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Multiplier on historical support (slider range 0.5–1.5).
    pub party_strength: f64,
    /// Multiplier on the density component (slider range 0.5–1.5).
    pub turnout_factor: f64,
    /// Vote-suppressing drag from competitors, in [0, 1).
    pub competitor_impact: f64,
    /// Geographic focus of the campaign.
    pub focus_area: FocusArea,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            party_strength: 1.0,
            turnout_factor: 1.0,
            competitor_impact: 0.0,
            focus_area: FocusArea::All,
        }
    }
}
