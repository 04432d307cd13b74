//! Operator commands sent from the presentation layer to the engine.
//!
//! Commands are queued and applied at the next recomputation boundary,
//! so a recomputation in progress never observes a partial update.

use serde::{Deserialize, Serialize};

use crate::enums::FocusArea;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorCommand {
    // --- Sliders (one field per interaction, bypass scenario resolution) ---
    /// Set the party-strength multiplier (clamped to the slider range).
    SetPartyStrength { value: f64 },
    /// Set the turnout-factor multiplier (clamped to the slider range).
    SetTurnoutFactor { value: f64 },
    /// Set the competitor-impact drag (clamped to [0, 1)).
    SetCompetitorImpact { value: f64 },
    /// Set the geographic focus directly.
    SetFocusArea { area: FocusArea },

    // --- Scenarios ---
    /// Resolve free text against the scenario rule list.
    ApplyScenario { text: String },
    /// Apply a named scenario preset.
    ApplyPreset { name: String },
    /// Reset all parameters to their defaults.
    ResetParameters,

    // --- Segments ---
    /// Flip a segment's active flag. Unknown ids are ignored.
    ToggleSegment { segment_id: String },
    /// Set a segment's active flag explicitly. Unknown ids are ignored.
    SetSegmentActive { segment_id: String, active: bool },
}
