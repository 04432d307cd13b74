//! Campaign snapshot — the complete ranked state sent to the
//! presentation layer after each recomputation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{HeatBand, Municipality};
use crate::params::SimulationParameters;
use crate::types::GeoPoint;

/// Complete engine output broadcast to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignSnapshot {
    /// Parameters the ranking was computed under.
    pub params: SimulationParameters,
    /// Zones ordered best-to-worst by opportunity index.
    pub zones: Vec<RankedZoneView>,
    /// Sum of estimated votes over all zones, not just a display slice.
    pub total_votes: u64,
    /// Fixed minimum vote target (safe threshold).
    pub safe_threshold: u64,
    /// Whether the current total clears the safe threshold.
    pub threshold_met: bool,
    pub party_projection: PartyProjectionView,
    /// Number of segments currently active.
    pub active_segment_count: usize,
}

/// A zone plus its derived score and render geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedZoneView {
    pub id: String,
    pub name: String,
    pub municipality: Municipality,
    pub population: u32,
    pub demographic_density: f64,
    pub historical_support: f64,
    pub anchor: GeoPoint,
    pub target_audience: Option<String>,
    pub strategic_message: Option<String>,

    // --- Derived (recomputed every time, never persisted) ---
    /// Composite opportunity index, clamped to [0, 1].
    pub opportunity_index: f64,
    /// Estimated votes captured under current parameters.
    pub estimated_votes: u64,
    /// Legend bucket for the opportunity index.
    pub heat: HeatBand,

    // --- Render geometry ---
    /// Planar tile center in map view units.
    pub center: DVec2,
    /// Pointy-top hexagon vertices around the center (open polygon).
    pub vertices: [DVec2; 6],
}

/// Fixed party-wide projection, for display next to the candidate's
/// own threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PartyProjectionView {
    pub total_votes: u64,
    pub seats: u32,
}
