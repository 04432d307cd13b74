//! The scoring model — pure per-zone opportunity computation.
//!
//! Maps a zone's static attributes, the average weight of the active
//! segments, and the current simulation parameters to an opportunity
//! index in [0, 1] and an estimated vote count. No side effects, no
//! hidden state: identical inputs always produce identical output, so
//! a full recomputation per parameter change stays cheap and
//! reproducible.

use canvass_core::catalog::{Segment, Zone};
use canvass_core::constants::{
    CAPTURE_RATE, DENSITY_WEIGHT, FOCUS_BOOST, OFF_FOCUS_PENALTY, SUPPORT_WEIGHT, TURNOUT_RATE,
};
use canvass_core::enums::FocusArea;
use canvass_core::error::RankingError;
use canvass_core::params::SimulationParameters;

/// Derived score for one zone. Kept structurally separate from the
/// zone itself so stale derived values can never masquerade as static
/// catalog data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneScore {
    /// Composite opportunity index, clamped to [0, 1].
    pub opportunity_index: f64,
    /// Estimated votes captured under current parameters.
    pub estimated_votes: u64,
}

/// Average weight of the active segments.
///
/// An empty active set yields 1.0 — the defined neutral fallback, not
/// an error.
pub fn average_active_weight(segments: &[Segment]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0u32;
    for segment in segments.iter().filter(|s| s.active) {
        sum += segment.weight;
        count += 1;
    }
    if count == 0 {
        1.0
    } else {
        sum / count as f64
    }
}

/// Score a single zone under the given parameters.
///
/// `avg_weight` is the average active-segment weight, computed once
/// per ranking pass via [`average_active_weight`].
pub fn score_zone(
    zone: &Zone,
    avg_weight: f64,
    params: &SimulationParameters,
) -> Result<ZoneScore, RankingError> {
    let base_index = zone.demographic_density * avg_weight;

    // Focus-area adjustment: boost the focused municipality, halve the rest.
    let base_index = match params.focus_area {
        FocusArea::All => base_index,
        FocusArea::Municipality(focus) if zone.municipality == focus => base_index * FOCUS_BOOST,
        FocusArea::Municipality(_) => base_index * OFF_FOCUS_PENALTY,
    };

    let raw_support = zone.historical_support * params.party_strength;
    let raw_density = base_index * params.turnout_factor;
    let competitor_factor = 1.0 - params.competitor_impact;

    // Checked before the min/clamp caps: f64::min ignores NaN, so a
    // corrupted attribute would otherwise be silently capped to 1.0
    // instead of aborting the ranking.
    if !raw_support.is_finite() || !raw_density.is_finite() || !competitor_factor.is_finite() {
        return Err(RankingError::NonFiniteScore {
            id: zone.id.clone(),
        });
    }

    let adjusted_support = raw_support.min(1.0);
    let adjusted_density = raw_density.min(1.0);

    // Fixed 0.6/0.4 split: density weighted over raw historical support.
    let opportunity_index = ((adjusted_density * DENSITY_WEIGHT
        + adjusted_support * SUPPORT_WEIGHT)
        * competitor_factor)
        .clamp(0.0, 1.0);

    let estimated_votes =
        (zone.population as f64 * TURNOUT_RATE * opportunity_index * CAPTURE_RATE).round() as u64;

    Ok(ZoneScore {
        opportunity_index,
        estimated_votes,
    })
}
