//! Snapshot construction — flattens a ranking into the serialized
//! view the presentation layer consumes.

use canvass_core::catalog::Segment;
use canvass_core::constants::{
    CANDIDATE_SAFE_THRESHOLD, HEX_SIZE, PARTY_SEATS_PROJECTION, PARTY_TOTAL_PROJECTION,
};
use canvass_core::enums::HeatBand;
use canvass_core::hex;
use canvass_core::params::SimulationParameters;
use canvass_core::state::{CampaignSnapshot, PartyProjectionView, RankedZoneView};

use crate::ranking::Ranking;

/// Build the complete snapshot for the presentation layer.
pub fn build_snapshot(
    ranking: &Ranking<'_>,
    params: &SimulationParameters,
    segments: &[Segment],
) -> CampaignSnapshot {
    let zones = ranking
        .zones
        .iter()
        .map(|ranked| {
            let zone = ranked.zone;
            let center = zone.hex.center(HEX_SIZE);
            RankedZoneView {
                id: zone.id.clone(),
                name: zone.name.clone(),
                municipality: zone.municipality,
                population: zone.population,
                demographic_density: zone.demographic_density,
                historical_support: zone.historical_support,
                anchor: zone.anchor,
                target_audience: zone.target_audience.clone(),
                strategic_message: zone.strategic_message.clone(),
                opportunity_index: ranked.score.opportunity_index,
                estimated_votes: ranked.score.estimated_votes,
                heat: HeatBand::from_index(ranked.score.opportunity_index),
                center,
                vertices: hex::hexagon_vertices(center, HEX_SIZE),
            }
        })
        .collect();

    CampaignSnapshot {
        params: *params,
        zones,
        total_votes: ranking.total_votes,
        safe_threshold: CANDIDATE_SAFE_THRESHOLD,
        threshold_met: ranking.total_votes >= CANDIDATE_SAFE_THRESHOLD,
        party_projection: PartyProjectionView {
            total_votes: PARTY_TOTAL_PROJECTION,
            seats: PARTY_SEATS_PROJECTION,
        },
        active_segment_count: segments.iter().filter(|s| s.active).count(),
    }
}
