//! The ranking aggregator — scores every zone and orders the result.

use canvass_core::catalog::{Segment, Zone};
use canvass_core::error::RankingError;
use canvass_core::params::SimulationParameters;

use crate::scoring::{self, ZoneScore};

/// A zone paired with its derived score. The zone is borrowed from the
/// catalog, so ranked output can never outlive or shadow the static data.
#[derive(Debug, Clone, Copy)]
pub struct RankedZone<'a> {
    pub zone: &'a Zone,
    pub score: ZoneScore,
}

/// Full ranking output: zones best-to-worst plus the campaign-wide total.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Zones ordered by opportunity index, descending. Ties keep
    /// catalog order (stable sort).
    pub zones: Vec<RankedZone<'a>>,
    /// Sum of estimated votes over all zones, regardless of any
    /// display-level truncation.
    pub total_votes: u64,
}

/// Score every zone and sort descending by opportunity index.
///
/// Fail-fast: the first zone that cannot be scored aborts the whole
/// ranking, since a silently dropped zone would distort the total.
pub fn rank<'a>(
    zones: &'a [Zone],
    segments: &[Segment],
    params: &SimulationParameters,
) -> Result<Ranking<'a>, RankingError> {
    let avg_weight = scoring::average_active_weight(segments);

    let mut ranked = Vec::with_capacity(zones.len());
    let mut total_votes = 0u64;
    for zone in zones {
        let score = scoring::score_zone(zone, avg_weight, params)?;
        total_votes += score.estimated_votes;
        ranked.push(RankedZone { zone, score });
    }

    // Stable sort keeps catalog order for equal indices, so repeated
    // invocations produce identical sequences.
    ranked.sort_by(|a, b| {
        b.score
            .opportunity_index
            .total_cmp(&a.score.opportunity_index)
    });

    Ok(Ranking {
        zones: ranked,
        total_votes,
    })
}
