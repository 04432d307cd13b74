//! Campaign engine — owns the catalogs, the parameter state, and the
//! operator command queue.
//!
//! `CampaignEngine` is completely headless: the presentation layer
//! queues `OperatorCommand`s and calls `recompute()`, which drains the
//! queue, re-ranks every zone under the resulting parameters, and
//! returns a fresh `CampaignSnapshot`. Everything is synchronous and
//! single-threaded; recomputation is O(zones) and always full, never
//! incremental.

use std::collections::VecDeque;

use tracing::debug;

use canvass_core::catalog::{self, Segment, Zone};
use canvass_core::commands::OperatorCommand;
use canvass_core::constants::{COMPETITOR_IMPACT_MAX, SLIDER_MAX, SLIDER_MIN};
use canvass_core::error::{CatalogError, RankingError};
use canvass_core::params::SimulationParameters;
use canvass_core::state::CampaignSnapshot;

use crate::ranking;
use crate::scenario;
use crate::snapshot;

/// The simulation engine. Owns all mutable session state.
#[derive(Debug)]
pub struct CampaignEngine {
    zones: Vec<Zone>,
    segments: Vec<Segment>,
    params: SimulationParameters,
    command_queue: VecDeque<OperatorCommand>,
}

impl CampaignEngine {
    /// Create an engine over the default catalogs.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_catalog(catalog::default_zones(), catalog::default_segments())
    }

    /// Create an engine over custom catalogs, validating them first.
    /// Invalid static data refuses to run rather than being clamped.
    pub fn with_catalog(zones: Vec<Zone>, segments: Vec<Segment>) -> Result<Self, CatalogError> {
        catalog::validate(&zones, &segments)?;
        Ok(Self {
            zones,
            segments,
            params: SimulationParameters::default(),
            command_queue: VecDeque::new(),
        })
    }

    /// Queue an operator command for processing at the next recomputation.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Drain the command queue, re-rank every zone, and return the
    /// resulting snapshot.
    pub fn recompute(&mut self) -> Result<CampaignSnapshot, RankingError> {
        self.process_commands();

        let ranking = ranking::rank(&self.zones, &self.segments, &self.params)?;
        debug!(
            total_votes = ranking.total_votes,
            zones = ranking.zones.len(),
            "ranking recomputed"
        );
        Ok(snapshot::build_snapshot(
            &ranking,
            &self.params,
            &self.segments,
        ))
    }

    /// Current simulation parameters.
    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    /// Read-only view of the zone catalog.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Read-only view of the segment catalog.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command. Parameter updates replace the
    /// whole value, never patch it in place.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SetPartyStrength { value } => {
                let mut params = self.params;
                params.party_strength = value.clamp(SLIDER_MIN, SLIDER_MAX);
                self.params = params;
            }
            OperatorCommand::SetTurnoutFactor { value } => {
                let mut params = self.params;
                params.turnout_factor = value.clamp(SLIDER_MIN, SLIDER_MAX);
                self.params = params;
            }
            OperatorCommand::SetCompetitorImpact { value } => {
                let mut params = self.params;
                params.competitor_impact = value.clamp(0.0, COMPETITOR_IMPACT_MAX);
                self.params = params;
            }
            OperatorCommand::SetFocusArea { area } => {
                let mut params = self.params;
                params.focus_area = area;
                self.params = params;
            }
            OperatorCommand::ApplyScenario { text } => {
                self.params = scenario::resolve_scenario(&text, &self.params);
                debug!(params = ?self.params, "scenario applied");
            }
            OperatorCommand::ApplyPreset { name } => {
                self.params = scenario::resolve_preset(&name, &self.params);
                debug!(preset = %name, params = ?self.params, "preset applied");
            }
            OperatorCommand::ResetParameters => {
                self.params = SimulationParameters::default();
            }
            OperatorCommand::ToggleSegment { segment_id } => {
                if let Some(segment) = self.segments.iter_mut().find(|s| s.id == segment_id) {
                    segment.active = !segment.active;
                }
            }
            OperatorCommand::SetSegmentActive { segment_id, active } => {
                if let Some(segment) = self.segments.iter_mut().find(|s| s.id == segment_id) {
                    segment.active = active;
                }
            }
        }
    }
}
