//! Opportunity scoring and simulation engine for CANVASS.
//!
//! Owns the zone and segment catalogs plus the current simulation
//! parameters, applies operator commands, and produces
//! `CampaignSnapshot`s for the presentation layer. Completely headless,
//! synchronous, and deterministic.

pub mod engine;
pub mod ranking;
pub mod scenario;
pub mod scoring;
pub mod snapshot;

pub use canvass_core as core;
pub use engine::CampaignEngine;
