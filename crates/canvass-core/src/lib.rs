//! Core types and definitions for the CANVASS ground-campaign engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the zone and segment catalogs, simulation parameters, operator
//! commands, snapshot views, constants, and hexagon geometry.
//! It has no dependency on any UI runtime or rendering framework.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod hex;
pub mod params;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
