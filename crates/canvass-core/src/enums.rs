//! Enumeration types used throughout the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Administrative grouping a zone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Municipality {
    Medellin,
    Bello,
}

impl fmt::Display for Municipality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Municipality::Medellin => write!(f, "Medellín"),
            Municipality::Bello => write!(f, "Bello"),
        }
    }
}

/// Geographic focus of the simulation.
///
/// Zones inside the focus municipality are boosted, all others are
/// de-prioritized; `All` applies no adjustment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusArea {
    #[default]
    All,
    Municipality(Municipality),
}

/// Heatmap bucket for an opportunity index, for the map legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeatBand {
    /// Index above 0.8.
    VeryHigh,
    /// Index above 0.6.
    High,
    /// Index above 0.4.
    Moderate,
    /// Index above 0.2.
    Low,
    /// Index at or below 0.2.
    Minimal,
}

impl HeatBand {
    /// Bucket an opportunity index into its legend band.
    pub fn from_index(index: f64) -> Self {
        if index > 0.8 {
            HeatBand::VeryHigh
        } else if index > 0.6 {
            HeatBand::High
        } else if index > 0.4 {
            HeatBand::Moderate
        } else if index > 0.2 {
            HeatBand::Low
        } else {
            HeatBand::Minimal
        }
    }
}
