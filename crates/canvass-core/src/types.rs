//! Fundamental geographic types.

use serde::{Deserialize, Serialize};

/// Geographic anchor coordinate in decimal degrees.
///
/// Only used as a display anchor for markers; tessellation placement
/// uses axial hex coordinates instead (see [`crate::hex`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
