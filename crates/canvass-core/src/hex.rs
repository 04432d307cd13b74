//! Hexagon tessellation geometry.
//!
//! Pointy-top hexagons on an axial (q, r) grid. All math is planar:
//! when fed geographic degrees this treats latitude and longitude as
//! locally equivalent units, with no cosine-latitude correction. That
//! distorts hexagon shape away from the equator and is an accepted
//! approximation for small-area visualization, not a defect. Swap this
//! module for a projected variant if geographic accuracy is ever
//! required; nothing in the scoring model touches it.

use glam::DVec2;

use serde::{Deserialize, Serialize};

/// Axial hex-grid coordinate used to place a zone's tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Planar center of this tile for a given hexagon size (circumradius).
    pub fn center(&self, size: f64) -> DVec2 {
        let sqrt3 = 3.0_f64.sqrt();
        DVec2::new(
            size * (sqrt3 * self.q as f64 + sqrt3 / 2.0 * self.r as f64),
            size * (3.0 / 2.0 * self.r as f64),
        )
    }
}

/// The six vertices of a pointy-top regular hexagon.
///
/// Vertex `i` sits at angle `60°·i − 30°` from the center, so the first
/// vertex is at −30° and the sequence walks clockwise in screen
/// coordinates. The polygon is returned open; the renderer closes it.
/// Pure and unit-agnostic: callers may pass pixels or degrees.
pub fn hexagon_vertices(center: DVec2, radius: f64) -> [DVec2; 6] {
    let mut vertices = [DVec2::ZERO; 6];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        let angle = (60.0 * i as f64 - 30.0).to_radians();
        *vertex = center + radius * DVec2::new(angle.cos(), angle.sin());
    }
    vertices
}
