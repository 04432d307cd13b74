//! Static zone and segment catalogs.
//!
//! Both catalogs are fixed at process start. Zones are read-only for
//! the whole session; only the segment `active` flags are mutable, and
//! only through operator commands. Validation runs once at load and
//! fails fast — these are curated constants, so a bad value is a data
//! bug, not something to clamp at runtime.

use serde::{Deserialize, Serialize};

use crate::enums::Municipality;
use crate::error::CatalogError;
use crate::hex::HexCoord;
use crate::types::GeoPoint;

/// A geographic targeting unit (commune or barrio cluster).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub municipality: Municipality,
    pub population: u32,
    /// Density of the target demographic, 0..1.
    pub demographic_density: f64,
    /// Historical support for the party, 0..1.
    pub historical_support: f64,
    /// Display anchor in decimal degrees.
    pub anchor: GeoPoint,
    /// Axial grid coordinate for tessellation placement.
    pub hex: HexCoord,
    /// Optional display-only strings; never read by the scoring model.
    pub target_audience: Option<String>,
    pub strategic_message: Option<String>,
}

/// A demographic micro-group that weights the scoring model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub active: bool,
    /// Weight multiplier, > 0, typically 1.0–1.6.
    pub weight: f64,
}

/// Validate both catalogs, fail-fast on the first bad entry.
pub fn validate(zones: &[Zone], segments: &[Segment]) -> Result<(), CatalogError> {
    let mut seen_zone_ids = Vec::with_capacity(zones.len());
    for zone in zones {
        if seen_zone_ids.contains(&&zone.id) {
            return Err(CatalogError::DuplicateZoneId(zone.id.clone()));
        }
        seen_zone_ids.push(&zone.id);

        if zone.population == 0 {
            return Err(CatalogError::NonPositivePopulation {
                id: zone.id.clone(),
            });
        }
        check_unit_range(&zone.id, "demographic_density", zone.demographic_density)?;
        check_unit_range(&zone.id, "historical_support", zone.historical_support)?;
    }

    let mut seen_segment_ids = Vec::with_capacity(segments.len());
    for segment in segments {
        if seen_segment_ids.contains(&&segment.id) {
            return Err(CatalogError::DuplicateSegmentId(segment.id.clone()));
        }
        seen_segment_ids.push(&segment.id);

        if !segment.weight.is_finite() || segment.weight <= 0.0 {
            return Err(CatalogError::InvalidSegmentWeight {
                id: segment.id.clone(),
                weight: segment.weight,
            });
        }
    }
    Ok(())
}

fn check_unit_range(id: &str, field: &'static str, value: f64) -> Result<(), CatalogError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(CatalogError::AttributeOutOfRange {
            id: id.to_string(),
            field,
            value,
        });
    }
    Ok(())
}

/// The default zone catalog: Medellín communes plus the Bello cluster,
/// Cámara 2026 targeting data.
pub fn default_zones() -> Vec<Zone> {
    vec![
        // Bello (northern cluster) — expansion priority.
        zone(
            "b-04",
            "Bello - París",
            Municipality::Bello,
            65_000,
            0.88,
            0.28,
            GeoPoint::new(6.336, -75.574),
            HexCoord::new(1, 0),
            Some("Mujeres jóvenes, estratos 1-2"),
            Some("Expansión: convertir densidad en voto nuevo"),
        ),
        zone(
            "b-01",
            "Bello - Norte",
            Municipality::Bello,
            95_000,
            0.82,
            0.48,
            GeoPoint::new(6.349, -75.558),
            HexCoord::new(2, 0),
            Some("Familias de reserva activa"),
            Some("Consolidar la base del norte"),
        ),
        zone(
            "b-03",
            "Bello - Niquía",
            Municipality::Bello,
            105_000,
            0.78,
            0.35,
            GeoPoint::new(6.339, -75.544),
            HexCoord::new(3, 0),
            None,
            None,
        ),
        zone(
            "b-02",
            "Bello - Centro",
            Municipality::Bello,
            110_000,
            0.65,
            0.52,
            GeoPoint::new(6.333, -75.556),
            HexCoord::new(2, 1),
            None,
            None,
        ),
        // Medellín north, connecting to Bello.
        zone(
            "m-01",
            "C1 - Popular",
            Municipality::Medellin,
            132_000,
            0.75,
            0.45,
            GeoPoint::new(6.295, -75.545),
            HexCoord::new(3, 2),
            None,
            None,
        ),
        zone(
            "m-02",
            "C2 - Santa Cruz",
            Municipality::Medellin,
            110_000,
            0.68,
            0.38,
            GeoPoint::new(6.290, -75.553),
            HexCoord::new(2, 2),
            None,
            None,
        ),
        zone(
            "m-04",
            "C4 - Aranjuez",
            Municipality::Medellin,
            140_000,
            0.45,
            0.58,
            GeoPoint::new(6.280, -75.556),
            HexCoord::new(2, 3),
            None,
            None,
        ),
        zone(
            "m-03",
            "C3 - Manrique",
            Municipality::Medellin,
            155_000,
            0.55,
            0.62,
            GeoPoint::new(6.277, -75.545),
            HexCoord::new(3, 3),
            None,
            None,
        ),
        // Medellín center and south.
        zone(
            "m-10",
            "C10 - Candelaria",
            Municipality::Medellin,
            85_000,
            0.35,
            0.25,
            GeoPoint::new(6.247, -75.566),
            HexCoord::new(2, 4),
            None,
            None,
        ),
        zone(
            "m-16",
            "C16 - Belén",
            Municipality::Medellin,
            190_000,
            0.65,
            0.55,
            GeoPoint::new(6.230, -75.592),
            HexCoord::new(1, 5),
            None,
            None,
        ),
        zone(
            "m-14",
            "C14 - El Poblado",
            Municipality::Medellin,
            128_000,
            0.15,
            0.85,
            GeoPoint::new(6.209, -75.567),
            HexCoord::new(3, 5),
            None,
            None,
        ),
    ]
}

/// The default segment catalog: micro-segmentation for the 40k goal.
pub fn default_segments() -> Vec<Segment> {
    vec![
        segment("s1", "Mujeres (18-35) - Estrato 1-2", true, 1.4),
        segment("s2", "Reserva Activa / Fuerza Pública", true, 1.6),
        segment("s3", "Líderes Deportivos / Clubes", true, 1.3),
        segment("s4", "Madres Cabeza de Familia", true, 1.4),
        segment("s5", "Jóvenes Primer Votante", false, 1.0),
        segment("s6", "Adulto Mayor - Pensionado", false, 1.1),
    ]
}

#[allow(clippy::too_many_arguments)]
fn zone(
    id: &str,
    name: &str,
    municipality: Municipality,
    population: u32,
    demographic_density: f64,
    historical_support: f64,
    anchor: GeoPoint,
    hex: HexCoord,
    target_audience: Option<&str>,
    strategic_message: Option<&str>,
) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
        municipality,
        population,
        demographic_density,
        historical_support,
        anchor,
        hex,
        target_audience: target_audience.map(str::to_string),
        strategic_message: strategic_message.map(str::to_string),
    }
}

fn segment(id: &str, name: &str, active: bool, weight: f64) -> Segment {
    Segment {
        id: id.to_string(),
        name: name.to_string(),
        active,
        weight,
    }
}
