#[cfg(test)]
mod tests {
    use glam::DVec2;

    use crate::catalog::{self, Segment, Zone};
    use crate::commands::OperatorCommand;
    use crate::enums::{FocusArea, HeatBand, Municipality};
    use crate::error::CatalogError;
    use crate::hex::{hexagon_vertices, HexCoord};
    use crate::params::SimulationParameters;
    use crate::types::GeoPoint;

    /// Verify boundary enums round-trip through serde_json.
    #[test]
    fn test_municipality_serde() {
        for v in [Municipality::Medellin, Municipality::Bello] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Municipality = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_focus_area_serde() {
        let variants = vec![
            FocusArea::All,
            FocusArea::Municipality(Municipality::Bello),
            FocusArea::Municipality(Municipality::Medellin),
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FocusArea = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_heat_band_serde() {
        let variants = vec![
            HeatBand::VeryHigh,
            HeatBand::High,
            HeatBand::Moderate,
            HeatBand::Low,
            HeatBand::Minimal,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: HeatBand = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify OperatorCommand round-trips through serde (tagged union).
    #[test]
    fn test_operator_command_serde() {
        let commands = vec![
            OperatorCommand::SetPartyStrength { value: 1.2 },
            OperatorCommand::SetTurnoutFactor { value: 0.9 },
            OperatorCommand::SetCompetitorImpact { value: 0.15 },
            OperatorCommand::SetFocusArea {
                area: FocusArea::Municipality(Municipality::Bello),
            },
            OperatorCommand::ApplyScenario {
                text: "ola optimista".to_string(),
            },
            OperatorCommand::ApplyPreset {
                name: "reset".to_string(),
            },
            OperatorCommand::ResetParameters,
            OperatorCommand::ToggleSegment {
                segment_id: "s5".to_string(),
            },
            OperatorCommand::SetSegmentActive {
                segment_id: "s1".to_string(),
                active: false,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: OperatorCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since OperatorCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_zone_and_segment_serde() {
        let zones = catalog::default_zones();
        let json = serde_json::to_string(&zones).unwrap();
        let back: Vec<Zone> = serde_json::from_str(&json).unwrap();
        assert_eq!(zones, back);

        let segments = catalog::default_segments();
        let json = serde_json::to_string(&segments).unwrap();
        let back: Vec<Segment> = serde_json::from_str(&json).unwrap();
        assert_eq!(segments, back);
    }

    // ---- Heat bands ----

    #[test]
    fn test_heat_band_buckets() {
        assert_eq!(HeatBand::from_index(0.95), HeatBand::VeryHigh);
        assert_eq!(HeatBand::from_index(0.8), HeatBand::High);
        assert_eq!(HeatBand::from_index(0.61), HeatBand::High);
        assert_eq!(HeatBand::from_index(0.6), HeatBand::Moderate);
        assert_eq!(HeatBand::from_index(0.4), HeatBand::Low);
        assert_eq!(HeatBand::from_index(0.2), HeatBand::Minimal);
        assert_eq!(HeatBand::from_index(0.0), HeatBand::Minimal);
    }

    // ---- Parameters ----

    #[test]
    fn test_default_parameters() {
        let params = SimulationParameters::default();
        assert_eq!(params.party_strength, 1.0);
        assert_eq!(params.turnout_factor, 1.0);
        assert_eq!(params.competitor_impact, 0.0);
        assert_eq!(params.focus_area, FocusArea::All);
    }

    // ---- Hexagon geometry ----

    #[test]
    fn test_hexagon_unit_circumradius() {
        let vertices = hexagon_vertices(DVec2::ZERO, 1.0);
        assert_eq!(vertices.len(), 6);
        for v in &vertices {
            assert!(
                (v.length() - 1.0).abs() < 1e-12,
                "Vertex {v:?} not at distance 1 from origin"
            );
        }
    }

    #[test]
    fn test_hexagon_pointy_top_angles() {
        let vertices = hexagon_vertices(DVec2::ZERO, 1.0);
        // First vertex at -30 degrees.
        let first = vertices[0].y.atan2(vertices[0].x).to_degrees();
        assert!((first - (-30.0)).abs() < 1e-10);
        // Pairwise spacing of exactly 60 degrees.
        for i in 0..6 {
            let a = vertices[i].y.atan2(vertices[i].x).to_degrees();
            let b = vertices[(i + 1) % 6].y.atan2(vertices[(i + 1) % 6].x).to_degrees();
            let spacing = (b - a).rem_euclid(360.0);
            assert!(
                (spacing - 60.0).abs() < 1e-10,
                "Spacing between vertices {i} and {} was {spacing}",
                (i + 1) % 6
            );
        }
    }

    #[test]
    fn test_hexagon_offset_center() {
        let center = DVec2::new(10.0, -4.0);
        let vertices = hexagon_vertices(center, 2.5);
        for v in &vertices {
            assert!(((*v - center).length() - 2.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_axial_center() {
        let sqrt3 = 3.0_f64.sqrt();
        // Origin maps to origin.
        assert_eq!(HexCoord::new(0, 0).center(60.0), DVec2::ZERO);
        // One step in q moves sqrt(3)*size in x only.
        let c = HexCoord::new(1, 0).center(60.0);
        assert!((c.x - 60.0 * sqrt3).abs() < 1e-12);
        assert_eq!(c.y, 0.0);
        // One step in r moves half that in x and 3/2*size in y.
        let c = HexCoord::new(0, 1).center(60.0);
        assert!((c.x - 60.0 * sqrt3 / 2.0).abs() < 1e-12);
        assert!((c.y - 90.0).abs() < 1e-12);
    }

    // ---- Catalog validation ----

    #[test]
    fn test_default_catalogs_validate() {
        let zones = catalog::default_zones();
        let segments = catalog::default_segments();
        assert!(catalog::validate(&zones, &segments).is_ok());
        assert_eq!(zones.len(), 11);
        assert_eq!(segments.len(), 6);
        assert_eq!(segments.iter().filter(|s| s.active).count(), 4);
    }

    #[test]
    fn test_validation_rejects_zero_population() {
        let mut zones = catalog::default_zones();
        zones[0].population = 0;
        let err = catalog::validate(&zones, &catalog::default_segments()).unwrap_err();
        assert!(matches!(err, CatalogError::NonPositivePopulation { .. }));
    }

    #[test]
    fn test_validation_rejects_out_of_range_density() {
        let mut zones = catalog::default_zones();
        zones[2].demographic_density = 1.3;
        let err = catalog::validate(&zones, &catalog::default_segments()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AttributeOutOfRange {
                field: "demographic_density",
                ..
            }
        ));
    }

    #[test]
    fn test_validation_rejects_nan_support() {
        let mut zones = catalog::default_zones();
        zones[1].historical_support = f64::NAN;
        let err = catalog::validate(&zones, &catalog::default_segments()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::AttributeOutOfRange {
                field: "historical_support",
                ..
            }
        ));
    }

    #[test]
    fn test_validation_rejects_duplicate_zone_id() {
        let mut zones = catalog::default_zones();
        let dup = zones[0].clone();
        zones.push(dup);
        let err = catalog::validate(&zones, &catalog::default_segments()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateZoneId("b-04".to_string()));
    }

    #[test]
    fn test_validation_rejects_non_positive_segment_weight() {
        let mut segments = catalog::default_segments();
        segments[3].weight = 0.0;
        let err = catalog::validate(&catalog::default_zones(), &segments).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSegmentWeight { .. }));
    }

    #[test]
    fn test_geo_point_serde() {
        let p = GeoPoint::new(6.25, -75.56);
        let json = serde_json::to_string(&p).unwrap();
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
