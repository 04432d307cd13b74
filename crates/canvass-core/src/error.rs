//! Error types for catalog validation and ranking.

use thiserror::Error;

/// Static catalog data failed load-time validation.
///
/// The catalogs are curated constants, so out-of-range values mean the
/// data itself is wrong; the engine refuses to run rather than clamp.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("zone {id}: population must be positive")]
    NonPositivePopulation { id: String },

    #[error("zone {id}: {field} must be a finite value in [0, 1], got {value}")]
    AttributeOutOfRange {
        id: String,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate zone id {0}")]
    DuplicateZoneId(String),

    #[error("segment {id}: weight must be positive and finite, got {weight}")]
    InvalidSegmentWeight { id: String, weight: f64 },

    #[error("duplicate segment id {0}")]
    DuplicateSegmentId(String),
}

/// A recomputation failed and produced no partial result.
///
/// A silently dropped zone would distort the aggregate total, so any
/// scoring failure aborts the whole ranking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankingError {
    #[error("zone {id}: opportunity index is not finite")]
    NonFiniteScore { id: String },
}
