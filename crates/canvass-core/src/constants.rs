//! Model constants and tuning parameters.

// --- Electoral targets ---

/// Minimum aggregate vote count the candidate must secure (safe threshold).
pub const CANDIDATE_SAFE_THRESHOLD: u64 = 40_000;

/// Party-wide vote projection for the full list.
pub const PARTY_TOTAL_PROJECTION: u64 = 500_000;

/// Number of seats the party list projects to win at the vote projection.
pub const PARTY_SEATS_PROJECTION: u32 = 5;

// --- Scoring model ---

/// Assumed turnout rate: fraction of the population that votes at all.
pub const TURNOUT_RATE: f64 = 0.45;

/// Assumed capture rate: fraction of turned-out voters the campaign converts.
pub const CAPTURE_RATE: f64 = 0.15;

/// Weight of the density component in the composite opportunity index.
pub const DENSITY_WEIGHT: f64 = 0.6;

/// Weight of the historical-support component in the composite index.
pub const SUPPORT_WEIGHT: f64 = 0.4;

/// Multiplier applied to zones inside the focus municipality.
pub const FOCUS_BOOST: f64 = 1.2;

/// Multiplier applied to zones outside the focus municipality.
pub const OFF_FOCUS_PENALTY: f64 = 0.5;

// --- Parameter bounds ---

/// Lower bound for the party-strength and turnout-factor sliders.
pub const SLIDER_MIN: f64 = 0.5;

/// Upper bound for the party-strength and turnout-factor sliders.
pub const SLIDER_MAX: f64 = 1.5;

/// Upper bound for competitor impact. Must stay below 1.0 so the
/// competitor factor never zeroes the whole index.
pub const COMPETITOR_IMPACT_MAX: f64 = 0.95;

/// Turnout factor forced by the scenario fallback rule when no keyword
/// matches the operator's text.
pub const FALLBACK_TURNOUT_NUDGE: f64 = 1.05;

// --- Tessellation display ---

/// Hexagon radius (circumradius) in map view units.
pub const HEX_SIZE: f64 = 60.0;

/// Number of top-ranked zones the presentation layer lists by default.
/// The aggregate vote total always covers every zone regardless.
pub const TOP_ZONES_DISPLAY: usize = 8;
