//! Scenario resolution — free text and named presets to parameter sets.
//!
//! An ordered, data-driven rule list: each rule owns its keyword set
//! and a patch applied to *default* parameters, so a matched scenario
//! replaces the current state wholesale. New scenarios are additive —
//! append a rule, nothing else changes. First match wins.

use canvass_core::constants::FALLBACK_TURNOUT_NUDGE;
use canvass_core::enums::{FocusArea, Municipality};
use canvass_core::params::SimulationParameters;

/// One scenario rule: keywords matched case-insensitively as
/// substrings, and the patch the rule applies to default parameters.
pub struct ScenarioRule {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    apply: fn(SimulationParameters) -> SimulationParameters,
}

/// The fixed rule list, evaluated in order.
pub const RULES: &[ScenarioRule] = &[
    ScenarioRule {
        id: "crisis",
        keywords: &["crisis", "caída"],
        apply: |mut p| {
            p.party_strength = 0.8;
            p.competitor_impact = 0.15;
            p
        },
    },
    ScenarioRule {
        id: "optimista",
        keywords: &["optimista", "ola"],
        apply: |mut p| {
            p.party_strength = 1.25;
            p.turnout_factor = 1.1;
            p
        },
    },
    ScenarioRule {
        id: "bello",
        keywords: &["bello", "norte"],
        apply: |mut p| {
            p.focus_area = FocusArea::Municipality(Municipality::Bello);
            p.turnout_factor = 1.15;
            p
        },
    },
    ScenarioRule {
        id: "reset",
        keywords: &["reset", "reiniciar"],
        apply: |p| p,
    },
];

/// Resolve free text to a full parameter set.
///
/// A matched rule starts from defaults (wholesale replacement). Text
/// matching no rule nudges the turnout factor on the *current* state
/// instead — a quirk of the original behavior, preserved as documented
/// rather than fixed: the fallback is the one path that is a delta,
/// not a replacement.
pub fn resolve_scenario(text: &str, current: &SimulationParameters) -> SimulationParameters {
    let lowered = text.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            return (rule.apply)(SimulationParameters::default());
        }
    }
    nudge(current)
}

/// Resolve a named preset. Names match rule ids, ASCII
/// case-insensitively; an unknown name behaves like unmatched free
/// text and applies the turnout nudge.
pub fn resolve_preset(name: &str, current: &SimulationParameters) -> SimulationParameters {
    match RULES.iter().find(|r| r.id.eq_ignore_ascii_case(name)) {
        Some(rule) => (rule.apply)(SimulationParameters::default()),
        None => nudge(current),
    }
}

fn nudge(current: &SimulationParameters) -> SimulationParameters {
    let mut params = *current;
    params.turnout_factor = FALLBACK_TURNOUT_NUDGE;
    params
}
