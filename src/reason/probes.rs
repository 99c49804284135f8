//! Ordered probe tables for reason text.
//!
//! Each table is evaluated top to bottom. New probes go at the end of their
//! table so existing precedence is unchanged.

use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Title rules: first case-insensitive substring hit wins
pub(super) const TITLE_RULES: &[(&str, &str)] = &[
    ("temperature", "Temperature exceeded limit"),
    ("soil moisture", "Soil moisture out of range"),
    ("rain", "Rain forecast risk"),
];

pub(super) const GENERIC_TITLE: &str = "Threshold triggered";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DetailKind {
    TemperatureReading,
    TemperatureCeiling,
    MoistureReading,
    MoistureCeiling,
    Profile,
    Rain,
}

#[derive(Debug)]
pub(super) enum Extract {
    /// Emit `"<label>: <capture 1><unit>"` when the pattern matches
    Capture {
        pattern: &'static str,
        label: &'static str,
        unit: &'static str,
    },
    /// Emit a fixed line when the text mentions `needle` (case-insensitive)
    Mention {
        needle: &'static str,
        line: &'static str,
    },
}

#[derive(Debug)]
pub(super) struct DetailProbe {
    pub kind: DetailKind,
    /// Only evaluated once a detail of this kind has been produced
    pub requires: Option<DetailKind>,
    pub extract: Extract,
}

// A probe is skipped when a detail of its kind already exists, so the
// "field max" ceiling shadows the generic moisture ceiling after it.
pub(super) const DETAIL_PROBES: &[DetailProbe] = &[
    DetailProbe {
        kind: DetailKind::TemperatureReading,
        requires: None,
        extract: Extract::Capture {
            pattern: r"(?i:\btemperature\b)[^0-9-]*?(-?\d+(?:\.\d+)?)\s?°?C\b",
            label: "Temp",
            unit: "C",
        },
    },
    DetailProbe {
        kind: DetailKind::TemperatureCeiling,
        requires: Some(DetailKind::TemperatureReading),
        extract: Extract::Capture {
            pattern: r"(?i:\bmax)\s*[:=]?\s*(-?\d+(?:\.\d+)?)\s?°?C\b",
            label: "Max",
            unit: "C",
        },
    },
    DetailProbe {
        kind: DetailKind::MoistureReading,
        requires: None,
        extract: Extract::Capture {
            pattern: r"(?i:\bsoil moisture\b)[^0-9-]*?(-?\d+(?:\.\d+)?)\s?%",
            label: "Moisture",
            unit: "%",
        },
    },
    DetailProbe {
        kind: DetailKind::MoistureCeiling,
        requires: Some(DetailKind::MoistureReading),
        extract: Extract::Capture {
            pattern: r"(?i:\bfield max)\s*[:=]?\s*(-?\d+(?:\.\d+)?)",
            label: "Field max",
            unit: "%",
        },
    },
    DetailProbe {
        kind: DetailKind::MoistureCeiling,
        requires: Some(DetailKind::MoistureReading),
        extract: Extract::Capture {
            pattern: r"(?i:\bmax)\s*[:=]?\s*(-?\d+(?:\.\d+)?)\s?%",
            label: "Max",
            unit: "%",
        },
    },
    DetailProbe {
        kind: DetailKind::Profile,
        requires: None,
        extract: Extract::Capture {
            pattern: r"(?i:threshold profile:)\s*([^)]*?)\s*\)",
            label: "Profile",
            unit: "",
        },
    },
    DetailProbe {
        kind: DetailKind::Rain,
        requires: None,
        extract: Extract::Mention {
            needle: "rain",
            line: "Rain forecast considered",
        },
    },
];

pub(super) struct OutcomeRule {
    pub pattern: &'static str,
    /// Case-insensitive phrase that must also appear in the text
    pub guard: Option<&'static str>,
    pub render: fn(&str) -> String,
}

fn rescheduled_to(date: &str) -> String {
    format!("Rescheduled to {}", date)
}

fn proposed_offset(days: &str) -> String {
    let unit = if days.trim_start_matches('0') == "1" { "day" } else { "days" };
    format!("Proposed date +{} {}", days, unit)
}

pub(super) const OUTCOME_RULES: &[OutcomeRule] = &[
    OutcomeRule {
        pattern: r"(?i)next safe day\s*\(\s*(\d{4}-\d{2}-\d{2})\s*\)",
        guard: None,
        render: rescheduled_to,
    },
    OutcomeRule {
        pattern: r"\b(\d{4}-\d{2}-\d{2})\b",
        guard: Some("rescheduled"),
        render: rescheduled_to,
    },
    OutcomeRule {
        pattern: r"(?i)proposed date\s*\+\s*(\d+)\s*days?\b",
        guard: None,
        render: proposed_offset,
    },
];

static DETAIL_REGEXES: OnceLock<Vec<Option<Regex>>> = OnceLock::new();
static OUTCOME_REGEXES: OnceLock<Vec<Option<Regex>>> = OnceLock::new();

/// Compiled pattern for each detail probe, index-aligned with `DETAIL_PROBES`.
/// `Mention` probes have no pattern.
pub(super) fn detail_regexes() -> &'static [Option<Regex>] {
    DETAIL_REGEXES.get_or_init(|| {
        DETAIL_PROBES
            .iter()
            .map(|probe| match probe.extract {
                Extract::Capture { pattern, .. } => compile(pattern),
                Extract::Mention { .. } => None,
            })
            .collect()
    })
}

/// Compiled pattern for each outcome rule, index-aligned with `OUTCOME_RULES`
pub(super) fn outcome_regexes() -> &'static [Option<Regex>] {
    OUTCOME_REGEXES.get_or_init(|| OUTCOME_RULES.iter().map(|r| compile(r.pattern)).collect())
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("Skipping reason probe {:?}: {}", pattern, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        for (probe, re) in DETAIL_PROBES.iter().zip(detail_regexes()) {
            match probe.extract {
                Extract::Capture { pattern, .. } => {
                    assert!(re.is_some(), "pattern failed to compile: {}", pattern)
                }
                Extract::Mention { .. } => assert!(re.is_none()),
            }
        }
        assert!(outcome_regexes().iter().all(Option::is_some));
    }

    #[test]
    fn test_tables_are_aligned() {
        assert_eq!(detail_regexes().len(), DETAIL_PROBES.len());
        assert_eq!(outcome_regexes().len(), OUTCOME_RULES.len());
    }
}
