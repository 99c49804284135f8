//! Structured summaries of free-text reschedule reasons.
//!
//! Reason sentences come from the upstream recommendation service, e.g.
//! `"Temperature 35.2C exceeds max 32C (threshold profile: heat-stress)."`.
//! Their grammar is not fixed, so parsing is a set of independent, ordered
//! probes: anything unmatched is simply left out of the summary.

mod probes;
pub mod sanitize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use probes::{
    detail_regexes, outcome_regexes, DetailKind, Extract, DETAIL_PROBES, GENERIC_TITLE,
    OUTCOME_RULES, TITLE_RULES,
};
pub use sanitize::{append_reason, merge_reasons, strip_internal_reason};

/// Narrowest summary width that still leaves room for the ellipsis
pub const MIN_SUMMARY_CHARS: usize = 4;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParsedReason {
    pub title: String,

    pub details: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    pub raw: String,

    /// Trimmed, truncated raw text; empty unless nothing structured was found
    #[serde(default)]
    pub fallback_summary: String,
}

impl ParsedReason {
    /// Whether the title or details carry anything beyond the generic title
    pub fn has_structure(&self) -> bool {
        self.title != GENERIC_TITLE || !self.details.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonOptions {
    pub max_details: usize,
    pub summary_max_chars: usize,
}

impl Default for ReasonOptions {
    fn default() -> Self {
        Self {
            max_details: 3,
            summary_max_chars: 90,
        }
    }
}

/// Parse a reason string with the default limits (3 details, 90 characters)
pub fn parse_reason(raw: &str) -> ParsedReason {
    parse_reason_with(raw, &ReasonOptions::default())
}

pub fn parse_reason_with(raw: &str, options: &ReasonOptions) -> ParsedReason {
    let lower = raw.to_lowercase();

    let title = classify_title(&lower);
    let mut details = extract_details(raw, &lower);
    details.truncate(options.max_details);
    let outcome = extract_outcome(raw, &lower);

    let fallback_summary = if title == GENERIC_TITLE && details.is_empty() {
        debug!("No structured match in reason {:?}", raw);
        summarize(raw, options.summary_max_chars)
    } else {
        String::new()
    };

    ParsedReason {
        title: title.to_string(),
        details,
        outcome,
        raw: raw.to_string(),
        fallback_summary,
    }
}

fn classify_title(lower: &str) -> &'static str {
    TITLE_RULES
        .iter()
        .find(|(needle, _)| lower.contains(*needle))
        .map(|(_, title)| *title)
        .unwrap_or(GENERIC_TITLE)
}

fn extract_details(raw: &str, lower: &str) -> Vec<String> {
    let mut produced: Vec<(DetailKind, String)> = Vec::new();

    for (probe, regex) in DETAIL_PROBES.iter().zip(detail_regexes()) {
        if produced.iter().any(|(kind, _)| *kind == probe.kind) {
            continue;
        }
        if let Some(required) = probe.requires {
            if !produced.iter().any(|(kind, _)| *kind == required) {
                continue;
            }
        }

        let line = match (&probe.extract, regex) {
            (Extract::Capture { label, unit, .. }, Some(re)) => re
                .captures(raw)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|value| !value.is_empty())
                .map(|value| format!("{}: {}{}", label, value, unit)),
            (Extract::Mention { needle, line }, _) => {
                lower.contains(*needle).then(|| line.to_string())
            }
            (Extract::Capture { .. }, None) => None,
        };

        if let Some(line) = line {
            produced.push((probe.kind, line));
        }
    }

    produced.into_iter().map(|(_, line)| line).collect()
}

fn extract_outcome(raw: &str, lower: &str) -> Option<String> {
    OUTCOME_RULES
        .iter()
        .zip(outcome_regexes())
        .filter(|(rule, _)| rule.guard.map_or(true, |guard| lower.contains(guard)))
        .find_map(|(rule, regex)| {
            let value = regex.as_ref()?.captures(raw)?.get(1)?.as_str();
            Some((rule.render)(value))
        })
}

/// Trim `raw` and cut it to `max_chars` characters, ending in an ellipsis
/// when shortened
fn summarize(raw: &str, max_chars: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut summary: String = trimmed.chars().take(keep).collect();
    summary.push_str(ELLIPSIS);
    summary
}
