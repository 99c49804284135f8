//! Pipe-joined reason strings.
//!
//! Upstream appends to a task's reason with `" | "` as it changes hands
//! (template generation, conflict checks, manager approval), so a stored
//! reason is a list of segments. Some segments are bookkeeping and are
//! dropped before display.

const SEPARATOR: &str = " | ";

/// Drop empty segments and segments containing any of `markers`
/// (case-insensitive). `None` when nothing displayable remains.
pub fn strip_internal_reason<S: AsRef<str>>(reason: Option<&str>, markers: &[S]) -> Option<String> {
    let reason = reason?;
    let markers: Vec<String> = markers
        .iter()
        .map(|m| m.as_ref().trim().to_lowercase())
        .filter(|m| !m.is_empty())
        .collect();

    let kept: Vec<&str> = reason
        .split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            let lower = segment.to_lowercase();
            !markers.iter().any(|marker| lower.contains(marker.as_str()))
        })
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join(SEPARATOR))
    }
}

/// Combine two reasons after stripping internal segments from both
pub fn merge_reasons<S: AsRef<str>>(
    existing: Option<&str>,
    addition: Option<&str>,
    markers: &[S],
) -> Option<String> {
    match (
        strip_internal_reason(existing, markers),
        strip_internal_reason(addition, markers),
    ) {
        (Some(existing), Some(addition)) => Some(format!("{}{}{}", existing, SEPARATOR, addition)),
        (Some(existing), None) => Some(existing),
        (None, addition) => addition,
    }
}

/// Append `suffix` as a new segment, or use it alone when `reason` is blank
pub fn append_reason(reason: Option<&str>, suffix: &str) -> String {
    let base = reason.unwrap_or("").trim();
    if base.is_empty() {
        suffix.to_string()
    } else {
        format!("{}{}{}", base, SEPARATOR, suffix)
    }
}
