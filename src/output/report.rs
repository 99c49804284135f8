use crate::reason::ParsedReason;
use crate::status::TaskStatus;

pub fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Proceed => "✅",
        TaskStatus::Pending => "⏳",
        TaskStatus::Stop => "⛔",
    }
}

/// Plain-text rendering of a parsed reason, one fact per line
pub fn render_reason_text(parsed: &ParsedReason) -> String {
    let mut content = String::new();

    content.push_str(&parsed.title);
    content.push('\n');

    if !parsed.has_structure() && !parsed.fallback_summary.is_empty() {
        content.push_str(&format!("  {}\n", parsed.fallback_summary));
    }

    for detail in &parsed.details {
        content.push_str(&format!("  - {}\n", detail));
    }

    if let Some(outcome) = &parsed.outcome {
        content.push_str(&format!("  -> {}\n", outcome));
    }

    content
}

pub fn render_reason_markdown(parsed: &ParsedReason) -> String {
    let mut content = String::new();

    content.push_str(&format!("### {}\n\n", parsed.title));

    if !parsed.has_structure() && !parsed.fallback_summary.is_empty() {
        content.push_str(&format!("{}\n\n", parsed.fallback_summary));
    }

    if !parsed.details.is_empty() {
        for detail in &parsed.details {
            content.push_str(&format!("- {}\n", detail));
        }
        content.push('\n');
    }

    if let Some(outcome) = &parsed.outcome {
        content.push_str(&format!("**Outcome:** {}\n", outcome));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::parse_reason;

    #[test]
    fn test_text_lists_details_and_outcome() {
        let parsed = parse_reason("Rescheduled to next safe day (2025-11-20) due to rain.");
        let text = render_reason_text(&parsed);
        assert_eq!(
            text,
            "Rain forecast risk\n  - Rain forecast considered\n  -> Rescheduled to 2025-11-20\n"
        );
    }

    #[test]
    fn test_text_shows_fallback_when_unstructured() {
        let parsed = parse_reason("Approved by manager");
        assert_eq!(
            render_reason_text(&parsed),
            "Threshold triggered\n  Approved by manager\n"
        );
    }

    #[test]
    fn test_markdown_layout() {
        let parsed =
            parse_reason("Temperature 35.2C exceeds max 32C (threshold profile: heat-stress).");
        let md = render_reason_markdown(&parsed);
        assert!(md.starts_with("### Temperature exceeded limit\n\n"));
        assert!(md.contains("- Temp: 35.2C\n- Max: 32C\n- Profile: heat-stress\n"));
        assert!(!md.contains("**Outcome:**"));
    }

    #[test]
    fn test_markdown_outcome_line() {
        let parsed = parse_reason("Proposed date +3 days.");
        let md = render_reason_markdown(&parsed);
        assert!(md.contains("Proposed date +3 days.\n\n"));
        assert!(md.ends_with("**Outcome:** Proposed date +3 days\n"));
    }
}
