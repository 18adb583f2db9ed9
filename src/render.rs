//! Terminal rendering of analysis reports.
//!
//! Layout mirrors the report structure: an "Image Analysis" section for the
//! overall summary, then a "Detailed Analysis" section with one titled block
//! per task. Each free-text field runs through the formatter and renders
//! according to its classified kind.

use crate::report::{format_text, resolve_title, AnalysisReport, FormattedBlock, TaskResult};

/// Fallback text when the backend sent no overall summary
const NO_ANALYSIS: &str = "No analysis available";

/// Render a full report as display-ready text
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("== Image Analysis ==\n");
    let summary = report.summary.as_deref().unwrap_or(NO_ANALYSIS);
    render_text(&mut out, Some(summary));

    if !report.tasks.is_empty() {
        out.push_str("\n== Detailed Analysis ==\n");
        for task in &report.tasks {
            render_task(&mut out, task);
        }
    }

    out
}

/// Render one task block: resolved title plus its labeled free-text fields
fn render_task(out: &mut String, task: &TaskResult) {
    out.push('\n');
    out.push_str(resolve_title(&task.name));
    out.push('\n');

    render_field(out, "Description", task.description.as_deref());
    render_field(out, "Summary", task.summary.as_deref());
    render_field(out, "Details", task.raw.as_deref());
}

/// Render one labeled field; absent or empty fields produce nothing
fn render_field(out: &mut String, label: &str, text: Option<&str>) {
    let Some(block) = format_text(text) else {
        return;
    };
    out.push_str(label);
    out.push_str(":\n");
    out.push_str(&render_block(&block));
}

/// Render a free-text field according to its classified block kind
fn render_text(out: &mut String, text: Option<&str>) {
    if let Some(block) = format_text(text) {
        out.push_str(&render_block(&block));
    }
}

/// Render one classified block as display-ready text
pub fn render_block(block: &FormattedBlock) -> String {
    let mut out = String::new();
    match block {
        FormattedBlock::Bullets(items) => {
            for item in items {
                out.push_str("  \u{2022} ");
                out.push_str(item);
                out.push('\n');
            }
        }
        FormattedBlock::Numbered(items) => {
            for (i, item) in items.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, item));
            }
        }
        FormattedBlock::Paragraphs(items) => {
            // Empty items stand for blank lines between paragraphs
            for item in items {
                out.push_str(item);
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::TaskResult;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_empty_report_falls_back() {
        let rendered = render_report(&AnalysisReport::default());
        assert_eq!(rendered, "== Image Analysis ==\nNo analysis available\n");
    }

    #[test]
    fn test_render_bullet_summary() {
        let report = AnalysisReport {
            summary: Some("- First\n- Second".to_string()),
            tasks: vec![],
        };
        let rendered = render_report(&report);
        assert_eq!(
            rendered,
            "== Image Analysis ==\n  \u{2022} First\n  \u{2022} Second\n"
        );
    }

    #[test]
    fn test_render_task_with_resolved_title() {
        let report = AnalysisReport {
            summary: Some("Summary text".to_string()),
            tasks: vec![TaskResult {
                name: "diagnostic_analysis_task".to_string(),
                description: Some("1. One\n2. Two".to_string()),
                summary: None,
                raw: None,
            }],
        };

        let rendered = render_report(&report);
        assert!(rendered.contains("Diagnostic Image Analysis"));
        assert!(rendered.contains("Description:\n  1. One\n  2. Two\n"));
        // Absent fields leave no label behind
        assert!(!rendered.contains("Summary:"));
        assert!(!rendered.contains("Details:"));
    }

    #[test]
    fn test_render_unknown_task_title_verbatim() {
        let report = AnalysisReport {
            summary: None,
            tasks: vec![TaskResult {
                name: "unknown_task".to_string(),
                description: None,
                summary: None,
                raw: Some("plain detail".to_string()),
            }],
        };

        let rendered = render_report(&report);
        assert!(rendered.contains("unknown_task\nDetails:\nplain detail\n"));
    }

    #[test]
    fn test_render_empty_field_is_skipped() {
        let report = AnalysisReport {
            summary: None,
            tasks: vec![TaskResult {
                name: "t".to_string(),
                description: Some(String::new()),
                summary: None,
                raw: None,
            }],
        };

        let rendered = render_report(&report);
        assert!(!rendered.contains("Description:"));
    }

    #[test]
    fn test_render_field_emits_label_and_content_once() {
        let report = AnalysisReport {
            summary: None,
            tasks: vec![TaskResult {
                name: "t".to_string(),
                description: Some("- Only item".to_string()),
                summary: None,
                raw: None,
            }],
        };

        let rendered = render_report(&report);
        assert_eq!(rendered.matches("Description:").count(), 1);
        assert_eq!(rendered.matches("Only item").count(), 1);
    }

    #[test]
    fn test_render_paragraph_blank_lines_survive() {
        let report = AnalysisReport {
            summary: Some("One\n\nTwo".to_string()),
            tasks: vec![],
        };
        let rendered = render_report(&report);
        assert_eq!(rendered, "== Image Analysis ==\nOne\n\nTwo\n");
    }
}
