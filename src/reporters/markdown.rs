//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments on content repos
//! - Editorial notes pasted into the CMS

use crate::models::{AnalysisReport, RuleCategory, RuleResult, Variant};
use crate::reporters::{
    awaiting_keyword_prompt, band_label, format_overall, status_icon, RenderOptions,
};
use anyhow::Result;
use chrono::Local;

/// Render reports as GitHub-flavored Markdown
pub fn render(reports: &[AnalysisReport], options: RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(reports));
    md.push('\n');

    for report in reports {
        md.push_str(&render_report(report, options));
        md.push('\n');
    }

    md.push_str(&render_footer());
    Ok(md)
}

fn render_header(reports: &[AnalysisReport]) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        "# SEO Report\n\n{} draft(s) analyzed. Generated: {}\n",
        reports.len(),
        timestamp
    )
}

fn render_report(report: &AnalysisReport, options: RenderOptions) -> String {
    let title = match report.variant {
        Variant::Live => "Scorecard",
        Variant::Audit => "Audit",
    };
    let keyword = report.focus_keyword.as_deref().unwrap_or("none");

    let mut md = format!(
        "## {}: `{}`\n\n**Score: {}** | **{}** | Keyword: `{}` | Words: {}\n\n",
        title,
        report.label,
        format_overall(report),
        band_label(report.band),
        keyword,
        report.word_count
    );

    if report.awaiting_keyword {
        md.push_str(&format!("> {}\n\n", awaiting_keyword_prompt(report)));
    }

    match report.variant {
        Variant::Live => md.push_str(&render_table(report.results.iter(), options)),
        Variant::Audit => {
            for (heading, category) in [
                ("Keyword Consistency", RuleCategory::Keyword),
                ("Technical Lengths", RuleCategory::Length),
            ] {
                let mut group = report
                    .results
                    .iter()
                    .filter(|r| r.category == category)
                    .peekable();
                if group.peek().is_none() {
                    continue;
                }
                md.push_str(&format!("### {}\n\n", heading));
                md.push_str(&render_table(group, options));
                md.push('\n');
            }
        }
    }
    md
}

fn render_table<'a>(
    results: impl Iterator<Item = &'a RuleResult>,
    options: RenderOptions,
) -> String {
    let mut md = String::from("| | Rule | Result | Value |\n|---|------|--------|-------|\n");
    for r in results {
        md.push_str(&format!(
            "| {} | `{}` | {} | {} |\n",
            status_icon(r.status, options.no_emoji),
            r.identifier,
            escape_cell(&r.message),
            r.value.as_deref().unwrap_or("")
        ));
    }
    md
}

/// Pipes would end the table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn render_footer() -> String {
    format!(
        "---\n\n*Generated by seoscope v{}*\n",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{awaiting_report, test_reports};

    #[test]
    fn test_markdown_has_tables() {
        let md = render(&test_reports(), RenderOptions::default()).expect("render markdown");
        assert!(md.starts_with("# SEO Report"));
        assert!(md.contains("2 draft(s) analyzed"));
        assert!(md.contains("## Scorecard: `flight-refund-guide`"));
        assert!(md.contains("**Score: 8.3 / 10**"));
        assert!(md.contains("## Audit: `flight-refund-guide`"));
        assert!(md.contains("### Keyword Consistency"));
        assert!(md.contains("| `metaTitleLength` |"));
        assert!(md.contains("Generated by seoscope"));
    }

    #[test]
    fn test_awaiting_keyword_quote() {
        let md = render(&[awaiting_report()], RenderOptions { no_emoji: true })
            .expect("render markdown");
        assert!(md.contains("> Enter a \"Focus Keyword\" to start scoring."));
        assert!(md.contains("Keyword: `none`"));
        assert!(!md.contains("keywordInTitle"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("a | b"), "a \\| b");
    }
}
