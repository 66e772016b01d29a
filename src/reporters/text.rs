//! Text (terminal) reporter with colors and formatting

use crate::models::{AnalysisReport, RuleCategory, RuleResult, RuleStatus, Variant};
use crate::reporters::{
    awaiting_keyword_prompt, band_label, format_overall, status_icon, RenderOptions,
};
use crate::scoring::ScoreBand;
use anyhow::Result;

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "\x1b[32m", // Green
        ScoreBand::Fair => "\x1b[33m",   // Yellow
        ScoreBand::Weak => "\x1b[31m",   // Red
    }
}

fn status_color(status: RuleStatus) -> &'static str {
    match status {
        RuleStatus::Good => "\x1b[32m",
        RuleStatus::Ok => "\x1b[33m",
        RuleStatus::Bad => "\x1b[31m",
    }
}

/// Render reports as formatted terminal output
pub fn render(reports: &[AnalysisReport], options: RenderOptions) -> Result<String> {
    let mut out = String::new();
    for report in reports {
        render_one(&mut out, report, options);
    }
    Ok(out)
}

fn render_one(out: &mut String, report: &AnalysisReport, options: RenderOptions) {
    let title = match report.variant {
        Variant::Live => "SEO Scorecard",
        Variant::Audit => "SEO Audit Report",
    };
    let band_c = band_color(report.band);

    out.push_str(&format!("\n{BOLD}{title}{RESET}  {DIM}{}{RESET}\n", report.label));
    out.push_str(DIM);
    out.push_str("──────────────────────────────────────");
    out.push_str(RESET);
    out.push('\n');
    out.push_str(&format!(
        "Score: {band_c}{BOLD}{}{RESET}  {band_c}{}{RESET}  ",
        format_overall(report),
        band_label(report.band)
    ));
    match &report.focus_keyword {
        Some(kw) => out.push_str(&format!("Keyword: \"{}\"  ", kw)),
        None => out.push_str("Keyword: none  "),
    }
    out.push_str(&format!("Words: {}\n\n", report.word_count));

    if report.awaiting_keyword {
        out.push_str(&format!("  {DIM}{}{RESET}\n\n", awaiting_keyword_prompt(report)));
    }

    match report.variant {
        Variant::Live => {
            for result in &report.results {
                push_result(out, result, options);
            }
        }
        Variant::Audit => {
            for (heading, category) in [
                ("KEYWORD CONSISTENCY", RuleCategory::Keyword),
                ("TECHNICAL LENGTHS", RuleCategory::Length),
            ] {
                let group: Vec<_> = report
                    .results
                    .iter()
                    .filter(|r| r.category == category)
                    .collect();
                if group.is_empty() {
                    continue;
                }
                out.push_str(&format!("{BOLD}{heading}{RESET}\n"));
                for result in group {
                    push_result(out, result, options);
                }
                out.push('\n');
            }
        }
    }
    out.push('\n');
}

fn push_result(out: &mut String, result: &RuleResult, options: RenderOptions) {
    let color = status_color(result.status);
    let icon = status_icon(result.status, options.no_emoji);
    let value = result
        .value
        .as_deref()
        .map(|v| format!("  {DIM}[{v}]{RESET}"))
        .unwrap_or_default();
    out.push_str(&format!("  {color}{icon}{RESET}  {}{}\n", result.message, value));
}
