//! Output reporters for seoscope analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal scorecard with colors and status icons
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown, for PR comments or CMS notes

mod json;
mod markdown;
mod text;

use crate::models::{AnalysisReport, RuleStatus};
use crate::scoring::ScoreBand;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render options shared by the human-readable formats
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub no_emoji: bool,
}

/// Render reports in the specified format
pub fn report(reports: &[AnalysisReport], format: &str, options: RenderOptions) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(reports, fmt, options)
}

/// Render reports using an OutputFormat enum
pub fn report_with_format(
    reports: &[AnalysisReport],
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(reports, options),
        OutputFormat::Json => json::render(reports),
        OutputFormat::Markdown => markdown::render(reports, options),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

/// Icon for a rule status
pub fn status_icon(status: RuleStatus, no_emoji: bool) -> &'static str {
    match (status, no_emoji) {
        (RuleStatus::Good, true) => "PASS",
        (RuleStatus::Good, false) => "✅",
        (RuleStatus::Ok, true) => "WARN",
        (RuleStatus::Ok, false) => "⚠️",
        (RuleStatus::Bad, true) => "FAIL",
        (RuleStatus::Bad, false) => "❌",
    }
}

/// Overall score as shown to editors: "7.6 / 10" or "75/100"
pub fn format_overall(report: &AnalysisReport) -> String {
    match report.variant {
        crate::models::Variant::Live => format!("{:.1} / 10", report.overall_score),
        crate::models::Variant::Audit => format!("{:.0}/100", report.overall_score),
    }
}

/// Prompt shown instead of keyword checks when no focus keyword is set
pub fn awaiting_keyword_prompt(report: &AnalysisReport) -> &'static str {
    match report.variant {
        crate::models::Variant::Live => "Enter a \"Focus Keyword\" to start scoring.",
        crate::models::Variant::Audit => "Enter a focus keyword to generate the report.",
    }
}

fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "Strong",
        ScoreBand::Fair => "Needs work",
        ScoreBand::Weak => "Weak",
    }
}
