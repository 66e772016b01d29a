//! `seoscope watch` - live scorecard on every save
//!
//! Watches one draft file and re-runs the live variant whenever it
//! changes, printing which rules flipped since the last save.

use anyhow::{Context, Result};
use console::style;
use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;
use tracing::warn;

use seoscope::config::load_project_config;
use seoscope::drafts::load_drafts;
use seoscope::reporters::{format_overall, status_icon};
use seoscope::{AnalysisReport, RuleResult, SeoAnalyzer, Variant};

pub fn run(file: &Path, config_dir: &Path, keyword: Option<&str>, no_emoji: bool) -> Result<()> {
    let file_path = std::fs::canonicalize(file)
        .with_context(|| format!("Draft does not exist: {}", file.display()))?;
    let watch_dir = file_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let icon = if no_emoji { "" } else { "👁️  " };
    println!(
        "\n{}Watching {} for changes...\n",
        style(icon).bold(),
        style(file_path.display()).cyan()
    );
    println!("  {} Save the draft to re-score it", style("→").dim());
    println!("  {} Press Ctrl+C to stop\n", style("→").dim());

    let analyzer = SeoAnalyzer::new(&load_project_config(config_dir));
    let mut previous = score(&analyzer, &file_path, keyword);
    if let Some(reports) = &previous {
        for report in reports {
            print_full(report, no_emoji);
        }
    }

    // Set up file watcher with debouncing
    let (tx, rx) = mpsc::channel();

    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        None,
        move |result: DebounceEventResult| {
            if let Ok(events) = result {
                let _ = tx.send(events);
            }
        },
    )?;

    // Editors often save by rename, so watch the directory
    debouncer.watch(&watch_dir, RecursiveMode::NonRecursive)?;

    while let Ok(events) = rx.recv() {
        let touched = events
            .iter()
            .flat_map(|event| event.paths.iter())
            .any(|p| p == &file_path);
        if !touched {
            continue;
        }

        let Some(reports) = score(&analyzer, &file_path, keyword) else {
            continue;
        };
        let prev = previous.as_deref().unwrap_or(&[]);
        for (i, report) in reports.iter().enumerate() {
            display_diff(report, prev.get(i), no_emoji);
        }
        previous = Some(reports);
    }

    Ok(())
}

/// Load and score the draft, or log why it could not be read.
///
/// Half-written files are common mid-save, so failures are not fatal.
fn score(
    analyzer: &SeoAnalyzer,
    file_path: &Path,
    keyword: Option<&str>,
) -> Option<Vec<AnalysisReport>> {
    match load_drafts(file_path) {
        Ok(mut drafts) => {
            if let Some(keyword) = keyword {
                for draft in &mut drafts {
                    draft.focus_keyword = keyword.to_string();
                }
            }
            Some(analyzer.evaluate_all(&drafts, Variant::Live))
        }
        Err(e) => {
            warn!("Skipping update: {}", e);
            None
        }
    }
}

fn print_full(report: &AnalysisReport, no_emoji: bool) {
    print_header(report, None);
    for r in &report.results {
        print_result(r, no_emoji);
    }
}

fn print_header(report: &AnalysisReport, prev_score: Option<f64>) {
    let time = chrono::Local::now().format("%H:%M:%S");
    let delta = match prev_score {
        Some(prev) if report.overall_score > prev => {
            style(format!(" (+{:.1})", report.overall_score - prev)).green()
        }
        Some(prev) if report.overall_score < prev => {
            style(format!(" ({:.1})", report.overall_score - prev)).red()
        }
        _ => style(String::new()),
    };
    println!(
        "{} {} {}{}",
        style(format!("[{}]", time)).dim(),
        style(&report.label).cyan().bold(),
        style(format_overall(report)).bold(),
        delta
    );
    if report.awaiting_keyword {
        println!(
            "  {}",
            style(seoscope::reporters::awaiting_keyword_prompt(report)).dim()
        );
    }
}

fn print_result(result: &RuleResult, no_emoji: bool) {
    println!(
        "  {} {} {}",
        status_icon(result.status, no_emoji),
        result.message,
        style(result.value.as_deref().unwrap_or("")).dim()
    );
}

/// Rules whose status differs from the previous run
fn changed_rules<'a>(
    report: &'a AnalysisReport,
    prev: Option<&AnalysisReport>,
) -> Vec<&'a RuleResult> {
    report
        .results
        .iter()
        .filter(|r| {
            prev.and_then(|p| p.result(&r.identifier))
                .map_or(true, |old| old.status != r.status)
        })
        .collect()
}

fn display_diff(report: &AnalysisReport, prev: Option<&AnalysisReport>, no_emoji: bool) {
    let changed = changed_rules(report, prev);
    print_header(report, prev.map(|p| p.overall_score));
    if changed.is_empty() {
        println!("  {}", style("no rule changes").dim());
    }
    for r in changed {
        print_result(r, no_emoji);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seoscope::{evaluate, AnalysisInput};

    #[test]
    fn test_changed_rules() {
        let before = AnalysisInput::new("Lounge Access", "", "", "<p>Short</p>", "lounge");
        let mut after = before.clone();
        after.meta_description = "Lounge access rules explained.".into();

        let old = evaluate(&before, Variant::Live);
        let new = evaluate(&after, Variant::Live);
        let changed: Vec<_> = changed_rules(&new, Some(&old))
            .into_iter()
            .map(|r| r.identifier.as_str())
            .collect();
        assert_eq!(
            changed,
            vec!["keywordInMetaDescription", "metaDescriptionLength"]
        );
    }

    #[test]
    fn test_everything_changed_without_previous() {
        let report = evaluate(&AnalysisInput::new("A", "", "", "", "a"), Variant::Live);
        assert_eq!(changed_rules(&report, None).len(), report.results.len());
    }
}
