//! Analyze command - score drafts and print the report

use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use seoscope::config::{load_project_config, ProjectConfig};
use seoscope::drafts::load_drafts;
use seoscope::reporters::{self, OutputFormat, RenderOptions};
use seoscope::{AnalysisInput, AnalysisReport, SeoAnalyzer, Variant};

/// Flags for `seoscope analyze`; unset ones fall back to `[defaults]`
#[derive(Debug, Default)]
pub struct AnalyzeOptions {
    pub variant: Option<String>,
    pub keyword: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub fail_under: Option<f64>,
    pub no_emoji: bool,
}

/// Flags after merging with project config
#[derive(Debug)]
struct Resolved {
    variant: Variant,
    format: OutputFormat,
    fail_under: Option<f64>,
    no_emoji: bool,
}

fn resolve(options: &AnalyzeOptions, config: &ProjectConfig) -> Result<Resolved> {
    let defaults = &config.defaults;
    let variant = match options.variant.as_deref().or(defaults.variant.as_deref()) {
        Some(v) => Variant::from_str(v)?,
        None => Variant::default(),
    };
    let format = match options.format.as_deref().or(defaults.format.as_deref()) {
        Some(f) => OutputFormat::from_str(f)?,
        None => OutputFormat::default(),
    };
    let fail_under = options.fail_under.or(defaults.fail_under);
    if let Some(threshold) = fail_under {
        let max = variant.strategy().scale_max();
        if threshold > max {
            anyhow::bail!(
                "--fail-under {} is above the {} scale (0-{})",
                threshold,
                variant,
                max
            );
        }
    }
    Ok(Resolved {
        variant,
        format,
        fail_under,
        no_emoji: options.no_emoji || defaults.no_emoji.unwrap_or(false),
    })
}

fn apply_keyword(drafts: &mut [AnalysisInput], keyword: Option<&str>) {
    if let Some(keyword) = keyword {
        debug!("Overriding focus keyword with '{}'", keyword);
        for draft in drafts {
            draft.focus_keyword = keyword.to_string();
        }
    }
}

/// Run the analyze command
pub fn run(file: &Path, config_dir: &Path, options: AnalyzeOptions) -> Result<()> {
    let mut drafts = load_drafts(file)
        .with_context(|| format!("Failed to load drafts from {}", file.display()))?;
    let config = load_project_config(config_dir);
    let resolved = resolve(&options, &config)?;
    debug!("Resolved analyze options: {:?}", resolved);

    apply_keyword(&mut drafts, options.keyword.as_deref());

    let analyzer = SeoAnalyzer::new(&config);
    let reports = analyzer.evaluate_all(&drafts, resolved.variant);
    info!("Scored {} draft(s) from {}", reports.len(), file.display());

    let render_options = RenderOptions {
        no_emoji: resolved.no_emoji,
    };
    let output = reporters::report_with_format(&reports, resolved.format, render_options)?;

    match &options.output {
        Some(out_path) => {
            let out_path = with_default_extension(out_path, resolved.format);
            std::fs::write(&out_path, &output)
                .with_context(|| format!("Failed to write report to {}", out_path.display()))?;
            let icon = if resolved.no_emoji { "" } else { "📄 " };
            eprintln!(
                "{}Report written to: {}",
                style(icon).bold(),
                style(out_path.display()).cyan()
            );
        }
        None => println!("{}", output),
    }

    check_fail_threshold(resolved.fail_under, &reports);
    Ok(())
}

/// Output path, with the format's extension added when none was given
fn with_default_extension(path: &Path, format: OutputFormat) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(reporters::file_extension(format))
    }
}

/// Labels of reports scoring below the threshold
fn below_threshold(threshold: f64, reports: &[AnalysisReport]) -> Vec<&str> {
    reports
        .iter()
        .filter(|r| r.overall_score < threshold)
        .map(|r| r.label.as_str())
        .collect()
}

/// Exit with code 1 if any report scores below the threshold
fn check_fail_threshold(fail_under: Option<f64>, reports: &[AnalysisReport]) {
    if let Some(threshold) = fail_under {
        let failing = below_threshold(threshold, reports);
        if !failing.is_empty() {
            eprintln!(
                "Failing due to --fail-under={}: {}",
                threshold,
                failing.join(", ")
            );
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_beat_config_defaults() {
        let config: ProjectConfig = toml::from_str(
            "[defaults]\nvariant = \"audit\"\nformat = \"json\"\nfail_under = 50.0\n",
        )
        .expect("parse config");

        let from_config = resolve(&AnalyzeOptions::default(), &config).expect("resolve");
        assert_eq!(from_config.variant, Variant::Audit);
        assert_eq!(from_config.format, OutputFormat::Json);
        assert_eq!(from_config.fail_under, Some(50.0));

        let options = AnalyzeOptions {
            variant: Some("live".into()),
            format: Some("md".into()),
            fail_under: Some(7.0),
            ..Default::default()
        };
        let from_flags = resolve(&options, &config).expect("resolve");
        assert_eq!(from_flags.variant, Variant::Live);
        assert_eq!(from_flags.format, OutputFormat::Markdown);
        assert_eq!(from_flags.fail_under, Some(7.0));
    }

    #[test]
    fn test_builtin_defaults() {
        let resolved =
            resolve(&AnalyzeOptions::default(), &ProjectConfig::default()).expect("resolve");
        assert_eq!(resolved.variant, Variant::Live);
        assert_eq!(resolved.format, OutputFormat::Text);
        assert_eq!(resolved.fail_under, None);
        assert!(!resolved.no_emoji);
    }

    #[test]
    fn test_fail_under_must_fit_variant_scale() {
        let options = AnalyzeOptions {
            fail_under: Some(60.0),
            ..Default::default()
        };
        let err = resolve(&options, &ProjectConfig::default()).unwrap_err();
        assert!(err.to_string().contains("live scale"));

        let audit = AnalyzeOptions {
            variant: Some("audit".into()),
            fail_under: Some(60.0),
            ..Default::default()
        };
        assert_eq!(
            resolve(&audit, &ProjectConfig::default())
                .expect("resolve")
                .fail_under,
            Some(60.0)
        );

        let config: ProjectConfig =
            toml::from_str("[defaults]\nfail_under = 75.0\n").expect("parse config");
        assert!(resolve(&AnalyzeOptions::default(), &config).is_err());
    }

    #[test]
    fn test_output_extension_defaults_to_format() {
        assert_eq!(
            with_default_extension(Path::new("out/report"), OutputFormat::Markdown),
            PathBuf::from("out/report.md")
        );
        assert_eq!(
            with_default_extension(Path::new("report"), OutputFormat::Json),
            PathBuf::from("report.json")
        );
        assert_eq!(
            with_default_extension(Path::new("scores.txt"), OutputFormat::Json),
            PathBuf::from("scores.txt")
        );
    }

    #[test]
    fn test_keyword_override() {
        let mut drafts = vec![AnalysisInput::new("A", "", "", "", "old")];
        apply_keyword(&mut drafts, Some("new"));
        assert_eq!(drafts[0].focus_keyword, "new");
        apply_keyword(&mut drafts, None);
        assert_eq!(drafts[0].focus_keyword, "new");
    }

    #[test]
    fn test_below_threshold() {
        let good = AnalysisInput::new("Good Post", "", "", "", "");
        let reports = SeoAnalyzer::default().evaluate_all(&[good], Variant::Live);
        let score = reports[0].overall_score;
        assert!(below_threshold(score, &reports).is_empty());
        assert_eq!(below_threshold(score + 0.1, &reports), vec!["good-post"]);
    }
}
