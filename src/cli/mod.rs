//! CLI command definitions and handlers

mod analyze;
mod init;
mod rules;
mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate a score threshold (0-100)
fn parse_score(s: &str) -> Result<f64, String> {
    let n: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=100.0).contains(&n) {
        Err("score must be between 0 and 100".to_string())
    } else {
        Ok(n)
    }
}

/// seoscope - SEO scoring for blog drafts
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(
    version,
    about = "Rule-based SEO scorecard and audit report for blog drafts",
    long_about = "seoscope checks a draft's focus keyword against its title, meta title, \
meta description and body, and checks meta tag lengths and word count.\n\n\
Two variants: `live` (0-10 scorecard) and `audit` (0-100 pass ratio).",
    after_help = "\
Examples:
  seoscope analyze post.json                      Live scorecard
  seoscope analyze post.json --variant audit      Audit report
  seoscope analyze posts.toml --format json       JSON output for scripting
  seoscope analyze post.json --fail-under 7       Exit code 1 below 7/10 (CI mode)
  seoscope watch post.json                        Re-score on every save"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    pub log_level: String,

    /// Directory to search for seoscope.toml (default: the draft's directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one draft or a batch of drafts
    #[command(after_help = "\
Examples:
  seoscope analyze post.json
  seoscope analyze post.json --keyword \"flight refund\"
  seoscope analyze posts.toml --format markdown -o report.md")]
    Analyze {
        /// Draft file (.json or .toml)
        file: PathBuf,

        /// live (0-10 scorecard) or audit (0-100 report)
        #[arg(long, value_parser = ["live", "audit"])]
        variant: Option<String>,

        /// Override the focus keyword stored in the draft
        #[arg(long, short = 'k')]
        keyword: Option<String>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', value_parser = ["text", "json", "markdown", "md"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if any draft scores below this
        #[arg(long, value_parser = parse_score)]
        fail_under: Option<f64>,

        /// Disable emoji in output (cleaner for CI logs)
        #[arg(long)]
        no_emoji: bool,
    },

    /// Re-score a draft every time it is saved
    Watch {
        /// Draft file (.json or .toml)
        file: PathBuf,

        /// Override the focus keyword stored in the draft
        #[arg(long, short = 'k')]
        keyword: Option<String>,

        /// Disable emoji in output
        #[arg(long)]
        no_emoji: bool,
    },

    /// Write an example seoscope.toml into the current directory
    Init,

    /// List the active rules
    Rules {
        /// live or audit
        #[arg(long, default_value = "live", value_parser = ["live", "audit"])]
        variant: String,
    },
}

/// Directory holding the project config for a draft file
fn config_dir(explicit: Option<&Path>, file: &Path) -> PathBuf {
    match explicit {
        Some(dir) => dir.to_path_buf(),
        None => file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            file,
            variant,
            keyword,
            format,
            output,
            fail_under,
            no_emoji,
        } => {
            let config_dir = config_dir(cli.config.as_deref(), &file);
            analyze::run(
                &file,
                &config_dir,
                analyze::AnalyzeOptions {
                    variant,
                    keyword,
                    format,
                    output,
                    fail_under,
                    no_emoji,
                },
            )
        }

        Commands::Watch {
            file,
            keyword,
            no_emoji,
        } => {
            let config_dir = config_dir(cli.config.as_deref(), &file);
            watch::run(&file, &config_dir, keyword.as_deref(), no_emoji)
        }

        Commands::Init => {
            let dir = cli.config.unwrap_or_else(|| PathBuf::from("."));
            init::run(&dir)
        }

        Commands::Rules { variant } => {
            let dir = cli.config.unwrap_or_else(|| PathBuf::from("."));
            rules::run(&dir, &variant)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("7.5"), Ok(7.5));
        assert!(parse_score("-1").is_err());
        assert!(parse_score("101").is_err());
        assert!(parse_score("abc").is_err());
    }

    #[test]
    fn test_config_dir_defaults_to_draft_dir() {
        assert_eq!(
            config_dir(None, Path::new("drafts/post.json")),
            PathBuf::from("drafts")
        );
        assert_eq!(config_dir(None, Path::new("post.json")), PathBuf::from("."));
        assert_eq!(
            config_dir(Some(Path::new("/etc/seo")), Path::new("post.json")),
            PathBuf::from("/etc/seo")
        );
    }

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from([
            "seoscope",
            "analyze",
            "post.json",
            "--variant",
            "audit",
            "--fail-under",
            "60",
        ])
        .expect("parse args");
        match cli.command {
            Commands::Analyze {
                variant, fail_under, ..
            } => {
                assert_eq!(variant.as_deref(), Some("audit"));
                assert_eq!(fail_under, Some(60.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
