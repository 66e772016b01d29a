//! Rules command - list the active rules for a variant

use anyhow::Result;
use console::style;
use std::path::Path;
use std::str::FromStr;

use seoscope::config::load_project_config;
use seoscope::{SeoAnalyzer, Variant};

pub fn run(config_dir: &Path, variant: &str) -> Result<()> {
    let variant = Variant::from_str(variant)?;
    let config = load_project_config(config_dir);
    let analyzer = SeoAnalyzer::new(&config);

    println!(
        "\n{} rules {}\n",
        style(variant).bold(),
        style(format!("(scored 0-{})", variant.strategy().scale_max())).dim()
    );
    for rule in analyzer.rules(variant) {
        let needs_kw = if rule.requires_keyword() { " [keyword]" } else { "" };
        println!(
            "  {:<24} {}{}",
            style(rule.name()).cyan(),
            rule.description(),
            style(needs_kw).dim()
        );
    }

    let disabled = config.disabled_rules();
    if !disabled.is_empty() {
        println!(
            "\n  {} disabled: {}",
            style("→").dim(),
            style(disabled.join(", ")).yellow()
        );
    }
    println!();
    Ok(())
}
