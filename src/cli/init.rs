//! Init command - write an example seoscope.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use seoscope::config::EXAMPLE_CONFIG;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join("seoscope.toml");
    if config_path.exists() {
        println!(
            "{} Config already exists at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    println!(
        "\n  {} Edit thresholds, then run {}",
        style("→").dim(),
        style("seoscope analyze <draft>").yellow()
    );
    Ok(())
}
