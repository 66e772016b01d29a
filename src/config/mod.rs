//! Configuration module for seoscope
//!
//! This module handles:
//! - Project-level configuration (seoscope.toml)
//! - Rule enable/disable switches and threshold overrides
//! - CLI defaults

mod project_config;

pub use project_config::{
    load_project_config, normalize_rule_name, CliDefaults, ProjectConfig, RuleConfigOverride,
    ThresholdValue, EXAMPLE_CONFIG,
};
