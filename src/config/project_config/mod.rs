//! Project-level configuration support
//!
//! Loads per-project configuration from `seoscope.toml` or
//! `.seoscoperc.json` in a given directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # seoscope.toml
//!
//! [rules.word-count]
//! thresholds = { ok_from = 400, good_above = 800 }
//!
//! [rules.keyword-in-meta-description]
//! enabled = false
//!
//! [defaults]
//! variant = "audit"
//! format = "text"
//! fail_under = 60
//! ```

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, warn};

/// File names searched, in order
const CONFIG_FILES: &[&str] = &["seoscope.toml", ".seoscoperc.json"];

/// Written by `seoscope init`
pub const EXAMPLE_CONFIG: &str = r#"# seoscope configuration
#
# Rule names accept kebab-case, snake_case or the camelCase identifiers
# shown in reports (wordCount, keywordInTitle, ...).

# Word count of the body after tags are stripped
[rules.word-count]
enabled = true
thresholds = { ok_from = 300, good_above = 600 }

# Meta title length in characters
[rules.meta-title-length]
thresholds = { min = 10, good_min = 30, max = 60 }

# Meta description length in characters
[rules.meta-description-length]
thresholds = { good_min = 120, max = 160 }

# Keyword presence rules can be switched off individually
# [rules.keyword-in-meta-description]
# enabled = false

[defaults]
# live (0-10 average) or audit (0-100 pass ratio)
variant = "live"
# text, json, markdown
format = "text"
# Exit with code 1 when any draft scores below this
# fail_under = 6.0
"#;

/// Project-level configuration loaded from seoscope.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Per-rule configuration overrides
    #[serde(default)]
    pub rules: HashMap<String, RuleConfigOverride>,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Configuration override for a specific rule
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RuleConfigOverride {
    /// Whether the rule is enabled (default: true)
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Rule-specific threshold overrides
    #[serde(default)]
    pub thresholds: HashMap<String, ThresholdValue>,
}

/// A threshold value can be an integer or a float
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ThresholdValue {
    Integer(i64),
    Float(f64),
}

impl ThresholdValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ThresholdValue::Integer(v) => Some(*v),
            ThresholdValue::Float(v) => Some(*v as i64),
        }
    }

    /// Non-negative count, as thresholds compare against lengths
    pub fn as_usize(&self) -> Option<usize> {
        self.as_i64().and_then(|v| usize::try_from(v).ok())
    }
}

/// Default CLI flags that can be set in project config
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CliDefaults {
    /// live or audit
    #[serde(default)]
    pub variant: Option<String>,

    /// text, json, markdown
    #[serde(default)]
    pub format: Option<String>,

    #[serde(default)]
    pub no_emoji: Option<bool>,

    /// Minimum acceptable overall score for CI
    #[serde(default)]
    pub fail_under: Option<f64>,
}

/// Load project configuration from a directory.
///
/// Returns default configuration if no config file is found or the file
/// cannot be parsed.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    for name in CONFIG_FILES {
        let path = dir.join(name);
        if !path.exists() {
            continue;
        }
        match load_config_file(&path) {
            Ok(config) => {
                debug!("Loaded project config from {}", path.display());
                for keys in config.duplicate_rule_keys() {
                    warn!(
                        "{}: [rules] entries {} name the same rule",
                        path.display(),
                        keys.join(", ")
                    );
                }
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", path.display(), e);
            }
        }
    }

    debug!("No project config found in {}, using defaults", dir.display());
    ProjectConfig::default()
}

fn load_config_file(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        toml::from_str(&content)?
    };
    Ok(config)
}

impl ProjectConfig {
    fn rule_override(&self, name: &str) -> Option<&RuleConfigOverride> {
        let normalized = normalize_rule_name(name);
        self.rules.get(&normalized).or_else(|| self.rules.get(name)).or_else(|| {
            // Keys written as camelCase or snake_case in the file; the
            // lexically smallest wins when several spell the same rule
            self.rules
                .iter()
                .filter(|(key, _)| normalize_rule_name(key) == normalized)
                .min_by(|(a, _), (b, _)| a.cmp(b))
                .map(|(_, v)| v)
        })
    }

    /// Groups of config keys that name the same rule, e.g. `wordCount`
    /// and `word_count`
    pub fn duplicate_rule_keys(&self) -> Vec<Vec<String>> {
        let mut by_rule: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for key in self.rules.keys() {
            by_rule
                .entry(normalize_rule_name(key))
                .or_default()
                .push(key.clone());
        }
        by_rule
            .into_values()
            .filter(|keys| keys.len() > 1)
            .map(|mut keys| {
                keys.sort();
                keys
            })
            .collect()
    }

    /// Check if a rule is enabled (defaults to true if not specified)
    pub fn is_rule_enabled(&self, name: &str) -> bool {
        self.rule_override(name)
            .and_then(|c| c.enabled)
            .unwrap_or(true)
    }

    /// Threshold value for a rule
    pub fn threshold(&self, rule_name: &str, threshold_name: &str) -> Option<&ThresholdValue> {
        self.rule_override(rule_name)
            .and_then(|c| c.thresholds.get(threshold_name))
    }

    /// Threshold as a count, falling back to `default`
    pub fn threshold_usize(&self, rule_name: &str, threshold_name: &str, default: usize) -> usize {
        self.threshold(rule_name, threshold_name)
            .and_then(|v| v.as_usize())
            .unwrap_or(default)
    }

    /// All rule names switched off with `enabled = false`
    pub fn disabled_rules(&self) -> Vec<String> {
        let mut disabled: Vec<String> = self
            .rules
            .iter()
            .filter(|(_, c)| c.enabled == Some(false))
            .map(|(name, _)| normalize_rule_name(name))
            .collect();
        disabled.sort();
        disabled
    }
}

/// Normalize a rule name for config lookup
///
/// keywordInTitle -> keyword-in-title
/// keyword_in_title -> keyword-in-title
/// WordCountRule -> word-count
pub fn normalize_rule_name(name: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = name.trim().chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_is_lower = i > 0 && chars[i - 1].is_lowercase();
            let is_acronym_end = i > 0
                && chars[i - 1].is_uppercase()
                && i + 1 < chars.len()
                && chars[i + 1].is_lowercase();

            if prev_is_lower || is_acronym_end {
                result.push('-');
            }
            result.extend(c.to_lowercase());
        } else if *c == '_' {
            result.push('-');
        } else {
            result.push(*c);
        }
    }

    result.trim_end_matches("-rule").to_string()
}
