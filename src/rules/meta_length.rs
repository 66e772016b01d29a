//! Meta tag length rules
//!
//! Search results truncate long titles and descriptions, and very short
//! ones waste the slot. Both rules count characters of the raw field, not
//! the normalized one.

use crate::config::ProjectConfig;
use crate::models::{RuleCategory, RuleResult, Variant};
use crate::rules::base::{Rule, RuleContext};

/// Thresholds for meta title length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTitleThresholds {
    /// Shorter than this is bad
    pub min: usize,
    /// From here up to `max` is good
    pub good_min: usize,
    /// Longer than this is bad
    pub max: usize,
}

impl Default for MetaTitleThresholds {
    fn default() -> Self {
        Self {
            min: 10,
            good_min: 30,
            max: 60,
        }
    }
}

/// Meta title length: good 30-60, ok 10-29, bad otherwise.
///
/// An empty meta title is tolerated (ok) in the live variant and bad in
/// the audit variant.
pub struct MetaTitleLengthRule {
    thresholds: MetaTitleThresholds,
}

impl MetaTitleLengthRule {
    pub fn new() -> Self {
        Self::with_thresholds(MetaTitleThresholds::default())
    }

    pub fn with_thresholds(thresholds: MetaTitleThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_config(config: &ProjectConfig) -> Self {
        let d = MetaTitleThresholds::default();
        Self::with_thresholds(MetaTitleThresholds {
            min: config.threshold_usize("metaTitleLength", "min", d.min),
            good_min: config.threshold_usize("metaTitleLength", "good_min", d.good_min),
            max: config.threshold_usize("metaTitleLength", "max", d.max),
        })
    }

    fn judge(&self, len: usize, variant: Variant) -> (f64, String) {
        let t = &self.thresholds;
        let audit = variant == Variant::Audit;
        if len == 0 {
            return if variant.tolerates_missing_meta_title() {
                (5.0, "No custom Meta Title set.".to_string())
            } else {
                (0.0, "Missing title.".to_string())
            };
        }
        if len > t.max {
            let msg = if audit {
                format!("Too long (aim for {}-{}).", t.good_min, t.max)
            } else {
                format!("Meta title is too long ({}/{} chars).", len, t.max)
            };
            (0.0, msg)
        } else if len < t.min {
            let msg = if audit {
                format!("Too short (aim for {}-{}).", t.good_min, t.max)
            } else {
                "Meta title is too short.".to_string()
            };
            (0.0, msg)
        } else if len < t.good_min {
            let msg = if audit {
                format!("A bit short (aim for {}-{}).", t.good_min, t.max)
            } else {
                format!("Meta title is a bit short ({}/{} chars).", len, t.good_min)
            };
            (5.0, msg)
        } else if audit {
            (10.0, "Perfect length.".to_string())
        } else {
            (10.0, "Meta title length is good.".to_string())
        }
    }
}

impl Default for MetaTitleLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MetaTitleLengthRule {
    fn name(&self) -> &'static str {
        "metaTitleLength"
    }

    fn description(&self) -> &'static str {
        "Meta title fits in a search result"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Length
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let len = ctx.input.meta_title.chars().count();
        let (score, message) = self.judge(len, ctx.variant);
        RuleResult::new(self.name(), self.category(), score, message)
            .with_value(format!("{} chars", len))
    }
}

/// Thresholds for meta description length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDescriptionThresholds {
    /// From here up to `max` is good; shorter (non-empty) is ok
    pub good_min: usize,
    /// Longer than this is bad
    pub max: usize,
}

impl Default for MetaDescriptionThresholds {
    fn default() -> Self {
        Self {
            good_min: 120,
            max: 160,
        }
    }
}

/// Meta description length: good 120-160, ok 1-119, bad when empty or
/// longer than 160.
pub struct MetaDescriptionLengthRule {
    thresholds: MetaDescriptionThresholds,
}

impl MetaDescriptionLengthRule {
    pub fn new() -> Self {
        Self::with_thresholds(MetaDescriptionThresholds::default())
    }

    pub fn with_thresholds(thresholds: MetaDescriptionThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_config(config: &ProjectConfig) -> Self {
        let d = MetaDescriptionThresholds::default();
        Self::with_thresholds(MetaDescriptionThresholds {
            good_min: config.threshold_usize("metaDescriptionLength", "good_min", d.good_min),
            max: config.threshold_usize("metaDescriptionLength", "max", d.max),
        })
    }

    fn judge(&self, len: usize, variant: Variant) -> (f64, String) {
        let t = &self.thresholds;
        let audit = variant == Variant::Audit;
        if len == 0 {
            let msg = if audit {
                "Missing desc."
            } else {
                "No meta description provided."
            };
            (0.0, msg.to_string())
        } else if len > t.max {
            let msg = if audit {
                format!("Too long (aim for {}-{}).", t.good_min, t.max)
            } else {
                format!("Meta description is too long ({}/{} chars).", len, t.max)
            };
            (0.0, msg)
        } else if len < t.good_min {
            let msg = if audit {
                format!("Too short (aim for {}-{}).", t.good_min, t.max)
            } else {
                format!(
                    "Meta description is a bit short ({}/{} chars).",
                    len, t.good_min
                )
            };
            (5.0, msg)
        } else if audit {
            (10.0, "Perfect length.".to_string())
        } else {
            (10.0, "Meta description length is good.".to_string())
        }
    }
}

impl Default for MetaDescriptionLengthRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for MetaDescriptionLengthRule {
    fn name(&self) -> &'static str {
        "metaDescriptionLength"
    }

    fn description(&self) -> &'static str {
        "Meta description fits in a search snippet"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Length
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let len = ctx.input.meta_description.chars().count();
        let (score, message) = self.judge(len, ctx.variant);
        RuleResult::new(self.name(), self.category(), score, message)
            .with_value(format!("{} chars", len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisInput, RuleStatus};

    fn meta_title(len: usize, variant: Variant) -> RuleResult {
        let input = AnalysisInput::new("", "x".repeat(len), "", "", "");
        MetaTitleLengthRule::new().evaluate(&RuleContext::new(&input, variant))
    }

    fn meta_desc(len: usize, variant: Variant) -> RuleResult {
        let input = AnalysisInput::new("", "", "x".repeat(len), "", "");
        MetaDescriptionLengthRule::new().evaluate(&RuleContext::new(&input, variant))
    }

    #[test]
    fn test_meta_title_boundaries() {
        for variant in [Variant::Live, Variant::Audit] {
            assert_eq!(meta_title(9, variant).status, RuleStatus::Bad);
            assert_eq!(meta_title(10, variant).status, RuleStatus::Ok);
            assert_eq!(meta_title(29, variant).status, RuleStatus::Ok);
            assert_eq!(meta_title(30, variant).status, RuleStatus::Good);
            assert_eq!(meta_title(60, variant).status, RuleStatus::Good);
            assert_eq!(meta_title(61, variant).status, RuleStatus::Bad);
        }
    }

    #[test]
    fn test_missing_meta_title_depends_on_variant() {
        let live = meta_title(0, Variant::Live);
        assert_eq!(live.status, RuleStatus::Ok);
        assert_eq!(live.message, "No custom Meta Title set.");

        let audit = meta_title(0, Variant::Audit);
        assert_eq!(audit.status, RuleStatus::Bad);
        assert_eq!(audit.score, 0.0);
    }

    #[test]
    fn test_meta_title_counts_chars_not_bytes() {
        // 30 two-byte characters
        let input = AnalysisInput::new("", "é".repeat(30), "", "", "");
        let r = MetaTitleLengthRule::new().evaluate(&RuleContext::new(&input, Variant::Live));
        assert_eq!(r.status, RuleStatus::Good);
        assert_eq!(r.value.as_deref(), Some("30 chars"));
    }

    #[test]
    fn test_meta_description_boundaries() {
        for variant in [Variant::Live, Variant::Audit] {
            assert_eq!(meta_desc(0, variant).status, RuleStatus::Bad);
            assert_eq!(meta_desc(0, variant).score, 0.0);
            assert_eq!(meta_desc(1, variant).status, RuleStatus::Ok);
            assert_eq!(meta_desc(119, variant).status, RuleStatus::Ok);
            assert_eq!(meta_desc(120, variant).status, RuleStatus::Good);
            assert_eq!(meta_desc(160, variant).status, RuleStatus::Good);
            assert_eq!(meta_desc(161, variant).status, RuleStatus::Bad);
        }
    }

    #[test]
    fn test_meta_description_messages() {
        assert_eq!(
            meta_desc(200, Variant::Live).message,
            "Meta description is too long (200/160 chars)."
        );
        assert_eq!(meta_desc(0, Variant::Audit).message, "Missing desc.");
        assert_eq!(meta_desc(140, Variant::Audit).message, "Perfect length.");
    }

    #[test]
    fn test_thresholds_from_config() {
        let config: ProjectConfig = toml::from_str(
            "[rules.meta-title-length]\nthresholds = { good_min = 20, max = 70 }\n",
        )
        .expect("parse config");
        let rule = MetaTitleLengthRule::with_config(&config);
        assert_eq!(rule.judge(20, Variant::Live).0, 10.0);
        assert_eq!(rule.judge(70, Variant::Live).0, 10.0);
        assert_eq!(rule.judge(71, Variant::Live).0, 0.0);
        assert_eq!(rule.judge(9, Variant::Live).0, 0.0);
    }
}
