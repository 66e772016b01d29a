//! SEO analyzer
//!
//! Runs the variant's ordered rule list over one draft and aggregates the
//! results. Evaluation is pure: no I/O, no state carried between calls, so
//! the live scorecard can re-run it on every edit.

use crate::config::ProjectConfig;
use crate::models::{AnalysisInput, AnalysisReport, Variant};
use crate::rules::{rules_for_variant, Rule, RuleContext};
use crate::scoring::ScoreBand;
use tracing::{debug, info};

/// Evaluate a draft with the built-in rule set and thresholds.
pub fn evaluate(input: &AnalysisInput, variant: Variant) -> AnalysisReport {
    SeoAnalyzer::default().evaluate(input, variant)
}

/// Rule sets for both variants, built once from a project config
pub struct SeoAnalyzer {
    live_rules: Vec<Box<dyn Rule>>,
    audit_rules: Vec<Box<dyn Rule>>,
}

impl SeoAnalyzer {
    pub fn new(config: &ProjectConfig) -> Self {
        Self {
            live_rules: rules_for_variant(Variant::Live, config),
            audit_rules: rules_for_variant(Variant::Audit, config),
        }
    }

    /// Active rules, in report order
    pub fn rules(&self, variant: Variant) -> &[Box<dyn Rule>] {
        match variant {
            Variant::Live => &self.live_rules,
            Variant::Audit => &self.audit_rules,
        }
    }

    pub fn evaluate(&self, input: &AnalysisInput, variant: Variant) -> AnalysisReport {
        let ctx = RuleContext::new(input, variant);
        let awaiting_keyword = ctx.keyword.is_none();

        let results: Vec<_> = self
            .rules(variant)
            .iter()
            .filter(|rule| !(rule.requires_keyword() && awaiting_keyword))
            .map(|rule| rule.evaluate(&ctx))
            .collect();

        let strategy = variant.strategy();
        let overall_score = strategy.aggregate(&results);
        let band = ScoreBand::for_score(strategy, overall_score);
        let label = input.label();

        if awaiting_keyword {
            debug!("{}: no focus keyword, keyword rules skipped", label);
        }
        info!(
            "SEO {} score for '{}': {}/{} ({}) over {} rules",
            variant,
            label,
            overall_score,
            strategy.scale_max(),
            band,
            results.len()
        );

        AnalysisReport {
            label,
            variant,
            overall_score,
            band,
            awaiting_keyword,
            focus_keyword: ctx.keyword.clone(),
            word_count: ctx.word_count,
            results,
        }
    }

    /// Evaluate a batch of drafts, preserving input order
    pub fn evaluate_all(&self, inputs: &[AnalysisInput], variant: Variant) -> Vec<AnalysisReport> {
        inputs.iter().map(|i| self.evaluate(i, variant)).collect()
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self::new(&ProjectConfig::default())
    }
}
