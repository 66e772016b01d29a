//! Word count rule
//!
//! Thin articles rank poorly. Counts the words of the body after tags are
//! stripped:
//! - more than `good_above` words: good (10)
//! - `ok_from` to `good_above` words: ok (6)
//! - fewer than `ok_from` words: bad (3)

use crate::config::ProjectConfig;
use crate::models::{RuleCategory, RuleResult, Variant};
use crate::rules::base::{Rule, RuleContext};

/// Thresholds for the word count rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountThresholds {
    /// Counts at or above this are at least ok
    pub ok_from: usize,
    /// Counts above this are good
    pub good_above: usize,
}

impl Default for WordCountThresholds {
    fn default() -> Self {
        Self {
            ok_from: 300,
            good_above: 600,
        }
    }
}

pub struct WordCountRule {
    thresholds: WordCountThresholds,
}

impl WordCountRule {
    pub fn new() -> Self {
        Self::with_thresholds(WordCountThresholds::default())
    }

    pub fn with_thresholds(thresholds: WordCountThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_config(config: &ProjectConfig) -> Self {
        let defaults = WordCountThresholds::default();
        Self::with_thresholds(WordCountThresholds {
            ok_from: config.threshold_usize("wordCount", "ok_from", defaults.ok_from),
            good_above: config.threshold_usize("wordCount", "good_above", defaults.good_above),
        })
    }

    fn score(&self, words: usize) -> f64 {
        if words > self.thresholds.good_above {
            10.0
        } else if words >= self.thresholds.ok_from {
            6.0
        } else {
            3.0
        }
    }

    fn message(&self, variant: Variant, words: usize, score: f64) -> String {
        let t = &self.thresholds;
        match variant {
            Variant::Live => format!("Word count: {} (Recommended: {}+).", words, t.good_above),
            Variant::Audit if score >= 10.0 => "Good content depth.".to_string(),
            Variant::Audit if score >= 6.0 => {
                format!("Decent depth (aim for {}+ words).", t.good_above)
            }
            Variant::Audit => format!("Content is too thin (aim for {}+).", t.ok_from),
        }
    }
}

impl Default for WordCountRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for WordCountRule {
    fn name(&self) -> &'static str {
        "wordCount"
    }

    fn description(&self) -> &'static str {
        "Body is long enough to cover the topic"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Length
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let words = ctx.word_count;
        let score = self.score(words);
        RuleResult::new(
            self.name(),
            self.category(),
            score,
            self.message(ctx.variant, words, score),
        )
        .with_value(format!("{} words", words))
    }
}
