//! Base rule trait and evaluation context
//!
//! This module defines the core abstractions for SEO rules:
//! - `Rule` trait that all rules implement
//! - `RuleContext`, the normalized view of a draft every rule reads

use crate::models::{AnalysisInput, RuleCategory, RuleResult, Variant};
use crate::normalize::{focus_keyword, normalize, word_count};

/// Normalized fields of one draft, computed once per evaluation
#[derive(Debug, Clone)]
pub struct RuleContext<'a> {
    /// Raw input, for length checks that count unnormalized characters
    pub input: &'a AnalysisInput,
    pub variant: Variant,
    pub title: String,
    pub meta_title: String,
    pub meta_description: String,
    pub body: String,
    /// First focus keyword term, `None` when blank
    pub keyword: Option<String>,
    pub word_count: usize,
}

impl<'a> RuleContext<'a> {
    pub fn new(input: &'a AnalysisInput, variant: Variant) -> Self {
        let body = normalize(&input.body_content);
        let word_count = word_count(&body);
        Self {
            input,
            variant,
            title: normalize(&input.title),
            meta_title: normalize(&input.meta_title),
            meta_description: normalize(&input.meta_description),
            body,
            keyword: focus_keyword(&input.focus_keyword),
            word_count,
        }
    }
}

/// Trait for all SEO rules
///
/// Rules are pure: the same context always yields the same result, and
/// evaluation cannot fail. A rule that needs the focus keyword is skipped
/// by the analyzer when none was given.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct SlugLengthRule;
///
/// impl Rule for SlugLengthRule {
///     fn name(&self) -> &'static str {
///         "slugLength"
///     }
///
///     fn description(&self) -> &'static str {
///         "Slug is short enough to read in a search result"
///     }
///
///     fn category(&self) -> RuleCategory {
///         RuleCategory::Length
///     }
///
///     fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult {
///         RuleResult::new(self.name(), self.category(), 10.0, "Slug length is good.")
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Stable identifier reported in `RuleResult::identifier`
    fn name(&self) -> &'static str;

    /// Human-readable description of what this rule checks
    fn description(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    /// Whether the rule is skipped when no focus keyword is set
    fn requires_keyword(&self) -> bool {
        false
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_normalizes_fields() {
        let input = AnalysisInput::new(
            "Flight  REFUND Guide",
            "<b>Refund</b> | Site",
            "Learn\nabout refunds",
            "<p>One two</p><p>three</p>",
            "Flight Refund, refunds",
        );
        let ctx = RuleContext::new(&input, Variant::Live);
        assert_eq!(ctx.title, "flight refund guide");
        assert_eq!(ctx.meta_title, "refund | site");
        assert_eq!(ctx.meta_description, "learn about refunds");
        assert_eq!(ctx.body, "one two three");
        assert_eq!(ctx.word_count, 3);
        assert_eq!(ctx.keyword.as_deref(), Some("flight refund"));
    }
}
