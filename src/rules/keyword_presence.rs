//! Focus keyword presence rules
//!
//! One rule per field: the normalized focus keyword must appear as a
//! substring of the normalized title, meta title, meta description and
//! body. Present scores 10 (good), absent scores 0 (bad).

use crate::models::{RuleCategory, RuleResult, Variant};
use crate::rules::base::{Rule, RuleContext};

/// Where to look for the keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordField {
    Title,
    MetaTitle,
    MetaDescription,
    Content,
}

impl KeywordField {
    pub const ALL: [KeywordField; 4] = [
        KeywordField::Title,
        KeywordField::MetaTitle,
        KeywordField::MetaDescription,
        KeywordField::Content,
    ];

    fn text<'c>(&self, ctx: &'c RuleContext<'_>) -> &'c str {
        match self {
            KeywordField::Title => &ctx.title,
            KeywordField::MetaTitle => &ctx.meta_title,
            KeywordField::MetaDescription => &ctx.meta_description,
            KeywordField::Content => &ctx.body,
        }
    }

    /// (found, missing) messages
    fn messages(&self, variant: Variant) -> (&'static str, &'static str) {
        match (self, variant) {
            (KeywordField::Title, Variant::Live) => (
                "Focus keyword found in Blog Title.",
                "Focus keyword missing from Blog Title.",
            ),
            (KeywordField::MetaTitle, Variant::Live) => (
                "Focus keyword found in Meta Title.",
                "Focus keyword missing from Meta Title.",
            ),
            (KeywordField::MetaDescription, Variant::Live) => (
                "Focus keyword found in Meta Description.",
                "Focus keyword missing from Meta Description.",
            ),
            (KeywordField::Content, Variant::Live) => (
                "Focus keyword found in content body.",
                "Focus keyword missing from content.",
            ),
            (KeywordField::Title, Variant::Audit) => (
                "Keyword found in main title.",
                "Add focus keyword to the main title.",
            ),
            (KeywordField::MetaTitle, Variant::Audit) => (
                "Keyword found in meta title.",
                "Add focus keyword to the meta title.",
            ),
            (KeywordField::MetaDescription, Variant::Audit) => (
                "Keyword found in meta description.",
                "Add focus keyword to the meta description.",
            ),
            (KeywordField::Content, Variant::Audit) => (
                "Keyword found in body content.",
                "Mention the keyword in the blog content.",
            ),
        }
    }
}

pub struct KeywordPresenceRule {
    field: KeywordField,
}

impl KeywordPresenceRule {
    pub fn new(field: KeywordField) -> Self {
        Self { field }
    }
}

impl Rule for KeywordPresenceRule {
    fn name(&self) -> &'static str {
        match self.field {
            KeywordField::Title => "keywordInTitle",
            KeywordField::MetaTitle => "keywordInMetaTitle",
            KeywordField::MetaDescription => "keywordInMetaDescription",
            KeywordField::Content => "keywordInContent",
        }
    }

    fn description(&self) -> &'static str {
        match self.field {
            KeywordField::Title => "Focus keyword appears in the blog title",
            KeywordField::MetaTitle => "Focus keyword appears in the meta title",
            KeywordField::MetaDescription => "Focus keyword appears in the meta description",
            KeywordField::Content => "Focus keyword appears in the body",
        }
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Keyword
    }

    fn requires_keyword(&self) -> bool {
        true
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> RuleResult {
        let (found_msg, missing_msg) = self.field.messages(ctx.variant);
        let found = ctx
            .keyword
            .as_deref()
            .is_some_and(|kw| self.field.text(ctx).contains(kw));

        let (score, message, value) = if found {
            (10.0, found_msg, "Found")
        } else {
            (0.0, missing_msg, "Missing")
        };
        RuleResult::new(self.name(), self.category(), score, message).with_value(value)
    }
}
