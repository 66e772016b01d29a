//! SEO rules
//!
//! Every rule maps the normalized fields of a draft to a `RuleResult`.
//! Which rules run, and in which order, depends on the variant:
//!
//! ```text
//! live:  wordCount, keywordIn{Title,MetaTitle,MetaDescription,Content},
//!        metaTitleLength, metaDescriptionLength
//! audit: keywordIn{Title,MetaTitle,MetaDescription,Content},
//!        metaTitleLength, metaDescriptionLength, wordCount
//! ```
//!
//! Rules switched off in `seoscope.toml` are dropped from the list.

mod base;
mod keyword_presence;
mod meta_length;
mod word_count;

pub use base::{Rule, RuleContext};
pub use keyword_presence::{KeywordField, KeywordPresenceRule};
pub use meta_length::{
    MetaDescriptionLengthRule, MetaDescriptionThresholds, MetaTitleLengthRule,
    MetaTitleThresholds,
};
pub use word_count::{WordCountRule, WordCountThresholds};

use crate::config::ProjectConfig;
use crate::models::Variant;
use tracing::debug;

fn keyword_rules() -> impl Iterator<Item = Box<dyn Rule>> {
    KeywordField::ALL
        .into_iter()
        .map(|field| Box::new(KeywordPresenceRule::new(field)) as Box<dyn Rule>)
}

/// Ordered rule list for a variant, minus rules disabled in config
pub fn rules_for_variant(variant: Variant, config: &ProjectConfig) -> Vec<Box<dyn Rule>> {
    let word_count: Box<dyn Rule> = Box::new(WordCountRule::with_config(config));
    let lengths: [Box<dyn Rule>; 2] = [
        Box::new(MetaTitleLengthRule::with_config(config)),
        Box::new(MetaDescriptionLengthRule::with_config(config)),
    ];

    let ordered: Vec<Box<dyn Rule>> = match variant {
        Variant::Live => std::iter::once(word_count)
            .chain(keyword_rules())
            .chain(lengths)
            .collect(),
        Variant::Audit => keyword_rules()
            .chain(lengths)
            .chain(std::iter::once(word_count))
            .collect(),
    };

    let rules: Vec<Box<dyn Rule>> = ordered
        .into_iter()
        .filter(|rule| {
            let enabled = config.is_rule_enabled(rule.name());
            if !enabled {
                debug!("Rule {} disabled by config", rule.name());
            }
            enabled
        })
        .collect();

    debug!("{} rules active for {} variant", rules.len(), variant);
    rules
}
