//! Core data models for seoscope
//!
//! These models are shared by the rule evaluator, the score aggregator
//! and the reporters. Everything here is plain data: a report is built
//! fresh for every evaluation and never stored.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::scoring::{ScoreBand, ScoreStrategy};

/// Treat `null` the same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The SEO-relevant fields of one blog draft.
///
/// Field names follow the CMS (`metaTitle`, `metaDesc`, `content`,
/// `focusKeyword`); snake_case spellings are accepted as aliases so the
/// same struct reads hand-written TOML drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default, alias = "meta_title", deserialize_with = "null_as_empty")]
    pub meta_title: String,

    #[serde(
        default,
        alias = "metaDesc",
        alias = "meta_description",
        alias = "meta_desc",
        deserialize_with = "null_as_empty"
    )]
    pub meta_description: String,

    /// Rich text body, usually HTML from the editor
    #[serde(
        default,
        alias = "content",
        alias = "body_content",
        deserialize_with = "null_as_empty"
    )]
    pub body_content: String,

    /// Comma-separated; only the first term is analyzed
    #[serde(default, alias = "focus_keyword", deserialize_with = "null_as_empty")]
    pub focus_keyword: String,

    /// Only used to label reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl AnalysisInput {
    pub fn new(
        title: impl Into<String>,
        meta_title: impl Into<String>,
        meta_description: impl Into<String>,
        body_content: impl Into<String>,
        focus_keyword: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            meta_title: meta_title.into(),
            meta_description: meta_description.into(),
            body_content: body_content.into(),
            focus_keyword: focus_keyword.into(),
            slug: None,
        }
    }

    /// Label for reports: explicit slug, else one derived from the title.
    pub fn label(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => crate::normalize::slugify(&self.title),
        }
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    Bad,
    Ok,
    Good,
}

impl RuleStatus {
    /// Status is always derived from the 0-10 rule score.
    pub fn from_score(score: f64) -> Self {
        if score > 7.0 {
            RuleStatus::Good
        } else if score > 4.0 {
            RuleStatus::Ok
        } else {
            RuleStatus::Bad
        }
    }
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleStatus::Good => write!(f, "good"),
            RuleStatus::Ok => write!(f, "ok"),
            RuleStatus::Bad => write!(f, "bad"),
        }
    }
}

/// What part of the draft a rule looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Focus keyword consistency
    Keyword,
    /// Technical lengths (word count, tag lengths)
    Length,
}

/// One rule's verdict on a draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Stable rule name, e.g. `keywordInTitle`
    pub identifier: String,
    pub category: RuleCategory,
    /// 0 to 10
    pub score: f64,
    pub status: RuleStatus,
    pub message: String,
    /// Measured value for display ("42 chars", "Found")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl RuleResult {
    pub fn new(
        identifier: impl Into<String>,
        category: RuleCategory,
        score: f64,
        message: impl Into<String>,
    ) -> Self {
        let score = score.clamp(0.0, 10.0);
        Self {
            identifier: identifier.into(),
            category,
            score,
            status: RuleStatus::from_score(score),
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Which call site is asking for the evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Scorecard recomputed on every edit, averaged on a 0-10 scale
    #[default]
    Live,
    /// One-off report against published content, 0-100 pass ratio
    Audit,
}

impl Variant {
    pub fn strategy(&self) -> ScoreStrategy {
        match self {
            Variant::Live => ScoreStrategy::Average,
            Variant::Audit => ScoreStrategy::PassRatio,
        }
    }

    /// An empty meta title falls back to the page title in the editor,
    /// so the live scorecard only warns about it.
    pub fn tolerates_missing_meta_title(&self) -> bool {
        matches!(self, Variant::Live)
    }
}

impl FromStr for Variant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" | "scorecard" => Ok(Variant::Live),
            "audit" | "report" => Ok(Variant::Audit),
            _ => Err(anyhow::anyhow!(
                "Unknown variant '{}'. Valid variants: live, audit",
                s
            )),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Live => write!(f, "live"),
            Variant::Audit => write!(f, "audit"),
        }
    }
}

/// Aggregate result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub label: String,
    pub variant: Variant,
    /// 0-10 (live) or 0-100 (audit)
    pub overall_score: f64,
    pub band: ScoreBand,
    /// No focus keyword was given; keyword rules were skipped
    pub awaiting_keyword: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_keyword: Option<String>,
    pub word_count: usize,
    pub results: Vec<RuleResult>,
}

impl AnalysisReport {
    /// Top of the score scale for this report's variant
    pub fn scale_max(&self) -> f64 {
        self.variant.strategy().scale_max()
    }

    pub fn count_status(&self, status: RuleStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    pub fn result(&self, identifier: &str) -> Option<&RuleResult> {
        self.results.iter().find(|r| r.identifier == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_score() {
        assert_eq!(RuleStatus::from_score(10.0), RuleStatus::Good);
        assert_eq!(RuleStatus::from_score(7.5), RuleStatus::Good);
        assert_eq!(RuleStatus::from_score(7.0), RuleStatus::Ok);
        assert_eq!(RuleStatus::from_score(6.0), RuleStatus::Ok);
        assert_eq!(RuleStatus::from_score(5.0), RuleStatus::Ok);
        assert_eq!(RuleStatus::from_score(4.0), RuleStatus::Bad);
        assert_eq!(RuleStatus::from_score(3.0), RuleStatus::Bad);
        assert_eq!(RuleStatus::from_score(0.0), RuleStatus::Bad);
    }

    #[test]
    fn test_rule_result_clamps_score() {
        let r = RuleResult::new("x", RuleCategory::Length, 42.0, "m");
        assert_eq!(r.score, 10.0);
        assert_eq!(r.status, RuleStatus::Good);
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!("live".parse::<Variant>().unwrap(), Variant::Live);
        assert_eq!("AUDIT".parse::<Variant>().unwrap(), Variant::Audit);
        assert!("weekly".parse::<Variant>().is_err());
    }

    #[test]
    fn test_input_accepts_cms_field_names() {
        let json = r#"{
            "title": "Flight Refund Guide",
            "metaTitle": "Refunds",
            "metaDesc": "How refunds work",
            "content": "<p>Body</p>",
            "focusKeyword": null
        }"#;
        let input: AnalysisInput = serde_json::from_str(json).expect("parse draft");
        assert_eq!(input.meta_title, "Refunds");
        assert_eq!(input.meta_description, "How refunds work");
        assert_eq!(input.body_content, "<p>Body</p>");
        assert_eq!(input.focus_keyword, "");
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: AnalysisInput = serde_json::from_str("{}").expect("parse empty draft");
        assert_eq!(input, AnalysisInput::default());
    }

    #[test]
    fn test_label_prefers_slug() {
        let mut input = AnalysisInput::new("Flight Refund Guide", "", "", "", "");
        assert_eq!(input.label(), "flight-refund-guide");
        input.slug = Some("refunds".into());
        assert_eq!(input.label(), "refunds");
    }
}
