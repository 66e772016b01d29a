//! seoscope - rule-based SEO scoring for blog drafts
//!
//! Scores a draft's title, meta title, meta description, body and focus
//! keyword against a fixed rule set. Two variants share the rules:
//!
//! - **live**: the editor scorecard, averaged on a 0-10 scale
//! - **audit**: the published-post report, a 0-100 pass ratio
//!
//! ```
//! use seoscope::{evaluate, AnalysisInput, Variant};
//!
//! let draft = AnalysisInput::new(
//!     "Flight Refund Guide",
//!     "Flight Refund Guide | SkyFly Blog",
//!     "Learn about flight refund rules.",
//!     "<p>A flight refund can take time.</p>",
//!     "flight refund",
//! );
//! let report = evaluate(&draft, Variant::Live);
//! assert_eq!(report.results.len(), 7);
//! ```

pub mod analyzer;
pub mod config;
pub mod drafts;
pub mod models;
pub mod normalize;
pub mod reporters;
pub mod rules;
pub mod scoring;

pub use analyzer::{evaluate, SeoAnalyzer};
pub use models::{
    AnalysisInput, AnalysisReport, RuleCategory, RuleResult, RuleStatus, Variant,
};
pub use scoring::{ScoreBand, ScoreStrategy};
