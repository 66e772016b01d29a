//! Aggregation strategies and score bands

use crate::models::{RuleResult, RuleStatus};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How rule results fold into the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStrategy {
    /// Mean of the 0-10 rule scores
    Average,
    /// Percentage of rules with `good` status
    PassRatio,
}

impl ScoreStrategy {
    pub fn aggregate(&self, results: &[RuleResult]) -> f64 {
        if results.is_empty() {
            return 0.0;
        }
        let total = results.len() as f64;
        let score = match self {
            ScoreStrategy::Average => {
                let sum: f64 = results.iter().map(|r| r.score).sum();
                round_to_tenth(sum / total)
            }
            ScoreStrategy::PassRatio => {
                let passed = results
                    .iter()
                    .filter(|r| r.status == RuleStatus::Good)
                    .count() as f64;
                (100.0 * passed / total).round()
            }
        };
        debug!("{:?} over {} rules -> {}", self, results.len(), score);
        score
    }

    pub fn scale_max(&self) -> f64 {
        match self {
            ScoreStrategy::Average => 10.0,
            ScoreStrategy::PassRatio => 100.0,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Coarse bucket for colouring an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Weak,
    Fair,
    Strong,
}

impl ScoreBand {
    pub fn for_score(strategy: ScoreStrategy, score: f64) -> Self {
        let ratio = score / strategy.scale_max();
        if ratio >= 0.8 {
            ScoreBand::Strong
        } else if ratio >= 0.5 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreBand::Strong => write!(f, "strong"),
            ScoreBand::Fair => write!(f, "fair"),
            ScoreBand::Weak => write!(f, "weak"),
        }
    }
}
