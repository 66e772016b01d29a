//! Score aggregation
//!
//! Two strategies reduce a list of rule results to one number. Every rule
//! contributes equally; there is no weighting between rules.
//!
//! # Strategies
//!
//! ```text
//! Average   (live):  overall = mean(rule.score)              0.0 - 10.0, one decimal
//! PassRatio (audit): overall = round(100 * good / total)     0 - 100
//! ```
//!
//! # Bands
//!
//! | Band   | Average | PassRatio |
//! |--------|---------|-----------|
//! | strong | >= 8    | >= 80     |
//! | fair   | >= 5    | >= 50     |
//! | weak   | below   | below     |

mod aggregate;

pub use aggregate::{ScoreBand, ScoreStrategy};
