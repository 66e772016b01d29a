//! JSON reporter
//!
//! One report renders as an object, several as an array.

use crate::models::AnalysisReport;
use anyhow::Result;

/// Render reports as pretty-printed JSON
pub fn render(reports: &[AnalysisReport]) -> Result<String> {
    match reports {
        [single] => Ok(serde_json::to_string_pretty(single)?),
        many => Ok(serde_json::to_string_pretty(many)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::{awaiting_report, test_reports};

    #[test]
    fn test_json_single_is_object() {
        let reports = test_reports();
        let json_str = render(&reports[..1]).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["variant"], "live");
        assert_eq!(parsed["label"], "flight-refund-guide");
        assert_eq!(parsed["results"][0]["identifier"], "wordCount");
        assert_eq!(parsed["results"][0]["status"], "bad");
    }

    #[test]
    fn test_json_many_is_array() {
        let reports = test_reports();
        let json_str = render(&reports).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        let arr = parsed.as_array().expect("array");
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1]["variant"], "audit");
        assert_eq!(arr[1]["overall_score"], 71.0);
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = awaiting_report();
        let json_str = render(std::slice::from_ref(&report)).expect("render JSON");
        let back: AnalysisReport = serde_json::from_str(&json_str).expect("parse report");
        assert_eq!(back, report);
        assert!(back.awaiting_keyword);
    }
}
