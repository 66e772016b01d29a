//! Loading drafts from disk
//!
//! A draft file holds one post or many, as JSON or TOML:
//!
//! ```json
//! [{ "title": "...", "metaTitle": "...", "metaDesc": "...", "content": "<p>...</p>", "focusKeyword": "..." }]
//! ```
//!
//! ```toml
//! [[posts]]
//! title = "..."
//! meta_title = "..."
//! ```

use crate::models::AnalysisInput;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading drafts
#[derive(Error, Debug)]
pub enum DraftError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON draft: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML draft: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported draft format '{0}'. Use .json or .toml")]
    UnsupportedFormat(String),

    #[error("No drafts found in {0}")]
    Empty(PathBuf),
}

pub type DraftResult<T> = Result<T, DraftError>;

/// Key holding an array of drafts in a batch file
const BATCH_KEY: &str = "posts";

fn json_drafts(value: serde_json::Value) -> DraftResult<Vec<AnalysisInput>> {
    let drafts: Vec<AnalysisInput> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        serde_json::Value::Object(mut map) if map.contains_key(BATCH_KEY) => {
            let posts = map.remove(BATCH_KEY).unwrap_or_default();
            serde_json::from_value(posts)?
        }
        other => vec![serde_json::from_value(other)?],
    };
    Ok(drafts)
}

fn toml_drafts(mut table: toml::Table) -> DraftResult<Vec<AnalysisInput>> {
    let drafts: Vec<AnalysisInput> = match table.remove(BATCH_KEY) {
        Some(posts) => posts.try_into()?,
        None => vec![toml::Value::Table(table).try_into::<AnalysisInput>()?],
    };
    Ok(drafts)
}

/// Draft file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftFormat {
    Json,
    Toml,
}

impl DraftFormat {
    pub fn from_path(path: &Path) -> DraftResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(DraftFormat::Json),
            "toml" => Ok(DraftFormat::Toml),
            other => Err(DraftError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse drafts from a string
pub fn parse_drafts(content: &str, format: DraftFormat) -> DraftResult<Vec<AnalysisInput>> {
    // Pick the shape first so a bad field surfaces as an error instead of
    // matching a looser shape
    match format {
        DraftFormat::Json => json_drafts(serde_json::from_str(content)?),
        DraftFormat::Toml => toml_drafts(toml::from_str(content)?),
    }
}

/// Load every draft in a file
pub fn load_drafts(path: &Path) -> DraftResult<Vec<AnalysisInput>> {
    let format = DraftFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| DraftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let drafts = parse_drafts(&content, format)?;
    if drafts.is_empty() {
        return Err(DraftError::Empty(path.to_path_buf()));
    }
    debug!("Loaded {} draft(s) from {}", drafts.len(), path.display());
    Ok(drafts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_json_object() {
        let drafts = parse_drafts(
            r#"{"title": "Lost Luggage", "metaDesc": "What to do", "focusKeyword": "luggage"}"#,
            DraftFormat::Json,
        )
        .expect("parse draft");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Lost Luggage");
        assert_eq!(drafts[0].meta_description, "What to do");
    }

    #[test]
    fn test_json_array() {
        let drafts = parse_drafts(r#"[{"title": "A"}, {"title": "B"}]"#, DraftFormat::Json)
            .expect("parse drafts");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[1].title, "B");
    }

    #[test]
    fn test_toml_posts() {
        let toml = r#"
[[posts]]
title = "Check In Online"
meta_title = "Check In Online | Guide"
content = "<p>Body</p>"
focus_keyword = "check in"

[[posts]]
title = "Airport Lounges"
"#;
        let drafts = parse_drafts(toml, DraftFormat::Toml).expect("parse drafts");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].meta_title, "Check In Online | Guide");
        assert_eq!(drafts[0].body_content, "<p>Body</p>");
        assert_eq!(drafts[0].focus_keyword, "check in");
    }

    #[test]
    fn test_toml_single() {
        let drafts =
            parse_drafts("title = \"Vouchers\"\n", DraftFormat::Toml).expect("parse draft");
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Vouchers");
    }

    #[test]
    fn test_json_batch_object() {
        let drafts = parse_drafts(
            r#"{"posts": [{"title": "A"}, {"title": "B"}]}"#,
            DraftFormat::Json,
        )
        .expect("parse drafts");
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].title, "A");
    }

    #[test]
    fn test_bad_field_in_json_batch_is_an_error() {
        let err = parse_drafts(
            r#"{"posts": [{"title": 5}, {"title": "B"}]}"#,
            DraftFormat::Json,
        )
        .unwrap_err();
        assert!(matches!(err, DraftError::Json(_)));

        let err = parse_drafts(r#"[{"title": "A"}, {"metaDesc": []}]"#, DraftFormat::Json)
            .unwrap_err();
        assert!(matches!(err, DraftError::Json(_)));
    }

    #[test]
    fn test_bad_field_in_toml_batch_is_an_error() {
        let err = parse_drafts("[[posts]]\ntitle = 3\n", DraftFormat::Toml).unwrap_err();
        assert!(matches!(err, DraftError::Toml(_)));

        let err = parse_drafts("posts = \"not a list\"\n", DraftFormat::Toml).unwrap_err();
        assert!(matches!(err, DraftError::Toml(_)));
    }

    #[test]
    fn test_bad_field_in_single_draft_is_an_error() {
        let err = parse_drafts("title = 3\n", DraftFormat::Toml).unwrap_err();
        assert!(matches!(err, DraftError::Toml(_)));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DraftFormat::from_path(Path::new("post.yaml")).unwrap_err();
        assert!(matches!(err, DraftError::UnsupportedFormat(ext) if ext == "yaml"));
    }

    #[test]
    fn test_empty_array_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("drafts.json");
        std::fs::write(&path, "[]").expect("write drafts");
        assert!(matches!(load_drafts(&path), Err(DraftError::Empty(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_drafts(Path::new("/nonexistent/post.json")).unwrap_err();
        assert!(matches!(err, DraftError::Io { .. }));
    }
}
