//! Text normalization shared by every rule
//!
//! Tag stripping is a plain regex, not an HTML parser. A stray `<` is
//! treated as the start of a tag that runs to the next `>` (or the end of
//! the text). The rule thresholds were tuned against this output.

use regex::Regex;
use std::sync::OnceLock;

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>?").expect("valid regex"))
}

/// Replace every tag with a single space.
pub fn strip_tags(raw: &str) -> String {
    tag_pattern().replace_all(raw, " ").into_owned()
}

/// Lowercased plain text with whitespace collapsed and trimmed.
pub fn normalize(raw: &str) -> String {
    let stripped = strip_tags(raw).to_lowercase();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-delimited words after normalization.
pub fn word_count(text: &str) -> usize {
    strip_tags(text).split_whitespace().count()
}

/// First comma-separated term of a focus keyword field, normalized.
///
/// Returns `None` when that term is blank.
pub fn focus_keyword(raw: &str) -> Option<String> {
    let first = raw.split(',').next().unwrap_or("");
    let keyword = normalize(first);
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

/// URL slug as the CMS derives it from a title.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = false;
    for c in text.trim().to_lowercase().chars() {
        let mapped = if c.is_whitespace() || c == '-' {
            Some('-')
        } else if c.is_alphanumeric() || c == '_' {
            Some(c)
        } else {
            None
        };
        match mapped {
            Some('-') => {
                if !last_dash {
                    slug.push('-');
                }
                last_dash = true;
            }
            Some(c) => {
                slug.push(c);
                last_dash = false;
            }
            None => {}
        }
    }
    slug
}
