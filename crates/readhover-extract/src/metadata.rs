//! Metadata section parsing.
//!
//! Readwise exports put the source article's details under a `## Metadata`
//! heading:
//!
//! ```text
//! ## Metadata
//! - Author: Someone
//! - Full Title: Example Title
//! - URL: https://example.com/post
//! ```
//!
//! Only the first such section is read, and it ends at the next heading.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const METADATA_HEADING: &str = "## metadata";

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#+ ").expect("valid regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-*]\s*url:\s*(\S+)").expect("valid regex"));
static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[-*]\s*full title:\s*(.+)$").expect("valid regex"));

/// Source article fields found in a note. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl MetadataRecord {
    /// Both url and title, when both were found.
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (&self.url, &self.title) {
            (Some(url), Some(title)) => Some((url.as_str(), title.as_str())),
            _ => None,
        }
    }
}

/// Extract `url` and `full title` from the first `## Metadata` section.
pub fn extract_metadata(text: &str) -> MetadataRecord {
    let mut record = MetadataRecord::default();
    let mut in_section = false;

    for line in text.lines() {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();

        if !in_section {
            if lowered == METADATA_HEADING {
                in_section = true;
            }
            continue;
        }

        if HEADING_RE.is_match(trimmed) && lowered != METADATA_HEADING {
            break;
        }

        if record.url.is_none() {
            if let Some(caps) = URL_RE.captures(trimmed) {
                record.url = Some(caps[1].to_string());
            }
        }
        if record.title.is_none() {
            if let Some(caps) = TITLE_RE.captures(trimmed) {
                record.title = Some(caps[1].trim().to_string());
            }
        }

        if record.url.is_some() && record.title.is_some() {
            break;
        }
    }

    record
}
