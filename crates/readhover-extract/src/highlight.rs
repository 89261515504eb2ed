//! Highlight bullet location and cleanup.
//!
//! Each Readwise highlight is exported as one bullet line that ends with a
//! `([View Highlight](https://read.readwise.io/...))` back-link. Given the
//! hovered link, we find that bullet and turn it back into readable text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::fragment::locator_fragment;

/// Default number of highlight characters kept in a snippet.
pub const SNIPPET_CHARS: usize = 200;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s*").expect("valid regex"));
static VIEW_HIGHLIGHT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\[View Highlight\]\([^)]*\)\).*").expect("valid regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").expect("valid regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// A highlight bullet that mentions the target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMatch {
    /// The matched line, trimmed.
    pub raw_line: String,
    /// Readable highlight text with links and tags removed.
    pub highlight: String,
    /// Leading part of the highlight followed by `...`.
    pub snippet: String,
    /// Encoded payload for a `#:~:text=` selector.
    pub locator_fragment: String,
}

/// Find the first `- ` bullet containing `url` and clean it up.
pub fn find_bullet_containing(text: &str, url: &str) -> Option<HighlightMatch> {
    find_bullet_with_snippet_len(text, url, SNIPPET_CHARS)
}

/// Like [`find_bullet_containing`], with a custom snippet length.
pub fn find_bullet_with_snippet_len(
    text: &str,
    url: &str,
    snippet_chars: usize,
) -> Option<HighlightMatch> {
    let raw_line = text
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with("- ") && line.contains(url))?;

    let highlight = clean_highlight(raw_line);
    Some(HighlightMatch {
        raw_line: raw_line.to_string(),
        snippet: snippet(&highlight, snippet_chars),
        locator_fragment: locator_fragment(&highlight),
        highlight,
    })
}

/// Strip the bullet marker, the View Highlight back-link and everything after
/// it, markdown link targets, and HTML-ish tags.
pub fn clean_highlight(line: &str) -> String {
    let text = BULLET_RE.replace(line, "");
    let text = VIEW_HIGHLIGHT_RE.replace(&text, "");
    let text = MARKDOWN_LINK_RE.replace_all(&text, "$1");
    TAG_RE.replace_all(&text, "").into_owned()
}

/// First `max_chars` characters of `highlight` plus `...`.
///
/// The ellipsis is appended even when nothing was cut.
pub fn snippet(highlight: &str, max_chars: usize) -> String {
    let mut out: String = highlight.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://read.readwise.io/read/01abc";

    fn note_with(line: &str) -> String {
        format!(
            "# Article\n\n## Metadata\n- URL: https://example.com/post\n\n## Highlights\n{}\n",
            line
        )
    }

    #[test]
    fn test_strips_view_highlight_and_trailing() {
        let text = note_with(&format!(
            "- Rust makes this easy. ([View Highlight]({})) - Note: keep",
            URL
        ));
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(m.highlight, "Rust makes this easy. ");
        assert_eq!(m.snippet, "Rust makes this easy. ...");
        assert_eq!(
            m.raw_line,
            format!("- Rust makes this easy. ([View Highlight]({})) - Note: keep", URL)
        );
    }

    #[test]
    fn test_links_and_tags_cleanup() {
        // No surrounding parentheses, so the back-link is kept as its label.
        let line = "- Check this [View Highlight](https://readwise.io/x) out <b>now</b> [Link](http://foo)";
        let m = find_bullet_containing(line, "https://readwise.io/x").unwrap();
        assert_eq!(m.highlight, "Check this View Highlight out now Link");
    }

    #[test]
    fn test_parenthesized_back_link_removes_rest_of_line() {
        let line = "- Check this ([View Highlight](https://readwise.io/x)) out <b>now</b> [Link](http://foo)";
        let m = find_bullet_containing(line, "https://readwise.io/x").unwrap();
        assert_eq!(m.highlight, "Check this ");
    }

    #[test]
    fn test_every_markdown_link_keeps_label() {
        assert_eq!(
            clean_highlight("- see [a](http://a) and [b](http://b)"),
            "see a and b"
        );
    }

    #[test]
    fn test_first_match_wins() {
        let text = format!(
            "- first <i>hit</i> ([View Highlight]({url}))\n- second hit ([View Highlight]({url}))",
            url = URL
        );
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(m.highlight, "first hit ");
    }

    #[test]
    fn test_requires_dash_bullet() {
        let text = format!("* starred ([View Highlight]({url}))\n{url}\n-nospace {url}", url = URL);
        assert!(find_bullet_containing(&text, URL).is_none());
    }

    #[test]
    fn test_indented_bullet_matches() {
        let text = format!("    - nested quote ([View Highlight]({}))", URL);
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(m.highlight, "nested quote ");
    }

    #[test]
    fn test_url_match_is_case_sensitive() {
        let text = format!("- quote ([View Highlight]({}))", URL.to_uppercase());
        assert!(find_bullet_containing(&text, URL).is_none());
    }

    #[test]
    fn test_no_match() {
        assert!(find_bullet_containing("nothing here", URL).is_none());
    }

    #[test]
    fn test_snippet_truncates_to_200_chars() {
        let long = "x".repeat(250);
        let text = format!("- {} ([View Highlight]({}))", long, URL);
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(m.snippet.chars().count(), 203);
        assert!(m.snippet.ends_with("x..."));
    }

    #[test]
    fn test_snippet_always_has_ellipsis() {
        assert_eq!(snippet("short", SNIPPET_CHARS), "short...");
        assert_eq!(snippet("", SNIPPET_CHARS), "...");
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        assert_eq!(snippet("ééé", 2), "éé...");
    }

    #[test]
    fn test_custom_snippet_len() {
        let text = format!("- abcdef ([View Highlight]({}))", URL);
        let m = find_bullet_with_snippet_len(&text, URL, 3).unwrap();
        assert_eq!(m.snippet, "abc...");
    }

    #[test]
    fn test_fragment_for_long_highlight() {
        let text = format!(
            "- one two three four five six seven eight nine ten eleven ([View Highlight]({}))",
            URL
        );
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(
            m.locator_fragment,
            "one%20two%20three%20four%20five,seven%20eight%20nine%20ten%20eleven"
        );
    }

    #[test]
    fn test_fragment_for_short_highlight_keeps_trailing_space() {
        let text = format!("- short quote ([View Highlight]({}))", URL);
        let m = find_bullet_containing(&text, URL).unwrap();
        assert_eq!(m.locator_fragment, "short%20quote%20");
    }

    #[test]
    fn test_idempotent() {
        let text = note_with(&format!("- q ([View Highlight]({}))", URL));
        assert_eq!(
            find_bullet_containing(&text, URL),
            find_bullet_containing(&text, URL)
        );
    }
}
