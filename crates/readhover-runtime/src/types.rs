//! Runtime types.

use readhover_core::NoteHandle;
use readhover_extract::{text_fragment_url, HighlightMatch, MetadataRecord};
use serde::Serialize;

/// Result of a successful lookup, ready to be shown in a popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    /// Note the highlight was found in.
    pub note: NoteHandle,
    pub highlight: HighlightMatch,
    pub metadata: MetadataRecord,
}

impl LookupResult {
    pub fn basename(&self) -> &str {
        &self.note.basename
    }

    /// `[title](url)`, when both fields are known.
    pub fn markdown_link(&self) -> Option<String> {
        let (url, title) = self.metadata.complete()?;
        Some(format!("[{}]({})", title, url))
    }

    /// Original article URL scrolled to the highlight.
    pub fn highlight_url(&self) -> Option<String> {
        let (url, _) = self.metadata.complete()?;
        Some(text_fragment_url(url, &self.highlight.locator_fragment))
    }

    /// `[title](url#:~:text=...)`, when both fields are known.
    pub fn markdown_link_with_highlight(&self) -> Option<String> {
        let (_, title) = self.metadata.complete()?;
        Some(format!("[{}]({})", title, self.highlight_url()?))
    }

    /// Multi-line popup text.
    ///
    /// Links and source lines are only added when both url and title exist.
    pub fn popup_text(&self) -> String {
        let mut text = format!("From note: {}\n{}", self.basename(), self.highlight.snippet);
        if let (Some(link), Some(link_with_highlight), Some((url, title))) = (
            self.markdown_link(),
            self.markdown_link_with_highlight(),
            self.metadata.complete(),
        ) {
            text.push('\n');
            text.push_str(&link);
            text.push('\n');
            text.push_str(&link_with_highlight);
            text.push_str(&format!("\nFull Title: {}", title));
            text.push_str(&format!("\nOriginal article: {}", url));
        }
        text
    }
}

/// Modifier keys last seen while the pointer moved over the link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModifierKeys {
    pub alt: bool,
    /// Cmd on macOS, the Windows key elsewhere.
    pub meta: bool,
}

/// What ends up on the clipboard once the hover delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyChoice {
    /// Bare original article URL (alt held).
    ArticleUrl,
    /// Article URL with the text fragment (meta held).
    HighlightUrl,
    /// Markdown link to the article with the text fragment.
    MarkdownLink,
}

impl CopyChoice {
    /// Alt wins over meta.
    pub fn for_keys(keys: ModifierKeys) -> Self {
        if keys.alt {
            Self::ArticleUrl
        } else if keys.meta {
            Self::HighlightUrl
        } else {
            Self::MarkdownLink
        }
    }

    /// Notice shown after a successful copy.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::ArticleUrl => "Original article URL copied to clipboard!",
            Self::HighlightUrl => "URL with highlight fragment copied to clipboard!",
            Self::MarkdownLink => "Markdown URL with highlight copied to clipboard!",
        }
    }

    /// Clipboard text for `result`, if it has complete metadata.
    pub fn payload(&self, result: &LookupResult) -> Option<String> {
        match self {
            Self::ArticleUrl => result.metadata.complete().map(|(url, _)| url.to_string()),
            Self::HighlightUrl => result.highlight_url(),
            Self::MarkdownLink => result.markdown_link_with_highlight(),
        }
    }
}

/// Lifecycle of one hover over a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "choice")]
pub enum HoverState {
    /// Nothing pending.
    Idle,
    /// Copy armed, waiting for the delay; modifier keys being sampled.
    Hovering,
    /// Delay elapsed and the copy was attempted.
    Committed(CopyChoice),
    /// Pointer left before the delay elapsed.
    Cancelled,
}
