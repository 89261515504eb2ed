//! Note scanner: finds the note holding a hovered highlight link.

use readhover_core::NoteVault;
use readhover_extract::highlight::{find_bullet_with_snippet_len, SNIPPET_CHARS};
use readhover_extract::extract_metadata;
use tracing::{debug, info, warn};

use crate::types::LookupResult;

/// Walks a vault note by note until one holds a highlight for the target URL.
pub struct NoteScanner<'a> {
    vault: &'a dyn NoteVault,
    snippet_chars: usize,
}

impl<'a> NoteScanner<'a> {
    pub fn new(vault: &'a dyn NoteVault) -> Self {
        Self {
            vault,
            snippet_chars: SNIPPET_CHARS,
        }
    }

    pub fn with_snippet_chars(mut self, snippet_chars: usize) -> Self {
        self.snippet_chars = snippet_chars;
        self
    }

    /// Find the first note with a `- ` bullet containing `target_url`.
    ///
    /// Notes are read one at a time in vault order. Unreadable notes are
    /// skipped. Returns `None` when no note matches.
    pub async fn locate(&self, target_url: &str) -> Option<LookupResult> {
        debug!("Searching for highlight with URL: {}", target_url);

        for note in self.vault.notes() {
            let text = match self.vault.read(&note).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping unreadable note {}: {}", note.id, e);
                    continue;
                }
            };
            if !text.contains(target_url) {
                continue;
            }

            let Some(highlight) =
                find_bullet_with_snippet_len(&text, target_url, self.snippet_chars)
            else {
                debug!("{} mentions the URL outside a highlight bullet", note.id);
                continue;
            };
            let metadata = extract_metadata(&text);

            info!(
                "Found highlight in {} (title={:?}, url={:?})",
                note.basename, metadata.title, metadata.url
            );
            debug!("Highlight: {}", highlight.highlight);

            return Some(LookupResult {
                note,
                highlight,
                metadata,
            });
        }

        debug!("No highlight found for {}", target_url);
        None
    }
}

/// Scan `vault` with default snippet length.
pub async fn locate_highlight(vault: &dyn NoteVault, target_url: &str) -> Option<LookupResult> {
    NoteScanner::new(vault).locate(target_url).await
}
