//! Note file detection.

use std::path::Path;

/// Whether `path` names a markdown note, the only format highlight imports use.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| matches!(ext.to_lowercase().as_str(), "md" | "markdown"))
        .unwrap_or(false)
}

/// Display name of a note file: its file stem.
pub fn note_basename(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

/// Whether a directory entry name should be skipped while walking a vault.
///
/// Dot-directories hold host or tool state (`.obsidian`, `.readhover`, `.git`).
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
