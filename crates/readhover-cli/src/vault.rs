//! Filesystem vault: a directory tree of markdown notes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use readhover_core::{Error, NoteHandle, NoteVault, Result};
use readhover_extract::file::{is_hidden, is_markdown, note_basename};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

pub struct FsVault {
    root: PathBuf,
    notes: Vec<NoteHandle>,
}

impl FsVault {
    /// Enumerate every markdown note under `root`, sorted by path.
    ///
    /// Symlinks are not followed and dot-directories are skipped.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(Error::NotFound(format!("vault directory {}", root.display())));
        }

        let mut paths = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden_entry(e));
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() && is_markdown(entry.path()) {
                        paths.push(entry.into_path());
                    }
                }
                Err(e) => warn!("Skipping vault entry: {}", e),
            }
        }
        paths.sort();

        let notes: Vec<NoteHandle> = paths
            .iter()
            .filter_map(|path| {
                let rel = path.strip_prefix(&root).ok()?;
                Some(NoteHandle::new(
                    rel.to_string_lossy().replace('\\', "/"),
                    note_basename(path),
                ))
            })
            .collect();

        debug!("Vault {} has {} notes", root.display(), notes.len());
        Ok(Self { root, notes })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_hidden_entry(entry: &DirEntry) -> bool {
    is_hidden(&entry.file_name().to_string_lossy())
}

#[async_trait]
impl NoteVault for FsVault {
    fn notes(&self) -> Vec<NoteHandle> {
        self.notes.clone()
    }

    async fn read(&self, note: &NoteHandle) -> Result<String> {
        Ok(tokio::fs::read_to_string(self.root.join(&note.id)).await?)
    }
}
