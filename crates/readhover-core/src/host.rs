//! Host collaborator traits.
//!
//! The note-taking host owns the note collection, the clipboard, on-screen
//! notices, and settings persistence. readhover only talks to it through
//! these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::Result;

/// Opaque handle to one note in the host collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteHandle {
    /// Host-specific identifier (a vault-relative path for file vaults).
    pub id: String,
    /// Display name of the note, without extension.
    pub basename: String,
}

impl NoteHandle {
    pub fn new(id: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            basename: basename.into(),
        }
    }
}

/// Enumerable, readable note collection.
#[async_trait]
pub trait NoteVault: Send + Sync {
    /// All notes that may hold highlights, in host order.
    fn notes(&self) -> Vec<NoteHandle>;

    /// Full text of one note. Never cached by callers.
    async fn read(&self, note: &NoteHandle) -> Result<String>;
}

/// System clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Transient on-screen notice.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Load/save pair for persisted settings.
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Settings>>;
    fn save(&self, settings: &Settings) -> Result<()>;
}
