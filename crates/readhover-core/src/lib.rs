//! readhover core: errors, settings, and the host collaborator seams.

pub mod config;
pub mod error;
pub mod host;

pub use config::{JsonSettingsFile, Settings};
pub use error::{Error, Result};
pub use host::{Clipboard, NoteHandle, NoteVault, Notifier, SettingsStore};
