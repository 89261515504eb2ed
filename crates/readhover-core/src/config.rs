//! Settings and their JSON persistence.

use std::path::{Path, PathBuf};

use readhover_extract::highlight::SNIPPET_CHARS;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::host::SettingsStore;

/// Directory inside a vault where readhover keeps its own files.
pub const STATE_DIR: &str = ".readhover";

/// User-facing settings for hover lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Only links whose href contains this string trigger a lookup.
    #[serde(default = "default_trigger_host")]
    pub trigger_host: String,
    /// Delay between hover and clipboard write, in milliseconds.
    #[serde(default = "default_copy_delay_ms")]
    pub copy_delay_ms: u64,
    /// Number of highlight characters kept in the popup snippet.
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,
}

fn default_trigger_host() -> String {
    "readwise.io".into()
}
fn default_copy_delay_ms() -> u64 {
    500
}
fn default_snippet_chars() -> usize {
    SNIPPET_CHARS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trigger_host: default_trigger_host(),
            copy_delay_ms: default_copy_delay_ms(),
            snippet_chars: default_snippet_chars(),
        }
    }
}

impl Settings {
    /// Load persisted settings through `store`, falling back to defaults.
    ///
    /// Missing fields in the persisted form take their default values.
    pub fn load_from(store: &dyn SettingsStore) -> Result<Self> {
        Ok(store.load()?.unwrap_or_default())
    }

    /// Whether a hovered link should start a lookup.
    ///
    /// A blank trigger host matches nothing.
    pub fn is_trigger_link(&self, href: &str) -> bool {
        let host = self.trigger_host.trim();
        !host.is_empty() && href.contains(host)
    }

    /// Replace the trigger host, rejecting a blank one.
    pub fn set_trigger_host(&mut self, host: &str) -> Result<()> {
        let host = host.trim();
        if host.is_empty() {
            return Err(Error::Config("trigger host must not be empty".into()));
        }
        self.trigger_host = host.to_string();
        Ok(())
    }

    pub fn copy_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.copy_delay_ms)
    }
}

/// Settings persisted as pretty JSON at `<vault>/.readhover/settings.json`.
#[derive(Debug, Clone)]
pub struct JsonSettingsFile {
    path: PathBuf,
}

impl JsonSettingsFile {
    /// Settings file for the vault rooted at `vault_root`.
    pub fn for_vault(vault_root: impl AsRef<Path>) -> Self {
        Self {
            path: vault_root.as_ref().join(STATE_DIR).join("settings.json"),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsFile {
    fn load(&self) -> Result<Option<Settings>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&raw).map(Some).map_err(|e| {
            Error::Config(format!("invalid settings file {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, json)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
