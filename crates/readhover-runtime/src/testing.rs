//! In-memory host collaborators for tests.

use std::path::Path;

use async_trait::async_trait;
use parking_lot::Mutex;
use readhover_core::{Clipboard, Error, NoteHandle, NoteVault, Notifier, Result};
use readhover_extract::note_basename;

/// Vault backed by a list of `(id, text)` pairs. `None` text fails to read.
#[derive(Default)]
pub struct MemoryVault {
    notes: Vec<(NoteHandle, Option<String>)>,
    reads: Mutex<Vec<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_note(mut self, id: &str, text: &str) -> Self {
        self.notes.push((handle(id), Some(text.to_string())));
        self
    }

    pub fn with_unreadable(mut self, id: &str) -> Self {
        self.notes.push((handle(id), None));
        self
    }

    /// Ids read so far, in order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().clone()
    }
}

fn handle(id: &str) -> NoteHandle {
    NoteHandle::new(id, note_basename(Path::new(id)))
}

#[async_trait]
impl NoteVault for MemoryVault {
    fn notes(&self) -> Vec<NoteHandle> {
        self.notes.iter().map(|(h, _)| h.clone()).collect()
    }

    async fn read(&self, note: &NoteHandle) -> Result<String> {
        self.reads.lock().push(note.id.clone());
        self.notes
            .iter()
            .find(|(h, _)| h == note)
            .and_then(|(_, text)| text.clone())
            .ok_or_else(|| Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "read failed")))
    }
}

/// Clipboard that records writes, or rejects them all.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("denied".into()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.notices.lock().push(message.to_string());
    }
}
