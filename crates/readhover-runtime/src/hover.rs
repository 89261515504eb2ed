//! Hover session: lookup on hover, delayed cancelable clipboard copy.
//!
//! Hovering a trigger link looks up its highlight. When the highlight's note
//! names both the article URL and title, a copy is armed: after the configured
//! delay the modifier keys last sampled from pointer moves decide what gets
//! copied. Leaving the link before the delay cancels the copy.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use readhover_core::{Clipboard, NoteVault, Notifier, Settings};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::scanner::NoteScanner;
use crate::types::{CopyChoice, HoverState, LookupResult, ModifierKeys};

pub const NO_HIGHLIGHT_NOTICE: &str = "No highlight found for this link";

/// A clipboard copy waiting for the hover delay to elapse.
pub struct PendingCopy {
    keys: Arc<Mutex<ModifierKeys>>,
    state: Arc<Mutex<HoverState>>,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PendingCopy {
    /// Arm a copy for `result`. Returns `None` unless both the article URL
    /// and title are known.
    pub fn arm(
        result: &LookupResult,
        delay: Duration,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Option<Self> {
        result.metadata.complete()?;

        let keys = Arc::new(Mutex::new(ModifierKeys::default()));
        let state = Arc::new(Mutex::new(HoverState::Hovering));
        let cancel = CancellationToken::new();

        let task_keys = keys.clone();
        let task_state = state.clone();
        let task_cancel = cancel.clone();
        let result = result.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = task_cancel.cancelled() => {
                    debug!("Hover left before copy delay; copy cancelled");
                    *task_state.lock() = HoverState::Cancelled;
                }
                _ = tokio::time::sleep(delay) => {
                    let keys = *task_keys.lock();
                    let choice = CopyChoice::for_keys(keys);
                    commit(&result, choice, clipboard.as_ref(), notifier.as_ref()).await;
                    *task_state.lock() = HoverState::Committed(choice);
                }
            }
        });

        Some(Self {
            keys,
            state,
            cancel,
            handle: Some(handle),
        })
    }

    /// Record the modifier keys seen on the latest pointer move.
    pub fn sample(&self, keys: ModifierKeys) {
        *self.keys.lock() = keys;
    }

    /// Cancel the copy. No effect once the delay has elapsed.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn state(&self) -> HoverState {
        *self.state.lock()
    }

    /// Wait for the copy to commit or be cancelled.
    pub async fn finished(mut self) -> HoverState {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Copy task failed: {}", e);
            }
        }
        *self.state.lock()
    }
}

impl Drop for PendingCopy {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn commit(
    result: &LookupResult,
    choice: CopyChoice,
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
) {
    let Some(text) = choice.payload(result) else {
        return;
    };
    match clipboard.write_text(&text).await {
        Ok(()) => {
            debug!("Copied {:?}: {}", choice, text);
            notifier.notify(choice.notice());
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            notifier.notify(&format!("Failed to copy to clipboard: {}", e));
        }
    }
}

/// Host-facing hover handler.
pub struct HoverSession {
    settings: Settings,
    vault: Arc<dyn NoteVault>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
    pending: Option<PendingCopy>,
}

impl HoverSession {
    pub fn new(
        settings: Settings,
        vault: Arc<dyn NoteVault>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            vault,
            clipboard,
            notifier,
            pending: None,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Pointer entered a link.
    ///
    /// Links that don't contain the trigger host are ignored. Any copy armed
    /// by a previous hover is cancelled first.
    pub async fn on_hover(&mut self, href: &str) -> Option<LookupResult> {
        if !self.settings.is_trigger_link(href) {
            return None;
        }
        self.on_pointer_leave();

        let result = NoteScanner::new(self.vault.as_ref())
            .with_snippet_chars(self.settings.snippet_chars)
            .locate(href)
            .await;

        let Some(result) = result else {
            self.notifier.notify(NO_HIGHLIGHT_NOTICE);
            return None;
        };

        self.pending = PendingCopy::arm(
            &result,
            self.settings.copy_delay(),
            self.clipboard.clone(),
            self.notifier.clone(),
        );
        Some(result)
    }

    /// Pointer moved over the hovered link.
    pub fn on_pointer_move(&self, keys: ModifierKeys) {
        if let Some(pending) = &self.pending {
            pending.sample(keys);
        }
    }

    /// Pointer left the hovered link.
    pub fn on_pointer_leave(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }

    pub fn state(&self) -> HoverState {
        self.pending
            .as_ref()
            .map(PendingCopy::state)
            .unwrap_or(HoverState::Idle)
    }

    /// Hand the armed copy to the caller, e.g. to await it.
    pub fn take_pending(&mut self) -> Option<PendingCopy> {
        self.pending.take()
    }
}
