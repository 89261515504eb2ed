//! Terminal stand-ins for the host clipboard and notices.

use std::io::Write;

use async_trait::async_trait;
use readhover_core::{Clipboard, Notifier, Result};
use tracing::info;

/// Prints copied text to stdout so it can be piped into a real clipboard tool.
pub struct StdoutClipboard;

#[async_trait]
impl Clipboard for StdoutClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

/// Shows notices as log lines on stderr.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        info!("{}", message);
    }
}
