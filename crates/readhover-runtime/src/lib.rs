//! Runtime: scans a note vault for a hovered highlight link and drives the
//! delayed clipboard copy.

pub mod hover;
pub mod scanner;
pub mod types;

#[cfg(test)]
mod testing;

pub use hover::{HoverSession, PendingCopy};
pub use scanner::{locate_highlight, NoteScanner};
pub use types::*;
