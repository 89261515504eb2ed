//! readhover extract: metadata section parsing, highlight bullet location,
//! text-fragment locators, and note file detection.

pub mod file;
pub mod fragment;
pub mod highlight;
pub mod metadata;

pub use file::{is_markdown, note_basename};
pub use fragment::{encode_uri_component, locator_fragment, text_fragment_url};
pub use highlight::{
    clean_highlight, find_bullet_containing, find_bullet_with_snippet_len, snippet, HighlightMatch,
};
pub use metadata::{extract_metadata, MetadataRecord};
