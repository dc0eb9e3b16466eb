//! Shared type definitions
//!
//! Entries, the day key that scopes them, and the input limits shared by
//! the store and the UI.

pub mod date_key;
pub mod entry;

pub use date_key::DateKey;
pub use entry::{clamp_text, Entry, MAX_ENTRY_CHARS, WARN_THRESHOLD_CHARS};
