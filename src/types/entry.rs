//! Entry types
//!
//! A single thrown-away note and the limits applied to its text.

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters an entry may hold
pub const MAX_ENTRY_CHARS: usize = 300;

/// Character count at which the input counter turns into a warning
pub const WARN_THRESHOLD_CHARS: usize = 280;

/// A single user-submitted note
///
/// Serialized as `{ "id", "text", "createdAt" }` with a millisecond epoch
/// timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier
    pub id: Uuid,
    /// The note itself, at most [`MAX_ENTRY_CHARS`] characters
    pub text: String,
    /// Creation time in milliseconds since the Unix epoch
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Entry {
    /// Create a new entry with a fresh id
    pub fn new<Tz: TimeZone>(text: impl Into<String>, created_at: &DateTime<Tz>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: clamp_text(&text.into()),
            created_at: created_at.timestamp_millis(),
        }
    }

    /// Creation time in the local time zone
    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.created_at).single()
    }

    /// `HH:MM` label shown under the card
    pub fn time_label(&self) -> String {
        self.created_at_local()
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}

/// Truncate text to [`MAX_ENTRY_CHARS`] characters
pub fn clamp_text(text: &str) -> String {
    match text.char_indices().nth(MAX_ENTRY_CHARS) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
