//! Day-scoped entry store
//!
//! Entries live only for the calendar day recorded next to them. Loading on
//! a different day, or crossing midnight while running, discards them.

use crate::clock::Clock;
use crate::storage::kv::KeyValueStore;
use crate::storage::StorageError;
use crate::types::{clamp_text, DateKey, Entry};

/// Key holding the day the stored entries belong to
pub const DATE_KEY: &str = "todays_trash_date";
/// Key holding the JSON array of entries, newest first
pub const ITEMS_KEY: &str = "todays_trash_items";

/// Owns the in-memory entries and keeps them in sync with the backing store
pub struct Lifecycle<S, C> {
    store: S,
    clock: C,
    today: DateKey,
    entries: Vec<Entry>,
}

impl<S: KeyValueStore, C: Clock> Lifecycle<S, C> {
    /// Create an empty manager without touching the store
    pub fn new(store: S, clock: C) -> Self {
        let today = clock.today();
        Self {
            store,
            clock,
            today,
            entries: Vec::new(),
        }
    }

    /// Create a manager and immediately [`load`](Self::load) it
    pub fn open(store: S, clock: C) -> Self {
        let mut lifecycle = Self::new(store, clock);
        lifecycle.load();
        lifecycle
    }

    /// Hydrate entries from the store
    ///
    /// If the stored day is not today (or is missing) the stored entries are
    /// discarded. Malformed data is treated as an empty store. Either way
    /// today's key is written back.
    pub fn load(&mut self) {
        self.today = self.clock.today();
        let stored_day = self
            .store
            .get(DATE_KEY)
            .and_then(|raw| raw.parse::<DateKey>().ok());

        if stored_day == Some(self.today) {
            self.entries = self.read_entries();
            tracing::info!("Loaded {} entries for {}", self.entries.len(), self.today);
        } else {
            tracing::info!(
                "Stored day {:?} is not {}, starting empty",
                stored_day.map(|d| d.to_string()),
                self.today
            );
            self.clear_stored_entries();
        }
    }

    fn read_entries(&self) -> Vec<Entry> {
        let Some(raw) = self.store.get(ITEMS_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(mut entries) => {
                for entry in &mut entries {
                    entry.text = clamp_text(&entry.text);
                }
                entries
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed stored entries: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist entries together with today's key
    pub fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.entries)?;
        self.store.set(ITEMS_KEY, json)?;
        self.store.set(DATE_KEY, self.today.to_string())?;
        tracing::debug!("Saved {} entries for {}", self.entries.len(), self.today);
        Ok(())
    }

    /// Drop every entry and persist the empty state
    pub fn purge(&mut self) {
        tracing::info!("Purging {} entries for {}", self.entries.len(), self.today);
        self.clear_stored_entries();
    }

    fn clear_stored_entries(&mut self) {
        self.entries.clear();
        if let Err(e) = self.store.remove(ITEMS_KEY) {
            tracing::warn!("Failed to remove stored entries: {}", e);
        }
        if let Err(e) = self.store.set(DATE_KEY, self.today.to_string()) {
            tracing::warn!("Failed to store day key: {}", e);
        }
    }

    /// The clock has moved to a day other than the one the entries belong to
    pub fn is_stale(&self) -> bool {
        self.clock.today() != self.today
    }

    /// Purge if the clock has moved to a new day since the last check
    ///
    /// Returns `true` when a purge happened. Repeated calls within the same
    /// day are no-ops, so each day boundary purges exactly once.
    pub fn rollover(&mut self) -> bool {
        if !self.is_stale() {
            return false;
        }
        let today = self.clock.today();
        tracing::info!("Day changed from {} to {}", self.today, today);
        self.today = today;
        self.purge();
        true
    }

    /// Prepend a new entry and persist
    ///
    /// Empty or whitespace-only text is ignored and `None` is returned. Text
    /// longer than the cap is truncated.
    pub fn add_entry(&mut self, text: &str) -> Option<&Entry> {
        if text.trim().is_empty() {
            return None;
        }
        self.rollover();

        let entry = Entry::new(text, &self.clock.now());
        self.entries.insert(0, entry);
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save entries: {}", e);
        }
        self.entries.first()
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn today(&self) -> DateKey {
        self.today
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::kv::MemoryKvStore;
    use chrono::{Local, TimeDelta, TimeZone};

    fn clock_at(y: i32, m: u32, d: u32, h: u32) -> FixedClock {
        FixedClock::new(Local.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn seeded(day: &str, items: &str) -> MemoryKvStore {
        let mut store = MemoryKvStore::new();
        store.set(DATE_KEY, day.to_string()).unwrap();
        store.set(ITEMS_KEY, items.to_string()).unwrap();
        store
    }

    const ONE_ITEM: &str =
        r#"[{"id":"5b1f9a52-6f7c-4a53-9f2a-0a4c8f1e2d3b","text":"milk","createdAt":1704067200000}]"#;

    #[test]
    fn test_load_discards_previous_day() {
        let store = seeded("2024-01-01", ONE_ITEM);
        let lifecycle = Lifecycle::open(store, clock_at(2024, 1, 2, 9));

        assert!(lifecycle.entries().is_empty());
        assert_eq!(lifecycle.store().get(DATE_KEY).as_deref(), Some("2024-01-02"));
        assert!(lifecycle.store().get(ITEMS_KEY).is_none());
    }

    #[test]
    fn test_load_keeps_same_day() {
        let store = seeded("2024-01-01", ONE_ITEM);
        let lifecycle = Lifecycle::open(store, clock_at(2024, 1, 1, 9));

        assert_eq!(lifecycle.entries().len(), 1);
        assert_eq!(lifecycle.entries()[0].text, "milk");
    }

    #[test]
    fn test_load_first_visit_records_day() {
        let lifecycle = Lifecycle::open(MemoryKvStore::new(), clock_at(2024, 3, 5, 9));
        assert!(lifecycle.entries().is_empty());
        assert_eq!(lifecycle.store().get(DATE_KEY).as_deref(), Some("2024-03-05"));
    }

    #[test]
    fn test_load_tolerates_malformed_items() {
        let store = seeded("2024-01-01", "{not json");
        let lifecycle = Lifecycle::open(store, clock_at(2024, 1, 1, 9));
        assert!(lifecycle.entries().is_empty());

        let store = seeded("garbage", ONE_ITEM);
        let lifecycle = Lifecycle::open(store, clock_at(2024, 1, 1, 9));
        assert!(lifecycle.entries().is_empty());
    }

    #[test]
    fn test_add_entry_prepends_and_persists() {
        let clock = clock_at(2024, 1, 1, 9);
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());

        lifecycle.add_entry("first").unwrap();
        clock.advance(TimeDelta::minutes(1));
        lifecycle.add_entry("milk").unwrap();

        assert_eq!(lifecycle.entries().len(), 2);
        assert_eq!(lifecycle.entries()[0].text, "milk");
        assert_eq!(lifecycle.entries()[1].text, "first");

        // Same-day reload round-trips the stored blob.
        let store = lifecycle.store().clone();
        let reloaded = Lifecycle::open(store, clock);
        assert_eq!(reloaded.entries(), lifecycle.entries());
    }

    #[test]
    fn test_add_entry_rejects_blank_text() {
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock_at(2024, 1, 1, 9));
        assert!(lifecycle.add_entry("").is_none());
        assert!(lifecycle.add_entry("   \n\t").is_none());
        assert!(lifecycle.entries().is_empty());
        assert!(lifecycle.store().get(ITEMS_KEY).is_none());
    }

    #[test]
    fn test_add_entry_truncates_long_text() {
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock_at(2024, 1, 1, 9));
        let entry = lifecycle.add_entry(&"x".repeat(400)).unwrap();
        assert_eq!(entry.text.chars().count(), crate::types::MAX_ENTRY_CHARS);
    }

    #[test]
    fn test_rollover_purges_once_per_day() {
        let clock = clock_at(2024, 1, 1, 23);
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());
        lifecycle.add_entry("milk");

        assert!(!lifecycle.rollover());
        assert_eq!(lifecycle.entries().len(), 1);

        clock.advance(TimeDelta::hours(2));
        assert!(lifecycle.rollover());
        assert!(!lifecycle.rollover());
        assert!(lifecycle.entries().is_empty());
        assert_eq!(lifecycle.store().get(DATE_KEY).as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn test_add_entry_after_midnight_starts_new_day() {
        let clock = clock_at(2024, 1, 1, 23);
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());
        lifecycle.add_entry("yesterday");

        clock.advance(TimeDelta::hours(2));
        lifecycle.add_entry("today");

        assert_eq!(lifecycle.entries().len(), 1);
        assert_eq!(lifecycle.entries()[0].text, "today");
        assert_eq!(lifecycle.today().to_string(), "2024-01-02");
    }

    #[test]
    fn test_purge_clears_store() {
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock_at(2024, 1, 1, 9));
        lifecycle.add_entry("milk");
        lifecycle.purge();

        assert!(lifecycle.entries().is_empty());
        let reloaded = Lifecycle::open(lifecycle.store().clone(), lifecycle.clock().clone());
        assert!(reloaded.entries().is_empty());
    }

    #[test]
    fn test_is_stale_tracks_day_change() {
        let clock = clock_at(2024, 1, 1, 23);
        let mut lifecycle = Lifecycle::open(MemoryKvStore::new(), clock.clone());
        assert!(!lifecycle.is_stale());

        clock.advance(TimeDelta::minutes(59));
        assert!(!lifecycle.is_stale());

        clock.advance(TimeDelta::minutes(2));
        assert!(lifecycle.is_stale());
        lifecycle.rollover();
        assert!(!lifecycle.is_stale());
    }
}
