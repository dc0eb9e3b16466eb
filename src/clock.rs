//! Wall-clock access
//!
//! The lifecycle manager and countdown read time through [`Clock`] so tests
//! can move the day forward without waiting for midnight.

use crate::types::DateKey;
use chrono::{DateTime, Local, TimeDelta};
use std::sync::{Arc, Mutex};

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Today's calendar day
    fn today(&self) -> DateKey {
        DateKey::from_datetime(&self.now())
    }
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A manually driven clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Arc<Mutex<DateTime<Local>>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Local>) {
        match self.now.lock() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }

    pub fn advance(&self, by: TimeDelta) {
        let next = self.now() + by;
        self.set(next);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.now.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
