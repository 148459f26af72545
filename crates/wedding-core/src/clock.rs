//! Time Source
//!
//! Instants are epoch milliseconds, the unit the browser hands out.

use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};

/// Supplies the current instant.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        millis_to_utc(self.now_millis())
    }
}

/// Convert epoch milliseconds to a UTC timestamp, clamping out-of-range input to the epoch.
pub fn millis_to_utc(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Clock that only moves when told to. Used by tests and previews.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<i64>,
}

impl ManualClock {
    pub fn new(now_millis: i64) -> Self {
        Self { now: Cell::new(now_millis) }
    }

    pub fn set(&self, now_millis: i64) {
        self.now.set(now_millis);
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}
