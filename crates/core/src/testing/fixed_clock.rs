//! Clock that always reports the same instant.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::RwLock;

use crate::ticket::Clock;

/// A [`Clock`] pinned to a settable instant.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Clock pinned to `y-m-d h:min:00`.
    ///
    /// Panics on an invalid date or time.
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        let now = NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid fixed clock instant");
        Self::new(now)
    }

    /// Move the clock to another instant.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().unwrap_or_else(|e| e.into_inner())
    }
}
