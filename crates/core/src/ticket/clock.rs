use chrono::{Local, NaiveDateTime};

/// Source of "now" for ticket timing.
pub trait Clock: Send + Sync {
    /// Current local wall-clock time.
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the server's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
