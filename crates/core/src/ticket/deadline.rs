//! Pickup deadline computation.
//!
//! Items left in storage must be collected by the first Sunday of the
//! nearest month that still has its first Sunday ahead (or today).

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Weekday};

/// Format of the submission timestamp.
pub const SUBMIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format of the expiration date (`March 5`).
pub const EXPIRE_DATE_FORMAT: &str = "%B %-d";

/// The two timing fields stamped onto a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    pub submit_time: String,
    pub expire_date: String,
}

/// Computes the submission stamp and pickup deadline for `now`.
pub fn compute_deadline(now: NaiveDateTime) -> Deadline {
    let expires = expiration_date(now.date());

    Deadline {
        submit_time: now.format(SUBMIT_TIME_FORMAT).to_string(),
        expire_date: expires.format(EXPIRE_DATE_FORMAT).to_string(),
    }
}

/// Returns the first Sunday of this month, or of next month once this
/// month's first Sunday has passed.
pub fn expiration_date(today: NaiveDate) -> NaiveDate {
    let this_month = first_sunday_of_month(today);
    if this_month < today {
        first_sunday_of_month(first_of_month(today) + Months::new(1))
    } else {
        this_month
    }
}

/// First Sunday of the month containing `date`.
pub fn first_sunday_of_month(date: NaiveDate) -> NaiveDate {
    let mut day = first_of_month(date);
    while day.weekday() != Weekday::Sun {
        day = day + Days::new(1);
    }
    day
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}
