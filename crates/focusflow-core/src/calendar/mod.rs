//! Date-key calendar arithmetic.
//!
//! The session log is indexed by *date keys*: calendar days in local time,
//! formatted `YYYY-MM-DD`. Weekly aggregation uses Monday-start weeks.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Format used for date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar day as a date key (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a date key back into a calendar day.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// The Monday that starts the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// The seven date keys of the Monday-start week containing `anchor`.
pub fn week_keys(anchor: NaiveDate) -> Vec<String> {
    let monday = start_of_week(anchor);
    (0..7).map(|i| date_key(monday + Days::new(i))).collect()
}

/// Supplies "today" in local time. Injected into the engine so tests can
/// pin the calendar.
pub trait Today {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToday;

impl Today for SystemToday {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date source, mainly useful in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedToday(pub NaiveDate);

impl Today for FixedToday {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
