//! Derived session metrics.
//!
//! Nothing here is stored: every query recomputes from the session log and
//! the injected calendar, so the numbers roll over at local midnight and at
//! the Monday week boundary without any bookkeeping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::timer::SessionLog;

/// Completed focus session counts for the usual three windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub today: u32,
    pub this_week: u32,
    pub total: u64,
}

impl SessionStats {
    /// Compute stats for the day `today` from `log`. The weekly window is
    /// the Monday-start week containing `today`.
    pub fn collect(log: &SessionLog, today: NaiveDate) -> Self {
        Self {
            today: log.count_on(&calendar::date_key(today)),
            this_week: log.count_in(calendar::week_keys(today)),
            total: log.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_log_is_all_zero() {
        let stats = SessionStats::collect(&SessionLog::new(), day(2026, 8, 29));
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn week_window_excludes_previous_sunday() {
        let mut log = SessionLog::new();
        log.record("2026-08-23"); // Sunday
        log.record("2026-08-24"); // the following Monday
        log.record("2026-08-24");

        // Anchored on the Monday: only that week's entries count.
        let stats = SessionStats::collect(&log, day(2026, 8, 24));
        assert_eq!(stats.today, 2);
        assert_eq!(stats.this_week, 2);
        assert_eq!(stats.total, 3);

        // Anchored on the Sunday: the Monday is next week.
        let stats = SessionStats::collect(&log, day(2026, 8, 23));
        assert_eq!(stats.today, 1);
        assert_eq!(stats.this_week, 1);
    }
}
