//! Timezone-anchored "today" and the next-work-week window.
//!
//! The clock is read once, in [`TimeContext::capture`]. Every derived value
//! (weekday, Friday gate, next-week window) comes from that captured date, so
//! a run that straddles midnight still produces a consistent report.

use crate::models::DateWindow;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant (tests, replays).
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

const FRIDAY: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeContext {
    today: NaiveDate,
}

impl TimeContext {
    /// Read `clock` once and truncate the instant to a calendar date in `tz`.
    pub fn capture(clock: &dyn Clock, tz: Tz) -> Self {
        let local = clock.now().with_timezone(&tz);
        Self {
            today: local.date_naive(),
        }
    }

    /// Context pinned to an explicit calendar date.
    pub fn for_date(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Monday = 0 … Sunday = 6.
    pub fn weekday(&self) -> u32 {
        self.today.weekday().num_days_from_monday()
    }

    pub fn is_friday(&self) -> bool {
        self.weekday() == FRIDAY
    }

    pub fn is_weekday(&self) -> bool {
        self.weekday() <= FRIDAY
    }

    /// Monday..Friday of the next work week, always strictly after today.
    pub fn next_week_window(&self) -> DateWindow {
        let mut days_until_monday = (7 - self.weekday()) % 7;
        if days_until_monday == 0 {
            days_until_monday = 7;
        }

        let monday = self.today + Duration::days(i64::from(days_until_monday));
        let friday = monday + Duration::days(4);
        DateWindow::new(monday, friday)
    }
}
