//! Clock abstraction for "today" and "now".
//!
//! All date-dependent logic (supply math, active-day checks, dose
//! toggles) reads time through this trait so tests can pin a fixed date
//! instead of the wall clock.

use crate::domain::models::DayOfWeek;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc};

pub trait Clock: Send + Sync {
    /// The current instant, used for creation timestamps and ID minting.
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar date as the user perceives it.
    fn today(&self) -> NaiveDate;

    /// Today's weekday.
    fn weekday(&self) -> DayOfWeek {
        DayOfWeek::from(self.today().weekday())
    }
}

/// Clock backed by the system wall clock. Dates come from the local
/// timezone, matching the calendar the user lives in.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed instant, for tests and reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FixedClock {
    /// Pin the clock to midnight UTC on the given date.
    pub fn on(today: NaiveDate) -> Self {
        Self {
            now: today.and_time(NaiveTime::MIN).and_utc(),
            today,
        }
    }

    /// Pin the clock to an exact instant; today is the UTC date of it.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            today: now.date_naive(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let clock = FixedClock::on(date);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.weekday(), DayOfWeek::Monday);
        assert_eq!(clock.now().date_naive(), date);
    }
}
