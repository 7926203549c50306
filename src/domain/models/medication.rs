//! Domain model for a tracked medication.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A named dosing occasion within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Bedtime,
}

impl TimeSlot {
    /// All slots in dosing order.
    pub const ALL: [TimeSlot; 4] = [
        TimeSlot::Morning,
        TimeSlot::Afternoon,
        TimeSlot::Evening,
        TimeSlot::Bedtime,
    ];
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::Morning => write!(f, "morning"),
            TimeSlot::Afternoon => write!(f, "afternoon"),
            TimeSlot::Evening => write!(f, "evening"),
            TimeSlot::Bedtime => write!(f, "bedtime"),
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "bedtime" => Ok(TimeSlot::Bedtime),
            other => Err(format!("Invalid time slot: {}", other)),
        }
    }
}

/// A weekday on which a medication can be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in calendar order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Short label for display ("Mon", "Tue", ...).
    pub fn label(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOfWeek::Monday => write!(f, "monday"),
            DayOfWeek::Tuesday => write!(f, "tuesday"),
            DayOfWeek::Wednesday => write!(f, "wednesday"),
            DayOfWeek::Thursday => write!(f, "thursday"),
            DayOfWeek::Friday => write!(f, "friday"),
            DayOfWeek::Saturday => write!(f, "saturday"),
            DayOfWeek::Sunday => write!(f, "sunday"),
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Domain model representing one tracked medication.
///
/// `dose_taken` maps a calendar date to the slots marked taken on that
/// date. Entries appear lazily on the first toggle and are never pruned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub pill_count: i64,
    pub times_per_day: u32,
    pub schedule: Vec<TimeSlot>,
    pub start_date: NaiveDate,
    pub refill_alert: i64,
    pub take_with_food: bool,
    pub days_of_week: BTreeSet<DayOfWeek>,
    #[serde(default)]
    pub dose_taken: BTreeMap<NaiveDate, BTreeMap<TimeSlot, bool>>,
    pub created_at: DateTime<Utc>,
}

impl Medication {
    /// Generate a unique ID for a medication from its creation timestamp.
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("medication::{}", timestamp_millis)
    }

    /// Days of supply remaining under the linear depletion model.
    ///
    /// Assumes every scheduled dose is taken every day from `start_date`
    /// onward; the recorded dose history is intentionally not consulted.
    /// Goes negative once the projected supply is exhausted.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        let per_day = i64::from(self.times_per_day.max(1));
        let days_passed = (today - self.start_date).num_days();
        let pills_used = days_passed * per_day;
        let pills_left = self.pill_count - pills_used;
        pills_left.div_euclid(per_day)
    }

    /// Whether the remaining supply is at or below the refill threshold.
    pub fn needs_refill(&self, today: NaiveDate) -> bool {
        self.days_remaining(today) <= self.refill_alert
    }

    /// Whether this medication is scheduled on the given weekday.
    pub fn is_active_on(&self, day: DayOfWeek) -> bool {
        self.days_of_week.contains(&day)
    }

    /// Whether the dose for `(date, slot)` has been marked taken.
    /// Defaults to false when no entry exists at either level.
    pub fn dose_taken(&self, date: NaiveDate, slot: TimeSlot) -> bool {
        self.dose_taken
            .get(&date)
            .and_then(|slots| slots.get(&slot))
            .copied()
            .unwrap_or(false)
    }

    /// Flip the taken flag for `(date, slot)`, creating intermediate map
    /// levels as needed. Returns the new value.
    ///
    /// The date is taken as given and is not checked against the schedule
    /// or the active-days set.
    pub fn toggle_dose(&mut self, date: NaiveDate, slot: TimeSlot) -> bool {
        let slots = self.dose_taken.entry(date).or_default();
        let taken = slots.entry(slot).or_insert(false);
        *taken = !*taken;
        *taken
    }
}
