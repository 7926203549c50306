//! # Add-Medication Form
//!
//! Holds the draft for a new medication plus the form's visibility
//! flag, and turns a valid draft into a `NewMedication` ready for the
//! service to store.
//!
//! ## Responsibilities:
//! - Draft state with sensible defaults (once daily, morning slot,
//!   start date today, 7-day refill alert)
//! - Schedule recomputation when the per-day dose count changes
//! - Day-of-week selection toggling
//! - Commit-time validation with field-level errors
//!
//! Text inputs (`pill_count`, `refill_alert`) stay raw strings until
//! commit, mirroring how the fields are typed into.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::domain::models::{DayOfWeek, TimeSlot};
use crate::domain::schedule::schedule_for;

/// Validation failures surfaced when committing the add-medication form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftValidationError {
    #[error("Medication name is required")]
    MissingName,
    #[error("Dosage is required")]
    MissingDosage,
    #[error("Pill count is required")]
    MissingPillCount,
    #[error("Pill count must be a whole number")]
    InvalidPillCount,
    #[error("Refill alert must be a whole number of days")]
    InvalidRefillAlert,
    #[error("Select at least one day of the week")]
    NoDaysSelected,
}

/// Draft state for a medication being added. Same shape as a stored
/// record minus the fields minted at commit time (id, dose history,
/// creation timestamp).
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub pill_count: String,
    pub times_per_day: u32,
    pub schedule: Vec<TimeSlot>,
    pub start_date: NaiveDate,
    pub refill_alert: String,
    pub take_with_food: bool,
    pub days_of_week: BTreeSet<DayOfWeek>,
}

impl MedicationDraft {
    /// Create a fresh draft with default values, starting today.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            dosage: String::new(),
            pill_count: String::new(),
            times_per_day: 1,
            schedule: schedule_for(1),
            start_date: today,
            refill_alert: "7".to_string(),
            take_with_food: false,
            days_of_week: BTreeSet::new(),
        }
    }
}

/// A validated draft, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub pill_count: i64,
    pub times_per_day: u32,
    pub schedule: Vec<TimeSlot>,
    pub start_date: NaiveDate,
    pub refill_alert: i64,
    pub take_with_food: bool,
    pub days_of_week: BTreeSet<DayOfWeek>,
}

/// The add-medication form: one draft plus a visibility flag.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationForm {
    pub is_open: bool,
    pub draft: MedicationDraft,
}

impl MedicationForm {
    /// Create a closed form with a default draft.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            is_open: false,
            draft: MedicationDraft::new(today),
        }
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Flip the form's visibility.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Close the form. The draft is kept, so reopening resumes where
    /// the user left off.
    pub fn cancel(&mut self) {
        self.is_open = false;
    }

    /// Set the per-day dose count and recompute the derived schedule.
    /// Counts outside 1..=4 leave the schedule at morning only.
    pub fn set_times_per_day(&mut self, times_per_day: u32) {
        self.draft.times_per_day = times_per_day;
        self.draft.schedule = schedule_for(times_per_day);
    }

    /// Add the day to the selection if absent, remove it if present.
    pub fn toggle_day(&mut self, day: DayOfWeek) {
        if !self.draft.days_of_week.remove(&day) {
            self.draft.days_of_week.insert(day);
        }
    }

    /// Validate the draft and coerce its text fields.
    ///
    /// Requires name, dosage and pill count to be non-empty and the
    /// day selection to be non-empty; pill count and refill alert must
    /// parse as integers. Leaves the draft untouched either way.
    pub fn validate(&self) -> Result<NewMedication, DraftValidationError> {
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err(DraftValidationError::MissingName);
        }

        let dosage = self.draft.dosage.trim();
        if dosage.is_empty() {
            return Err(DraftValidationError::MissingDosage);
        }

        let pill_count_raw = self.draft.pill_count.trim();
        if pill_count_raw.is_empty() {
            return Err(DraftValidationError::MissingPillCount);
        }

        if self.draft.days_of_week.is_empty() {
            return Err(DraftValidationError::NoDaysSelected);
        }

        let pill_count: i64 = pill_count_raw
            .parse()
            .map_err(|_| DraftValidationError::InvalidPillCount)?;
        let refill_alert: i64 = self
            .draft
            .refill_alert
            .trim()
            .parse()
            .map_err(|_| DraftValidationError::InvalidRefillAlert)?;

        Ok(NewMedication {
            name: name.to_string(),
            dosage: dosage.to_string(),
            pill_count,
            times_per_day: self.draft.times_per_day,
            schedule: self.draft.schedule.clone(),
            start_date: self.draft.start_date,
            refill_alert,
            take_with_food: self.draft.take_with_food,
            days_of_week: self.draft.days_of_week.clone(),
        })
    }

    /// Restore the draft to defaults and close the form. Called after a
    /// successful commit.
    pub fn reset(&mut self, today: NaiveDate) {
        self.draft = MedicationDraft::new(today);
        self.is_open = false;
    }
}
