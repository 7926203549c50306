//! # Medication Tracker Facade
//!
//! Wires the service, the add-medication form and the clock into the
//! complete interaction surface: open/fill/commit the form, delete
//! with confirmation, toggle today's doses, and derive the display
//! state a frontend renders.

use anyhow::Result;
use std::sync::Arc;

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::confirm::Confirmation;
use crate::domain::medication_form::{DraftValidationError, MedicationForm};
use crate::domain::medication_service::MedicationService;
use crate::domain::models::{Medication, TimeSlot};
use crate::domain::presenter::{self, MedicationCard, RefillAlert};
use crate::storage::{JsonFileStore, MedicationStore};

pub struct MedicationTracker<C: Clock = SystemClock> {
    service: MedicationService,
    form: MedicationForm,
    clock: C,
}

impl MedicationTracker<SystemClock> {
    /// Create a tracker on the default JSON file slot and the system
    /// clock.
    pub fn new_default() -> Result<Self> {
        let store = Arc::new(JsonFileStore::new_default()?);
        Ok(Self::new(store, SystemClock))
    }
}

impl<C: Clock> MedicationTracker<C> {
    /// Create a tracker on the given store and clock, loading whatever
    /// the store holds.
    pub fn new(store: Arc<dyn MedicationStore>, clock: C) -> Self {
        let service = MedicationService::new(store);
        let form = MedicationForm::new(clock.today());
        Self {
            service,
            form,
            clock,
        }
    }

    /// The tracked medications, in insertion order.
    pub fn medications(&self) -> &[Medication] {
        self.service.medications()
    }

    /// The add-medication form, for reading its state.
    pub fn form(&self) -> &MedicationForm {
        &self.form
    }

    /// The add-medication form, for editing the draft and toggling
    /// visibility.
    pub fn form_mut(&mut self) -> &mut MedicationForm {
        &mut self.form
    }

    /// Validate the draft and commit it: mint an ID, stamp the
    /// creation time, append to the collection, persist, and reset the
    /// form. On a validation error nothing changes and the form stays
    /// open.
    pub fn commit_form(&mut self) -> Result<String, DraftValidationError> {
        let new_medication = self.form.validate()?;
        let id = self.service.add_medication(new_medication, self.clock.now());
        self.form.reset(self.clock.today());
        Ok(id)
    }

    /// Delete a medication after the confirmation capability approves.
    pub fn delete_medication(&mut self, medication_id: &str, confirm: &dyn Confirmation) -> bool {
        self.service.delete_medication(medication_id, confirm)
    }

    /// Toggle the taken flag for a slot on an explicit date.
    pub fn toggle_dose(
        &mut self,
        medication_id: &str,
        slot: TimeSlot,
        date: chrono::NaiveDate,
    ) -> Option<bool> {
        self.service.toggle_dose(medication_id, slot, date)
    }

    /// Toggle the taken flag for a slot on today's date.
    pub fn toggle_dose_today(&mut self, medication_id: &str, slot: TimeSlot) -> Option<bool> {
        self.service
            .toggle_dose(medication_id, slot, self.clock.today())
    }

    /// Display state for every medication as of today.
    pub fn cards(&self) -> Vec<MedicationCard> {
        presenter::medication_cards(self.service.medications(), self.clock.today())
    }

    /// Every medication at or below its refill threshold as of today.
    pub fn refill_alerts(&self) -> Vec<RefillAlert> {
        presenter::refill_alerts(self.service.medications(), self.clock.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::models::DayOfWeek;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        // 2025-03-10 is a Monday
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn setup_test() -> (MedicationTracker<FixedClock>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let tracker = MedicationTracker::new(store.clone(), FixedClock::on(monday()));
        (tracker, store)
    }

    fn fill_form(tracker: &mut MedicationTracker<FixedClock>) {
        let form = tracker.form_mut();
        form.open();
        form.draft.name = "Lisinopril".to_string();
        form.draft.dosage = "10mg".to_string();
        form.draft.pill_count = "30".to_string();
        form.set_times_per_day(2);
        form.toggle_day(DayOfWeek::Monday);
    }

    #[test]
    fn test_commit_form_adds_resets_and_closes() {
        let (mut tracker, store) = setup_test();
        fill_form(&mut tracker);

        let id = tracker.commit_form().unwrap();

        assert_eq!(tracker.medications().len(), 1);
        let medication = &tracker.medications()[0];
        assert_eq!(medication.id, id);
        assert_eq!(medication.name, "Lisinopril");
        assert_eq!(medication.pill_count, 30);
        assert_eq!(medication.start_date, monday());

        assert!(!tracker.form().is_open);
        assert!(tracker.form().draft.name.is_empty());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_with_invalid_draft_changes_nothing() {
        let (mut tracker, store) = setup_test();
        fill_form(&mut tracker);
        tracker.form_mut().draft.days_of_week.clear();

        assert_eq!(
            tracker.commit_form(),
            Err(DraftValidationError::NoDaysSelected)
        );
        assert!(tracker.medications().is_empty());
        assert!(store.load().unwrap().is_empty());
        // the form stays open with the draft intact
        assert!(tracker.form().is_open);
        assert_eq!(tracker.form().draft.name, "Lisinopril");
    }

    #[test]
    fn test_toggle_dose_today_uses_the_injected_clock() {
        let (mut tracker, _store) = setup_test();
        fill_form(&mut tracker);
        let id = tracker.commit_form().unwrap();

        assert_eq!(
            tracker.toggle_dose_today(&id, TimeSlot::Morning),
            Some(true)
        );
        assert!(tracker.medications()[0].dose_taken(monday(), TimeSlot::Morning));
    }

    #[test]
    fn test_cards_reflect_todays_state() {
        let (mut tracker, _store) = setup_test();
        fill_form(&mut tracker);
        let id = tracker.commit_form().unwrap();
        tracker.toggle_dose_today(&id, TimeSlot::Evening);

        let cards = tracker.cards();
        assert_eq!(cards.len(), 1);
        assert!(cards[0].active_today);
        assert_eq!(cards[0].doses.len(), 2);
        assert!(cards[0].doses[1].taken);
    }

    #[test]
    fn test_delete_through_the_facade() {
        let (mut tracker, store) = setup_test();
        fill_form(&mut tracker);
        let id = tracker.commit_form().unwrap();

        assert!(tracker.delete_medication(&id, &|_: &str| true));
        assert!(tracker.medications().is_empty());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_refill_alerts_through_the_facade() {
        let (mut tracker, _store) = setup_test();
        fill_form(&mut tracker);
        tracker.form_mut().draft.refill_alert = "20".to_string();
        tracker.commit_form().unwrap();

        let alerts = tracker.refill_alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].days_remaining, 15);
    }
}
