//! # Medication Service
//!
//! Owns the in-memory medication collection and keeps the persistence
//! slot in sync with it.
//!
//! ## Key Responsibilities
//!
//! - **Collection Management**: Appending, deleting and looking up
//!   medication records in insertion order
//! - **Dose Tracking**: Toggling per-date, per-slot taken flags
//! - **Persistence**: Writing the whole collection back after every
//!   mutation; a failed write is logged and the session keeps going
//! - **Fail-Soft Startup**: A store that cannot be read yields an
//!   empty collection rather than an error
//!
//! ## Business Rules
//!
//! - Records are only created from a validated draft (see
//!   `medication_form`); the service mints the ID and timestamp
//! - Deletion requires an affirmative answer from the injected
//!   confirmation capability
//! - There is no partial-field edit; dose toggles are the only
//!   mutation of a stored record

use chrono::{DateTime, NaiveDate, Utc};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::confirm::Confirmation;
use crate::domain::medication_form::NewMedication;
use crate::domain::models::{Medication, TimeSlot};
use crate::storage::MedicationStore;

/// Service for managing the tracked medications.
pub struct MedicationService {
    store: Arc<dyn MedicationStore>,
    medications: Vec<Medication>,
}

impl MedicationService {
    /// Create a service, loading whatever the store currently holds.
    /// A store that fails to load starts the session with an empty
    /// collection.
    pub fn new(store: Arc<dyn MedicationStore>) -> Self {
        let medications = match store.load() {
            Ok(medications) => {
                info!("Loaded {} medications", medications.len());
                medications
            }
            Err(e) => {
                warn!("Failed to load medications, starting empty: {}", e);
                Vec::new()
            }
        };

        Self { store, medications }
    }

    /// The current collection, in insertion order.
    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    /// Look up a medication by ID.
    pub fn get_medication(&self, medication_id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == medication_id)
    }

    /// Append a new medication built from a validated draft. Returns
    /// the minted ID.
    pub fn add_medication(&mut self, new_medication: NewMedication, now: DateTime<Utc>) -> String {
        let mut timestamp_millis = now.timestamp_millis().max(0) as u64;
        let mut id = Medication::generate_id(timestamp_millis);
        while self.medications.iter().any(|m| m.id == id) {
            timestamp_millis += 1;
            id = Medication::generate_id(timestamp_millis);
        }

        let medication = Medication {
            id: id.clone(),
            name: new_medication.name,
            dosage: new_medication.dosage,
            pill_count: new_medication.pill_count,
            times_per_day: new_medication.times_per_day,
            schedule: new_medication.schedule,
            start_date: new_medication.start_date,
            refill_alert: new_medication.refill_alert,
            take_with_food: new_medication.take_with_food,
            days_of_week: new_medication.days_of_week,
            dose_taken: Default::default(),
            created_at: now,
        };

        info!("Added medication '{}' with ID: {}", medication.name, id);
        self.medications.push(medication);
        self.persist();
        id
    }

    /// Delete a medication after the confirmation capability approves.
    /// Returns true when the record was removed; a declined prompt or
    /// an unknown ID is a no-op.
    pub fn delete_medication(&mut self, medication_id: &str, confirm: &dyn Confirmation) -> bool {
        let Some(medication) = self.get_medication(medication_id) else {
            warn!("Medication not found: {}", medication_id);
            return false;
        };

        let prompt = format!(
            "Are you sure you want to remove \"{}\" from your tracker?\n\nThis action cannot be undone.",
            medication.name
        );
        if !confirm.confirm(&prompt) {
            info!("Deletion of {} declined", medication_id);
            return false;
        }

        self.medications.retain(|m| m.id != medication_id);
        info!("Deleted medication: {}", medication_id);
        self.persist();
        true
    }

    /// Flip the taken flag for `(date, slot)` on the given medication.
    /// Returns the new value, or None for an unknown ID. The date is
    /// accepted as given; it is not checked against the schedule or
    /// the active-days set.
    pub fn toggle_dose(
        &mut self,
        medication_id: &str,
        slot: TimeSlot,
        date: NaiveDate,
    ) -> Option<bool> {
        let Some(medication) = self.medications.iter_mut().find(|m| m.id == medication_id) else {
            warn!("Medication not found: {}", medication_id);
            return None;
        };

        let taken = medication.toggle_dose(date, slot);
        info!(
            "Marked {} {} on {} as {}",
            medication_id,
            slot,
            date,
            if taken { "taken" } else { "not taken" }
        );
        self.persist();
        Some(taken)
    }

    /// Write the whole collection to the store. A failed write keeps
    /// the in-memory session and logs a warning.
    fn persist(&self) {
        if let Err(e) = self.store.save_all(&self.medications) {
            warn!("Failed to persist medications, keeping in-memory state: {}", e);
        }
    }
}
