//! # med-tracker
//!
//! Personal medication-adherence tracking: register medications,
//! derive per-day dosing schedules, mark doses taken, and surface
//! refill warnings, with the whole collection persisted to a single
//! local JSON slot.
//!
//! The crate is UI-agnostic. [`MedicationTracker`] is the facade a
//! frontend drives; persistence ([`MedicationStore`]), the clock
//! ([`Clock`]) and deletion confirmation ([`Confirmation`]) are all
//! injected, so the whole interaction surface is testable without a
//! real filesystem, wall clock or dialog.

pub mod domain;
pub mod storage;
pub mod tracker;

pub use domain::clock::{Clock, FixedClock, SystemClock};
pub use domain::confirm::Confirmation;
pub use domain::medication_form::{
    DraftValidationError, MedicationDraft, MedicationForm, NewMedication,
};
pub use domain::medication_service::MedicationService;
pub use domain::models::{DayOfWeek, Medication, TimeSlot};
pub use domain::presenter::{
    medication_card, medication_cards, refill_alerts, DoseSlotView, MedicationCard, RefillAlert,
};
pub use domain::schedule::schedule_for;
pub use storage::{JsonFileStore, MedicationStore, MemoryStore};
pub use tracker::MedicationTracker;
