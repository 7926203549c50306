//! Domain models for the medication tracker.

pub mod medication;

pub use medication::{DayOfWeek, Medication, TimeSlot};
