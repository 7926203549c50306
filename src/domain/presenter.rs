//! # Presentation Models
//!
//! Derives per-day display state from the stored records: what a
//! medication card shows for a given date, and which medications are
//! due for a refill. Everything here is a pure function of a record
//! and "today"; no mutation, no persistence.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::models::{DayOfWeek, Medication, TimeSlot};

/// One scheduled dose slot with its taken state for the viewed date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoseSlotView {
    pub slot: TimeSlot,
    pub taken: bool,
}

/// Display state for one medication on a given date.
///
/// `doses` is populated only when the medication is active on that
/// date's weekday; an inactive day renders no actionable controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationCard {
    pub id: String,
    pub name: String,
    /// Dosage line as shown under the name, e.g. "10mg • 2x daily".
    pub summary: String,
    pub take_with_food: bool,
    pub days_remaining: i64,
    pub needs_refill: bool,
    /// Short labels of the configured days, e.g. ["Mon", "Wed"].
    pub active_days: Vec<String>,
    pub active_today: bool,
    pub doses: Vec<DoseSlotView>,
}

/// One entry in the passive refill warning banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefillAlert {
    pub medication_id: String,
    pub name: String,
    pub days_remaining: i64,
}

/// Build the display state for one medication as of `today`.
pub fn medication_card(medication: &Medication, today: NaiveDate) -> MedicationCard {
    let weekday = DayOfWeek::from(today.weekday());
    let active_today = medication.is_active_on(weekday);

    let doses = if active_today {
        medication
            .schedule
            .iter()
            .map(|&slot| DoseSlotView {
                slot,
                taken: medication.dose_taken(today, slot),
            })
            .collect()
    } else {
        Vec::new()
    };

    MedicationCard {
        id: medication.id.clone(),
        name: medication.name.clone(),
        summary: format!("{} • {}x daily", medication.dosage, medication.times_per_day),
        take_with_food: medication.take_with_food,
        days_remaining: medication.days_remaining(today),
        needs_refill: medication.needs_refill(today),
        active_days: medication
            .days_of_week
            .iter()
            .map(|day| day.label().to_string())
            .collect(),
        active_today,
        doses,
    }
}

/// Build cards for the whole collection, in collection order.
pub fn medication_cards(medications: &[Medication], today: NaiveDate) -> Vec<MedicationCard> {
    medications
        .iter()
        .map(|medication| medication_card(medication, today))
        .collect()
}

/// All medications at or below their refill threshold as of `today`,
/// in collection order.
pub fn refill_alerts(medications: &[Medication], today: NaiveDate) -> Vec<RefillAlert> {
    medications
        .iter()
        .filter(|medication| medication.needs_refill(today))
        .map(|medication| RefillAlert {
            medication_id: medication.id.clone(),
            name: medication.name.clone(),
            days_remaining: medication.days_remaining(today),
        })
        .collect()
}
