//! Dosing schedule derivation.
//!
//! A medication's schedule is a deterministic function of its per-day
//! dose count; there is no free-form slot selection.

use crate::domain::models::TimeSlot;

/// Derive the ordered time slots for a given per-day dose count.
///
/// 1 maps to morning only, 2 adds evening, 3 adds afternoon, 4 uses all
/// four slots. Any other count falls back to morning only.
pub fn schedule_for(times_per_day: u32) -> Vec<TimeSlot> {
    match times_per_day {
        1 => vec![TimeSlot::Morning],
        2 => vec![TimeSlot::Morning, TimeSlot::Evening],
        3 => vec![TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening],
        4 => vec![
            TimeSlot::Morning,
            TimeSlot::Afternoon,
            TimeSlot::Evening,
            TimeSlot::Bedtime,
        ],
        _ => vec![TimeSlot::Morning],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_lengths_match_dose_count() {
        for n in 1..=4 {
            assert_eq!(schedule_for(n).len(), n as usize);
        }
    }

    #[test]
    fn test_schedule_slot_assignments() {
        assert_eq!(schedule_for(1), vec![TimeSlot::Morning]);
        assert_eq!(schedule_for(2), vec![TimeSlot::Morning, TimeSlot::Evening]);
        assert_eq!(
            schedule_for(3),
            vec![TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening]
        );
        assert_eq!(schedule_for(4), TimeSlot::ALL.to_vec());
    }

    #[test]
    fn test_unknown_dose_count_falls_back_to_morning() {
        assert_eq!(schedule_for(0), vec![TimeSlot::Morning]);
        assert_eq!(schedule_for(5), vec![TimeSlot::Morning]);
        assert_eq!(schedule_for(99), vec![TimeSlot::Morning]);
    }
}
