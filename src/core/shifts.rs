//! Who is on duty right now (the shift-ticker logic).

use crate::models::shift::{Shift, ShiftType};
use chrono::{NaiveDateTime, Timelike};

/// Night runs 20:00 → 08:00. Early-morning hours still query today's date:
/// extracted schedules carry the date written on the paper.
pub fn shift_type_at(now: NaiveDateTime) -> ShiftType {
    let hour = now.hour();
    if hour >= 20 || hour < 8 {
        ShiftType::Night
    } else {
        ShiftType::Day
    }
}

/// Shifts active at `now`: today's entries tagged with the current period,
/// falling back to anyone assigned to today when no entry carries a tag.
pub fn on_duty(shifts: &[Shift], now: NaiveDateTime) -> (ShiftType, Vec<Shift>) {
    let period = shift_type_at(now);
    let today = now.date();

    let tagged: Vec<Shift> = shifts
        .iter()
        .filter(|s| s.date == today && s.shift_type == Some(period))
        .cloned()
        .collect();

    if !tagged.is_empty() {
        return (period, tagged);
    }

    let any_today = shifts.iter().filter(|s| s.date == today).cloned().collect();
    (period, any_today)
}
