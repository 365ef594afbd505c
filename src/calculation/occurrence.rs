//! Concrete shift occurrences on the calendar.
//!
//! A rotation entry is a coordinate in the grid; an occurrence is that entry
//! resolved to a real datetime interval. Shifts that cross midnight are
//! anchored to the date they end on, so a night shift in a Sunday cell covers
//! the night leading into Sunday morning.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{OverlayPolicy, RotationEntry, ShiftType};

use super::projection::date_for;

/// A working shift resolved to an absolute half-open interval `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftOccurrence {
    /// Identifier of the shift type that produced this occurrence.
    pub shift_id: String,
    /// The rotation cell date the occurrence belongs to.
    pub date: NaiveDate,
    /// Absolute start of the worked interval.
    pub start: NaiveDateTime,
    /// Absolute end of the worked interval.
    pub end: NaiveDateTime,
}

impl ShiftOccurrence {
    /// Returns the worked duration in decimal hours.
    pub fn hours(&self) -> Decimal {
        let minutes = (self.end - self.start).num_minutes();
        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }
}

/// Resolves a working shift on a cell date to its datetime interval.
///
/// Returns `None` for shifts without times. For a midnight-crossing shift
/// the interval starts the previous evening and ends on `date`.
pub fn build_occurrence(shift: &ShiftType, date: NaiveDate) -> Option<ShiftOccurrence> {
    let (start_time, end_time) = match (shift.start, shift.end) {
        (Some(s), Some(e)) => (s, e),
        _ => return None,
    };

    let (start, end) = if shift.is_night() {
        let prior = date - Duration::days(1);
        (prior.and_time(start_time), date.and_time(end_time))
    } else {
        (date.and_time(start_time), date.and_time(end_time))
    };

    Some(ShiftOccurrence {
        shift_id: shift.id.clone(),
        date,
        start,
        end,
    })
}

/// Builds the sorted occurrence list for a rotation.
///
/// Each entry is resolved through its overlays first, then projected onto a
/// calendar date relative to the plan anchor. Entries that resolve to no
/// working shift produce no occurrence.
pub fn build_occurrences(
    anchor: NaiveDate,
    entries: &[RotationEntry],
    shifts: &[ShiftType],
    policy: &OverlayPolicy,
) -> Vec<ShiftOccurrence> {
    let mut occurrences: Vec<ShiftOccurrence> = entries
        .iter()
        .filter_map(|entry| {
            let shift = entry.effective_shift(shifts, policy)?;
            build_occurrence(shift, date_for(anchor, entry.week, entry.day))
        })
        .collect();

    occurrences.sort_by_key(|o| o.start);
    occurrences
}
