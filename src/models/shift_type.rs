//! Shift type model.
//!
//! This module defines the [`ShiftType`] struct describing a reusable shift
//! template: a named clock-time interval referenced from rotation entries,
//! or a baseline marker (rest day, compensation day) without clock times.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A shift template referenced by rotation entries.
///
/// Working shifts carry clock start/end times; baseline markers (F1/F3/F5
/// style rest and compensation codes, vacation markers) carry none and
/// never contribute worked hours.
///
/// # Examples
///
/// ```
/// use turnus_engine::models::ShiftType;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let night = ShiftType {
///     id: "n1".to_string(),
///     name: "Natt".to_string(),
///     start: NaiveTime::from_hms_opt(22, 0, 0),
///     end: NaiveTime::from_hms_opt(6, 0, 0),
///     is_baseline: false,
/// };
/// assert!(night.is_night());
/// assert_eq!(night.duration_hours(), Decimal::new(80, 1)); // 8.0
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftType {
    /// Unique identifier for the shift type.
    pub id: String,
    /// The human-readable name (e.g., "Dag", "Kveld", "Natt", "F3").
    pub name: String,
    /// The clock start time; absent for rest/compensation markers.
    pub start: Option<NaiveTime>,
    /// The clock end time; absent for rest/compensation markers.
    pub end: Option<NaiveTime>,
    /// Whether this is a built-in baseline marker rather than a working shift.
    #[serde(default)]
    pub is_baseline: bool,
}

impl ShiftType {
    /// Returns true if this is a working shift with both clock times set.
    pub fn is_working(&self) -> bool {
        !self.is_baseline && self.start.is_some() && self.end.is_some()
    }

    /// Returns true if the shift crosses midnight (end clock before start clock).
    pub fn is_night(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if e < s)
    }

    /// Calculates the shift duration in hours.
    ///
    /// A night shift wraps past midnight, so its duration is counted across
    /// the day boundary. Markers without clock times have zero duration.
    pub fn duration_hours(&self) -> Decimal {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Decimal::ZERO;
        };

        let minutes = if end >= start {
            (end - start).num_minutes()
        } else {
            24 * 60 - (start - end).num_minutes()
        };

        Decimal::new(minutes, 0) / Decimal::new(60, 0)
    }

    /// Finds a shift type by id in a slice.
    pub fn find<'a>(shifts: &'a [ShiftType], id: &str) -> Option<&'a ShiftType> {
        shifts.iter().find(|s| s.id == id)
    }
}
