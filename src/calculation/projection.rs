//! Calendar projection for rotation grids.
//!
//! This module maps (week, day) rotation coordinates onto absolute calendar
//! dates, and projects a parent plan's rotation pattern cyclically onto a
//! dependent plan's own weeks.

use chrono::{Duration, NaiveDate};

use crate::models::{RotationEntry, anchor_monday};

/// Returns the absolute date of a rotation coordinate.
///
/// The anchor is the date of week 0, day 0 (a Monday); days count
/// Monday-first within each week.
///
/// # Examples
///
/// ```
/// use turnus_engine::calculation::date_for;
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(); // Monday
/// let date = date_for(anchor, 1, 2); // week 1, Wednesday
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap());
/// ```
pub fn date_for(anchor: NaiveDate, week: u32, day: u8) -> NaiveDate {
    anchor + Duration::days(i64::from(week) * 7 + i64::from(day))
}

/// Computes the cyclic week offset between a dependent plan and its parent.
///
/// Both start dates are anchored to their Mondays first, so the offset counts
/// whole grid weeks. The result is normalized into `0..parent_weeks`, so a
/// dependent plan starting before its parent wraps into the cycle instead of
/// producing a negative offset.
///
/// # Examples
///
/// ```
/// use turnus_engine::calculation::week_offset;
/// use chrono::NaiveDate;
///
/// let parent = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let dependent = NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(); // 14 days later
/// assert_eq!(week_offset(dependent, parent, 6), 2);
/// ```
pub fn week_offset(dependent_start: NaiveDate, parent_start: NaiveDate, parent_weeks: u32) -> u32 {
    if parent_weeks == 0 {
        return 0;
    }

    let delta_weeks =
        (anchor_monday(dependent_start) - anchor_monday(parent_start)).num_days() / 7;

    delta_weeks.rem_euclid(i64::from(parent_weeks)) as u32
}

/// Projects a parent rotation onto a dependent plan's weeks.
///
/// For each dependent week `w`, the entries of parent week
/// `(w + offset) mod parent_weeks` are cloned and relabeled to week `w`.
/// The result is a materialized rotation with the dependent plan's own
/// length, sourced entirely from the parent's pattern.
pub fn effective_rotation(
    parent_entries: &[RotationEntry],
    parent_weeks: u32,
    offset: u32,
    weeks: u32,
) -> Vec<RotationEntry> {
    if parent_weeks == 0 {
        return Vec::new();
    }

    let mut effective = Vec::new();
    for week in 0..weeks {
        let source_week = (week + offset) % parent_weeks;
        for entry in parent_entries.iter().filter(|e| e.week == source_week) {
            let mut relabeled = entry.clone();
            relabeled.week = week;
            effective.push(relabeled);
        }
    }
    effective
}
