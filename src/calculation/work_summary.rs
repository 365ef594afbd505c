//! Aggregation of worked, night, and zone hours over a plan period.
//!
//! Produces the per-invocation figures the qualification rule consumes:
//! total worked hours, night hours against both the tariff window and the
//! fixed statutory window, zone hours after night subtraction, Sunday zone
//! counts, and whether the roster's shifts cover the full day.

use std::collections::HashSet;

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::{NightWindow, ShiftType};

use super::coverage::covers_full_day;
use super::occurrence::ShiftOccurrence;
use super::overlap::{night_hours_between, zone_credit};
use super::zones::{SpecialZone, ZoneKind};

/// Aggregated hour figures for one plan period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSummary {
    /// Total worked hours across all occurrences.
    pub worked_hours: Decimal,
    /// Hours inside the tariff's night window.
    pub tariff_night_hours: Decimal,
    /// Hours inside the fixed statutory 20:00-06:00 night window.
    pub statutory_night_hours: Decimal,
    /// Zone hours after the night portion has been subtracted.
    pub zone_hours: Decimal,
    /// Number of Sunday zones in the period.
    pub sunday_zones: usize,
    /// Number of Sunday zones with any worked overlap.
    pub sunday_zones_worked: usize,
    /// Whether the referenced shift types jointly cover the 24-hour day.
    pub covers_full_day: bool,
}

/// The fixed statutory night window, 20:00 to 06:00.
pub fn statutory_night_window() -> NightWindow {
    NightWindow {
        start: NaiveTime::from_hms_opt(20, 0, 0).expect("Valid night window time"),
        end: NaiveTime::from_hms_opt(6, 0, 0).expect("Valid night window time"),
    }
}

/// Aggregates occurrences against the zone set and night windows.
///
/// Each hour is credited exactly once: within any zone overlap, the portion
/// inside the tariff night window is counted as night hours, and only the
/// remainder lands in `zone_hours`. A Sunday zone counts as worked when any
/// occurrence overlaps it at all.
pub fn summarize(
    occurrences: &[ShiftOccurrence],
    zones: &[SpecialZone],
    shifts: &[ShiftType],
    window: NightWindow,
) -> WorkSummary {
    let statutory = statutory_night_window();

    let mut worked_hours = Decimal::ZERO;
    let mut tariff_night_hours = Decimal::ZERO;
    let mut statutory_night_hours = Decimal::ZERO;
    for occurrence in occurrences {
        worked_hours += occurrence.hours();
        tariff_night_hours += night_hours_between(occurrence.start, occurrence.end, window);
        statutory_night_hours += night_hours_between(occurrence.start, occurrence.end, statutory);
    }

    let mut zone_hours = Decimal::ZERO;
    let mut sunday_zones = 0;
    let mut sunday_zones_worked = 0;
    for zone in zones {
        let mut zone_total = Decimal::ZERO;
        for occurrence in occurrences {
            let credit = zone_credit(occurrence.start, occurrence.end, zone.start, zone.end, window);
            zone_total += credit.total;
            zone_hours += credit.zone;
        }
        if zone.kind == ZoneKind::Sunday {
            sunday_zones += 1;
            if zone_total > Decimal::ZERO {
                sunday_zones_worked += 1;
            }
        }
    }

    let referenced: HashSet<&str> = occurrences.iter().map(|o| o.shift_id.as_str()).collect();
    let referenced_shifts: Vec<&ShiftType> = shifts
        .iter()
        .filter(|s| referenced.contains(s.id.as_str()))
        .collect();

    WorkSummary {
        worked_hours,
        tariff_night_hours,
        statutory_night_hours,
        zone_hours,
        sunday_zones,
        sunday_zones_worked,
        covers_full_day: covers_full_day(&referenced_shifts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::occurrence::build_occurrence;
    use crate::calculation::zones::build_zones;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn shift(id: &str, start: &str, end: &str) -> ShiftType {
        ShiftType {
            id: id.to_string(),
            name: id.to_uppercase(),
            start: Some(make_time(start)),
            end: Some(make_time(end)),
            is_baseline: false,
        }
    }

    fn ks_window() -> NightWindow {
        NightWindow {
            start: make_time("21:00"),
            end: make_time("06:00"),
        }
    }

    /// WS-001: a weekday day shift earns no night or zone hours
    #[test]
    fn test_weekday_day_shift() {
        let day = shift("d1", "07:00", "15:00");
        let shifts = vec![day.clone()];
        let occurrences = vec![build_occurrence(&day, make_date("2026-01-05")).unwrap()];
        let zones = build_zones(
            make_date("2026-01-05"),
            make_date("2026-01-11"),
            false,
            ks_window(),
        );

        let summary = summarize(&occurrences, &zones, &shifts, ks_window());

        assert_eq!(summary.worked_hours, dec("8"));
        assert_eq!(summary.tariff_night_hours, Decimal::ZERO);
        assert_eq!(summary.statutory_night_hours, Decimal::ZERO);
        assert_eq!(summary.zone_hours, Decimal::ZERO);
        assert_eq!(summary.sunday_zones, 1);
        assert_eq!(summary.sunday_zones_worked, 0);
        assert!(!summary.covers_full_day);
    }

    /// WS-002: a 22:00-06:00 night into Sunday is all night credit, no zone credit
    #[test]
    fn test_sunday_night_shift_no_zone_credit() {
        let night = shift("n1", "22:00", "06:00");
        let shifts = vec![night.clone()];
        // Sunday 2026-01-11 cell, so the occurrence runs Saturday 22:00 onward.
        let occurrences = vec![build_occurrence(&night, make_date("2026-01-11")).unwrap()];
        let zones = build_zones(
            make_date("2026-01-05"),
            make_date("2026-01-11"),
            false,
            ks_window(),
        );

        let summary = summarize(&occurrences, &zones, &shifts, ks_window());

        assert_eq!(summary.worked_hours, dec("8"));
        assert_eq!(summary.tariff_night_hours, dec("8"));
        assert_eq!(summary.zone_hours, Decimal::ZERO);
        assert_eq!(summary.sunday_zones_worked, 1);
    }

    /// WS-003: hours past the night window become zone hours
    #[test]
    fn test_sunday_late_night_shift_splits() {
        let night = shift("n2", "23:00", "07:00");
        let shifts = vec![night.clone()];
        let occurrences = vec![build_occurrence(&night, make_date("2026-01-11")).unwrap()];
        let zones = build_zones(
            make_date("2026-01-05"),
            make_date("2026-01-11"),
            false,
            ks_window(),
        );

        let summary = summarize(&occurrences, &zones, &shifts, ks_window());

        // 23:00-06:00 is night; 06:00-07:00 remains Sunday zone credit.
        assert_eq!(summary.worked_hours, dec("8"));
        assert_eq!(summary.tariff_night_hours, dec("7"));
        assert_eq!(summary.zone_hours, dec("1"));
        assert_eq!(summary.sunday_zones_worked, 1);
    }

    /// WS-004: statutory and tariff night windows count separately
    #[test]
    fn test_statutory_window_differs_from_tariff() {
        let evening = shift("e1", "15:00", "23:00");
        let shifts = vec![evening.clone()];
        let occurrences = vec![build_occurrence(&evening, make_date("2026-01-05")).unwrap()];

        let summary = summarize(&occurrences, &[], &shifts, ks_window());

        assert_eq!(summary.worked_hours, dec("8"));
        assert_eq!(summary.tariff_night_hours, dec("2"));
        assert_eq!(summary.statutory_night_hours, dec("3"));
    }

    /// WS-005: coverage reflects the referenced shift types
    #[test]
    fn test_coverage_from_referenced_shifts() {
        let day = shift("d1", "07:00", "15:00");
        let evening = shift("e1", "15:00", "22:00");
        let night = shift("n1", "22:00", "07:00");
        let shifts = vec![day.clone(), evening.clone(), night.clone()];

        let occurrences = vec![
            build_occurrence(&day, make_date("2026-01-05")).unwrap(),
            build_occurrence(&evening, make_date("2026-01-06")).unwrap(),
            build_occurrence(&night, make_date("2026-01-08")).unwrap(),
        ];

        let summary = summarize(&occurrences, &[], &shifts, ks_window());
        assert!(summary.covers_full_day);

        // Without the night shift the clock has a hole.
        let partial = vec![
            build_occurrence(&day, make_date("2026-01-05")).unwrap(),
            build_occurrence(&evening, make_date("2026-01-06")).unwrap(),
        ];
        let summary = summarize(&partial, &[], &shifts, ks_window());
        assert!(!summary.covers_full_day);
    }

    /// WS-006: no occurrences produces a zeroed summary
    #[test]
    fn test_empty_occurrences() {
        let shifts = vec![shift("d1", "07:00", "15:00")];
        let zones = build_zones(
            make_date("2026-01-05"),
            make_date("2026-01-18"),
            false,
            ks_window(),
        );

        let summary = summarize(&[], &zones, &shifts, ks_window());

        assert_eq!(summary.worked_hours, Decimal::ZERO);
        assert_eq!(summary.sunday_zones, 2);
        assert_eq!(summary.sunday_zones_worked, 0);
        assert!(!summary.covers_full_day);
    }
}
