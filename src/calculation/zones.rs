//! Sunday and holiday zone construction.
//!
//! Builds the credit-bearing calendar intervals for a date range: one zone
//! per Sunday (starting Saturday evening) and, for plan kinds that require
//! them, one zone per public holiday. Overlapping zones are merged and zone
//! ends are clipped back to the night-window start so zone credit and night
//! credit never apply to the same instant.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::NightWindow;

use super::holidays::holidays_in_range;

/// Classifies a special zone for rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    /// A Sunday zone, opened the previous Saturday evening.
    Sunday,
    /// A public holiday zone.
    Holiday,
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneKind::Sunday => write!(f, "Sunday"),
            ZoneKind::Holiday => write!(f, "Holiday"),
        }
    }
}

/// A credit-bearing calendar interval `[start, end)`.
///
/// After [`build_zones`] the set is sorted by start, pairwise non-overlapping,
/// and every end instant lies at or before the night-window start of its end
/// date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialZone {
    /// Whether the zone is a Sunday or a holiday.
    pub kind: ZoneKind,
    /// The representative date of the zone (the Sunday or holiday itself).
    pub date: NaiveDate,
    /// Display name, e.g. `Sunday` or a holiday name such as `Langfredag`.
    pub name: String,
    /// Start of the interval.
    pub start: NaiveDateTime,
    /// End of the interval.
    pub end: NaiveDateTime,
}

/// Builds the merged, night-clipped zone set for an inclusive date range.
///
/// Sunday zones are emitted as unclipped placeholders from Saturday 18:00 to
/// Sunday 23:59 and rely on the clip step for their final end. Holiday zones
/// run from midnight to 22:00 on the holiday and are only emitted when
/// `include_holidays` is set.
pub fn build_zones(
    from: NaiveDate,
    to: NaiveDate,
    include_holidays: bool,
    window: NightWindow,
) -> Vec<SpecialZone> {
    if from > to {
        return Vec::new();
    }

    let mut zones = Vec::new();

    let placeholder_start = NaiveTime::from_hms_opt(18, 0, 0).expect("Valid zone time");
    let placeholder_end = NaiveTime::from_hms_opt(23, 59, 0).expect("Valid zone time");
    for sunday in sundays_between(from, to) {
        zones.push(SpecialZone {
            kind: ZoneKind::Sunday,
            date: sunday,
            name: "Sunday".to_string(),
            start: (sunday - Duration::days(1)).and_time(placeholder_start),
            end: sunday.and_time(placeholder_end),
        });
    }

    if include_holidays {
        let holiday_end = NaiveTime::from_hms_opt(22, 0, 0).expect("Valid zone time");
        for holiday in holidays_in_range(from, to) {
            zones.push(SpecialZone {
                kind: ZoneKind::Holiday,
                date: holiday.date,
                name: holiday.name.to_string(),
                start: holiday
                    .date
                    .and_hms_opt(0, 0, 0)
                    .expect("Valid midnight time"),
                end: holiday.date.and_time(holiday_end),
            });
        }
    }

    clip_to_night_start(merge_zones(zones), window)
}

/// Returns every Sunday within the inclusive range, ascending.
fn sundays_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let days_to_sunday = 6 - from.weekday().num_days_from_monday();
    let mut sunday = from + Duration::days(i64::from(days_to_sunday));

    let mut sundays = Vec::new();
    while sunday <= to {
        sundays.push(sunday);
        sunday += Duration::days(7);
    }
    sundays
}

/// Folds intersecting zones together, keeping the earliest start and the
/// earliest end.
///
/// Taking the earliest end keeps a holiday's true boundary intact when a
/// Sunday placeholder nominally running to 23:59 overlaps it. A plain Sunday
/// that absorbs a holiday takes over the holiday's name; kind and date stay
/// with the earlier zone.
fn merge_zones(mut zones: Vec<SpecialZone>) -> Vec<SpecialZone> {
    zones.sort_by_key(|z| z.start);

    let mut merged: Vec<SpecialZone> = Vec::new();
    for zone in zones {
        if let Some(last) = merged.last_mut() {
            if zone.start < last.end {
                last.end = last.end.min(zone.end);
                if last.kind == ZoneKind::Sunday && zone.kind == ZoneKind::Holiday {
                    last.name = zone.name;
                }
                continue;
            }
        }
        merged.push(zone);
    }
    merged
}

/// Pulls zone ends back to the night-window start on their end date.
///
/// Zones emptied by the clip are dropped. An empty window defines no night
/// instants, so nothing is clipped.
fn clip_to_night_start(mut zones: Vec<SpecialZone>, window: NightWindow) -> Vec<SpecialZone> {
    if window.is_empty() {
        return zones;
    }

    zones.retain_mut(|zone| {
        let night_start = zone.end.date().and_time(window.start);
        if zone.end > night_start {
            zone.end = night_start;
        }
        zone.start < zone.end
    });
    zones
}
