//! Interval overlap arithmetic.
//!
//! All worked-time credit in the engine reduces to overlaps between half-open
//! datetime intervals `[start, end)`. This module provides the duration and
//! overlap primitives, plus the split of a credited overlap into its night and
//! non-night portions.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::NightWindow;

/// Returns the duration between two datetimes in decimal hours.
///
/// Inverted or empty intervals yield zero.
///
/// # Examples
///
/// ```
/// use turnus_engine::calculation::hours_between;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-05 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-05 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(hours_between(start, end), Decimal::new(75, 1)); // 7.5 hours
/// ```
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    if end <= start {
        return Decimal::ZERO;
    }
    let minutes = (end - start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Returns the overlap between two intervals in decimal hours.
///
/// Disjoint intervals yield zero.
pub fn overlap_hours(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> Decimal {
    hours_between(a_start.max(b_start), a_end.min(b_end))
}

fn overlap_minutes(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> i64 {
    let start = a_start.max(b_start);
    let end = a_end.min(b_end);
    if end <= start { 0 } else { (end - start).num_minutes() }
}

/// Returns the hours of `[start, end)` that fall inside the night window.
///
/// The window repeats every day. A midnight-crossing window contributes two
/// slices per calendar day: the morning tail from midnight to the window end,
/// and the evening head from the window start to the next midnight. An empty
/// window contributes nothing.
pub fn night_hours_between(start: NaiveDateTime, end: NaiveDateTime, window: NightWindow) -> Decimal {
    if window.is_empty() || end <= start {
        return Decimal::ZERO;
    }

    // Whole minutes, divided once at the end. Per-slice division would
    // let rounding push the sum past the duration of the interval itself.
    let mut minutes = 0i64;
    let mut day = start.date();
    while day <= end.date() {
        if window.crosses_midnight() {
            let midnight = day.and_hms_opt(0, 0, 0).expect("Valid midnight time");
            let next_midnight = (day + Duration::days(1))
                .and_hms_opt(0, 0, 0)
                .expect("Valid midnight time");

            minutes += overlap_minutes(start, end, midnight, day.and_time(window.end));
            minutes += overlap_minutes(start, end, day.and_time(window.start), next_midnight);
        } else {
            minutes += overlap_minutes(start, end, day.and_time(window.start), day.and_time(window.end));
        }
        day += Duration::days(1);
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// The credit a worked interval earns against one special zone.
///
/// The invariant `night + zone == total` always holds: an hour inside the
/// zone is credited either as a night hour or as a zone hour, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneCredit {
    /// Hours of the worked interval falling inside the zone.
    pub total: Decimal,
    /// The portion of `total` that also falls inside the night window.
    pub night: Decimal,
    /// The portion of `total` outside the night window.
    pub zone: Decimal,
}

impl ZoneCredit {
    /// A credit of zero hours in every category.
    pub const ZERO: ZoneCredit = ZoneCredit {
        total: Decimal::ZERO,
        night: Decimal::ZERO,
        zone: Decimal::ZERO,
    };
}

/// Splits the overlap of a worked interval with a zone into night and zone hours.
///
/// Night hours already earn the night credit, so they are excluded from the
/// zone portion rather than counted twice.
pub fn zone_credit(
    start: NaiveDateTime,
    end: NaiveDateTime,
    zone_start: NaiveDateTime,
    zone_end: NaiveDateTime,
    window: NightWindow,
) -> ZoneCredit {
    let clipped_start = start.max(zone_start);
    let clipped_end = end.min(zone_end);

    let total = hours_between(clipped_start, clipped_end);
    if total <= Decimal::ZERO {
        return ZoneCredit::ZERO;
    }

    let night = night_hours_between(clipped_start, clipped_end, window);
    ZoneCredit {
        total,
        night,
        zone: total - night,
    }
}
