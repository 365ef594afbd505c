//! Round-the-clock coverage detection.
//!
//! Checks whether a set of shift clock-intervals jointly covers the full
//! 24-hour day. Each interval is reduced to minute ranges within a single
//! day, with midnight-crossing shifts split into an evening piece and a
//! morning piece, and the union must leave no gap.

use chrono::Timelike;

use crate::models::ShiftType;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Returns true when the shifts' clock-intervals cover the whole day.
///
/// Adjacent intervals count as connected, so a roster of 07:00-15:00,
/// 15:00-22:00 and 22:00-07:00 covers the day. Shifts without clock times
/// contribute nothing.
pub fn covers_full_day(shifts: &[&ShiftType]) -> bool {
    let mut ranges: Vec<(u32, u32)> = Vec::new();

    for shift in shifts {
        if !shift.is_working() {
            continue;
        }
        let (Some(start), Some(end)) = (shift.start, shift.end) else {
            continue;
        };

        let start_minute = minute_of_day(start);
        let end_minute = minute_of_day(end);

        if start_minute < end_minute {
            ranges.push((start_minute, end_minute));
        } else if start_minute > end_minute {
            ranges.push((start_minute, MINUTES_PER_DAY));
            if end_minute > 0 {
                ranges.push((0, end_minute));
            }
        }
    }

    if ranges.is_empty() {
        return false;
    }

    ranges.sort();

    let (merged_start, mut merged_end) = ranges[0];
    for &(start, end) in &ranges[1..] {
        if start <= merged_end {
            merged_end = merged_end.max(end);
        } else {
            // A gap before the full day is closed means no coverage.
            return false;
        }
    }

    merged_start == 0 && merged_end == MINUTES_PER_DAY
}

fn minute_of_day(time: chrono::NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
