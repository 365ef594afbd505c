//! Norwegian public holiday calendar.
//!
//! Fixed-date holidays plus the movable feasts derived from Easter Sunday.
//! Easter is computed with the anonymous Gregorian algorithm, which is exact
//! for all Gregorian years.

use chrono::{Duration, NaiveDate};

/// A public holiday on a specific date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: NaiveDate,
    /// Norwegian name of the holiday.
    pub name: &'static str,
}

/// Computes Easter Sunday for a Gregorian year.
///
/// # Examples
///
/// ```
/// use turnus_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2025), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    // Anonymous Gregorian computus.
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The computus always yields a valid March or April date.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).expect("Valid Easter date")
}

/// Returns all Norwegian public holidays of a year, in date order.
pub fn holidays_for_year(year: i32) -> Vec<Holiday> {
    let easter = easter_sunday(year);
    let fixed = |month: u32, day: u32, name: &'static str| Holiday {
        date: NaiveDate::from_ymd_opt(year, month, day).expect("Valid holiday date"),
        name,
    };
    let movable = |offset: i64, name: &'static str| Holiday {
        date: easter + Duration::days(offset),
        name,
    };

    let mut holidays = vec![
        fixed(1, 1, "Første nyttårsdag"),
        movable(-3, "Skjærtorsdag"),
        movable(-2, "Langfredag"),
        movable(0, "Første påskedag"),
        movable(1, "Andre påskedag"),
        fixed(5, 1, "Arbeidernes dag"),
        fixed(5, 17, "Grunnlovsdag"),
        movable(39, "Kristi himmelfartsdag"),
        movable(49, "Første pinsedag"),
        movable(50, "Andre pinsedag"),
        fixed(12, 25, "Første juledag"),
        fixed(12, 26, "Andre juledag"),
    ];
    holidays.sort_by_key(|h| h.date);
    holidays
}

/// Returns the holidays falling within `[from, to]`, inclusive on both ends.
pub fn holidays_in_range(from: NaiveDate, to: NaiveDate) -> Vec<Holiday> {
    use chrono::Datelike;

    if from > to {
        return Vec::new();
    }

    (from.year()..=to.year())
        .flat_map(holidays_for_year)
        .filter(|h| h.date >= from && h.date <= to)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    /// HO-001: Easter dates across a spread of years
    #[test]
    fn test_easter_sunday_known_years() {
        assert_eq!(easter_sunday(2024), make_date("2024-03-31"));
        assert_eq!(easter_sunday(2025), make_date("2025-04-20"));
        assert_eq!(easter_sunday(2026), make_date("2026-04-05"));
        assert_eq!(easter_sunday(2027), make_date("2027-03-28"));
        assert_eq!(easter_sunday(2038), make_date("2038-04-25")); // latest possible
    }

    /// HO-002: a year has exactly twelve public holidays
    #[test]
    fn test_holidays_for_year_count() {
        let holidays = holidays_for_year(2026);
        assert_eq!(holidays.len(), 12);

        // Sorted ascending; no two feasts coincide in 2026. (They can in
        // other years: 2027 puts Andre pinsedag on 17 May.)
        for pair in holidays.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    /// HO-003: the movable feasts track Easter
    #[test]
    fn test_movable_feasts_2026() {
        let holidays = holidays_for_year(2026);
        let find = |name: &str| holidays.iter().find(|h| h.name == name).unwrap().date;

        assert_eq!(find("Skjærtorsdag"), make_date("2026-04-02"));
        assert_eq!(find("Langfredag"), make_date("2026-04-03"));
        assert_eq!(find("Første påskedag"), make_date("2026-04-05"));
        assert_eq!(find("Andre påskedag"), make_date("2026-04-06"));
        assert_eq!(find("Kristi himmelfartsdag"), make_date("2026-05-14"));
        assert_eq!(find("Første pinsedag"), make_date("2026-05-24"));
        assert_eq!(find("Andre pinsedag"), make_date("2026-05-25"));
    }

    /// HO-004: fixed holidays carry their Norwegian names
    #[test]
    fn test_fixed_holidays() {
        let holidays = holidays_for_year(2026);
        let find = |date: &str| holidays.iter().find(|h| h.date == make_date(date));

        assert_eq!(find("2026-01-01").unwrap().name, "Første nyttårsdag");
        assert_eq!(find("2026-05-01").unwrap().name, "Arbeidernes dag");
        assert_eq!(find("2026-05-17").unwrap().name, "Grunnlovsdag");
        assert_eq!(find("2026-12-25").unwrap().name, "Første juledag");
        assert_eq!(find("2026-12-26").unwrap().name, "Andre juledag");
    }

    /// HO-005: range filtering is inclusive and crosses year boundaries
    #[test]
    fn test_holidays_in_range() {
        let range = holidays_in_range(make_date("2025-12-26"), make_date("2026-01-01"));
        assert_eq!(range.len(), 2);
        assert_eq!(range[0].name, "Andre juledag");
        assert_eq!(range[1].name, "Første nyttårsdag");

        let empty = holidays_in_range(make_date("2026-06-01"), make_date("2026-06-30"));
        assert!(empty.is_empty());

        let inverted = holidays_in_range(make_date("2026-02-01"), make_date("2026-01-01"));
        assert!(inverted.is_empty());
    }
}
