//! Schedule plan model.
//!
//! This module contains the [`SchedulePlan`] and [`PlanKind`] types
//! describing one rotation plan: its calendar anchoring, duration,
//! employment fraction, tariff agreement, and its relationship to a
//! parent plan when the rotation pattern is borrowed.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of a schedule plan.
///
/// The kind decides which zone sets and rules apply: holiday zones are
/// built only for calendar-concrete plans (dependent and annual), and the
/// compensation-day check applies only to dependent plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// A basic repeating rotation (grunnturnus), judged as an abstract pattern.
    Primary,
    /// A helper plan (hjelpeturnus) borrowing its pattern from a parent plan.
    Dependent,
    /// A calendar-year plan (kalenderplan) with its own concrete rotation.
    Annual,
}

/// A rotation plan anchored to the calendar.
///
/// Week 0 day 0 of the rotation grid is the Monday on or before the start
/// date, so a plan starting mid-week still projects onto Monday-first weeks.
///
/// # Examples
///
/// ```
/// use turnus_engine::models::{PlanKind, SchedulePlan};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let plan = SchedulePlan {
///     id: "plan_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(), // Wednesday
///     duration_weeks: 6,
///     work_percent: Decimal::new(100, 0),
///     tariff_id: "ks".to_string(),
///     kind: PlanKind::Primary,
///     parent_plan_id: None,
/// };
/// assert_eq!(plan.anchor_monday(), NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
/// assert_eq!(plan.end_date(), NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePlan {
    /// Unique identifier for the plan.
    pub id: String,
    /// The nominal start date of the plan.
    pub start_date: NaiveDate,
    /// The rotation length in weeks.
    pub duration_weeks: u32,
    /// The employment fraction in percent (0 to 100).
    pub work_percent: Decimal,
    /// The tariff agreement identifier (e.g., "ks", "spekter", "staten").
    pub tariff_id: String,
    /// The plan kind.
    pub kind: PlanKind,
    /// The parent plan whose rotation this plan borrows, if any.
    #[serde(default)]
    pub parent_plan_id: Option<String>,
}

impl SchedulePlan {
    /// Returns the Monday on or before the start date.
    ///
    /// This is the date of week 0, day 0 in the rotation grid.
    pub fn anchor_monday(&self) -> NaiveDate {
        anchor_monday(self.start_date)
    }

    /// Returns the last date covered by the rotation grid (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.anchor_monday() + Duration::days(i64::from(self.duration_weeks) * 7 - 1)
    }

    /// Checks if a date falls within the plan's grid period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.duration_weeks > 0 && date >= self.anchor_monday() && date <= self.end_date()
    }

    /// Returns true if public-holiday zones apply to this plan kind.
    ///
    /// Primary rotations are abstract repeating patterns; only the
    /// calendar-concrete kinds are matched against holiday dates.
    pub fn includes_holiday_zones(&self) -> bool {
        matches!(self.kind, PlanKind::Dependent | PlanKind::Annual)
    }

    /// Returns the work percentage as a fraction (e.g., 80% becomes 0.8).
    pub fn work_fraction(&self) -> Decimal {
        self.work_percent / Decimal::new(100, 0)
    }
}

/// Returns the Monday on or before the given date.
pub fn anchor_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}
