//! Calculation logic for the turnus compliance engine.
//!
//! This module contains the calendar and interval machinery the rules are
//! built on: projection of rotation grids onto absolute dates, concrete
//! shift occurrences, the Norwegian holiday calendar, Sunday and holiday
//! zone construction with merging and night-clipping, overlap and
//! night-credit arithmetic, 24-hour coverage detection, and the aggregated
//! work summary.

mod coverage;
mod holidays;
mod occurrence;
mod overlap;
mod projection;
mod work_summary;
mod zones;

pub use coverage::covers_full_day;
pub use holidays::{Holiday, easter_sunday, holidays_for_year, holidays_in_range};
pub use occurrence::{ShiftOccurrence, build_occurrence, build_occurrences};
pub use overlap::{ZoneCredit, hours_between, night_hours_between, overlap_hours, zone_credit};
pub use projection::{date_for, effective_rotation, week_offset};
pub use work_summary::{WorkSummary, statutory_night_window, summarize};
pub use zones::{SpecialZone, ZoneKind, build_zones};
