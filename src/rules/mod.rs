//! Compliance rules evaluated against schedule plans.
//!
//! Each rule is a pure function from a [`CheckContext`] to a
//! [`crate::models::CheckResult`]. Rules never return errors: a plan the
//! rule cannot be evaluated for (unknown tariff, wrong plan kind,
//! missing parent data) produces a `Warning` result instead, so one
//! unevaluable rule never aborts a batch of checks. Thresholds and
//! method selections arrive through [`RuleOptions`]; anything not set
//! falls back to the agreement defaults published here.

mod compensation_days;
mod context;
mod options;
mod reduced_hours;

pub use compensation_days::{
    COMPENSATION_DAYS_RULE_ID, CompensationMethod, DEFAULT_SIGNIFICANT_ZONE_HOURS,
    check_compensation_days, required_compensation_days,
};
pub use context::CheckContext;
pub use options::{OptionValue, RuleOptions};
pub use reduced_hours::{
    CONTINUOUS_WEEKLY_HOURS, DEFAULT_MIN_NON_NIGHT_PERCENT, DEFAULT_NIGHT_AVERAGE_THRESHOLD,
    DEFAULT_SUNDAY_RATIO, DEFAULT_SUNDAY_TOLERANCE, FULL_WEEKLY_HOURS, NIGHT_CREDIT_RATE,
    REDUCED_HOURS_RULE_ID, SHIFT_WEEKLY_HOURS, check_reduced_hours, sunday_frequency_holds,
    weekly_hours_ceiling,
};
