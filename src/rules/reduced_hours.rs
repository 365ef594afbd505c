//! Reduced weekly-hours qualification rule.
//!
//! Norwegian tariff agreements grant a reduced weekly-hours ceiling to
//! rosters with sufficiently burdensome patterns. Two independent paths
//! exist: the continuous-roster path (24-hour coverage, regular Sunday
//! work, and a minimum share of non-night hours) reduces the ceiling
//! below 35.5 h using earned night and zone credit, while the lighter
//! shift-work path (night average or Sunday regularity) caps it at
//! 35.5 h. The rule then verifies the rotation's actual average against
//! the allowed ceiling.
//!
//! Options read: `sunday_ratio`, `sunday_tolerance`, `min_non_night_percent`,
//! `night_average_threshold`, `vacation_reduces_hours`, `other_reduces_hours`.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{
    build_occurrences, build_zones, effective_rotation, summarize, week_offset,
};
use crate::models::{CheckResult, PlanKind, Violation};

use super::context::CheckContext;

/// Rule identifier carried on every result of this check.
pub const REDUCED_HOURS_RULE_ID: &str = "reduced_weekly_hours";

/// Default "one worked Sunday in every N" denominator.
pub const DEFAULT_SUNDAY_RATIO: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Default tolerance subtracted from the Sunday worked-fraction requirement.
pub const DEFAULT_SUNDAY_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Default minimum percentage of worked hours outside the night window.
pub const DEFAULT_MIN_NON_NIGHT_PERCENT: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Default required weekly average of 20:00-06:00 night hours.
pub const DEFAULT_NIGHT_AVERAGE_THRESHOLD: Decimal = Decimal::from_parts(139, 0, 0, false, 2);

/// Full-time weekly hours before any reduction.
pub const FULL_WEEKLY_HOURS: Decimal = Decimal::from_parts(375, 0, 0, false, 1);

/// Weekly ceiling for shift work on the lighter qualification path.
pub const SHIFT_WEEKLY_HOURS: Decimal = Decimal::from_parts(355, 0, 0, false, 1);

/// Weekly floor for continuous-roster work on the stricter path.
pub const CONTINUOUS_WEEKLY_HOURS: Decimal = Decimal::from_parts(336, 0, 0, false, 1);

/// Credit rate applied to tariff night hours.
pub const NIGHT_CREDIT_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

/// Evaluates the Sunday-frequency clause.
///
/// The clause asks for one worked Sunday in every `ratio` Sundays. It holds
/// when the worked fraction reaches `1/ratio` minus the tolerance, or when
/// the worked count reaches `floor(total / ratio)`. With zero Sundays in
/// range the clause fails rather than holding vacuously.
pub fn sunday_frequency_holds(
    worked: usize,
    total: usize,
    ratio: Decimal,
    tolerance: Decimal,
) -> bool {
    if total == 0 || ratio <= Decimal::ZERO {
        return false;
    }

    let worked_dec = Decimal::from(worked as u64);
    let total_dec = Decimal::from(total as u64);

    let required_fraction = Decimal::ONE / ratio - tolerance;
    if worked_dec / total_dec >= required_fraction {
        return true;
    }

    worked_dec >= (total_dec / ratio).floor()
}

/// Computes the allowed weekly-hours ceiling.
///
/// For a continuous-qualifying roster the full-time base of 37.5 h is
/// reduced by the earned night and zone credit per week, clamped into
/// `[33.6, 35.5]` scaled by the work fraction. A roster qualifying only
/// for shift work gets a flat 35.5 h scaled ceiling; otherwise the
/// unreduced base applies. `weeks` at or below zero leaves the base
/// untouched.
///
/// # Examples
///
/// ```
/// use turnus_engine::rules::weekly_hours_ceiling;
/// use rust_decimal::Decimal;
///
/// // A 100% position qualifying for neither path keeps 37.5 h.
/// let ceiling = weekly_hours_ceiling(
///     false,
///     false,
///     Decimal::ONE,
///     Decimal::ZERO,
///     Decimal::ZERO,
///     Decimal::new(4, 0),
/// );
/// assert_eq!(ceiling, Decimal::new(375, 1));
/// ```
pub fn weekly_hours_ceiling(
    qualifies_continuous: bool,
    qualifies_shift_work: bool,
    work_fraction: Decimal,
    tariff_night_hours: Decimal,
    zone_hours: Decimal,
    weeks: Decimal,
) -> Decimal {
    let base = FULL_WEEKLY_HOURS * work_fraction;
    if weeks <= Decimal::ZERO {
        return base;
    }

    if qualifies_continuous {
        let zone_rate = Decimal::new(10, 0) / Decimal::new(60, 0);
        let reduction =
            (tariff_night_hours * NIGHT_CREDIT_RATE + zone_hours * zone_rate * work_fraction)
                / weeks;
        let candidate = base - reduction;

        let lower = CONTINUOUS_WEEKLY_HOURS * work_fraction;
        let upper = SHIFT_WEEKLY_HOURS * work_fraction;
        candidate.clamp(lower, upper)
    } else if qualifies_shift_work {
        SHIFT_WEEKLY_HOURS * work_fraction
    } else {
        base
    }
}

/// Runs the reduced weekly-hours check for a plan.
///
/// A dependent plan whose own grid yields no occurrences is evaluated
/// against its parent's pattern projected onto the plan's own weeks. An
/// unknown tariff agreement yields a warning; degenerate inputs (zero
/// weeks, all-rest rotations) pass with an explanatory message.
pub fn check_reduced_hours(ctx: &CheckContext<'_>) -> CheckResult {
    let plan = ctx.plan;
    debug!(
        plan_id = %plan.id,
        tariff = %plan.tariff_id,
        "Evaluating reduced weekly-hours qualification"
    );

    let window = match ctx.tariffs.night_window(&plan.tariff_id) {
        Ok(window) => window,
        Err(err) => {
            warn!(plan_id = %plan.id, error = %err, "Tariff agreement not available");
            return CheckResult::warning(
                REDUCED_HOURS_RULE_ID,
                format!("Rule not evaluable: {}", err),
            );
        }
    };

    if plan.duration_weeks == 0 {
        return CheckResult::pass(
            REDUCED_HOURS_RULE_ID,
            "No qualifying work found: the plan covers zero weeks",
        );
    }

    let policy = ctx.overlay_policy();
    let anchor = plan.anchor_monday();

    let mut occurrences = build_occurrences(anchor, ctx.entries, ctx.shifts, &policy);
    let mut active_shifts = ctx.shifts;

    // A dependent plan with an empty grid borrows its parent's pattern,
    // projected onto the plan's own weeks.
    if occurrences.is_empty() && plan.kind == PlanKind::Dependent {
        if let (Some(parent_plan), Some(parent_entries), Some(parent_shifts)) =
            (ctx.parent_plan, ctx.parent_entries, ctx.parent_shifts)
        {
            let offset = week_offset(
                plan.start_date,
                parent_plan.start_date,
                parent_plan.duration_weeks,
            );
            let effective = effective_rotation(
                parent_entries,
                parent_plan.duration_weeks,
                offset,
                plan.duration_weeks,
            );
            occurrences = build_occurrences(anchor, &effective, parent_shifts, &policy);
            active_shifts = parent_shifts;
        }
    }

    let zones = build_zones(
        anchor,
        plan.end_date(),
        plan.includes_holiday_zones(),
        window,
    );
    let summary = summarize(&occurrences, &zones, active_shifts, window);

    if summary.worked_hours <= Decimal::ZERO {
        return CheckResult::pass(
            REDUCED_HOURS_RULE_ID,
            "No qualifying work found in the rotation",
        );
    }

    let weeks = Decimal::from(plan.duration_weeks);

    let ratio = ctx.options.number_or("sunday_ratio", DEFAULT_SUNDAY_RATIO);
    let tolerance = ctx
        .options
        .number_or("sunday_tolerance", DEFAULT_SUNDAY_TOLERANCE);
    let sunday_ok =
        sunday_frequency_holds(summary.sunday_zones_worked, summary.sunday_zones, ratio, tolerance);

    let min_non_night = ctx
        .options
        .number_or("min_non_night_percent", DEFAULT_MIN_NON_NIGHT_PERCENT);
    let non_night_share = (summary.worked_hours - summary.tariff_night_hours)
        / summary.worked_hours
        * Decimal::ONE_HUNDRED;
    let non_night_ok = non_night_share >= min_non_night;

    let night_threshold = ctx
        .options
        .number_or("night_average_threshold", DEFAULT_NIGHT_AVERAGE_THRESHOLD);
    let night_average_ok = summary.statutory_night_hours / weeks >= night_threshold;

    let qualifies_continuous = summary.covers_full_day && sunday_ok && non_night_ok;
    let qualifies_shift_work = night_average_ok || sunday_ok;

    let ceiling = weekly_hours_ceiling(
        qualifies_continuous,
        qualifies_shift_work,
        plan.work_fraction(),
        summary.tariff_night_hours,
        summary.zone_hours,
        weeks,
    );

    let average = summary.worked_hours / weeks;

    let mut result = if average > ceiling {
        let excess = average - ceiling;
        let mut result = CheckResult::fail(
            REDUCED_HOURS_RULE_ID,
            format!(
                "Average {} h/week exceeds the allowed {} h ceiling",
                average.round_dp(2),
                ceiling.round_dp(2)
            ),
        );
        result.violations.push(Violation::general(format!(
            "Average exceeds the ceiling by {} h per week ({} h over {} weeks)",
            excess.round_dp(2),
            (excess * weeks).round_dp(2),
            plan.duration_weeks
        )));
        result
    } else {
        CheckResult::pass(
            REDUCED_HOURS_RULE_ID,
            format!(
                "Average {} h/week is within the allowed {} h ceiling",
                average.round_dp(2),
                ceiling.round_dp(2)
            ),
        )
    };

    result.details.push(format!(
        "Worked hours: {} ({} h/week over {} weeks)",
        summary.worked_hours.round_dp(2),
        average.round_dp(2),
        plan.duration_weeks
    ));
    result.details.push(format!(
        "Night hours: {} in the tariff window, {} in the 20:00-06:00 window",
        summary.tariff_night_hours.round_dp(2),
        summary.statutory_night_hours.round_dp(2)
    ));
    result.details.push(format!(
        "Sunday/holiday zone hours after night subtraction: {}",
        summary.zone_hours.round_dp(2)
    ));
    result.details.push(format!(
        "Sundays worked: {} of {}",
        summary.sunday_zones_worked, summary.sunday_zones
    ));
    result.details.push(format!(
        "24-hour coverage: {}",
        if summary.covers_full_day { "yes" } else { "no" }
    ));
    result.details.push(format!(
        "Qualifies for continuous-roster reduction: {}",
        if qualifies_continuous { "yes" } else { "no" }
    ));
    result.details.push(format!(
        "Qualifies for shift-work reduction: {}",
        if qualifies_shift_work { "yes" } else { "no" }
    ));
    result
        .details
        .push(format!("Allowed weekly ceiling: {} h", ceiling.round_dp(2)));

    info!(
        plan_id = %plan.id,
        status = %result.status,
        worked_hours = %summary.worked_hours,
        ceiling = %ceiling,
        "Reduced weekly-hours check completed"
    );
    result
}
