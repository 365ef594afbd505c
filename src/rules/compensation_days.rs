//! Compensation-day placement rule for dependent plans.
//!
//! A dependent plan (helgeplan, sommerturnus) inherits its work pattern
//! from a parent rotation and places compensation days for the Sunday
//! and holiday work that pattern performs. Agreements phrase the
//! obligation differently, so the rule supports three placement
//! methods: date-anchored (every second significant zone must carry a
//! compensation day on the zone date itself), free placement (enough
//! days somewhere in the plan for each stretch of significant zones),
//! and cap-only (no placement obligation, only the every-other-zone
//! work limit). The every-other-zone limit counts only significant
//! dates without a placed compensation day.
//!
//! Options read: `significant_zone_hours`, `compensation_method`,
//! `vacation_reduces_hours`, `other_reduces_hours`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{
    SpecialZone, build_occurrences, build_zones, date_for, effective_rotation, week_offset,
    zone_credit,
};
use crate::models::{CheckResult, PlanKind, Violation};

use super::context::CheckContext;

/// Rule identifier carried on every result of this check.
pub const COMPENSATION_DAYS_RULE_ID: &str = "compensation_days";

/// Default zone-work threshold above which a zone counts as significant.
pub const DEFAULT_SIGNIFICANT_ZONE_HOURS: Decimal = Decimal::ONE;

/// How an agreement expects compensation days to be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompensationMethod {
    /// Every second significant zone must carry a compensation day on
    /// the zone date itself.
    DateAnchored,
    /// Each stretch of significant zones earns freely placeable days.
    FreePlacement,
    /// No placement obligation, only the every-other-zone work limit.
    CapOnly,
}

impl CompensationMethod {
    fn from_option(text: Option<&str>) -> Self {
        match text {
            Some("free_placement") => CompensationMethod::FreePlacement,
            Some("cap_only") => CompensationMethod::CapOnly,
            _ => CompensationMethod::DateAnchored,
        }
    }
}

impl std::fmt::Display for CompensationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompensationMethod::DateAnchored => write!(f, "date-anchored"),
            CompensationMethod::FreePlacement => write!(f, "free-placement"),
            CompensationMethod::CapOnly => write!(f, "cap-only"),
        }
    }
}

/// Computes the free-placement compensation-day requirement.
///
/// Sorted significant-zone dates are chained into runs where consecutive
/// dates lie at most seven days apart; each run of length `n` requires
/// `n / 2` compensation days (integer division, so an isolated zone
/// requires none).
pub fn required_compensation_days(dates: &[NaiveDate]) -> usize {
    let mut required = 0;
    let mut run_len = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        match prev {
            Some(p) if (date - p).num_days() <= 7 => run_len += 1,
            _ => {
                required += run_len / 2;
                run_len = 1;
            }
        }
        prev = Some(date);
    }

    required + run_len / 2
}

/// Runs the compensation-day check for a dependent plan.
///
/// The evaluated work pattern is the parent rotation projected onto the
/// plan's weeks, with the parent's own overlaid cells excluded. The
/// plan's own grid contributes only the placed compensation days.
pub fn check_compensation_days(ctx: &CheckContext<'_>) -> CheckResult {
    let plan = ctx.plan;
    debug!(
        plan_id = %plan.id,
        tariff = %plan.tariff_id,
        "Evaluating compensation-day placement"
    );

    if plan.kind != PlanKind::Dependent {
        return CheckResult::warning(
            COMPENSATION_DAYS_RULE_ID,
            "Rule not evaluable: compensation days apply to dependent plans only",
        );
    }

    let (Some(parent_plan), Some(parent_entries), Some(parent_shifts)) =
        (ctx.parent_plan, ctx.parent_entries, ctx.parent_shifts)
    else {
        return CheckResult::warning(
            COMPENSATION_DAYS_RULE_ID,
            "Rule not evaluable: parent plan data is missing",
        );
    };

    let window = match ctx.tariffs.night_window(&plan.tariff_id) {
        Ok(window) => window,
        Err(err) => {
            warn!(plan_id = %plan.id, error = %err, "Tariff agreement not available");
            return CheckResult::warning(
                COMPENSATION_DAYS_RULE_ID,
                format!("Rule not evaluable: {}", err),
            );
        }
    };

    if plan.duration_weeks == 0 {
        return CheckResult::pass(
            COMPENSATION_DAYS_RULE_ID,
            "No significant work found: the plan covers zero weeks",
        );
    }

    let policy = ctx.overlay_policy();
    let anchor = plan.anchor_monday();

    // The parent pattern, projected onto the plan's weeks. Cells the
    // parent itself overlaid are not part of the inherited pattern.
    let offset = week_offset(
        plan.start_date,
        parent_plan.start_date,
        parent_plan.duration_weeks,
    );
    let effective: Vec<_> = effective_rotation(
        parent_entries,
        parent_plan.duration_weeks,
        offset,
        plan.duration_weeks,
    )
    .into_iter()
    .filter(|cell| cell.overlay.is_none())
    .collect();
    let occurrences = build_occurrences(anchor, &effective, parent_shifts, &policy);

    let zones = build_zones(
        anchor,
        plan.end_date(),
        plan.includes_holiday_zones(),
        window,
    );

    let threshold = ctx
        .options
        .number_or("significant_zone_hours", DEFAULT_SIGNIFICANT_ZONE_HOURS);
    let method = CompensationMethod::from_option(ctx.options.text("compensation_method"));

    let significant: Vec<(&SpecialZone, Decimal)> = zones
        .iter()
        .map(|zone| {
            let worked: Decimal = occurrences
                .iter()
                .map(|occ| zone_credit(occ.start, occ.end, zone.start, zone.end, window).total)
                .sum();
            (zone, worked)
        })
        .filter(|(_, worked)| *worked > threshold)
        .collect();

    let placed: BTreeSet<NaiveDate> = ctx
        .entries
        .iter()
        .filter(|cell| cell.overlay.is_some_and(|c| c.is_compensation_day()))
        .map(|cell| date_for(anchor, cell.week, cell.day))
        .collect();

    let mut details = vec![
        format!("Placement method: {}", method),
        format!(
            "Significant zones: {} of {} (threshold {} h)",
            significant.len(),
            zones.len(),
            threshold
        ),
        format!("Compensation days placed: {}", placed.len()),
    ];

    if significant.is_empty() {
        let mut result = CheckResult::pass(
            COMPENSATION_DAYS_RULE_ID,
            "No significant Sunday or holiday work found",
        );
        result.details = details;
        return result;
    }

    let mut violations: Vec<Violation> = Vec::new();

    // Significant dates with no compensation day placed on the date
    // itself; the every-other-zone cap counts only these.
    let worked_dates = significant
        .iter()
        .filter(|(zone, _)| !placed.contains(&zone.date))
        .count();

    match method {
        CompensationMethod::DateAnchored => {
            // Every second significant zone, counted from the first, must
            // carry a compensation day on the zone date itself.
            for (index, (zone, _)) in significant.iter().enumerate() {
                if (index + 1) % 2 == 0 && !placed.contains(&zone.date) {
                    violations.push(Violation::on_date(
                        zone.date,
                        format!(
                            "Missing compensation day for significant work in the {} zone",
                            zone.name
                        ),
                    ));
                }
            }

            // A placed day does not settle a zone that other days keep
            // loaded, e.g. a Saturday evening shift reaching into the
            // Sunday zone.
            for &date in &placed {
                if let Some((zone, total)) = significant.iter().find(|(z, _)| z.date == date) {
                    let same_day: Decimal = occurrences
                        .iter()
                        .filter(|occ| occ.date == date)
                        .map(|occ| {
                            zone_credit(occ.start, occ.end, zone.start, zone.end, window).total
                        })
                        .sum();
                    let remaining = *total - same_day;
                    if remaining > threshold {
                        violations.push(Violation::on_date(
                            date,
                            format!(
                                "Compensation day in the {} zone still carries {} h of work from adjacent days",
                                zone.name,
                                remaining.round_dp(2)
                            ),
                        ));
                    }
                }
            }
        }
        CompensationMethod::FreePlacement => {
            let dates: Vec<NaiveDate> = significant.iter().map(|(zone, _)| zone.date).collect();
            let required = required_compensation_days(&dates);
            details.push(format!("Required compensation days: {}", required));

            if placed.len() < required {
                violations.push(Violation::general(format!(
                    "{} compensation days placed where {} are required",
                    placed.len(),
                    required
                )));
            } else if placed.len() > required {
                details.push(format!(
                    "{} more compensation days placed than required",
                    placed.len() - required
                ));
            }

            push_cap_violation(&mut violations, worked_dates, zones.len());
        }
        CompensationMethod::CapOnly => {
            push_cap_violation(&mut violations, worked_dates, zones.len());
        }
    }

    let mut result = if violations.is_empty() {
        CheckResult::pass(
            COMPENSATION_DAYS_RULE_ID,
            "Compensation-day requirements are met",
        )
    } else {
        let mut result = CheckResult::fail(
            COMPENSATION_DAYS_RULE_ID,
            format!(
                "{} compensation-day requirement{} not met",
                violations.len(),
                if violations.len() == 1 { "" } else { "s" }
            ),
        );
        result.violations = violations;
        result
    };
    result.details = details;

    info!(
        plan_id = %plan.id,
        status = %result.status,
        significant_zones = significant.len(),
        placed_days = placed.len(),
        "Compensation-day check completed"
    );
    result
}

/// Adds the every-other-zone violation when the significant dates still
/// worked after placements exceed half of the zones in range.
fn push_cap_violation(violations: &mut Vec<Violation>, worked: usize, total_zones: usize) {
    if worked > total_zones / 2 {
        violations.push(Violation::general(format!(
            "Significant work on {} of {} zones exceeds every other Sunday and holiday",
            worked, total_zones
        )));
    }
}
