//! Shared input context for rule entry points.

use crate::config::TariffCatalog;
use crate::models::{OverlayPolicy, RotationEntry, SchedulePlan, ShiftType};

use super::options::RuleOptions;

/// Borrowed snapshot of everything a rule evaluation needs.
///
/// Rules never mutate the context; the calling layer assembles one per
/// invocation from whatever store it keeps plans in. Parent fields are
/// only populated when the plan is a dependent cycle and the parent data
/// could be retrieved.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// The plan under evaluation.
    pub plan: &'a SchedulePlan,
    /// The plan's own rotation entries.
    pub entries: &'a [RotationEntry],
    /// The shift types referenced by the plan's rotation.
    pub shifts: &'a [ShiftType],
    /// The parent plan, for dependent cycles.
    pub parent_plan: Option<&'a SchedulePlan>,
    /// The parent plan's rotation entries.
    pub parent_entries: Option<&'a [RotationEntry]>,
    /// The shift types referenced by the parent's rotation.
    pub parent_shifts: Option<&'a [ShiftType]>,
    /// Tariff agreements keyed by identifier.
    pub tariffs: &'a TariffCatalog,
    /// Named option values for the invoked rule.
    pub options: &'a RuleOptions,
}

impl CheckContext<'_> {
    /// Assembles the overlay policy from the option toggles.
    ///
    /// Reads `vacation_reduces_hours` and `other_reduces_hours`, falling
    /// back to the policy defaults for absent options.
    pub fn overlay_policy(&self) -> OverlayPolicy {
        let defaults = OverlayPolicy::default();
        OverlayPolicy {
            vacation_reduces_hours: self
                .options
                .flag_or("vacation_reduces_hours", defaults.vacation_reduces_hours),
            other_reduces_hours: self
                .options
                .flag_or("other_reduces_hours", defaults.other_reduces_hours),
        }
    }

    /// Returns true when the full parent-cycle snapshot is present.
    pub fn has_parent_data(&self) -> bool {
        self.parent_plan.is_some() && self.parent_entries.is_some() && self.parent_shifts.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanKind;
    use crate::rules::options::OptionValue;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn sample_plan() -> SchedulePlan {
        SchedulePlan {
            id: "plan_1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            duration_weeks: 6,
            work_percent: Decimal::new(100, 0),
            tariff_id: "ks".to_string(),
            kind: PlanKind::Primary,
            parent_plan_id: None,
        }
    }

    #[test]
    fn test_overlay_policy_defaults() {
        let plan = sample_plan();
        let tariffs = TariffCatalog::new(HashMap::new());
        let options = RuleOptions::new();
        let ctx = CheckContext {
            plan: &plan,
            entries: &[],
            shifts: &[],
            parent_plan: None,
            parent_entries: None,
            parent_shifts: None,
            tariffs: &tariffs,
            options: &options,
        };

        let policy = ctx.overlay_policy();
        assert!(policy.vacation_reduces_hours);
        assert!(!policy.other_reduces_hours);
    }

    #[test]
    fn test_overlay_policy_overridden_by_options() {
        let plan = sample_plan();
        let tariffs = TariffCatalog::new(HashMap::new());
        let mut options = RuleOptions::new();
        options.set("vacation_reduces_hours", OptionValue::Flag(false));
        options.set("other_reduces_hours", OptionValue::Flag(true));

        let ctx = CheckContext {
            plan: &plan,
            entries: &[],
            shifts: &[],
            parent_plan: None,
            parent_entries: None,
            parent_shifts: None,
            tariffs: &tariffs,
            options: &options,
        };

        let policy = ctx.overlay_policy();
        assert!(!policy.vacation_reduces_hours);
        assert!(policy.other_reduces_hours);
    }

    #[test]
    fn test_has_parent_data_requires_all_three() {
        let plan = sample_plan();
        let parent = sample_plan();
        let tariffs = TariffCatalog::new(HashMap::new());
        let options = RuleOptions::new();

        let mut ctx = CheckContext {
            plan: &plan,
            entries: &[],
            shifts: &[],
            parent_plan: Some(&parent),
            parent_entries: None,
            parent_shifts: None,
            tariffs: &tariffs,
            options: &options,
        };
        assert!(!ctx.has_parent_data());

        ctx.parent_entries = Some(&[]);
        ctx.parent_shifts = Some(&[]);
        assert!(ctx.has_parent_data());
    }
}
