//! Rotation entry model and overlay handling.
//!
//! This module defines the [`RotationEntry`] struct for one (week, day) cell
//! of a repeating roster grid, together with the overlay categories placed on
//! cells (compensation days, replacement days, vacation) and the single
//! replacement rule deciding which shift a cell actually contributes.

use serde::{Deserialize, Serialize};

use super::ShiftType;

/// The category of an overlay placed on a rotation cell.
///
/// Compensation and replacement overlays always exclude the cell from
/// worked-hour accounting; vacation and other overlays are excluded or
/// kept depending on the [`OverlayPolicy`] in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayCategory {
    /// Compensation day for work performed on a Sunday or public holiday
    /// (F3-style marker).
    HolidayWorkCompensation,
    /// Compensation day granted because a public holiday swallowed a rostered
    /// rest day (F5-style marker).
    HolidayRestCompensation,
    /// A rest day moved from its rostered position (F4-style marker).
    ReplacementDay,
    /// Annual leave.
    Vacation,
    /// Any other absence (leave without pay, course days).
    Other,
}

impl OverlayCategory {
    /// Returns true if a cell carrying this overlay contributes no worked hours.
    pub fn reduces_hours(&self, policy: &OverlayPolicy) -> bool {
        match self {
            OverlayCategory::HolidayWorkCompensation
            | OverlayCategory::HolidayRestCompensation
            | OverlayCategory::ReplacementDay => true,
            OverlayCategory::Vacation => policy.vacation_reduces_hours,
            OverlayCategory::Other => policy.other_reduces_hours,
        }
    }

    /// Returns true if this overlay marks a placed compensation day.
    pub fn is_compensation_day(&self) -> bool {
        matches!(
            self,
            OverlayCategory::HolidayWorkCompensation | OverlayCategory::HolidayRestCompensation
        )
    }
}

/// Toggles controlling which overlay categories remove worked hours.
///
/// Compensation and replacement overlays are always excluding; only the
/// vacation and other categories are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayPolicy {
    /// Whether a vacation overlay removes the cell's worked hours.
    pub vacation_reduces_hours: bool,
    /// Whether an "other" overlay removes the cell's worked hours.
    pub other_reduces_hours: bool,
}

impl Default for OverlayPolicy {
    fn default() -> Self {
        Self {
            vacation_reduces_hours: true,
            other_reduces_hours: false,
        }
    }
}

/// One (week, day) cell of a rotation grid.
///
/// A cell references at most one primary shift and may carry an overlay:
/// either a substituted working shift, or a marker overlay (compensation
/// day, vacation) that suppresses the cell's hours.
///
/// # Examples
///
/// ```
/// use turnus_engine::models::{OverlayCategory, RotationEntry};
///
/// let entry = RotationEntry {
///     week: 0,
///     day: 6, // Sunday
///     shift_id: Some("d1".to_string()),
///     overlay_shift_id: Some("f3".to_string()),
///     overlay: Some(OverlayCategory::HolidayWorkCompensation),
/// };
/// assert!(entry.overlay.unwrap().is_compensation_day());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationEntry {
    /// The week index within the rotation, starting at 0.
    pub week: u32,
    /// The day of week, 0 = Monday through 6 = Sunday.
    pub day: u8,
    /// Reference to the primary shift type, if any.
    #[serde(default)]
    pub shift_id: Option<String>,
    /// Reference to an overlay shift type, if any.
    #[serde(default)]
    pub overlay_shift_id: Option<String>,
    /// The overlay category, if an overlay is placed on this cell.
    #[serde(default)]
    pub overlay: Option<OverlayCategory>,
}

impl RotationEntry {
    /// Resolves the working shift this cell contributes under the given policy.
    ///
    /// The replacement rule, applied uniformly by every consumer:
    /// - an overlay category that reduces hours excludes the cell entirely;
    /// - an overlay shift that is a baseline marker excludes the cell;
    /// - an overlay shift that is a working shift replaces the primary shift;
    /// - otherwise the primary shift counts, provided it is a working shift.
    ///
    /// Returns `None` when the cell contributes no worked hours.
    pub fn effective_shift<'a>(
        &self,
        shifts: &'a [ShiftType],
        policy: &OverlayPolicy,
    ) -> Option<&'a ShiftType> {
        if let Some(category) = self.overlay {
            if category.reduces_hours(policy) {
                return None;
            }
        }

        if let Some(overlay_id) = &self.overlay_shift_id {
            if let Some(overlay) = ShiftType::find(shifts, overlay_id) {
                if overlay.is_baseline {
                    return None;
                }
                if overlay.is_working() {
                    return Some(overlay);
                }
            }
        }

        let primary = ShiftType::find(shifts, self.shift_id.as_deref()?)?;
        primary.is_working().then_some(primary)
    }
}
