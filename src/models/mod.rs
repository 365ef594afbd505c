//! Core data models for the rotation-compliance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod check_result;
mod night_window;
mod plan;
mod rotation;
mod shift_type;

pub use check_result::{CheckResult, CheckStatus, Violation};
pub use night_window::NightWindow;
pub use plan::{PlanKind, SchedulePlan, anchor_monday};
pub use rotation::{OverlayCategory, OverlayPolicy, RotationEntry};
pub use shift_type::ShiftType;
