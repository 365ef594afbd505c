//! Night window model.
//!
//! This module defines the [`NightWindow`] struct: the tariff-specific
//! clock-time range treated as night for premium-hour purposes.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A per-tariff clock-time window defining "night".
///
/// Most agreements use a window crossing midnight (e.g., 21:00 to 06:00).
/// This is distinct from the fixed 20:00 to 06:00 statutory window used by
/// the night-average qualification clause.
///
/// # Examples
///
/// ```
/// use turnus_engine::models::NightWindow;
/// use chrono::NaiveTime;
///
/// let window = NightWindow {
///     start: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
/// };
/// assert!(window.crosses_midnight());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightWindow {
    /// The clock time the night window opens.
    pub start: NaiveTime,
    /// The clock time the night window closes.
    pub end: NaiveTime,
}

impl NightWindow {
    /// Returns true if the window wraps past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Returns true if the window covers no time at all.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
