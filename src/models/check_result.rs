//! Check result models.
//!
//! This module contains the [`CheckResult`] type returned by every rule
//! entry point, together with its status and violation record types.
//! Results are self-describing snapshots: they carry a generated id, a
//! timestamp, and the engine version that produced them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The outcome of a rule evaluation.
///
/// `Warning` means the rule was not evaluable for this plan (wrong plan
/// kind, missing reference data), never that a clause was breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// All applicable clauses hold, or the input carried no qualifying work.
    Pass,
    /// At least one clause was breached; see the violation records.
    Fail,
    /// The rule could not be evaluated for this plan.
    Warning,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "pass"),
            CheckStatus::Fail => write!(f, "fail"),
            CheckStatus::Warning => write!(f, "warning"),
        }
    }
}

/// A single rule breach, naming the offending date where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The date the violation concerns, if it is date-specific.
    pub date: Option<NaiveDate>,
    /// A human-readable description of the breach.
    pub description: String,
}

impl Violation {
    /// Creates a violation tied to a specific date.
    pub fn on_date(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            date: Some(date),
            description: description.into(),
        }
    }

    /// Creates a violation that concerns the plan as a whole.
    pub fn general(description: impl Into<String>) -> Self {
        Self {
            date: None,
            description: description.into(),
        }
    }
}

/// The complete result of one rule evaluation.
///
/// Detail lines and violations are order-preserving; the presentation
/// layer renders them verbatim.
///
/// # Example
///
/// ```
/// use turnus_engine::models::{CheckResult, CheckStatus};
///
/// let result = CheckResult::pass("reduced_weekly_hours", "Within the allowed ceiling");
/// assert_eq!(result.status, CheckStatus::Pass);
/// assert!(result.violations.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Unique identifier for this evaluation.
    pub check_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// The identifier of the rule that produced this result.
    pub rule_id: String,
    /// The overall outcome.
    pub status: CheckStatus,
    /// A one-line summary of the outcome.
    pub message: String,
    /// Ordered explanatory detail lines.
    pub details: Vec<String>,
    /// Rule breaches, empty unless the status is `Fail`.
    pub violations: Vec<Violation>,
}

impl CheckResult {
    /// Creates a result with a generated id, current timestamp, and the
    /// crate version.
    pub fn new(rule_id: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            check_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            rule_id: rule_id.into(),
            status,
            message: message.into(),
            details: Vec::new(),
            violations: Vec::new(),
        }
    }

    /// Creates a passing result.
    pub fn pass(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, CheckStatus::Pass, message)
    }

    /// Creates a failing result.
    pub fn fail(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, CheckStatus::Fail, message)
    }

    /// Creates a warning result (rule not evaluable).
    pub fn warning(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, CheckStatus::Warning, message)
    }
}
