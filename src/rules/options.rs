//! Named option values for rule invocations.
//!
//! Rules are tuned through a flat map of named numeric, boolean, and text
//! values supplied by the calling layer. Each rule documents the option
//! names it reads and falls back to its own defaults for absent entries.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single configuration value for a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A boolean toggle.
    Flag(bool),
    /// A numeric threshold or ratio.
    Number(Decimal),
    /// A textual selector, such as a calculation-method name.
    Text(String),
}

/// The option map passed to a rule entry point.
///
/// # Examples
///
/// ```
/// use turnus_engine::rules::{OptionValue, RuleOptions};
/// use rust_decimal::Decimal;
///
/// let mut options = RuleOptions::new();
/// options.set("sunday_ratio", OptionValue::Number(Decimal::new(2, 0)));
///
/// assert_eq!(options.number("sunday_ratio"), Some(Decimal::new(2, 0)));
/// assert_eq!(options.number("unknown"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions {
    values: HashMap<String, OptionValue>,
}

impl RuleOptions {
    /// Creates an empty option map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or replaces a named option.
    pub fn set(&mut self, name: impl Into<String>, value: OptionValue) {
        self.values.insert(name.into(), value);
    }

    /// Returns a numeric option, or `None` if absent or not numeric.
    pub fn number(&self, name: &str) -> Option<Decimal> {
        match self.values.get(name) {
            Some(OptionValue::Number(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a numeric option, or the given default.
    pub fn number_or(&self, name: &str, default: Decimal) -> Decimal {
        self.number(name).unwrap_or(default)
    }

    /// Returns a boolean option, or `None` if absent or not boolean.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(OptionValue::Flag(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns a boolean option, or the given default.
    pub fn flag_or(&self, name: &str, default: bool) -> bool {
        self.flag(name).unwrap_or(default)
    }

    /// Returns a text option, or `None` if absent or not textual.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(OptionValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_set_and_get_each_kind() {
        let mut options = RuleOptions::new();
        options.set("threshold", OptionValue::Number(dec("1.5")));
        options.set("strict", OptionValue::Flag(true));
        options.set("method", OptionValue::Text("free_placement".to_string()));

        assert_eq!(options.number("threshold"), Some(dec("1.5")));
        assert_eq!(options.flag("strict"), Some(true));
        assert_eq!(options.text("method"), Some("free_placement"));
    }

    #[test]
    fn test_kind_mismatch_returns_none() {
        let mut options = RuleOptions::new();
        options.set("threshold", OptionValue::Text("high".to_string()));

        assert_eq!(options.number("threshold"), None);
        assert_eq!(options.flag("threshold"), None);
        assert_eq!(options.text("threshold"), Some("high"));
    }

    #[test]
    fn test_defaults_apply_when_absent() {
        let options = RuleOptions::new();

        assert_eq!(options.number_or("ratio", dec("3")), dec("3"));
        assert!(options.flag_or("enabled", true));
        assert!(!options.flag_or("enabled", false));
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let mut options = RuleOptions::new();
        options.set("ratio", OptionValue::Number(dec("3")));
        options.set("ratio", OptionValue::Number(dec("2")));

        assert_eq!(options.number("ratio"), Some(dec("2")));
    }

    #[test]
    fn test_deserializes_from_flat_json_map() {
        let json = r#"{
            "sunday_ratio": 2,
            "vacation_reduces_hours": false,
            "compensation_method": "cap_only"
        }"#;

        let options: RuleOptions = serde_json::from_str(json).unwrap();

        assert_eq!(options.number("sunday_ratio"), Some(dec("2")));
        assert_eq!(options.flag("vacation_reduces_hours"), Some(false));
        assert_eq!(options.text("compensation_method"), Some("cap_only"));
    }

    #[test]
    fn test_serializes_round_trip() {
        let mut options = RuleOptions::new();
        options.set("threshold", OptionValue::Number(dec("1.39")));
        options.set("strict", OptionValue::Flag(false));

        let json = serde_json::to_string(&options).unwrap();
        let back: RuleOptions = serde_json::from_str(&json).unwrap();

        assert_eq!(back, options);
    }
}
