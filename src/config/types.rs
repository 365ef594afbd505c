//! Configuration types for tariff agreements.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the in-memory
//! catalog the rules query night windows from.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::NightWindow;

/// A tariff agreement's engine-relevant parameters.
///
/// Only the night window matters to the engine; pay rates and other
/// agreement content live with the calling layer.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffAgreement {
    /// The human-readable name of the agreement.
    pub name: String,
    /// The clock window treated as night hours under this agreement.
    pub night_window: NightWindow,
}

/// Tariffs configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffsConfig {
    /// Map of tariff identifier to agreement details.
    pub tariffs: HashMap<String, TariffAgreement>,
}

/// In-memory catalog of tariff agreements keyed by identifier.
#[derive(Debug, Clone)]
pub struct TariffCatalog {
    tariffs: HashMap<String, TariffAgreement>,
}

impl TariffCatalog {
    /// Creates a catalog from a map of agreements.
    pub fn new(tariffs: HashMap<String, TariffAgreement>) -> Self {
        Self { tariffs }
    }

    /// Gets a tariff agreement by its identifier.
    ///
    /// # Arguments
    ///
    /// * `tariff_id` - The tariff identifier (e.g., "ks")
    ///
    /// # Returns
    ///
    /// Returns the agreement if found, or `TariffNotFound` error.
    pub fn tariff(&self, tariff_id: &str) -> EngineResult<&TariffAgreement> {
        self.tariffs
            .get(tariff_id)
            .ok_or_else(|| EngineError::TariffNotFound {
                tariff_id: tariff_id.to_string(),
            })
    }

    /// Gets the night window for a tariff agreement.
    pub fn night_window(&self, tariff_id: &str) -> EngineResult<NightWindow> {
        Ok(self.tariff(tariff_id)?.night_window)
    }

    /// Returns the number of agreements in the catalog.
    pub fn len(&self) -> usize {
        self.tariffs.len()
    }

    /// Returns true when the catalog holds no agreements.
    pub fn is_empty(&self) -> bool {
        self.tariffs.is_empty()
    }
}

impl From<TariffsConfig> for TariffCatalog {
    fn from(config: TariffsConfig) -> Self {
        Self::new(config.tariffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
    }

    fn sample_catalog() -> TariffCatalog {
        let mut tariffs = HashMap::new();
        tariffs.insert(
            "ks".to_string(),
            TariffAgreement {
                name: "KS Hovedtariffavtalen".to_string(),
                night_window: NightWindow {
                    start: make_time("21:00"),
                    end: make_time("06:00"),
                },
            },
        );
        TariffCatalog::new(tariffs)
    }

    #[test]
    fn test_tariff_lookup() {
        let catalog = sample_catalog();
        let tariff = catalog.tariff("ks").unwrap();
        assert_eq!(tariff.name, "KS Hovedtariffavtalen");
    }

    #[test]
    fn test_night_window_lookup() {
        let catalog = sample_catalog();
        let window = catalog.night_window("ks").unwrap();
        assert_eq!(window.start, make_time("21:00"));
        assert_eq!(window.end, make_time("06:00"));
        assert!(window.crosses_midnight());
    }

    #[test]
    fn test_unknown_tariff_returns_error() {
        let catalog = sample_catalog();
        let result = catalog.tariff("unknown");

        match result {
            Err(EngineError::TariffNotFound { tariff_id }) => {
                assert_eq!(tariff_id, "unknown");
            }
            _ => panic!("Expected TariffNotFound error"),
        }
    }

    #[test]
    fn test_catalog_size() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());

        let empty = TariffCatalog::new(HashMap::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_tariffs_config_deserializes_from_yaml() {
        let yaml = r#"
tariffs:
  ks:
    name: "KS Hovedtariffavtalen"
    night_window:
      start: "21:00:00"
      end: "06:00:00"
  staten:
    name: "Statens hovedtariffavtale"
    night_window:
      start: "20:00:00"
      end: "06:00:00"
"#;
        let config: TariffsConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.tariffs.len(), 2);

        let catalog = TariffCatalog::from(config);
        let staten = catalog.night_window("staten").unwrap();
        assert_eq!(staten.start, make_time("20:00"));
    }
}
