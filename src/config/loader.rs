//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tariff
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::NightWindow;

use super::types::{TariffAgreement, TariffCatalog, TariffsConfig};

/// Loads and provides access to tariff configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query tariff agreements and their night
/// windows.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/tariffs/
/// └── tariffs.yaml    # Tariff agreements and night windows
/// ```
///
/// # Example
///
/// ```no_run
/// use turnus_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tariffs").unwrap();
///
/// // Get a tariff agreement
/// let tariff = loader.tariff("ks").unwrap();
/// println!("Agreement: {}", tariff.name);
///
/// // Get the night window for an agreement
/// let window = loader.night_window("ks").unwrap();
/// println!("Night starts at {}", window.start);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: TariffCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/tariffs")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The tariffs file is missing
    /// - The file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use turnus_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tariffs")?;
    /// # Ok::<(), turnus_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tariffs_path = path.join("tariffs.yaml");
        let config = Self::load_yaml::<TariffsConfig>(&tariffs_path)?;

        Ok(Self {
            catalog: TariffCatalog::from(config),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying tariff catalog.
    pub fn catalog(&self) -> &TariffCatalog {
        &self.catalog
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
    ///
    /// # Example
    ///
    /// ```no_run
    /// use turnus_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tariffs")?;
    /// let tariff = loader.tariff("ks")?;
    /// println!("Agreement: {}", tariff.name);
    /// # Ok::<(), turnus_engine::error::EngineError>(())
    /// ```
    pub fn tariff(&self, tariff_id: &str) -> EngineResult<&TariffAgreement> {
        self.catalog.tariff(tariff_id)
    }

    /// Gets the night window for a tariff agreement.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use turnus_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tariffs")?;
    /// let window = loader.night_window("staten")?;
    /// println!("Night runs {} to {}", window.start, window.end);
    /// # Ok::<(), turnus_engine::error::EngineError>(())
    /// ```
    pub fn night_window(&self, tariff_id: &str) -> EngineResult<NightWindow> {
        self.catalog.night_window(tariff_id)
    }
}
