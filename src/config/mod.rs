//! Configuration loading and management for the turnus compliance engine.
//!
//! This module provides functionality to load tariff configurations from
//! YAML files: the tariff agreements and the night windows they define.
//!
//! # Example
//!
//! ```no_run
//! use turnus_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tariffs").unwrap();
//! println!("Night window: {:?}", config.night_window("ks").unwrap());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{TariffAgreement, TariffCatalog, TariffsConfig};
