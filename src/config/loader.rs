//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineSettings, MarginThresholds, UnitConversion, UnitsConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/cafe/
/// ├── engine.yaml   # Weeks per month, default minutes, margin bands
/// └── units.yaml    # Unit conversion table
/// ```
///
/// # Example
///
/// ```no_run
/// use recipe_cost_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cafe").unwrap();
/// println!("Weeks per month: {}", loader.settings().weeks_per_month);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    ///
    /// ```no_run
    /// use recipe_cost_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/cafe")?;
    /// # Ok::<(), recipe_cost_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let units = Self::load_yaml::<UnitsConfig>(&path.join("units.yaml"))?;

        Ok(Self {
            config: EngineConfig {
                settings,
                conversions: units.conversions,
            },
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.config.settings
    }

    /// Returns the margin classification bands.
    pub fn margin_thresholds(&self) -> &MarginThresholds {
        &self.config.settings.margin_thresholds
    }

    /// Returns the configured conversion table entries.
    pub fn conversions(&self) -> &[UnitConversion] {
        &self.config.conversions
    }
}
