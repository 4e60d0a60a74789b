//! Configuration loading and management for the Recipe Cost Engine.
//!
//! This module loads engine settings and the unit conversion table from YAML
//! files. [`EngineConfig::default`] carries the same values as the shipped
//! `config/cafe` profile so the engine also runs without files.
//!
//! # Example
//!
//! ```no_run
//! use recipe_cost_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/cafe").unwrap();
//! println!("Loaded {} unit conversions", config.conversions().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_HEALTHY_MARGIN, DEFAULT_WATCH_MARGIN, DEFAULT_WEEKS_PER_MONTH, EngineConfig,
    EngineSettings, MarginThresholds, UnitConversion, UnitsConfig, default_conversions,
};
