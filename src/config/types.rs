//! Configuration types for recipe costing.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Average number of weeks in a month used to canonicalize overhead.
pub const DEFAULT_WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Margin percentage above which a product is healthy.
pub const DEFAULT_HEALTHY_MARGIN: Decimal = Decimal::from_parts(31, 0, 0, false, 0);

/// Margin percentage from which a product is on watch rather than at risk.
pub const DEFAULT_WATCH_MARGIN: Decimal = Decimal::from_parts(25, 0, 0, false, 0);

/// Margin bands used to classify a product's margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginThresholds {
    /// Margins strictly above this are healthy.
    pub healthy_above: Decimal,
    /// Margins at or above this (and not healthy) are on watch.
    pub watch_from: Decimal,
}

impl Default for MarginThresholds {
    fn default() -> Self {
        Self {
            healthy_above: DEFAULT_HEALTHY_MARGIN,
            watch_from: DEFAULT_WATCH_MARGIN,
        }
    }
}

fn default_weeks_per_month() -> Decimal {
    DEFAULT_WEEKS_PER_MONTH
}

/// Engine settings from engine.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Weeks per month used for overhead canonicalization.
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: Decimal,
    /// Minutes per unit for recipes without their own value.
    #[serde(default)]
    pub default_minutes_per_unit: Option<Decimal>,
    /// Margin classification bands.
    #[serde(default)]
    pub margin_thresholds: MarginThresholds,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            weeks_per_month: DEFAULT_WEEKS_PER_MONTH,
            default_minutes_per_unit: None,
            margin_thresholds: MarginThresholds::default(),
        }
    }
}

/// One entry of the sparse unit conversion table.
///
/// `factor` is the number of `to` units in one `from` unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConversion {
    /// Source unit.
    pub from: String,
    /// Target unit.
    pub to: String,
    /// Multiplicative factor.
    pub factor: Decimal,
}

impl UnitConversion {
    fn new(from: &str, to: &str, factor: Decimal) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            factor,
        }
    }
}

/// Units configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Conversion entries. Inverses are derived unless declared.
    pub conversions: Vec<UnitConversion>,
}

/// The conversion table shipped with the engine.
pub fn default_conversions() -> Vec<UnitConversion> {
    vec![
        UnitConversion::new("oz", "g", Decimal::new(283_495, 4)),
        UnitConversion::new("lb", "oz", Decimal::from(16)),
        UnitConversion::new("lb", "g", Decimal::new(453_592, 3)),
        UnitConversion::new("gal", "oz", Decimal::from(128)),
        UnitConversion::new("gal", "ml", Decimal::new(378_541, 2)),
        UnitConversion::new("gal", "l", Decimal::new(378_541, 5)),
        UnitConversion::new("l", "ml", Decimal::from(1000)),
        UnitConversion::new("l", "oz", Decimal::new(33_814, 3)),
        UnitConversion::new("kg", "g", Decimal::from(1000)),
        UnitConversion::new("kg", "oz", Decimal::new(35_274, 3)),
        UnitConversion::new("kg", "lb", Decimal::new(220_462, 5)),
    ]
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Engine settings.
    pub settings: EngineSettings,
    /// Unit conversion table entries.
    pub conversions: Vec<UnitConversion>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            conversions: default_conversions(),
        }
    }
}
