//! Ingredient model and related types.
//!
//! An ingredient is anything bought from a vendor and consumed by recipes or
//! base templates: coffee beans, milk, cups, lids, cleaning supplies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where an ingredient is used in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngredientType {
    /// Front of house (milk, beans, syrups at the bar).
    #[serde(rename = "FOH")]
    Foh,
    /// Back of house (kitchen prep).
    #[serde(rename = "BOH")]
    Boh,
    /// Single-use packaging such as cups, lids and sleeves.
    Disposable,
    /// General supplies.
    Supply,
}

/// A purchasable ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier for the ingredient.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form category (e.g. "Dairy").
    #[serde(default)]
    pub category: String,
    /// Where the ingredient is used.
    #[serde(rename = "type")]
    pub ingredient_type: IngredientType,
    /// Price paid for one purchase of `purchase_quantity` units.
    pub purchase_cost: Decimal,
    /// Number of purchase units bought for `purchase_cost`. Always positive.
    pub purchase_quantity: Decimal,
    /// Unit the ingredient is bought in (e.g. "lb", "gal", "each").
    pub purchase_unit: String,
    /// Unit recipes consume the ingredient in. Defaults to `purchase_unit`.
    #[serde(default)]
    pub usage_unit: Option<String>,
    /// Vendor the ingredient is bought from.
    #[serde(default)]
    pub vendor: Option<String>,
    /// When the ingredient was last edited.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Ingredient {
    /// Returns the unit recipes consume this ingredient in.
    ///
    /// A blank `usage_unit` falls back to the purchase unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_cost_engine::models::{Ingredient, IngredientType};
    /// use rust_decimal::Decimal;
    ///
    /// let milk = Ingredient {
    ///     id: "ing_milk".to_string(),
    ///     name: "Whole Milk".to_string(),
    ///     category: "Dairy".to_string(),
    ///     ingredient_type: IngredientType::Foh,
    ///     purchase_cost: Decimal::new(450, 2),
    ///     purchase_quantity: Decimal::ONE,
    ///     purchase_unit: "gal".to_string(),
    ///     usage_unit: None,
    ///     vendor: None,
    ///     updated_at: None,
    /// };
    /// assert_eq!(milk.effective_usage_unit(), "gal");
    /// ```
    pub fn effective_usage_unit(&self) -> &str {
        match self.usage_unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => unit,
            _ => &self.purchase_unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ingredient_with_usage_unit() {
        let json = r#"{
            "id": "ing_beans",
            "name": "House Espresso Beans",
            "category": "Coffee",
            "type": "FOH",
            "purchase_cost": "10.00",
            "purchase_quantity": "1",
            "purchase_unit": "lb",
            "usage_unit": "oz",
            "vendor": "Roastery Co",
            "updated_at": "2026-03-01T10:00:00Z"
        }"#;

        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.id, "ing_beans");
        assert_eq!(ingredient.ingredient_type, IngredientType::Foh);
        assert_eq!(ingredient.purchase_cost, Decimal::new(1000, 2));
        assert_eq!(ingredient.effective_usage_unit(), "oz");
        assert_eq!(ingredient.vendor.as_deref(), Some("Roastery Co"));
        assert!(ingredient.updated_at.is_some());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "id": "ing_cup",
            "name": "12oz Cup",
            "type": "Disposable",
            "purchase_cost": "50",
            "purchase_quantity": "1000",
            "purchase_unit": "each"
        }"#;

        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.ingredient_type, IngredientType::Disposable);
        assert_eq!(ingredient.category, "");
        assert!(ingredient.usage_unit.is_none());
        assert!(ingredient.vendor.is_none());
        assert_eq!(ingredient.effective_usage_unit(), "each");
    }

    #[test]
    fn test_blank_usage_unit_falls_back_to_purchase_unit() {
        let json = r#"{
            "id": "ing_towel",
            "name": "Paper Towel",
            "type": "Supply",
            "purchase_cost": "30",
            "purchase_quantity": "12",
            "purchase_unit": "roll",
            "usage_unit": "  "
        }"#;

        let ingredient: Ingredient = serde_json::from_str(json).unwrap();
        assert_eq!(ingredient.effective_usage_unit(), "roll");
    }

    #[test]
    fn test_ingredient_type_serialization() {
        assert_eq!(serde_json::to_string(&IngredientType::Foh).unwrap(), "\"FOH\"");
        assert_eq!(serde_json::to_string(&IngredientType::Boh).unwrap(), "\"BOH\"");
        assert_eq!(
            serde_json::to_string(&IngredientType::Supply).unwrap(),
            "\"Supply\""
        );
    }
}
