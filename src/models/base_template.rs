//! Base templates: shared, size-scoped packaging and disposables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One component of a base template at a given size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTemplateLine {
    /// The size this component applies to.
    pub size_id: String,
    /// The ingredient consumed (cup, lid, sleeve...).
    pub ingredient_id: String,
    /// Quantity consumed, in the ingredient's usage unit.
    pub quantity: Decimal,
    /// Unit label entered alongside the quantity.
    #[serde(default)]
    pub unit: String,
}

/// A named set of shared components attachable to any recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseTemplate {
    /// Unique identifier for the template.
    pub id: String,
    /// Display name (e.g. "Hot Cup").
    pub name: String,
    /// Free-form category.
    #[serde(default)]
    pub category: String,
    /// Components across all sizes.
    #[serde(default)]
    pub lines: Vec<BaseTemplateLine>,
}

impl BaseTemplate {
    /// Returns the components declared for one size.
    pub fn lines_for_size<'a>(&'a self, size_id: &'a str) -> impl Iterator<Item = &'a BaseTemplateLine> {
        self.lines.iter().filter(move |line| line.size_id == size_id)
    }
}

/// Selects which base template supplies shared components for a recipe size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSizeBase {
    /// The recipe.
    pub recipe_id: String,
    /// The size.
    pub size_id: String,
    /// The template attached for this (recipe, size).
    pub base_template_id: String,
}
