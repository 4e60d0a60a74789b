//! Recipe, size and recipe line models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a recipe line consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRef {
    /// A purchased ingredient, by id.
    Ingredient(String),
    /// A batch recipe (e.g. a house syrup), by id.
    BatchRecipe(String),
}

/// One ingredient line of a recipe at a given size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSizeLine {
    /// The size this line applies to.
    pub size_id: String,
    /// The ingredient or batch recipe consumed.
    pub ingredient_ref: LineRef,
    /// Quantity consumed, in the ingredient's usage unit (or batch yield unit).
    pub quantity: Decimal,
    /// Unit label entered alongside the quantity.
    #[serde(default)]
    pub unit: String,
}

/// A sellable product or a reusable batch preparation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier for the recipe.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Menu category (e.g. "Espresso").
    #[serde(default)]
    pub category: String,
    /// True for bulk preparations consumed by other recipes.
    #[serde(default)]
    pub is_batch: bool,
    /// Preparation minutes per unit, overriding the global default.
    #[serde(default)]
    pub minutes_per_unit: Option<Decimal>,
    /// Template editors pre-select for new sizes.
    #[serde(default)]
    pub default_base_template_id: Option<String>,
    /// Ingredient lines across all sizes.
    #[serde(default)]
    pub lines: Vec<RecipeSizeLine>,
}

impl Recipe {
    /// Returns the lines declared for one size, in declared order.
    pub fn lines_for_size<'a>(&'a self, size_id: &'a str) -> impl Iterator<Item = &'a RecipeSizeLine> {
        self.lines.iter().filter(move |line| line.size_id == size_id)
    }

    /// Returns true if at least one line is declared for the size.
    pub fn has_lines_for_size(&self, size_id: &str) -> bool {
        self.lines_for_size(size_id).next().is_some()
    }
}

/// Classification of a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeKind {
    /// A sellable cup or plate size.
    #[default]
    Standard,
    /// A bulk preparation size with a declared yield.
    Batch,
}

/// A size a recipe can be made in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Unique identifier for the size.
    pub id: String,
    /// Display name (e.g. "12 oz").
    pub name: String,
    /// Declared display order.
    #[serde(default)]
    pub sort_order: i32,
    /// Whether this is a sellable size or a batch size.
    #[serde(default)]
    pub kind: SizeKind,
    /// Quantity one batch yields. Only meaningful for batch sizes.
    #[serde(default)]
    pub yield_quantity: Option<Decimal>,
    /// Unit of `yield_quantity`.
    #[serde(default)]
    pub yield_unit: Option<String>,
}

impl Size {
    /// Returns true if the size is classified as a batch size.
    pub fn is_batch(&self) -> bool {
        self.kind == SizeKind::Batch
    }
}
