//! Read-only snapshots of the back-office data and an id-indexed view over them.
//!
//! The data-access layer hands the engine one [`CostSnapshot`] per resolution
//! pass. The engine never mutates it; [`Catalog`] only borrows it to provide
//! constant-time lookups while a pass runs.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    BaseTemplate, Ingredient, OverheadItem, OverheadSettings, Recipe, RecipeSizeBase, Size,
};

/// The configured sale price of a recipe at one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePricing {
    /// The recipe.
    pub recipe_id: String,
    /// The size.
    pub size_id: String,
    /// Menu price.
    pub sale_price: Decimal,
}

/// Every collection the engine reads during one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostSnapshot {
    /// Purchased ingredients.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Recipes with their nested size lines.
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Sizes in any order; `sort_order` gives the declared order.
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Base templates with their nested lines.
    #[serde(default)]
    pub base_templates: Vec<BaseTemplate>,
    /// Per (recipe, size) template selections.
    #[serde(default)]
    pub recipe_size_bases: Vec<RecipeSizeBase>,
    /// Recurring overhead costs.
    #[serde(default)]
    pub overhead_items: Vec<OverheadItem>,
    /// Operating schedule.
    #[serde(default)]
    pub overhead_settings: OverheadSettings,
    /// Sale prices.
    #[serde(default)]
    pub size_pricing: Vec<SizePricing>,
}

/// Id-indexed, borrowed view over a [`CostSnapshot`].
///
/// When an id appears more than once the first occurrence wins.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    ingredients: HashMap<&'a str, &'a Ingredient>,
    recipes: HashMap<&'a str, &'a Recipe>,
    ordered_recipes: Vec<&'a Recipe>,
    sizes: HashMap<&'a str, &'a Size>,
    ordered_sizes: Vec<&'a Size>,
    templates: HashMap<&'a str, &'a BaseTemplate>,
    size_bases: HashMap<&'a str, HashMap<&'a str, &'a str>>,
    prices: HashMap<&'a str, HashMap<&'a str, Decimal>>,
    snapshot: &'a CostSnapshot,
}

impl<'a> Catalog<'a> {
    /// Indexes a snapshot.
    pub fn new(snapshot: &'a CostSnapshot) -> Self {
        let mut ingredients = HashMap::with_capacity(snapshot.ingredients.len());
        for ingredient in &snapshot.ingredients {
            ingredients.entry(ingredient.id.as_str()).or_insert(ingredient);
        }

        let mut recipes = HashMap::with_capacity(snapshot.recipes.len());
        let mut ordered_recipes = Vec::with_capacity(snapshot.recipes.len());
        for recipe in &snapshot.recipes {
            if !recipes.contains_key(recipe.id.as_str()) {
                recipes.insert(recipe.id.as_str(), recipe);
                ordered_recipes.push(recipe);
            }
        }

        let mut sizes = HashMap::with_capacity(snapshot.sizes.len());
        let mut ordered_sizes: Vec<&Size> = Vec::with_capacity(snapshot.sizes.len());
        for size in &snapshot.sizes {
            if !sizes.contains_key(size.id.as_str()) {
                sizes.insert(size.id.as_str(), size);
                ordered_sizes.push(size);
            }
        }
        // Stable sort keeps snapshot order between sizes sharing a sort_order.
        ordered_sizes.sort_by_key(|size| size.sort_order);

        let mut templates = HashMap::with_capacity(snapshot.base_templates.len());
        for template in &snapshot.base_templates {
            templates.entry(template.id.as_str()).or_insert(template);
        }

        let mut size_bases: HashMap<&str, HashMap<&str, &str>> = HashMap::new();
        for base in &snapshot.recipe_size_bases {
            size_bases
                .entry(base.recipe_id.as_str())
                .or_default()
                .entry(base.size_id.as_str())
                .or_insert(base.base_template_id.as_str());
        }

        let mut prices: HashMap<&str, HashMap<&str, Decimal>> = HashMap::new();
        for pricing in &snapshot.size_pricing {
            prices
                .entry(pricing.recipe_id.as_str())
                .or_default()
                .entry(pricing.size_id.as_str())
                .or_insert(pricing.sale_price);
        }

        Self {
            ingredients,
            recipes,
            ordered_recipes,
            sizes,
            ordered_sizes,
            templates,
            size_bases,
            prices,
            snapshot,
        }
    }

    /// Returns the snapshot this catalog indexes.
    pub fn snapshot(&self) -> &'a CostSnapshot {
        self.snapshot
    }

    /// Looks up an ingredient.
    pub fn ingredient(&self, id: &str) -> Option<&'a Ingredient> {
        self.ingredients.get(id).copied()
    }

    /// Looks up a recipe.
    pub fn recipe(&self, id: &str) -> Option<&'a Recipe> {
        self.recipes.get(id).copied()
    }

    /// Returns every distinct recipe in snapshot order.
    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.ordered_recipes
    }

    /// Looks up a size.
    pub fn size(&self, id: &str) -> Option<&'a Size> {
        self.sizes.get(id).copied()
    }

    /// Returns all sizes in declared order.
    pub fn sizes_in_order(&self) -> &[&'a Size] {
        &self.ordered_sizes
    }

    /// Looks up a base template.
    pub fn base_template(&self, id: &str) -> Option<&'a BaseTemplate> {
        self.templates.get(id).copied()
    }

    /// Returns the template attached to a (recipe, size), if the mapping
    /// exists and names a known template.
    pub fn base_template_for(&self, recipe_id: &str, size_id: &str) -> Option<&'a BaseTemplate> {
        self.size_bases
            .get(recipe_id)
            .and_then(|sizes| sizes.get(size_id))
            .and_then(|template_id| self.base_template(template_id))
    }

    /// Returns the configured sale price of a (recipe, size).
    pub fn sale_price(&self, recipe_id: &str, size_id: &str) -> Option<Decimal> {
        self.prices
            .get(recipe_id)
            .and_then(|sizes| sizes.get(size_id))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::cafe_snapshot;

    #[test]
    fn test_catalog_lookups() {
        let snapshot = cafe_snapshot();
        let catalog = Catalog::new(&snapshot);

        assert_eq!(catalog.ingredient("ing_beans").unwrap().name, "Espresso Beans");
        assert_eq!(catalog.recipe("rec_latte").unwrap().name, "Latte");
        assert_eq!(catalog.size("size_12").unwrap().name, "12 oz");
        assert!(catalog.ingredient("ing_missing").is_none());
        assert!(catalog.recipe("rec_missing").is_none());
    }

    #[test]
    fn test_duplicate_recipe_listed_once() {
        let mut snapshot = cafe_snapshot();
        let mut duplicate = snapshot.recipes[0].clone();
        duplicate.name = "Shadowed".to_string();
        snapshot.recipes.push(duplicate);
        let catalog = Catalog::new(&snapshot);

        assert_eq!(catalog.recipes().len(), snapshot.recipes.len() - 1);
        assert_eq!(catalog.recipe(&snapshot.recipes[0].id).unwrap().name, snapshot.recipes[0].name);
    }

    #[test]
    fn test_duplicate_size_listed_once() {
        let mut snapshot = cafe_snapshot();
        let mut duplicate = snapshot.sizes.iter().find(|s| s.id == "size_12").unwrap().clone();
        duplicate.name = "Shadowed".to_string();
        snapshot.sizes.push(duplicate);
        let catalog = Catalog::new(&snapshot);

        let ids: Vec<_> = catalog
            .sizes_in_order()
            .iter()
            .map(|size| size.id.as_str())
            .collect();
        assert_eq!(ids, vec!["size_12", "size_16", "size_batch"]);
        assert_eq!(catalog.size("size_12").unwrap().name, "12 oz");
    }

    #[test]
    fn test_sizes_in_declared_order() {
        let snapshot = cafe_snapshot();
        let catalog = Catalog::new(&snapshot);

        let ids: Vec<_> = catalog
            .sizes_in_order()
            .iter()
            .map(|size| size.id.as_str())
            .collect();
        assert_eq!(ids, vec!["size_12", "size_16", "size_batch"]);
    }

    #[test]
    fn test_base_template_for_requires_known_template() {
        let mut snapshot = cafe_snapshot();
        snapshot.recipe_size_bases.push(RecipeSizeBase {
            recipe_id: "rec_latte".to_string(),
            size_id: "size_16".to_string(),
            base_template_id: "tpl_missing".to_string(),
        });
        let catalog = Catalog::new(&snapshot);

        assert_eq!(
            catalog.base_template_for("rec_latte", "size_12").unwrap().id,
            "tpl_hot"
        );
        assert!(catalog.base_template_for("rec_latte", "size_16").is_none());
        assert!(catalog.base_template_for("rec_drip", "size_12").is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let mut snapshot = cafe_snapshot();
        snapshot.size_pricing.push(SizePricing {
            recipe_id: "rec_latte".to_string(),
            size_id: "size_12".to_string(),
            sale_price: Decimal::from(99),
        });
        let catalog = Catalog::new(&snapshot);

        assert_eq!(
            catalog.sale_price("rec_latte", "size_12"),
            Some(Decimal::new(450, 2))
        );
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let snapshot: CostSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.recipes.is_empty());
        assert_eq!(snapshot.overhead_settings, OverheadSettings::default());
    }
}
