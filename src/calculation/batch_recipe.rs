//! Batch recipe costing.
//!
//! A batch recipe is a bulk preparation (a house syrup, a cold brew
//! concentrate) that other recipes consume by the yield unit. This module
//! prices one yield unit of a batch.

use rust_decimal::Decimal;

use crate::models::{BatchCost, Catalog, Recipe, Size, SizeCost, UnitCost};

use super::overhead::OverheadAllocator;
use super::size_cost::SizeCostResolver;
use super::unit_conversion::UnitConverter;

/// Prices batch recipes per unit of their own yield.
///
/// Resolution is single-level: inside a batch recipe, a line that consumes
/// another batch recipe contributes nothing.
#[derive(Debug, Clone, Copy)]
pub struct BatchRecipeResolver<'a> {
    catalog: &'a Catalog<'a>,
    converter: &'a UnitConverter,
    overhead: &'a OverheadAllocator,
}

impl<'a> BatchRecipeResolver<'a> {
    /// Creates a resolver over one catalog.
    pub fn new(
        catalog: &'a Catalog<'a>,
        converter: &'a UnitConverter,
        overhead: &'a OverheadAllocator,
    ) -> Self {
        Self {
            catalog,
            converter,
            overhead,
        }
    }

    /// Returns the size that defines one batch of `recipe`: the first batch
    /// size, in declared order, that carries at least one line of the recipe.
    pub fn batch_size(&self, recipe: &Recipe) -> Option<&'a Size> {
        self.catalog
            .sizes_in_order()
            .iter()
            .copied()
            .find(|size| size.is_batch() && recipe.has_lines_for_size(&size.id))
    }

    /// Prices one batch of `recipe` and divides it by the batch yield.
    ///
    /// The batch total is the batch size's cost with the base template
    /// skipped, so a recipe's own batch and the sizes consuming it are priced
    /// by the same line rules.
    ///
    /// Returns `None` when the recipe is not a batch recipe or has no batch
    /// size. A yield of zero or less prices every yield unit at zero. When an
    /// ingredient line cannot be converted, `ingredient_cost` is zero and
    /// `cost_per_yield_unit` carries the failed conversion; this holds
    /// regardless of the yield, so an unconvertible batch is never priced.
    pub fn batch_cost(&self, recipe: &Recipe) -> Option<BatchCost> {
        if !recipe.is_batch {
            return None;
        }
        let size = self.batch_size(recipe)?;

        let overhead_cost = recipe
            .minutes_per_unit
            .map(|minutes| self.overhead.allocate_for_product(minutes))
            .unwrap_or(Decimal::ZERO);
        let yield_quantity = size.yield_quantity.unwrap_or(Decimal::ZERO);

        let sizes = SizeCostResolver::new(self.catalog, self.converter, self.overhead);
        let (ingredient_cost, cost_per_yield_unit) = match sizes.cost_for_size(recipe, size, true) {
            SizeCost::Resolved(breakdown) => {
                let ingredient_cost = breakdown.totals.ingredient_cost();
                let per_unit = if yield_quantity > Decimal::ZERO {
                    breakdown.totals.total_cost / yield_quantity
                } else {
                    Decimal::ZERO
                };
                (ingredient_cost, UnitCost::resolved(per_unit))
            }
            SizeCost::Unresolved(line) => (Decimal::ZERO, UnitCost::Unresolved(line.conversion)),
            SizeCost::NoData => (Decimal::ZERO, UnitCost::resolved(Decimal::ZERO)),
        };

        Some(BatchCost {
            recipe_id: recipe.id.clone(),
            batch_size_id: size.id.clone(),
            ingredient_cost,
            overhead_cost,
            yield_quantity,
            yield_unit: size.yield_unit.clone(),
            cost_per_yield_unit,
        })
    }

    /// Cost of one yield unit of a batch recipe.
    ///
    /// Unknown recipes, non-batch recipes and batch recipes without a batch
    /// size cost zero.
    pub fn cost_per_yield_unit(&self, batch_recipe_id: &str) -> UnitCost {
        self.catalog
            .recipe(batch_recipe_id)
            .and_then(|recipe| self.batch_cost(recipe))
            .map(|batch| batch.cost_per_yield_unit)
            .unwrap_or_else(|| UnitCost::resolved(Decimal::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineSettings, default_conversions};
    use crate::models::{CostSnapshot, LineRef, RecipeSizeLine, UnresolvedConversion};
    use crate::test_fixtures::{cafe_snapshot, dec};

    fn with_resolver<T>(snapshot: &CostSnapshot, f: impl FnOnce(BatchRecipeResolver<'_>) -> T) -> T {
        let catalog = Catalog::new(snapshot);
        let converter = UnitConverter::new(&default_conversions());
        let overhead = OverheadAllocator::new(
            &snapshot.overhead_items,
            &snapshot.overhead_settings,
            &EngineSettings::default(),
        );
        f(BatchRecipeResolver::new(&catalog, &converter, &overhead))
    }

    fn syrup_mut(snapshot: &mut CostSnapshot) -> &mut Recipe {
        snapshot
            .recipes
            .iter_mut()
            .find(|r| r.id == "rec_syrup")
            .unwrap()
    }

    #[test]
    fn test_syrup_cost_per_yield_unit() {
        let snapshot = cafe_snapshot();
        with_resolver(&snapshot, |resolver| {
            // (2.00 ingredients + 2 min * 0.10) / 32 oz
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(dec("0.06875"))
            );
        });
    }

    #[test]
    fn test_batch_cost_breakdown() {
        let snapshot = cafe_snapshot();
        with_resolver(&snapshot, |resolver| {
            let recipe = snapshot.recipes.iter().find(|r| r.id == "rec_syrup").unwrap();
            let batch = resolver.batch_cost(recipe).unwrap();

            assert_eq!(batch.batch_size_id, "size_batch");
            assert_eq!(batch.ingredient_cost, dec("2.00"));
            assert_eq!(batch.overhead_cost, dec("0.2"));
            assert_eq!(batch.yield_quantity, dec("32"));
            assert_eq!(batch.yield_unit.as_deref(), Some("oz"));
        });
    }

    #[test]
    fn test_non_batch_recipe_costs_zero() {
        let snapshot = cafe_snapshot();
        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_latte").value(),
                Some(Decimal::ZERO)
            );
        });
    }

    #[test]
    fn test_unknown_recipe_costs_zero() {
        let snapshot = cafe_snapshot();
        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_missing").value(),
                Some(Decimal::ZERO)
            );
        });
    }

    #[test]
    fn test_zero_yield_costs_zero() {
        let mut snapshot = cafe_snapshot();
        snapshot
            .sizes
            .iter_mut()
            .find(|s| s.id == "size_batch")
            .unwrap()
            .yield_quantity = Some(Decimal::ZERO);

        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(Decimal::ZERO)
            );
        });
    }

    #[test]
    fn test_missing_yield_costs_zero() {
        let mut snapshot = cafe_snapshot();
        snapshot
            .sizes
            .iter_mut()
            .find(|s| s.id == "size_batch")
            .unwrap()
            .yield_quantity = None;

        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(Decimal::ZERO)
            );
        });
    }

    #[test]
    fn test_no_overhead_without_minutes_per_unit() {
        let mut snapshot = cafe_snapshot();
        syrup_mut(&mut snapshot).minutes_per_unit = None;

        with_resolver(&snapshot, |resolver| {
            // 2.00 / 32
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(dec("0.0625"))
            );
        });
    }

    #[test]
    fn test_batch_size_requires_lines() {
        let mut snapshot = cafe_snapshot();
        snapshot.sizes.push(Size {
            id: "size_half_batch".to_string(),
            name: "Half Batch".to_string(),
            sort_order: 0,
            kind: crate::models::SizeKind::Batch,
            yield_quantity: Some(dec("16")),
            yield_unit: Some("oz".to_string()),
        });

        with_resolver(&snapshot, |resolver| {
            let recipe = snapshot.recipes.iter().find(|r| r.id == "rec_syrup").unwrap();
            // Declared first, but the syrup has no lines at the half batch.
            assert_eq!(resolver.batch_size(recipe).unwrap().id, "size_batch");
        });
    }

    #[test]
    fn test_first_batch_size_with_lines_wins() {
        let mut snapshot = cafe_snapshot();
        snapshot.sizes.push(Size {
            id: "size_half_batch".to_string(),
            name: "Half Batch".to_string(),
            sort_order: 0,
            kind: crate::models::SizeKind::Batch,
            yield_quantity: Some(dec("16")),
            yield_unit: Some("oz".to_string()),
        });
        syrup_mut(&mut snapshot).lines.push(RecipeSizeLine {
            size_id: "size_half_batch".to_string(),
            ingredient_ref: LineRef::Ingredient("ing_sugar".to_string()),
            quantity: dec("500"),
            unit: "g".to_string(),
        });

        with_resolver(&snapshot, |resolver| {
            // (1.00 + 0.20) / 16
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(dec("0.075"))
            );
        });
    }

    #[test]
    fn test_nested_batch_line_contributes_nothing() {
        let mut snapshot = cafe_snapshot();
        syrup_mut(&mut snapshot).lines.push(RecipeSizeLine {
            size_id: "size_batch".to_string(),
            ingredient_ref: LineRef::BatchRecipe("rec_syrup".to_string()),
            quantity: dec("4"),
            unit: "oz".to_string(),
        });

        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(dec("0.06875"))
            );
        });
    }

    #[test]
    fn test_missing_ingredient_contributes_nothing() {
        let mut snapshot = cafe_snapshot();
        syrup_mut(&mut snapshot).lines.push(RecipeSizeLine {
            size_id: "size_batch".to_string(),
            ingredient_ref: LineRef::Ingredient("ing_missing".to_string()),
            quantity: dec("100"),
            unit: "g".to_string(),
        });

        with_resolver(&snapshot, |resolver| {
            assert_eq!(
                resolver.cost_per_yield_unit("rec_syrup").value(),
                Some(dec("0.06875"))
            );
        });
    }

    #[test]
    fn test_unresolved_ingredient_propagates() {
        let mut snapshot = cafe_snapshot();
        syrup_mut(&mut snapshot).lines.push(RecipeSizeLine {
            size_id: "size_batch".to_string(),
            ingredient_ref: LineRef::Ingredient("ing_vanilla".to_string()),
            quantity: dec("2"),
            unit: "oz".to_string(),
        });

        with_resolver(&snapshot, |resolver| {
            let cost = resolver.cost_per_yield_unit("rec_syrup");
            assert_eq!(
                cost,
                UnitCost::Unresolved(UnresolvedConversion {
                    from_unit: "bottle".to_string(),
                    to_unit: "oz".to_string(),
                })
            );
        });
    }

    #[test]
    fn test_unresolved_ingredient_wins_over_zero_yield() {
        let mut snapshot = cafe_snapshot();
        snapshot
            .sizes
            .iter_mut()
            .find(|s| s.id == "size_batch")
            .unwrap()
            .yield_quantity = Some(Decimal::ZERO);
        syrup_mut(&mut snapshot).lines.push(RecipeSizeLine {
            size_id: "size_batch".to_string(),
            ingredient_ref: LineRef::Ingredient("ing_vanilla".to_string()),
            quantity: dec("2"),
            unit: "oz".to_string(),
        });

        with_resolver(&snapshot, |resolver| {
            assert!(matches!(
                resolver.cost_per_yield_unit("rec_syrup"),
                UnitCost::Unresolved(_)
            ));
        });
    }
}
