//! Size cost resolution.
//!
//! This module totals the unit cost of one (recipe, size) pair from its
//! direct ingredient lines, the batch recipes it consumes, the shared
//! components of its base template, and its overhead allocation.

use rust_decimal::Decimal;

use crate::models::{
    Catalog, CostBreakdown, CostLine, CostSource, CostTotals, LineRef, Recipe, SizeCost,
    Size, UnitCost, UnresolvedConversion, UnresolvedLine,
};

use super::batch_recipe::BatchRecipeResolver;
use super::overhead::OverheadAllocator;
use super::unit_conversion::UnitConverter;

const OVERHEAD_LINE_NAME: &str = "Overhead";
const OVERHEAD_LINE_UNIT: &str = "min";

/// Resolves the total unit cost of recipe sizes.
#[derive(Debug, Clone, Copy)]
pub struct SizeCostResolver<'a> {
    catalog: &'a Catalog<'a>,
    converter: &'a UnitConverter,
    overhead: &'a OverheadAllocator,
    batches: BatchRecipeResolver<'a>,
}

impl<'a> SizeCostResolver<'a> {
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
            batches: BatchRecipeResolver::new(catalog, converter, overhead),
        }
    }

    /// Returns true if the size has at least one direct line or one
    /// component from its attached base template.
    pub fn has_costable_content(&self, recipe: &Recipe, size: &Size) -> bool {
        recipe.has_lines_for_size(&size.id)
            || self
                .catalog
                .base_template_for(&recipe.id, &size.id)
                .is_some_and(|template| template.lines_for_size(&size.id).next().is_some())
    }

    /// Computes the unit cost of `recipe` at `size`.
    ///
    /// With `skip_base_template` unset, the attached base template's
    /// components are added and, when a template is attached, overhead is
    /// allocated once using the recipe's minutes per unit or the default.
    /// With it set (the batch self-costing path), only a recipe with its own
    /// minutes per unit receives overhead.
    ///
    /// Returns [`SizeCost::NoData`] when the size has nothing to cost, and
    /// [`SizeCost::Unresolved`] for the first line whose unit conversion is
    /// missing. Lines referencing missing ingredients or batch recipes
    /// contribute zero, as do batch lines inside a batch recipe.
    pub fn cost_for_size(&self, recipe: &Recipe, size: &Size, skip_base_template: bool) -> SizeCost {
        if !self.has_costable_content(recipe, size) {
            return SizeCost::NoData;
        }

        match self.resolve(recipe, size, skip_base_template) {
            Ok(breakdown) => SizeCost::Resolved(breakdown),
            Err(unresolved) => SizeCost::Unresolved(unresolved),
        }
    }

    fn resolve(
        &self,
        recipe: &Recipe,
        size: &Size,
        skip_base_template: bool,
    ) -> Result<CostBreakdown, UnresolvedLine> {
        let mut lines = Vec::new();
        let mut totals = CostTotals::default();

        for line in recipe.lines_for_size(&size.id) {
            let cost_line = match &line.ingredient_ref {
                LineRef::Ingredient(id) => {
                    self.ingredient_line(recipe, size, CostSource::Ingredient, id, line.quantity, &line.unit)?
                }
                LineRef::BatchRecipe(id) => self.batch_line(recipe, size, id, line.quantity, &line.unit)?,
            };
            match cost_line.source {
                CostSource::BatchRecipe => totals.batch_cost += cost_line.amount,
                _ => totals.direct_cost += cost_line.amount,
            }
            lines.push(cost_line);
        }

        if skip_base_template {
            if let Some(minutes) = recipe.minutes_per_unit {
                let overhead_line = self.overhead_line(recipe, minutes);
                totals.overhead_cost += overhead_line.amount;
                lines.push(overhead_line);
            }
        } else if let Some(template) = self.catalog.base_template_for(&recipe.id, &size.id) {
            for component in template.lines_for_size(&size.id) {
                let cost_line = self.ingredient_line(
                    recipe,
                    size,
                    CostSource::BaseTemplate,
                    &component.ingredient_id,
                    component.quantity,
                    &component.unit,
                )?;
                totals.base_cost += cost_line.amount;
                lines.push(cost_line);
            }

            let minutes = self.overhead.minutes_per_unit(recipe.minutes_per_unit);
            let overhead_line = self.overhead_line(recipe, minutes);
            totals.overhead_cost += overhead_line.amount;
            lines.push(overhead_line);
        }

        totals.total_cost =
            totals.direct_cost + totals.batch_cost + totals.base_cost + totals.overhead_cost;

        Ok(CostBreakdown {
            recipe_id: recipe.id.clone(),
            size_id: size.id.clone(),
            lines,
            totals,
        })
    }

    fn ingredient_line(
        &self,
        recipe: &Recipe,
        size: &Size,
        source: CostSource,
        ingredient_id: &str,
        quantity: Decimal,
        unit: &str,
    ) -> Result<CostLine, UnresolvedLine> {
        let Some(ingredient) = self.catalog.ingredient(ingredient_id) else {
            return Ok(zero_line(source, ingredient_id, quantity, unit));
        };

        match self.converter.ingredient_unit_cost(ingredient) {
            UnitCost::Resolved { value } => Ok(CostLine {
                source,
                ref_id: ingredient.id.clone(),
                name: ingredient.name.clone(),
                quantity,
                unit: unit.to_string(),
                unit_cost: value,
                amount: quantity * value,
            }),
            UnitCost::Unresolved(conversion) => Err(unresolved(
                recipe,
                size,
                &ingredient.id,
                &ingredient.name,
                conversion,
            )),
        }
    }

    fn batch_line(
        &self,
        recipe: &Recipe,
        size: &Size,
        batch_recipe_id: &str,
        quantity: Decimal,
        unit: &str,
    ) -> Result<CostLine, UnresolvedLine> {
        if recipe.is_batch {
            tracing::debug!(
                recipe_id = %recipe.id,
                nested_batch = %batch_recipe_id,
                "Skipping nested batch recipe line"
            );
            return Ok(zero_line(CostSource::BatchRecipe, batch_recipe_id, quantity, unit));
        }
        let Some(batch) = self.catalog.recipe(batch_recipe_id) else {
            return Ok(zero_line(CostSource::BatchRecipe, batch_recipe_id, quantity, unit));
        };

        match self.batches.cost_per_yield_unit(batch_recipe_id) {
            UnitCost::Resolved { value } => Ok(CostLine {
                source: CostSource::BatchRecipe,
                ref_id: batch.id.clone(),
                name: batch.name.clone(),
                quantity,
                unit: unit.to_string(),
                unit_cost: value,
                amount: quantity * value,
            }),
            UnitCost::Unresolved(conversion) => {
                Err(unresolved(recipe, size, &batch.id, &batch.name, conversion))
            }
        }
    }

    fn overhead_line(&self, recipe: &Recipe, minutes: Decimal) -> CostLine {
        CostLine {
            source: CostSource::Overhead,
            ref_id: recipe.id.clone(),
            name: OVERHEAD_LINE_NAME.to_string(),
            quantity: minutes,
            unit: OVERHEAD_LINE_UNIT.to_string(),
            unit_cost: self.overhead.cost_per_minute(),
            amount: self.overhead.allocate_for_product(minutes),
        }
    }
}

fn zero_line(source: CostSource, ref_id: &str, quantity: Decimal, unit: &str) -> CostLine {
    CostLine {
        source,
        ref_id: ref_id.to_string(),
        name: String::new(),
        quantity,
        unit: unit.to_string(),
        unit_cost: Decimal::ZERO,
        amount: Decimal::ZERO,
    }
}

fn unresolved(
    recipe: &Recipe,
    size: &Size,
    ref_id: &str,
    ref_name: &str,
    conversion: UnresolvedConversion,
) -> UnresolvedLine {
    tracing::debug!(
        recipe_id = %recipe.id,
        size_id = %size.id,
        ref_id = ref_id,
        "Size cost unresolved"
    );
    UnresolvedLine {
        recipe_id: recipe.id.clone(),
        size_id: size.id.clone(),
        ref_id: ref_id.to_string(),
        ref_name: ref_name.to_string(),
        conversion,
    }
}
