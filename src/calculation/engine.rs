//! The cost engine facade.
//!
//! [`CostEngine`] indexes one snapshot, builds the conversion table and the
//! overhead allocator once, and answers every costing question of a
//! resolution pass from them.

use crate::config::{EngineConfig, MarginThresholds};
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchCost, Catalog, CostSnapshot, SizeCost};

use super::batch_recipe::BatchRecipeResolver;
use super::matrix::{PricingMatrix, PricingRow};
use super::overhead::{OverheadAllocator, OverheadSummary};
use super::size_cost::SizeCostResolver;
use super::unit_conversion::UnitConverter;

/// One resolution pass over a borrowed snapshot.
///
/// The engine holds no state besides the indexes it builds in
/// [`CostEngine::new`]; every method is a pure read.
///
/// # Example
///
/// ```
/// use recipe_cost_engine::calculation::CostEngine;
/// use recipe_cost_engine::config::EngineConfig;
/// use recipe_cost_engine::models::CostSnapshot;
///
/// let snapshot = CostSnapshot::default();
/// let config = EngineConfig::default();
/// let engine = CostEngine::new(&snapshot, &config);
///
/// assert!(engine.pricing_matrix().rows.is_empty());
/// assert!(engine.size_cost("rec_latte", "size_12", false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CostEngine<'a> {
    catalog: Catalog<'a>,
    converter: UnitConverter,
    overhead: OverheadAllocator,
    thresholds: MarginThresholds,
}

impl<'a> CostEngine<'a> {
    /// Builds an engine for one snapshot.
    pub fn new(snapshot: &'a CostSnapshot, config: &EngineConfig) -> Self {
        Self {
            catalog: Catalog::new(snapshot),
            converter: UnitConverter::new(&config.conversions),
            overhead: OverheadAllocator::new(
                &snapshot.overhead_items,
                &snapshot.overhead_settings,
                &config.settings,
            ),
            thresholds: config.settings.margin_thresholds.clone(),
        }
    }

    /// The indexed snapshot.
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// The conversion table.
    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    /// The overhead allocator.
    pub fn overhead(&self) -> &OverheadAllocator {
        &self.overhead
    }

    /// Margin bands used for row health.
    pub fn thresholds(&self) -> &MarginThresholds {
        &self.thresholds
    }

    /// A size cost resolver over this pass.
    pub fn size_resolver(&self) -> SizeCostResolver<'_> {
        SizeCostResolver::new(&self.catalog, &self.converter, &self.overhead)
    }

    /// A batch recipe resolver over this pass.
    pub fn batch_resolver(&self) -> BatchRecipeResolver<'_> {
        BatchRecipeResolver::new(&self.catalog, &self.converter, &self.overhead)
    }

    /// Overhead figures for the snapshot's items.
    pub fn overhead_summary(&self) -> OverheadSummary {
        self.overhead.summary(&self.catalog.snapshot().overhead_items)
    }

    /// Costs one (recipe, size) pair.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecipeNotFound`] or [`EngineError::SizeNotFound`]
    /// for unknown ids. Missing conversions and empty sizes are reported in
    /// the returned [`SizeCost`], not as errors.
    pub fn size_cost(
        &self,
        recipe_id: &str,
        size_id: &str,
        skip_base_template: bool,
    ) -> EngineResult<SizeCost> {
        let recipe = self
            .catalog
            .recipe(recipe_id)
            .ok_or_else(|| EngineError::RecipeNotFound {
                id: recipe_id.to_string(),
            })?;
        let size = self
            .catalog
            .size(size_id)
            .ok_or_else(|| EngineError::SizeNotFound {
                id: size_id.to_string(),
            })?;

        Ok(self.size_resolver().cost_for_size(recipe, size, skip_base_template))
    }

    /// Returns true if the (recipe, size) pair has anything to cost.
    ///
    /// Unknown ids have nothing to cost.
    pub fn has_costable_content(&self, recipe_id: &str, size_id: &str) -> bool {
        match (self.catalog.recipe(recipe_id), self.catalog.size(size_id)) {
            (Some(recipe), Some(size)) => self.size_resolver().has_costable_content(recipe, size),
            _ => false,
        }
    }

    /// Prices one yield unit of a batch recipe.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecipeNotFound`] for an unknown id,
    /// [`EngineError::NotABatchRecipe`] when the recipe is not flagged as a
    /// batch, and [`EngineError::NoBatchSize`] when no batch size carries its
    /// lines.
    pub fn batch_cost(&self, recipe_id: &str) -> EngineResult<BatchCost> {
        let recipe = self
            .catalog
            .recipe(recipe_id)
            .ok_or_else(|| EngineError::RecipeNotFound {
                id: recipe_id.to_string(),
            })?;
        if !recipe.is_batch {
            return Err(EngineError::NotABatchRecipe {
                id: recipe_id.to_string(),
            });
        }

        self.batch_resolver()
            .batch_cost(recipe)
            .ok_or_else(|| EngineError::NoBatchSize {
                id: recipe_id.to_string(),
            })
    }

    /// Builds the pricing matrix.
    ///
    /// Every non-batch recipe is paired with every standard size, in
    /// declared order, that has costable content or a configured price.
    pub fn pricing_matrix(&self) -> PricingMatrix {
        let resolver = self.size_resolver();
        let mut rows = Vec::new();

        for recipe in self.catalog.recipes().iter().filter(|r| !r.is_batch) {
            for size in self.catalog.sizes_in_order().iter().filter(|s| !s.is_batch()) {
                let sale_price = self.catalog.sale_price(&recipe.id, &size.id);
                if sale_price.is_none() && !resolver.has_costable_content(recipe, size) {
                    continue;
                }

                let cost = resolver.cost_for_size(recipe, size, false);
                rows.push(PricingRow::new(recipe, size, cost, sale_price, &self.thresholds));
            }
        }

        tracing::debug!(rows = rows.len(), "Pricing matrix built");
        PricingMatrix::from_rows(rows, self.overhead_summary())
    }
}
