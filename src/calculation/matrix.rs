//! Pricing matrix construction.
//!
//! The matrix is the single source of per-row numbers for every consumer:
//! the pricing screen renders it and the export routine serializes it, so
//! both always agree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MarginThresholds;
use crate::models::{Recipe, Size, SizeCost, UnresolvedLine};

use super::overhead::OverheadSummary;
use super::pricing::{
    MarginHealth, PricePoint, PricingAverages, classify_margin_with, margin, profit,
};

/// How a matrix row resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Cost computed and a positive sale price configured.
    Priced,
    /// Cost computed but no positive sale price.
    Unpriced,
    /// Nothing to cost at this size.
    NoData,
    /// A unit conversion is missing.
    Unresolved,
}

/// One (recipe, size) row of the pricing matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRow {
    /// Recipe id.
    pub recipe_id: String,
    /// Recipe name.
    pub recipe_name: String,
    /// Recipe category.
    pub category: String,
    /// Size id.
    pub size_id: String,
    /// Size name.
    pub size_name: String,
    /// Row status.
    pub status: RowStatus,
    /// Total cost minus overhead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient_cost: Option<Decimal>,
    /// Overhead allocated to one unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overhead_cost: Option<Decimal>,
    /// Total unit cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
    /// Configured sale price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    /// Sale price minus total cost.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit: Option<Decimal>,
    /// Margin percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Decimal>,
    /// Margin band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<MarginHealth>,
    /// The line that blocked the cost, for unresolved rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved: Option<UnresolvedLine>,
}

impl PricingRow {
    /// Builds a row from a resolved size cost and an optional sale price.
    pub fn new(
        recipe: &Recipe,
        size: &Size,
        cost: SizeCost,
        sale_price: Option<Decimal>,
        thresholds: &MarginThresholds,
    ) -> Self {
        let mut row = Self {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            category: recipe.category.clone(),
            size_id: size.id.clone(),
            size_name: size.name.clone(),
            status: RowStatus::NoData,
            ingredient_cost: None,
            overhead_cost: None,
            total_cost: None,
            sale_price,
            profit: None,
            margin: None,
            health: None,
            unresolved: None,
        };

        match cost {
            SizeCost::NoData => {}
            SizeCost::Unresolved(line) => {
                row.status = RowStatus::Unresolved;
                row.unresolved = Some(line);
            }
            SizeCost::Resolved(breakdown) => {
                let totals = breakdown.totals;
                row.ingredient_cost = Some(totals.ingredient_cost());
                row.overhead_cost = Some(totals.overhead_cost);
                row.total_cost = Some(totals.total_cost);

                match sale_price.filter(|price| *price > Decimal::ZERO) {
                    Some(price) => {
                        let margin = margin(totals.total_cost, price);
                        row.status = RowStatus::Priced;
                        row.profit = Some(profit(totals.total_cost, price));
                        row.margin = margin;
                        row.health = margin.map(|m| classify_margin_with(m, thresholds));
                    }
                    None => row.status = RowStatus::Unpriced,
                }
            }
        }

        row
    }

    /// The row as an input to averaging.
    pub fn price_point(&self) -> PricePoint {
        PricePoint {
            cost: self.total_cost,
            sale_price: self.sale_price,
        }
    }
}

/// Averages of one recipe across its sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Recipe id.
    pub recipe_id: String,
    /// Recipe name.
    pub recipe_name: String,
    /// Averages over the recipe's priced rows.
    pub averages: PricingAverages,
}

/// The full pricing matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingMatrix {
    /// Rows grouped by recipe, sizes in declared order.
    pub rows: Vec<PricingRow>,
    /// Per-recipe averages, in row order.
    pub recipe_averages: Vec<RecipeSummary>,
    /// Averages over every priced row.
    pub overall: PricingAverages,
    /// Overhead figures used by the rows.
    pub overhead: OverheadSummary,
}

impl PricingMatrix {
    /// Assembles a matrix from its rows.
    pub fn from_rows(rows: Vec<PricingRow>, overhead: OverheadSummary) -> Self {
        let mut recipe_averages: Vec<RecipeSummary> = Vec::new();
        let mut start = 0;
        while start < rows.len() {
            let recipe_id = &rows[start].recipe_id;
            let end = rows[start..]
                .iter()
                .position(|row| &row.recipe_id != recipe_id)
                .map_or(rows.len(), |offset| start + offset);

            recipe_averages.push(RecipeSummary {
                recipe_id: recipe_id.clone(),
                recipe_name: rows[start].recipe_name.clone(),
                averages: PricingAverages::from_points(
                    rows[start..end].iter().map(PricingRow::price_point),
                ),
            });
            start = end;
        }

        let overall = PricingAverages::from_points(rows.iter().map(PricingRow::price_point));

        Self {
            rows,
            recipe_averages,
            overall,
            overhead,
        }
    }

    /// Rows of one recipe.
    pub fn rows_for_recipe<'a>(&'a self, recipe_id: &'a str) -> impl Iterator<Item = &'a PricingRow> {
        self.rows.iter().filter(move |row| row.recipe_id == recipe_id)
    }

    /// Looks up a single row.
    pub fn row(&self, recipe_id: &str, size_id: &str) -> Option<&PricingRow> {
        self.rows
            .iter()
            .find(|row| row.recipe_id == recipe_id && row.size_id == size_id)
    }
}
