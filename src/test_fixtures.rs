//! Shared café snapshot for unit tests.
//!
//! Rent of 1454.88 a month over 7 days of 8 open hours gives a cost per
//! minute of exactly 0.10.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::{
    BaseTemplate, BaseTemplateLine, CostSnapshot, Frequency, Ingredient, IngredientType, LineRef,
    OverheadItem, OverheadSettings, Recipe, RecipeSizeBase, RecipeSizeLine, Size, SizeKind,
    SizePricing,
};

pub(crate) fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ingredient(
    id: &str,
    name: &str,
    ingredient_type: IngredientType,
    cost: &str,
    qty: &str,
    purchase_unit: &str,
    usage_unit: Option<&str>,
) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        category: String::new(),
        ingredient_type,
        purchase_cost: dec(cost),
        purchase_quantity: dec(qty),
        purchase_unit: purchase_unit.to_string(),
        usage_unit: usage_unit.map(str::to_string),
        vendor: None,
        updated_at: None,
    }
}

fn size(id: &str, name: &str, sort_order: i32) -> Size {
    Size {
        id: id.to_string(),
        name: name.to_string(),
        sort_order,
        kind: SizeKind::Standard,
        yield_quantity: None,
        yield_unit: None,
    }
}

fn line(size_id: &str, ingredient_ref: LineRef, quantity: &str, unit: &str) -> RecipeSizeLine {
    RecipeSizeLine {
        size_id: size_id.to_string(),
        ingredient_ref,
        quantity: dec(quantity),
        unit: unit.to_string(),
    }
}

fn ing(id: &str) -> LineRef {
    LineRef::Ingredient(id.to_string())
}

fn recipe(
    id: &str,
    name: &str,
    is_batch: bool,
    minutes_per_unit: Option<&str>,
    lines: Vec<RecipeSizeLine>,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        category: if is_batch { "Batch" } else { "Espresso" }.to_string(),
        is_batch,
        minutes_per_unit: minutes_per_unit.map(dec),
        default_base_template_id: None,
        lines,
    }
}

fn component(size_id: &str, ingredient_id: &str) -> BaseTemplateLine {
    BaseTemplateLine {
        size_id: size_id.to_string(),
        ingredient_id: ingredient_id.to_string(),
        quantity: Decimal::ONE,
        unit: "each".to_string(),
    }
}

fn base(recipe_id: &str, size_id: &str) -> RecipeSizeBase {
    RecipeSizeBase {
        recipe_id: recipe_id.to_string(),
        size_id: size_id.to_string(),
        base_template_id: "tpl_hot".to_string(),
    }
}

fn price(recipe_id: &str, size_id: &str, sale_price: &str) -> SizePricing {
    SizePricing {
        recipe_id: recipe_id.to_string(),
        size_id: size_id.to_string(),
        sale_price: dec(sale_price),
    }
}

/// A small café: a latte with and without a cup template, a vanilla latte
/// consuming a house syrup, and a plain drip coffee.
pub(crate) fn cafe_snapshot() -> CostSnapshot {
    let ingredients = vec![
        ingredient("ing_beans", "Espresso Beans", IngredientType::Foh, "10.00", "1", "lb", Some("oz")),
        ingredient("ing_milk", "Whole Milk", IngredientType::Foh, "4.48", "1", "gal", Some("oz")),
        ingredient("ing_sugar", "Cane Sugar", IngredientType::Boh, "2.00", "1", "kg", Some("g")),
        ingredient("ing_cup_12", "12oz Hot Cup", IngredientType::Disposable, "50", "1000", "each", None),
        ingredient("ing_cup_16", "16oz Hot Cup", IngredientType::Disposable, "60", "1000", "each", None),
        ingredient("ing_lid", "Hot Lid", IngredientType::Disposable, "30", "1000", "each", None),
        ingredient("ing_vanilla", "Vanilla Extract", IngredientType::Boh, "12.00", "1", "bottle", Some("oz")),
    ];

    // Declared out of order on purpose.
    let sizes = vec![
        size("size_16", "16 oz", 2),
        Size {
            kind: SizeKind::Batch,
            yield_quantity: Some(dec("32")),
            yield_unit: Some("oz".to_string()),
            ..size("size_batch", "Batch", 3)
        },
        size("size_12", "12 oz", 1),
    ];

    let recipes = vec![
        recipe(
            "rec_latte",
            "Latte",
            false,
            Some("2"),
            vec![
                line("size_12", ing("ing_beans"), "0.5", "oz"),
                line("size_12", ing("ing_milk"), "10", "oz"),
                line("size_16", ing("ing_beans"), "0.5", "oz"),
                line("size_16", ing("ing_milk"), "14", "oz"),
            ],
        ),
        recipe(
            "rec_syrup",
            "Vanilla Syrup",
            true,
            Some("2"),
            vec![line("size_batch", ing("ing_sugar"), "1000", "g")],
        ),
        recipe(
            "rec_vanilla_latte",
            "Vanilla Latte",
            false,
            None,
            vec![
                line("size_12", ing("ing_beans"), "0.5", "oz"),
                line("size_12", ing("ing_milk"), "10", "oz"),
                line(
                    "size_12",
                    LineRef::BatchRecipe("rec_syrup".to_string()),
                    "1.5",
                    "oz",
                ),
            ],
        ),
        recipe(
            "rec_drip",
            "Drip Coffee",
            false,
            None,
            vec![line("size_12", ing("ing_beans"), "0.5", "oz")],
        ),
    ];

    let base_templates = vec![BaseTemplate {
        id: "tpl_hot".to_string(),
        name: "Hot Cup".to_string(),
        category: "Packaging".to_string(),
        lines: vec![
            component("size_12", "ing_cup_12"),
            component("size_12", "ing_lid"),
            component("size_16", "ing_cup_16"),
            component("size_16", "ing_lid"),
        ],
    }];

    CostSnapshot {
        ingredients,
        recipes,
        sizes,
        base_templates,
        recipe_size_bases: vec![
            base("rec_latte", "size_12"),
            base("rec_vanilla_latte", "size_12"),
        ],
        overhead_items: vec![OverheadItem {
            id: "oh_rent".to_string(),
            name: "Rent".to_string(),
            amount: dec("1454.88"),
            frequency: Frequency::Monthly,
        }],
        overhead_settings: OverheadSettings {
            operating_days_per_week: dec("7"),
            hours_open_per_day: dec("8"),
        },
        size_pricing: vec![
            price("rec_latte", "size_12", "4.50"),
            price("rec_latte", "size_16", "5.00"),
            price("rec_vanilla_latte", "size_12", "5.25"),
            price("rec_drip", "size_12", "2.50"),
        ],
    }
}
