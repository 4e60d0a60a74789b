//! Recipe Cost Engine for café menus
//!
//! This crate turns a snapshot of ingredients, recipes, sizes, base templates
//! and overhead items into per-size unit costs, batch recipe yield costs, and
//! a pricing matrix with profit, margin and margin health per menu item.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;

#[cfg(test)]
mod test_fixtures;
