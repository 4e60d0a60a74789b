//! Error types for the Recipe Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Cost resolution itself never fails: unresolved unit conversions and missing
//! references are carried as values in the results. Errors are reserved for
//! configuration loading and for lookups made at the library/API boundary.

use thiserror::Error;

/// The main error type for the Recipe Cost Engine.
///
/// # Example
///
/// ```
/// use recipe_cost_engine::error::EngineError;
///
/// let error = EngineError::RecipeNotFound {
///     id: "rec_latte".to_string(),
/// };
/// assert_eq!(error.to_string(), "Recipe not found: rec_latte");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A recipe id was not present in the snapshot.
    #[error("Recipe not found: {id}")]
    RecipeNotFound {
        /// The recipe id that was requested.
        id: String,
    },

    /// A size id was not present in the snapshot.
    #[error("Size not found: {id}")]
    SizeNotFound {
        /// The size id that was requested.
        id: String,
    },

    /// A batch costing was requested for a recipe that is not flagged as a batch.
    #[error("Recipe '{id}' is not a batch recipe")]
    NotABatchRecipe {
        /// The recipe id.
        id: String,
    },

    /// The batch recipe has no batch size carrying ingredient lines.
    #[error("Batch recipe '{id}' has no batch size with ingredient lines")]
    NoBatchSize {
        /// The recipe id.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
