//! Recipe records as returned by the external recipe API.
//!
//! # Responsibility
//! - Define the summary shape shown in search results.
//! - Define the full detail shape used to build recipe state.
//!
//! # Invariants
//! - Both records are replaced wholesale, never merged field-by-field.
//! - `RecipeDetail::original_servings` is at least 1 after decoding.

use serde::{Deserialize, Serialize};

/// Minimal recipe record shown in search result lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Opaque id assigned by the recipe API.
    pub id: String,
    pub title: String,
    /// Publisher/author display name.
    pub author: String,
    pub image_url: String,
}

/// Full recipe record including raw ingredient lines and metadata.
///
/// This is the API-shaped record: it stays immutable after a load. Serving
/// scaling and parsed ingredients are derived projections owned by
/// [`crate::service::recipe_service::RecipeState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    /// Serving count the ingredient quantities refer to. Always >= 1.
    pub original_servings: u32,
    /// Free-text ingredient lines, in recipe order.
    pub ingredients_raw: Vec<String>,
}

/// One structured ingredient parsed from a raw line.
///
/// `quantity` is unset when the line carries no leading numeric token
/// ("salt to taste"). `unit` is empty when no known unit token follows the
/// quantity ("2 eggs").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub quantity: Option<f64>,
    pub unit: String,
    pub name: String,
}
