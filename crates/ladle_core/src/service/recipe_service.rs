//! Loaded-recipe state, serving scaling and cook-time derivation.
//!
//! # Responsibility
//! - Hold the currently displayed recipe with its parsed ingredients.
//! - Rescale ingredient quantities when the serving count changes.
//!
//! # Invariants
//! - `servings >= 1` always; decrease at 1 is a no-op that does not
//!   mutate state.
//! - Raw ingredient lines are immutable after load; scaled ingredients
//!   are recomputed wholesale from the base quantities on every serving
//!   change, never from previously scaled values.

use crate::model::recipe::{Ingredient, RecipeDetail};
use crate::parse::ingredient::parse_ingredient_line;

/// Baseline preparation time in minutes.
pub const BASE_COOK_TIME_MINUTES: u32 = 15;
/// Additional minutes per full group of ingredients.
pub const COOK_TIME_STEP_MINUTES: u32 = 5;
/// Ingredient group size driving the cook-time increment.
const INGREDIENTS_PER_STEP: usize = 3;

/// Direction of a serving-count adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServingsDirection {
    Increase,
    Decrease,
}

/// State of the currently opened recipe.
///
/// Created when a recipe id is opened; replaced (not merged) when a
/// different id is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeState {
    detail: RecipeDetail,
    servings: u32,
    cook_time_minutes: u32,
    /// Parsed quantities per `detail.original_servings`. Immutable after
    /// load; the scaling source of truth.
    base_ingredients: Vec<Ingredient>,
    /// Quantities scaled to the current `servings`.
    ingredients: Vec<Ingredient>,
}

impl RecipeState {
    /// Builds recipe state from a fetched detail record.
    ///
    /// Parses every raw ingredient line once, derives the cook time from
    /// the ingredient count and starts at the recipe's original serving
    /// count.
    pub fn from_detail(detail: RecipeDetail) -> Self {
        let base_ingredients: Vec<Ingredient> = detail
            .ingredients_raw
            .iter()
            .map(|line| parse_ingredient_line(line))
            .collect();
        let cook_time_minutes = estimate_cook_time_minutes(base_ingredients.len());
        let servings = detail.original_servings.max(1);

        let mut state = Self {
            detail,
            servings,
            cook_time_minutes,
            ingredients: base_ingredients.clone(),
            base_ingredients,
        };
        state.rescale();
        state
    }

    pub fn detail(&self) -> &RecipeDetail {
        &self.detail
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn cook_time_minutes(&self) -> u32 {
        self.cook_time_minutes
    }

    /// Ingredients scaled to the current serving count.
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Ratio of current to original servings.
    pub fn scaling_factor(&self) -> f64 {
        f64::from(self.servings) / f64::from(self.detail.original_servings.max(1))
    }

    /// Adjusts the serving count by one and rescales all quantities.
    ///
    /// Returns `false` for the rejected decrease at `servings == 1`, in
    /// which case no state changes.
    pub fn update_servings(&mut self, direction: ServingsDirection) -> bool {
        match direction {
            ServingsDirection::Decrease if self.servings == 1 => return false,
            ServingsDirection::Decrease => self.servings -= 1,
            ServingsDirection::Increase => self.servings += 1,
        }
        self.rescale();
        true
    }

    fn rescale(&mut self) {
        let factor = self.scaling_factor();
        self.ingredients = self
            .base_ingredients
            .iter()
            .map(|ingredient| Ingredient {
                quantity: ingredient.quantity.map(|quantity| quantity * factor),
                unit: ingredient.unit.clone(),
                name: ingredient.name.clone(),
            })
            .collect();
    }
}

/// Derives a display cook time from the ingredient count: a fixed
/// baseline plus an increment per full group of three ingredients.
pub fn estimate_cook_time_minutes(ingredient_count: usize) -> u32 {
    let steps = (ingredient_count / INGREDIENTS_PER_STEP) as u32;
    BASE_COOK_TIME_MINUTES + COOK_TIME_STEP_MINUTES * steps
}
