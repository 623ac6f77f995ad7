//! Shopping-list item model.
//!
//! # Responsibility
//! - Define the list entry shape owned by the shopping list state.
//!
//! # Invariants
//! - `id` is generated locally and unique within one list.
//! - Items copied from a recipe share no storage with recipe state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one shopping-list entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = Uuid;

/// One entry of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Locally generated stable id, unique within the list.
    pub id: ItemId,
    /// Unset for unmeasured entries ("salt to taste").
    pub quantity: Option<f64>,
    /// Canonical unit name, or empty when unitless.
    pub unit: String,
    pub name: String,
}

impl ShoppingListItem {
    /// Creates a new item with a generated stable id.
    pub fn new(quantity: Option<f64>, unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            quantity,
            unit: unit.into(),
            name: name.into(),
        }
    }
}
