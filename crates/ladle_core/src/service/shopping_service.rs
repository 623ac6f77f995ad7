//! Shopping-list state.
//!
//! # Responsibility
//! - Own the ordered collection of shopping-list items.
//! - Provide add/update-quantity/delete by stable item id.
//!
//! # Invariants
//! - Ordering is insertion order; deleting an item never reindexes the
//!   others.
//! - Items copied from a recipe are by-value snapshots of the scaled
//!   ingredients at copy time.

use crate::model::recipe::Ingredient;
use crate::model::shopping::{ItemId, ShoppingListItem};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shopping-list error for id-addressed operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShoppingListError {
    /// The addressed item does not exist in the list.
    ItemNotFound(ItemId),
}

impl Display for ShoppingListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "shopping-list item not found: {id}"),
        }
    }
}

impl Error for ShoppingListError {}

/// Ordered shopping list owned by the app state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends one item with a fresh generated id and returns it.
    pub fn add_item(
        &mut self,
        quantity: Option<f64>,
        unit: impl Into<String>,
        name: impl Into<String>,
    ) -> &ShoppingListItem {
        self.items.push(ShoppingListItem::new(quantity, unit, name));
        &self.items[self.items.len() - 1]
    }

    /// Copies every ingredient into the list by value, preserving order.
    ///
    /// Returns how many items were appended.
    pub fn add_ingredients(&mut self, ingredients: &[Ingredient]) -> usize {
        for ingredient in ingredients {
            self.add_item(
                ingredient.quantity,
                ingredient.unit.clone(),
                ingredient.name.clone(),
            );
        }
        ingredients.len()
    }

    /// Replaces the quantity of the addressed item in place.
    pub fn update_quantity(
        &mut self,
        id: ItemId,
        quantity: Option<f64>,
    ) -> Result<(), ShoppingListError> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(ShoppingListError::ItemNotFound(id)),
        }
    }

    /// Removes the matching entry; absent ids are a silent no-op.
    pub fn delete_item(&mut self, id: ItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Returns one item by id.
    pub fn get(&self, id: ItemId) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{ShoppingList, ShoppingListError};
    use crate::model::recipe::Ingredient;
    use uuid::Uuid;

    #[test]
    fn add_item_generates_unique_ids_and_preserves_order() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Some(2.0), "cup", "flour").id;
        let second = list.add_item(None, "", "salt").id;

        assert_ne!(first, second);
        assert_eq!(list.items()[0].name, "flour");
        assert_eq!(list.items()[1].name, "salt");
    }

    #[test]
    fn update_quantity_mutates_in_place() {
        let mut list = ShoppingList::new();
        let id = list.add_item(Some(2.0), "cup", "flour").id;

        list.update_quantity(id, Some(3.5)).expect("update quantity");
        assert_eq!(list.get(id).expect("item exists").quantity, Some(3.5));
    }

    #[test]
    fn update_quantity_reports_unknown_ids() {
        let mut list = ShoppingList::new();
        let missing = Uuid::new_v4();

        let err = list
            .update_quantity(missing, Some(1.0))
            .expect_err("unknown id should fail");
        assert_eq!(err, ShoppingListError::ItemNotFound(missing));
    }

    #[test]
    fn delete_removes_only_the_addressed_item() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Some(2.0), "cup", "flour").id;
        let second = list.add_item(Some(1.0), "tsp", "salt").id;

        list.delete_item(first);
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, second);

        // Deleting again is a no-op.
        list.delete_item(first);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn ingredients_are_copied_by_value() {
        let mut list = ShoppingList::new();
        let ingredients = vec![
            Ingredient {
                quantity: Some(4.0),
                unit: "cup".to_string(),
                name: "stock".to_string(),
            },
            Ingredient {
                quantity: None,
                unit: String::new(),
                name: "salt to taste".to_string(),
            },
        ];

        let added = list.add_ingredients(&ingredients);
        assert_eq!(added, 2);
        assert_eq!(list.items()[0].quantity, Some(4.0));
        assert_eq!(list.items()[1].name, "salt to taste");
    }
}
