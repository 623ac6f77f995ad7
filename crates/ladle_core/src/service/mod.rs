//! Core state components and use-case services.
//!
//! # Responsibility
//! - Own the search, recipe, shopping-list and liked-set state.
//! - Keep UI/FFI layers decoupled from storage and transport details.

pub mod likes_service;
pub mod recipe_service;
pub mod search_service;
pub mod shopping_service;
