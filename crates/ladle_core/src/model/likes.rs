//! Liked-recipe model.
//!
//! # Invariants
//! - At most one entry per recipe id in the liked set.
//! - The record is a by-value copy of summary data; it never references
//!   live search or recipe state.

use serde::{Deserialize, Serialize};

/// Persisted summary of a user-favorited recipe.
///
/// Serialized as part of the liked-set payload written to durable
/// storage after every like/unlike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikedRecipe {
    /// Opaque id assigned by the recipe API.
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}
