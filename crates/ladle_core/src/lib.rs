//! Core domain logic for Ladle, a recipe search-and-planning widget.
//! This crate is the single source of truth for business invariants.

pub mod api;
pub mod app;
pub mod db;
pub mod logging;
pub mod model;
pub mod parse;
pub mod repo;
pub mod service;

pub use api::{ApiError, ApiResult, HttpRecipeApi, RecipeApi};
pub use app::{App, AppError, Command, LoadOutcome, RecipeTicket, SearchTicket};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::likes::LikedRecipe;
pub use model::recipe::{Ingredient, RecipeDetail, RecipeSummary};
pub use model::shopping::{ItemId, ShoppingListItem};
pub use parse::ingredient::parse_ingredient_line;
pub use repo::likes_repo::{LikesRepository, RepoError, RepoResult, SqliteLikesRepository};
pub use service::likes_service::LikesService;
pub use service::recipe_service::{RecipeState, ServingsDirection};
pub use service::search_service::{SearchState, RESULTS_PER_PAGE};
pub use service::shopping_service::{ShoppingList, ShoppingListError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
