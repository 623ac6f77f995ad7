//! Application state container and action dispatch.
//!
//! # Responsibility
//! - Own all widget state: search, open recipe, shopping list, likes.
//! - Translate user actions into state transitions against the API
//!   client and repositories.
//!
//! # Invariants
//! - Search and recipe loads are tagged with a monotonically increasing
//!   generation; a completion whose ticket is stale is ignored and can
//!   never clobber newer state.
//! - Blank search queries are ignored without touching state.
//! - A failed recipe load leaves the previously opened recipe intact.

use crate::api::{ApiError, ApiResult, RecipeApi};
use crate::model::likes::LikedRecipe;
use crate::model::recipe::{RecipeDetail, RecipeSummary};
use crate::model::shopping::ItemId;
use crate::repo::likes_repo::{LikesRepository, RepoError};
use crate::service::likes_service::LikesService;
use crate::service::recipe_service::{RecipeState, ServingsDirection};
use crate::service::search_service::SearchState;
use crate::service::shopping_service::{ShoppingList, ShoppingListError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User actions the presentation layer can dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit a new keyword search.
    Search { query: String },
    /// Open one recipe by id.
    OpenRecipe { id: String },
    /// Adjust the open recipe's serving count by one.
    AdjustServings { direction: ServingsDirection },
    /// Copy the open recipe's scaled ingredients into the shopping list.
    AddRecipeToList,
    /// Append one manual shopping-list entry.
    AddListItem {
        quantity: Option<f64>,
        unit: String,
        name: String,
    },
    /// Replace the quantity of one shopping-list entry.
    UpdateListItemQuantity {
        id: ItemId,
        quantity: Option<f64>,
    },
    /// Remove one shopping-list entry.
    DeleteListItem { id: ItemId },
    /// Like or unlike the open recipe.
    ToggleLike,
}

/// App-level error surfaced to the presentation layer.
#[derive(Debug)]
pub enum AppError {
    Api(ApiError),
    Likes(RepoError),
    Shopping(ShoppingListError),
    /// A recipe-scoped action arrived while no recipe is open.
    NoActiveRecipe,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(err) => write!(f, "{err}"),
            Self::Likes(err) => write!(f, "{err}"),
            Self::Shopping(err) => write!(f, "{err}"),
            Self::NoActiveRecipe => write!(f, "no recipe is currently open"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            Self::Likes(err) => Some(err),
            Self::Shopping(err) => Some(err),
            Self::NoActiveRecipe => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<RepoError> for AppError {
    fn from(value: RepoError) -> Self {
        Self::Likes(value)
    }
}

impl From<ShoppingListError> for AppError {
    fn from(value: ShoppingListError) -> Self {
        Self::Shopping(value)
    }
}

/// Ticket tagging one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

/// Ticket tagging one in-flight recipe load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeTicket {
    generation: u64,
    id: String,
}

/// How a load completion was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The completion belonged to the newest request and took effect.
    Applied,
    /// A newer request superseded this one; state was left untouched.
    Stale,
}

/// Explicit application state passed to controller entry points.
///
/// Owns every state component exclusively; the presentation layer reads
/// state back out through the accessors after dispatching commands.
pub struct App<A: RecipeApi, R: LikesRepository> {
    api: A,
    search: Option<SearchState>,
    recipe: Option<RecipeState>,
    shopping: ShoppingList,
    likes: LikesService<R>,
    search_generation: u64,
    recipe_generation: u64,
}

impl<A: RecipeApi, R: LikesRepository> App<A, R> {
    /// Creates app state and restores the persisted liked set.
    pub fn new(api: A, likes_repo: R) -> Self {
        Self {
            api,
            search: None,
            recipe: None,
            shopping: ShoppingList::new(),
            likes: LikesService::restore(likes_repo),
            search_generation: 0,
            recipe_generation: 0,
        }
    }

    pub fn search_state(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    pub fn recipe_state(&self) -> Option<&RecipeState> {
        self.recipe.as_ref()
    }

    pub fn shopping_list(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        &mut self.shopping
    }

    pub fn likes(&self) -> &LikesService<R> {
        &self.likes
    }

    /// Starts a new search: replaces search state with an empty result
    /// set for the query and returns the ticket guarding its completion.
    pub fn begin_search(&mut self, query: &str) -> SearchTicket {
        self.search_generation += 1;
        self.search = Some(SearchState::new(query));
        SearchTicket {
            generation: self.search_generation,
            query: query.to_string(),
        }
    }

    /// Applies a search completion if its ticket is still current.
    ///
    /// On API failure the search state keeps its empty result set and
    /// the error propagates to the caller.
    pub fn complete_search(
        &mut self,
        ticket: &SearchTicket,
        outcome: ApiResult<Vec<RecipeSummary>>,
    ) -> Result<LoadOutcome, AppError> {
        if ticket.generation != self.search_generation {
            info!(
                "event=search_complete module=app status=stale generation={} current={}",
                ticket.generation, self.search_generation
            );
            return Ok(LoadOutcome::Stale);
        }

        let results = outcome?;
        info!(
            "event=search_complete module=app status=ok query_len={} results={}",
            ticket.query.len(),
            results.len()
        );
        if let Some(search) = &mut self.search {
            search.set_results(results);
        }
        Ok(LoadOutcome::Applied)
    }

    /// Blocking convenience: begin, fetch and complete one search.
    ///
    /// Blank queries are ignored: state is untouched and the call
    /// reports `Applied`.
    pub fn search(&mut self, query: &str) -> Result<LoadOutcome, AppError> {
        let query = query.trim();
        if query.is_empty() {
            debug!("event=search_submit module=app status=ignored reason=blank_query");
            return Ok(LoadOutcome::Applied);
        }

        let ticket = self.begin_search(query);
        let outcome = self.api.search(query);
        self.complete_search(&ticket, outcome)
    }

    /// Starts a recipe load: bumps the load generation and highlights
    /// the picked result. Current recipe state stays until a successful
    /// completion replaces it.
    pub fn begin_recipe_load(&mut self, id: &str) -> RecipeTicket {
        self.recipe_generation += 1;
        if let Some(search) = &mut self.search {
            search.select(id);
        }
        RecipeTicket {
            generation: self.recipe_generation,
            id: id.to_string(),
        }
    }

    /// Applies a recipe-load completion if its ticket is still current.
    pub fn complete_recipe_load(
        &mut self,
        ticket: &RecipeTicket,
        outcome: ApiResult<RecipeDetail>,
    ) -> Result<LoadOutcome, AppError> {
        if ticket.generation != self.recipe_generation {
            info!(
                "event=recipe_load module=app status=stale generation={} current={}",
                ticket.generation, self.recipe_generation
            );
            return Ok(LoadOutcome::Stale);
        }

        let detail = outcome?;
        info!(
            "event=recipe_load module=app status=ok ingredients={}",
            detail.ingredients_raw.len()
        );
        self.recipe = Some(RecipeState::from_detail(detail));
        Ok(LoadOutcome::Applied)
    }

    /// Blocking convenience: begin, fetch and complete one recipe load.
    pub fn open_recipe(&mut self, id: &str) -> Result<LoadOutcome, AppError> {
        let ticket = self.begin_recipe_load(id);
        let outcome = self.api.fetch_by_id(id);
        self.complete_recipe_load(&ticket, outcome)
    }

    /// Adjusts the open recipe's serving count by one.
    pub fn adjust_servings(&mut self, direction: ServingsDirection) -> Result<(), AppError> {
        let recipe = self.recipe.as_mut().ok_or(AppError::NoActiveRecipe)?;
        recipe.update_servings(direction);
        Ok(())
    }

    /// Copies the open recipe's scaled ingredients into the shopping
    /// list; returns how many items were added.
    pub fn add_recipe_to_list(&mut self) -> Result<usize, AppError> {
        let recipe = self.recipe.as_ref().ok_or(AppError::NoActiveRecipe)?;
        Ok(self.shopping.add_ingredients(recipe.ingredients()))
    }

    /// Likes the open recipe, or unlikes it when already liked.
    ///
    /// Returns whether the recipe is liked after the toggle.
    pub fn toggle_like(&mut self) -> Result<bool, AppError> {
        let recipe = self.recipe.as_ref().ok_or(AppError::NoActiveRecipe)?;
        let detail = recipe.detail();

        if self.likes.is_liked(&detail.id) {
            self.likes.delete_like(&detail.id)?;
            Ok(false)
        } else {
            self.likes.add_like(LikedRecipe {
                id: detail.id.clone(),
                title: detail.title.clone(),
                author: detail.author.clone(),
                image_url: detail.image_url.clone(),
            })?;
            Ok(true)
        }
    }

    /// Dispatches one user action to its state transition.
    pub fn dispatch(&mut self, command: Command) -> Result<(), AppError> {
        match command {
            Command::Search { query } => self.search(&query).map(|_| ()),
            Command::OpenRecipe { id } => self.open_recipe(&id).map(|_| ()),
            Command::AdjustServings { direction } => self.adjust_servings(direction),
            Command::AddRecipeToList => self.add_recipe_to_list().map(|_| ()),
            Command::AddListItem {
                quantity,
                unit,
                name,
            } => {
                self.shopping.add_item(quantity, unit, name);
                Ok(())
            }
            Command::UpdateListItemQuantity { id, quantity } => {
                self.shopping.update_quantity(id, quantity)?;
                Ok(())
            }
            Command::DeleteListItem { id } => {
                self.shopping.delete_item(id);
                Ok(())
            }
            Command::ToggleLike => self.toggle_like().map(|_| ()),
        }
    }
}
