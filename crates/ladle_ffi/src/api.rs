//! FFI use-case API for host-UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Keep error semantics simple for UI integration: DTO envelopes with
//!   `ok` + `message`, never a panic across the boundary.
//!
//! # Invariants
//! - Process-wide app state lives behind one mutex; the global lives at
//!   this boundary, never inside core.
//! - Network-backed calls are not marked sync; the host schedules them
//!   off the UI thread.

use ladle_core::db::open_db;
use ladle_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    App, HttpRecipeApi, LikedRecipe, RecipeState, RecipeSummary, ServingsDirection,
    ShoppingListItem, SqliteLikesRepository,
};
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use uuid::Uuid;

const APP_DB_FILE_NAME: &str = "ladle.sqlite3";
const DEFAULT_API_BASE_URL: &str = "https://forkify-api.herokuapp.com/api";

type AppHandle = App<HttpRecipeApi, SqliteLikesRepository>;

static APP: OnceLock<Mutex<Option<AppHandle>>> = OnceLock::new();
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - UI-thread safe for current implementation.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Recipe summary shown in search results and the liked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummaryDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
}

/// One ingredient row of the open recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDto {
    pub quantity: Option<f64>,
    pub unit: String,
    pub name: String,
}

/// Open-recipe projection for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub source_url: String,
    pub servings: u32,
    pub cook_time_minutes: u32,
    pub is_liked: bool,
    pub ingredients: Vec<IngredientDto>,
}

/// One shopping-list row.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItemDto {
    /// Stable item id in string form.
    pub id: String,
    pub quantity: Option<f64>,
    pub unit: String,
    pub name: String,
}

/// Search response envelope with one visible page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPageResponse {
    pub ok: bool,
    /// Items of the requested page (empty on failure or out-of-range).
    pub items: Vec<RecipeSummaryDto>,
    pub page: u32,
    pub page_count: u32,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Open-recipe response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeResponse {
    pub ok: bool,
    pub recipe: Option<RecipeDto>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Runs a keyword search and returns the first result page.
///
/// # FFI contract
/// - Network-backed; not UI-thread safe, schedule off the UI thread.
/// - Never panics; failures come back as `ok=false` envelopes.
pub fn search_recipes(query: String) -> SearchPageResponse {
    let result = with_app(|app| {
        app.search(&query)?;
        Ok(page_response(app, 1))
    });
    unwrap_search_response(result)
}

/// Returns one page of the current search results without refetching.
///
/// # FFI contract
/// - Sync call, in-memory slice only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn search_page(page: u32) -> SearchPageResponse {
    let result = with_app(|app| Ok(page_response(app, page)));
    unwrap_search_response(result)
}

/// Opens one recipe by id and returns its render projection.
///
/// # FFI contract
/// - Network-backed; not UI-thread safe, schedule off the UI thread.
/// - Never panics; failures come back as `ok=false` envelopes.
pub fn open_recipe(id: String) -> RecipeResponse {
    let result = with_app(|app| {
        app.open_recipe(&id)?;
        Ok(recipe_response(app))
    });
    unwrap_recipe_response(result)
}

/// Adjusts the open recipe's serving count by one and re-renders it.
///
/// # FFI contract
/// - Sync call, in-memory recomputation only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn adjust_servings(increase: bool) -> RecipeResponse {
    let direction = if increase {
        ServingsDirection::Increase
    } else {
        ServingsDirection::Decrease
    };
    let result = with_app(|app| {
        app.adjust_servings(direction)?;
        Ok(recipe_response(app))
    });
    unwrap_recipe_response(result)
}

/// Copies the open recipe's scaled ingredients into the shopping list.
///
/// # FFI contract
/// - Sync call, in-memory copy only.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_recipe_to_list() -> ActionResponse {
    match with_app(|app| Ok(app.add_recipe_to_list()?)) {
        Ok(added) => ActionResponse::success(format!("Added {added} ingredient(s) to the list.")),
        Err(err) => ActionResponse::failure(format!("add_recipe_to_list failed: {err}")),
    }
}

/// Returns the full shopping list in insertion order.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; returns an empty list when app init fails.
#[flutter_rust_bridge::frb(sync)]
pub fn shopping_items() -> Vec<ShoppingItemDto> {
    with_app(|app| Ok(app.shopping_list().items().iter().map(shopping_item_dto).collect()))
        .unwrap_or_default()
}

/// Appends one manual shopping-list entry.
///
/// # FFI contract
/// - Sync call.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn add_shopping_item(quantity: Option<f64>, unit: String, name: String) -> ActionResponse {
    match with_app(|app| {
        let item = app.shopping_list_mut().add_item(quantity, unit, name);
        Ok(item.id.to_string())
    }) {
        Ok(id) => ActionResponse::success(format!("Item added: {id}")),
        Err(err) => ActionResponse::failure(format!("add_shopping_item failed: {err}")),
    }
}

/// Replaces the quantity of one shopping-list entry.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; unknown ids return `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn update_shopping_item(id: String, quantity: Option<f64>) -> ActionResponse {
    let item_id = match Uuid::parse_str(id.trim()) {
        Ok(item_id) => item_id,
        Err(_) => return ActionResponse::failure(format!("invalid shopping item id: {id}")),
    };

    match with_app(|app| Ok(app.shopping_list_mut().update_quantity(item_id, quantity)?)) {
        Ok(()) => ActionResponse::success("Item updated."),
        Err(err) => ActionResponse::failure(format!("update_shopping_item failed: {err}")),
    }
}

/// Removes one shopping-list entry; absent ids are a no-op.
///
/// # FFI contract
/// - Sync call.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_shopping_item(id: String) -> ActionResponse {
    let item_id = match Uuid::parse_str(id.trim()) {
        Ok(item_id) => item_id,
        Err(_) => return ActionResponse::failure(format!("invalid shopping item id: {id}")),
    };

    match with_app(|app| {
        app.shopping_list_mut().delete_item(item_id);
        Ok(())
    }) {
        Ok(()) => ActionResponse::success("Item deleted."),
        Err(err) => ActionResponse::failure(format!("delete_shopping_item failed: {err}")),
    }
}

/// Likes the open recipe, or unlikes it when already liked.
///
/// # FFI contract
/// - Sync call, local storage write.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_like() -> ActionResponse {
    match with_app(|app| Ok(app.toggle_like()?)) {
        Ok(true) => ActionResponse::success("Recipe liked."),
        Ok(false) => ActionResponse::success("Like removed."),
        Err(err) => ActionResponse::failure(format!("toggle_like failed: {err}")),
    }
}

/// Returns all liked recipes in like order.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; returns an empty list when app init fails.
#[flutter_rust_bridge::frb(sync)]
pub fn liked_recipes() -> Vec<RecipeSummaryDto> {
    with_app(|app| Ok(app.likes().likes().iter().map(liked_dto).collect())).unwrap_or_default()
}

/// Returns whether one recipe id is in the liked set.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; reports `false` when app init fails.
#[flutter_rust_bridge::frb(sync)]
pub fn is_recipe_liked(id: String) -> bool {
    with_app(|app| Ok(app.likes().is_liked(&id))).unwrap_or(false)
}

/// Returns the liked-set cardinality.
///
/// # FFI contract
/// - Sync call.
/// - Never panics; reports `0` when app init fails.
#[flutter_rust_bridge::frb(sync)]
pub fn num_likes() -> u32 {
    with_app(|app| Ok(app.likes().num_likes() as u32)).unwrap_or(0)
}

fn with_app<T>(f: impl FnOnce(&mut AppHandle) -> Result<T, ladle_core::AppError>) -> Result<T, String> {
    let cell = APP.get_or_init(|| Mutex::new(None));
    let mut guard = cell
        .lock()
        .map_err(|_| "app state lock poisoned".to_string())?;

    if guard.is_none() {
        let conn =
            open_db(resolve_app_db_path()).map_err(|err| format!("app DB open failed: {err}"))?;
        let api = HttpRecipeApi::new(resolve_api_base_url());
        *guard = Some(App::new(api, SqliteLikesRepository::new(conn)));
        log::info!("event=app_init module=ffi status=ok");
    }

    let Some(app) = guard.as_mut() else {
        return Err("app state unavailable".to_string());
    };
    f(app).map_err(|err| err.to_string())
}

fn resolve_app_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("LADLE_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

fn resolve_api_base_url() -> String {
    match std::env::var("LADLE_API_BASE_URL") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().to_string(),
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}

fn page_response(app: &AppHandle, page: u32) -> SearchPageResponse {
    let Some(search) = app.search_state() else {
        return SearchPageResponse {
            ok: true,
            items: Vec::new(),
            page,
            page_count: 0,
            message: "No search submitted.".to_string(),
        };
    };

    let items: Vec<RecipeSummaryDto> = search.page(page).iter().map(summary_dto).collect();
    let message = if items.is_empty() {
        "No results.".to_string()
    } else {
        format!("Found {} result(s).", search.results().len())
    };
    SearchPageResponse {
        ok: true,
        items,
        page,
        page_count: search.page_count(),
        message,
    }
}

fn recipe_response(app: &AppHandle) -> RecipeResponse {
    let Some(recipe) = app.recipe_state() else {
        return RecipeResponse {
            ok: false,
            recipe: None,
            message: "No recipe open.".to_string(),
        };
    };
    let is_liked = app.likes().is_liked(&recipe.detail().id);

    RecipeResponse {
        ok: true,
        recipe: Some(recipe_dto(recipe, is_liked)),
        message: "Recipe loaded.".to_string(),
    }
}

fn recipe_dto(recipe: &RecipeState, is_liked: bool) -> RecipeDto {
    let detail = recipe.detail();
    RecipeDto {
        id: detail.id.clone(),
        title: detail.title.clone(),
        author: detail.author.clone(),
        image_url: detail.image_url.clone(),
        source_url: detail.source_url.clone(),
        servings: recipe.servings(),
        cook_time_minutes: recipe.cook_time_minutes(),
        is_liked,
        ingredients: recipe
            .ingredients()
            .iter()
            .map(|ingredient| IngredientDto {
                quantity: ingredient.quantity,
                unit: ingredient.unit.clone(),
                name: ingredient.name.clone(),
            })
            .collect(),
    }
}

fn summary_dto(summary: &RecipeSummary) -> RecipeSummaryDto {
    RecipeSummaryDto {
        id: summary.id.clone(),
        title: summary.title.clone(),
        author: summary.author.clone(),
        image_url: summary.image_url.clone(),
    }
}

fn liked_dto(like: &LikedRecipe) -> RecipeSummaryDto {
    RecipeSummaryDto {
        id: like.id.clone(),
        title: like.title.clone(),
        author: like.author.clone(),
        image_url: like.image_url.clone(),
    }
}

fn shopping_item_dto(item: &ShoppingListItem) -> ShoppingItemDto {
    ShoppingItemDto {
        id: item.id.to_string(),
        quantity: item.quantity,
        unit: item.unit.clone(),
        name: item.name.clone(),
    }
}

fn unwrap_search_response(result: Result<SearchPageResponse, String>) -> SearchPageResponse {
    result.unwrap_or_else(|err| SearchPageResponse {
        ok: false,
        items: Vec::new(),
        page: 0,
        page_count: 0,
        message: format!("search failed: {err}"),
    })
}

fn unwrap_recipe_response(result: Result<RecipeResponse, String>) -> RecipeResponse {
    result.unwrap_or_else(|err| RecipeResponse {
        ok: false,
        recipe: None,
        message: format!("recipe load failed: {err}"),
    })
}
