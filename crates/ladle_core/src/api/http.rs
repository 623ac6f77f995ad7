//! HTTP implementation of the recipe API contract.
//!
//! # Responsibility
//! - Issue keyword-search and fetch-by-id requests over HTTP.
//! - Decode provider payloads into domain records.
//!
//! # Invariants
//! - Requests carry explicit connect/read timeouts.
//! - Decoding never panics; malformed payloads surface as `Parse`.

use super::{ApiError, ApiResult, RecipeApi};
use crate::model::recipe::{RecipeDetail, RecipeSummary};
use log::{error, info};
use reqwest::blocking::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::{Duration, Instant};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Serving count assumed when the provider omits the field. The upstream
/// dataset predates per-recipe servings and historically rendered
/// everything for four.
const DEFAULT_ORIGINAL_SERVINGS: u32 = 4;

/// Recipe lookup client over a forkify-style HTTP provider.
///
/// Endpoints: `GET {base}/search?q={query}` and `GET {base}/get?rId={id}`.
pub struct HttpRecipeApi {
    base_url: String,
    client: Client,
}

impl HttpRecipeApi {
    /// Creates a client for the given provider base URL.
    ///
    /// A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    fn get_text(&self, path: &str, query: &[(&str, &str)]) -> ApiResult<String> {
        let url = format!("{}/{path}", self.base_url);
        let response = self.client.get(url).query(query).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

impl RecipeApi for HttpRecipeApi {
    fn search(&self, query: &str) -> ApiResult<Vec<RecipeSummary>> {
        let started_at = Instant::now();
        let result = self
            .get_text("search", &[("q", query)])
            .and_then(|body| decode_search(&body));

        match &result {
            Ok(summaries) => info!(
                "event=api_search module=api status=ok results={} duration_ms={}",
                summaries.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=api_search module=api status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }

    fn fetch_by_id(&self, id: &str) -> ApiResult<RecipeDetail> {
        let started_at = Instant::now();
        let result = self
            .get_text("get", &[("rId", id)])
            .and_then(|body| decode_detail(&body));

        match &result {
            Ok(_) => info!(
                "event=api_fetch module=api status=ok duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=api_fetch module=api status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            ),
        }

        result
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    recipes: Vec<SummaryPayload>,
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    recipe_id: String,
    title: String,
    publisher: String,
    #[serde(default)]
    image_url: String,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    recipe: DetailRecipePayload,
}

#[derive(Debug, Deserialize)]
struct DetailRecipePayload {
    recipe_id: String,
    title: String,
    publisher: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    source_url: String,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    ingredients: Vec<String>,
}

/// Decodes a search response body into summary records.
fn decode_search(body: &str) -> ApiResult<Vec<RecipeSummary>> {
    let payload: SearchPayload = serde_json::from_str(body)
        .map_err(|err| ApiError::Parse(format!("search payload: {err}")))?;

    Ok(payload
        .recipes
        .into_iter()
        .map(|recipe| RecipeSummary {
            id: recipe.recipe_id,
            title: recipe.title,
            author: recipe.publisher,
            image_url: recipe.image_url,
        })
        .collect())
}

/// Decodes a fetch-by-id response body into one detail record.
///
/// Absent or zero serving counts fall back to
/// [`DEFAULT_ORIGINAL_SERVINGS`] so the `original_servings >= 1`
/// invariant holds at the model boundary.
fn decode_detail(body: &str) -> ApiResult<RecipeDetail> {
    let payload: DetailPayload = serde_json::from_str(body)
        .map_err(|err| ApiError::Parse(format!("detail payload: {err}")))?;
    let recipe = payload.recipe;

    let original_servings = match recipe.servings {
        Some(0) | None => DEFAULT_ORIGINAL_SERVINGS,
        Some(value) => value,
    };

    Ok(RecipeDetail {
        id: recipe.recipe_id,
        title: recipe.title,
        author: recipe.publisher,
        image_url: recipe.image_url,
        source_url: recipe.source_url,
        original_servings,
        ingredients_raw: recipe.ingredients,
    })
}

#[cfg(test)]
mod tests {
    use super::{decode_detail, decode_search, ApiError};

    #[test]
    fn decodes_search_payload_into_summaries() {
        let body = r#"{
            "count": 2,
            "recipes": [
                {"recipe_id": "r1", "title": "Pizza", "publisher": "Closet Cooking", "image_url": "https://img/p.jpg", "social_rank": 99.9},
                {"recipe_id": "r2", "title": "Pasta", "publisher": "101 Cookbooks", "image_url": "https://img/q.jpg"}
            ]
        }"#;

        let summaries = decode_search(body).expect("decode search");
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "r1");
        assert_eq!(summaries[0].author, "Closet Cooking");
    }

    #[test]
    fn empty_recipes_array_decodes_to_empty_results() {
        let summaries = decode_search(r#"{"count": 0, "recipes": []}"#).expect("decode search");
        assert!(summaries.is_empty());
    }

    #[test]
    fn malformed_search_body_is_a_parse_error() {
        let err = decode_search("<html>offline</html>").expect_err("decode should fail");
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn decodes_detail_payload_with_servings() {
        let body = r#"{
            "recipe": {
                "recipe_id": "r1",
                "title": "Pizza",
                "publisher": "Closet Cooking",
                "image_url": "https://img/p.jpg",
                "source_url": "https://example.com/pizza",
                "servings": 6,
                "ingredients": ["2 cups flour", "1 tsp salt"]
            }
        }"#;

        let detail = decode_detail(body).expect("decode detail");
        assert_eq!(detail.original_servings, 6);
        assert_eq!(detail.ingredients_raw.len(), 2);
        assert_eq!(detail.source_url, "https://example.com/pizza");
    }

    #[test]
    fn missing_servings_defaults_to_four() {
        let body = r#"{
            "recipe": {
                "recipe_id": "r1",
                "title": "Pizza",
                "publisher": "Closet Cooking",
                "ingredients": []
            }
        }"#;

        let detail = decode_detail(body).expect("decode detail");
        assert_eq!(detail.original_servings, 4);
    }

    #[test]
    fn zero_servings_is_normalized_to_the_default() {
        let body = r#"{
            "recipe": {
                "recipe_id": "r1",
                "title": "Pizza",
                "publisher": "Closet Cooking",
                "servings": 0,
                "ingredients": []
            }
        }"#;

        let detail = decode_detail(body).expect("decode detail");
        assert_eq!(detail.original_servings, 4);
    }
}
