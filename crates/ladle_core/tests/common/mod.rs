//! Shared fixtures for integration tests.

use ladle_core::{ApiError, ApiResult, RecipeApi, RecipeDetail, RecipeSummary};

/// Scripted in-process recipe API used instead of a live provider.
pub struct MockRecipeApi {
    summaries: Vec<RecipeSummary>,
    details: Vec<RecipeDetail>,
    fail_search: bool,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self {
            summaries: Vec::new(),
            details: Vec::new(),
            fail_search: false,
        }
    }

    pub fn with_summaries(mut self, summaries: Vec<RecipeSummary>) -> Self {
        self.summaries = summaries;
        self
    }

    pub fn with_detail(mut self, detail: RecipeDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }
}

impl RecipeApi for MockRecipeApi {
    fn search(&self, _query: &str) -> ApiResult<Vec<RecipeSummary>> {
        if self.fail_search {
            return Err(ApiError::Status { code: 503 });
        }
        Ok(self.summaries.clone())
    }

    fn fetch_by_id(&self, id: &str) -> ApiResult<RecipeDetail> {
        self.details
            .iter()
            .find(|detail| detail.id == id)
            .cloned()
            .ok_or(ApiError::Status { code: 404 })
    }
}

/// Builds `count` numbered summaries ("r0", "r1", ...).
pub fn summaries(count: usize) -> Vec<RecipeSummary> {
    (0..count)
        .map(|index| RecipeSummary {
            id: format!("r{index}"),
            title: format!("Recipe {index}"),
            author: "Test Kitchen".to_string(),
            image_url: format!("https://img.example/r{index}.jpg"),
        })
        .collect()
}

/// Builds one detail record with the given id and raw ingredient lines.
pub fn detail(id: &str, original_servings: u32, ingredients_raw: &[&str]) -> RecipeDetail {
    RecipeDetail {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        author: "Test Kitchen".to_string(),
        image_url: format!("https://img.example/{id}.jpg"),
        source_url: format!("https://example.com/{id}"),
        original_servings,
        ingredients_raw: ingredients_raw.iter().map(|s| s.to_string()).collect(),
    }
}
