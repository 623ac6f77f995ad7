//! External recipe API contract.
//!
//! # Responsibility
//! - Define the lookup seam the rest of core depends on.
//! - Keep transport and payload details inside the HTTP implementation.
//!
//! # Invariants
//! - Implementations are pure request/response: no shared-state
//!   mutation, no retries; the caller decides how to react to failures.

use crate::model::recipe::{RecipeDetail, RecipeSummary};
use std::error::Error;
use std::fmt::{Display, Formatter};

mod http;

pub use http::HttpRecipeApi;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure modes of a recipe lookup.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (DNS, connect, timeout, read).
    Network(reqwest::Error),
    /// The server answered with a non-success HTTP status.
    Status { code: u16 },
    /// The response body is not a well-formed recipe payload.
    Parse(String),
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(err) => write!(f, "recipe api request failed: {err}"),
            Self::Status { code } => write!(f, "recipe api returned http status {code}"),
            Self::Parse(message) => write!(f, "malformed recipe api response: {message}"),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Status { .. } => None,
            Self::Parse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

/// Lookup interface against the external recipe data provider.
pub trait RecipeApi {
    /// Searches recipes by keyword and returns summary records.
    fn search(&self, query: &str) -> ApiResult<Vec<RecipeSummary>>;
    /// Fetches one full recipe record by its opaque id.
    fn fetch_by_id(&self, id: &str) -> ApiResult<RecipeDetail>;
}
