//! Search result state and pagination.
//!
//! # Responsibility
//! - Hold the current query, its full result set and the highlighted
//!   result.
//! - Compute visible page slices.
//!
//! # Invariants
//! - `results` is replaced wholesale on each new search, never mutated
//!   in place.
//! - Page numbers are 1-indexed; out-of-range pages yield an empty
//!   slice, not an error.

use crate::model::recipe::RecipeSummary;

/// Fixed number of summaries shown per result page.
pub const RESULTS_PER_PAGE: usize = 10;

/// State of one submitted search.
///
/// Created empty for a query; superseded (not merged) by the next query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    results: Vec<RecipeSummary>,
    selected: Option<String>,
}

impl SearchState {
    /// Creates state for a freshly submitted query with no results yet.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
            selected: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[RecipeSummary] {
        &self.results
    }

    /// Replaces the full result set.
    pub(crate) fn set_results(&mut self, results: Vec<RecipeSummary>) {
        self.results = results;
    }

    /// Returns the 1-indexed page slice, clipped to available results.
    pub fn page(&self, page: u32) -> &[RecipeSummary] {
        if page == 0 {
            return &[];
        }
        let start = (page as usize - 1) * RESULTS_PER_PAGE;
        if start >= self.results.len() {
            return &[];
        }
        let end = (start + RESULTS_PER_PAGE).min(self.results.len());
        &self.results[start..end]
    }

    /// Returns how many pages the current result set spans.
    pub fn page_count(&self) -> u32 {
        self.results.len().div_ceil(RESULTS_PER_PAGE) as u32
    }

    /// Marks one result id as the currently opened recipe.
    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    /// Returns the highlighted result id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchState, RESULTS_PER_PAGE};
    use crate::model::recipe::RecipeSummary;

    fn summaries(count: usize) -> Vec<RecipeSummary> {
        (0..count)
            .map(|index| RecipeSummary {
                id: format!("r{index}"),
                title: format!("Recipe {index}"),
                author: "Test Kitchen".to_string(),
                image_url: String::new(),
            })
            .collect()
    }

    #[test]
    fn fresh_state_has_empty_results() {
        let state = SearchState::new("pizza");
        assert_eq!(state.query(), "pizza");
        assert!(state.results().is_empty());
        assert!(state.page(1).is_empty());
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn first_page_holds_at_most_the_page_size() {
        let mut state = SearchState::new("pizza");
        state.set_results(summaries(23));

        assert_eq!(state.page(1).len(), RESULTS_PER_PAGE);
        assert_eq!(state.page(3).len(), 3);
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn short_result_set_fits_on_the_first_page() {
        let mut state = SearchState::new("pizza");
        state.set_results(summaries(4));

        assert_eq!(state.page(1).len(), 4);
        assert_eq!(state.page_count(), 1);
    }

    #[test]
    fn out_of_range_pages_yield_empty_slices() {
        let mut state = SearchState::new("pizza");
        state.set_results(summaries(10));

        assert!(state.page(0).is_empty());
        assert!(state.page(2).is_empty());
        assert!(state.page(99).is_empty());
    }

    #[test]
    fn page_slices_are_contiguous_and_ordered() {
        let mut state = SearchState::new("pizza");
        state.set_results(summaries(12));

        assert_eq!(state.page(1)[0].id, "r0");
        assert_eq!(state.page(1)[9].id, "r9");
        assert_eq!(state.page(2)[0].id, "r10");
        assert_eq!(state.page(2)[1].id, "r11");
    }

    #[test]
    fn selection_tracks_the_opened_recipe() {
        let mut state = SearchState::new("pizza");
        assert_eq!(state.selected(), None);

        state.select("r7");
        assert_eq!(state.selected(), Some("r7"));
    }
}
