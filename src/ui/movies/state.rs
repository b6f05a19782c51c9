//! State for the movie search page.

use crate::api::{MediaType, MovieQuery, MovieSummary};
use crate::ui::fetch::{FetchState, RequestToken};
use crate::ui::mvi::UiState;

/// Filter panel values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieFilters {
    /// Release year as typed; blank means any year.
    pub year: String,
    pub kind: MediaType,
    /// Panel visibility only; never affects data.
    pub show_filters: bool,
}

/// Movie container. Pagination is server-side: `total_pages` comes from
/// the last successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieState {
    pub search_query: String,
    /// 1-based.
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u32,
    pub filters: MovieFilters,
    pub results: FetchState<Vec<MovieSummary>>,
    pub latest: RequestToken,
}

impl Default for MovieState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            current_page: 1,
            total_pages: 0,
            total_results: 0,
            filters: MovieFilters::default(),
            results: FetchState::Idle,
            latest: RequestToken::default(),
        }
    }
}

impl UiState for MovieState {}

/// Inputs that trigger a new search whenever any of them changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    pub query: String,
    pub page: u32,
    pub year: String,
    pub kind: MediaType,
}

impl MovieState {
    pub fn search_key(&self) -> SearchKey {
        SearchKey {
            query: self.search_query.clone(),
            page: self.current_page,
            year: self.filters.year.clone(),
            kind: self.filters.kind,
        }
    }

    /// Request for the current inputs, using `default_query` until the
    /// user has searched for something.
    pub fn query_for(&self, default_query: &str) -> MovieQuery {
        let title = if self.search_query.trim().is_empty() {
            default_query
        } else {
            self.search_query.as_str()
        };
        let year = self.filters.year.trim();
        MovieQuery {
            title: title.to_string(),
            page: self.current_page.max(1),
            year: (!year.is_empty()).then(|| year.to_string()),
            kind: self.filters.kind,
        }
    }

    pub fn movies(&self) -> &[MovieSummary] {
        self.results.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.results.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.results.error()
    }

    pub fn has_query(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}
