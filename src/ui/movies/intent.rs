//! Intents for the movie search page.

use crate::api::{MediaType, MovieSearchPage};
use crate::ui::fetch::RequestToken;
use crate::ui::mvi::Intent;

/// One filter field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Year(String),
    Kind(MediaType),
}

#[derive(Debug, Clone)]
pub enum MovieIntent {
    /// User submitted a title; jumps back to page 1.
    SetQuery { query: String },

    /// Start a search for the current inputs.
    Search,

    Loaded {
        token: RequestToken,
        page: MovieSearchPage,
    },

    Failed {
        token: RequestToken,
        message: String,
    },

    /// Merge one filter field. Searching is the caller's job.
    UpdateFilter(FilterUpdate),

    ToggleFilters,

    SetPage { page: u32 },

    /// Page was left; the token counter survives.
    Reset,
}

impl Intent for MovieIntent {}
