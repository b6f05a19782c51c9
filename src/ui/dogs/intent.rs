//! Intents for the dog gallery page.

use crate::ui::fetch::RequestToken;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DogIntent {
    /// Start loading the breed directory.
    LoadBreeds,

    BreedsLoaded {
        token: RequestToken,
        breeds: Vec<String>,
    },

    BreedsFailed {
        token: RequestToken,
        message: String,
    },

    /// Breed search text changed. Does not touch selection or images.
    Filter { query: String },

    /// User picked a breed; starts loading its images.
    Select { breed: String },

    ImagesLoaded {
        token: RequestToken,
        images: Vec<String>,
    },

    ImagesFailed {
        token: RequestToken,
        message: String,
    },

    SetPage { page: usize },

    SetPageSize { per_page: usize },

    /// Page was left; tokens and page size survive.
    Reset,
}

impl Intent for DogIntent {}
