//! State for the dog gallery page.

use crate::ui::fetch::{FetchState, RequestToken};
use crate::ui::mvi::UiState;
use crate::ui::paginate::{page_slice, total_pages};

pub const DEFAULT_IMAGES_PER_PAGE: usize = 12;

/// Dog container: breed directory plus the image gallery of one breed.
///
/// The filtered breed list, visible image slice and page count are derived
/// on read and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DogState {
    /// Full breed directory, fetched once per visit.
    pub breeds: FetchState<Vec<String>>,
    /// Active breed search text.
    pub breed_query: String,
    pub selected: Option<String>,
    pub images: FetchState<Vec<String>>,
    /// 1-based.
    pub current_page: usize,
    pub images_per_page: usize,
    pub breeds_token: RequestToken,
    pub images_token: RequestToken,
}

impl Default for DogState {
    fn default() -> Self {
        Self {
            breeds: FetchState::Idle,
            breed_query: String::new(),
            selected: None,
            images: FetchState::Idle,
            current_page: 1,
            images_per_page: DEFAULT_IMAGES_PER_PAGE,
            breeds_token: RequestToken::default(),
            images_token: RequestToken::default(),
        }
    }
}

impl UiState for DogState {}

impl DogState {
    pub fn all_breeds(&self) -> &[String] {
        self.breeds.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn filtered_breeds(&self) -> Vec<&str> {
        filter_breeds(self.all_breeds(), &self.breed_query)
    }

    pub fn image_list(&self) -> &[String] {
        self.images.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.image_list().len(), self.images_per_page)
    }

    pub fn visible_images(&self) -> &[String] {
        page_slice(self.image_list(), self.current_page, self.images_per_page)
    }

    pub fn is_loading(&self) -> bool {
        self.breeds.is_loading() || self.images.is_loading()
    }

    /// Error to show in the gallery banner, images first.
    pub fn error(&self) -> Option<&str> {
        self.images.error().or_else(|| self.breeds.error())
    }
}

/// Case-insensitive substring match over breed names, order preserved.
pub fn filter_breeds<'a, S: AsRef<str>>(breeds: &'a [S], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    breeds
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_matches_substring_ignoring_case() {
        let breeds = ["akita", "beagle", "boxer"];
        assert_eq!(filter_breeds(&breeds, "bo"), vec!["boxer"]);
        assert_eq!(filter_breeds(&breeds, "BEA"), vec!["beagle"]);
        assert_eq!(filter_breeds(&breeds, ""), vec!["akita", "beagle", "boxer"]);
    }

    #[test]
    fn whitespace_is_part_of_the_query() {
        let breeds = ["akita", "beagle", "boxer"];
        assert!(filter_breeds(&breeds, "bo ").is_empty());
        assert!(filter_breeds(&breeds, "  ").is_empty());
    }

    #[test]
    fn default_page_is_one() {
        let state = DogState::default();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages(), 0);
        assert!(state.visible_images().is_empty());
    }
}
