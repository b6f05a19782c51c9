use crate::ui::dogs::intent::DogIntent;
use crate::ui::dogs::state::DogState;
use crate::ui::fetch::FetchState;
use crate::ui::mvi::Reducer;

pub struct DogReducer;

impl Reducer for DogReducer {
    type State = DogState;
    type Intent = DogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DogIntent::LoadBreeds => DogState {
                breeds: FetchState::Loading,
                breeds_token: state.breeds_token.next(),
                ..state
            },
            DogIntent::BreedsLoaded { token, breeds } => DogState {
                breeds: state.breeds.resolve(state.breeds_token, token, Ok(breeds)),
                ..state
            },
            DogIntent::BreedsFailed { token, message } => DogState {
                breeds: state.breeds.resolve(state.breeds_token, token, Err(message)),
                ..state
            },
            DogIntent::Filter { query } => DogState {
                breed_query: query,
                ..state
            },
            DogIntent::Select { breed } => DogState {
                selected: Some(breed),
                images: FetchState::Loading,
                current_page: 1,
                images_token: state.images_token.next(),
                ..state
            },
            DogIntent::ImagesLoaded { token, images } => {
                let applies = token == state.images_token && state.images.is_loading();
                DogState {
                    images: state.images.resolve(state.images_token, token, Ok(images)),
                    current_page: if applies { 1 } else { state.current_page },
                    ..state
                }
            }
            DogIntent::ImagesFailed { token, message } => DogState {
                images: state.images.resolve(state.images_token, token, Err(message)),
                ..state
            },
            DogIntent::SetPage { page } => DogState {
                current_page: page,
                ..state
            },
            DogIntent::SetPageSize { per_page } => {
                if per_page == 0 || per_page == state.images_per_page {
                    return state;
                }
                DogState {
                    images_per_page: per_page,
                    current_page: 1,
                    ..state
                }
            }
            DogIntent::Reset => DogState {
                images_per_page: state.images_per_page,
                breeds_token: state.breeds_token,
                images_token: state.images_token,
                ..DogState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_breeds(names: &[&str]) -> DogState {
        let state = DogReducer::reduce(DogState::default(), DogIntent::LoadBreeds);
        let token = state.breeds_token;
        DogReducer::reduce(
            state,
            DogIntent::BreedsLoaded {
                token,
                breeds: names.iter().map(|s| s.to_string()).collect(),
            },
        )
    }

    #[test]
    fn breeds_populate_full_and_filtered_lists() {
        let state = loaded_breeds(&["akita", "beagle"]);
        assert_eq!(state.all_breeds(), &["akita", "beagle"]);
        assert_eq!(state.filtered_breeds(), vec!["akita", "beagle"]);
    }

    #[test]
    fn filter_leaves_selection_alone() {
        let state = loaded_breeds(&["akita", "beagle", "boxer"]);
        let state = DogReducer::reduce(
            state,
            DogIntent::Select {
                breed: "akita".into(),
            },
        );
        let state = DogReducer::reduce(state, DogIntent::Filter { query: "bo".into() });
        assert_eq!(state.selected.as_deref(), Some("akita"));
        assert!(state.images.is_loading());
        assert_eq!(state.filtered_breeds(), vec!["boxer"]);
    }

    #[test]
    fn stale_images_are_dropped() {
        let state = DogReducer::reduce(
            DogState::default(),
            DogIntent::Select {
                breed: "akita".into(),
            },
        );
        let first = state.images_token;
        let state = DogReducer::reduce(
            state,
            DogIntent::Select {
                breed: "boxer".into(),
            },
        );
        let state = DogReducer::reduce(
            state,
            DogIntent::ImagesLoaded {
                token: first,
                images: vec!["akita.jpg".into()],
            },
        );
        assert!(state.images.is_loading());
        assert_eq!(state.selected.as_deref(), Some("boxer"));
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let state = DogReducer::reduce(DogState::default(), DogIntent::SetPageSize { per_page: 0 });
        assert_eq!(state.images_per_page, 12);
    }
}
