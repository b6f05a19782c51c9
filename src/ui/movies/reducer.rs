use crate::ui::fetch::FetchState;
use crate::ui::movies::intent::{FilterUpdate, MovieIntent};
use crate::ui::movies::state::{MovieFilters, MovieState};
use crate::ui::mvi::Reducer;

pub struct MovieReducer;

impl Reducer for MovieReducer {
    type State = MovieState;
    type Intent = MovieIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MovieIntent::SetQuery { query } => MovieState {
                search_query: query.trim().to_string(),
                current_page: 1,
                ..state
            },
            MovieIntent::Search => MovieState {
                results: FetchState::Loading,
                latest: state.latest.next(),
                ..state
            },
            MovieIntent::Loaded { token, page } => {
                if token != state.latest || !state.results.is_loading() {
                    return state;
                }
                MovieState {
                    results: FetchState::Success(page.movies),
                    total_pages: page.total_pages,
                    total_results: page.total_results,
                    ..state
                }
            }
            MovieIntent::Failed { token, message } => {
                if token != state.latest || !state.results.is_loading() {
                    return state;
                }
                MovieState {
                    results: FetchState::Failure(message),
                    total_pages: 0,
                    total_results: 0,
                    ..state
                }
            }
            MovieIntent::UpdateFilter(update) => {
                let filters = match update {
                    FilterUpdate::Year(year) => MovieFilters {
                        year,
                        ..state.filters.clone()
                    },
                    FilterUpdate::Kind(kind) => MovieFilters {
                        kind,
                        ..state.filters.clone()
                    },
                };
                MovieState { filters, ..state }
            }
            MovieIntent::ToggleFilters => MovieState {
                filters: MovieFilters {
                    show_filters: !state.filters.show_filters,
                    ..state.filters.clone()
                },
                ..state
            },
            MovieIntent::SetPage { page } => MovieState {
                current_page: page,
                ..state
            },
            MovieIntent::Reset => MovieState {
                latest: state.latest,
                ..MovieState::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MediaType;

    #[test]
    fn set_query_resets_page() {
        let state = MovieState {
            current_page: 4,
            ..MovieState::default()
        };
        let state = MovieReducer::reduce(
            state,
            MovieIntent::SetQuery {
                query: " alien ".into(),
            },
        );
        assert_eq!(state.search_query, "alien");
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn update_filter_merges_single_field() {
        let state = MovieReducer::reduce(
            MovieState::default(),
            MovieIntent::UpdateFilter(FilterUpdate::Year("1999".into())),
        );
        let state = MovieReducer::reduce(
            state,
            MovieIntent::UpdateFilter(FilterUpdate::Kind(MediaType::Series)),
        );
        assert_eq!(state.filters.year, "1999");
        assert_eq!(state.filters.kind, MediaType::Series);
        assert!(state.results.is_idle());
    }

    #[test]
    fn reset_keeps_token_counter() {
        let state = MovieReducer::reduce(MovieState::default(), MovieIntent::Search);
        let state = MovieReducer::reduce(state, MovieIntent::Reset);
        assert_eq!(state.latest.value(), 1);
        assert!(state.results.is_idle());
    }
}
