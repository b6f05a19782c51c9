use crate::api::MovieQuery;
use crate::config::Config;
use crate::ui::dogs::{DogIntent, DogReducer, DogState};
use crate::ui::fetch::RequestToken;
use crate::ui::movies::{FilterUpdate, MovieIntent, MovieReducer, MovieState, SearchKey};
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;
use crate::ui::weather::{WeatherIntent, WeatherReducer, WeatherState};
use crate::ui::widgets::{Loader, PageNav, Paginator, SearchBar};
use crate::worker::FetchOutcome;
use tokio::sync::mpsc;

/// Cards on the home page, in display order.
pub const HOME_CARDS: [Route; 3] = [Route::Weather, Route::Dogs, Route::Movies];

#[derive(Debug)]
pub enum UiCommand {
    FetchWeather { token: RequestToken, city: String },
    FetchBreeds { token: RequestToken },
    FetchBreedImages { token: RequestToken, breed: String },
    SearchMovies { token: RequestToken, query: MovieQuery },
}

impl UiCommand {
    pub fn token(&self) -> RequestToken {
        match self {
            UiCommand::FetchWeather { token, .. }
            | UiCommand::FetchBreeds { token }
            | UiCommand::FetchBreedImages { token, .. }
            | UiCommand::SearchMovies { token, .. } => *token,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UiCommand::FetchWeather { .. } => "fetch_weather",
            UiCommand::FetchBreeds { .. } => "fetch_breeds",
            UiCommand::FetchBreedImages { .. } => "fetch_breed_images",
            UiCommand::SearchMovies { .. } => "search_movies",
        }
    }
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Focusable inputs on the movie page.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum MovieFocus {
    #[default]
    Search,
    Kind,
    Year,
}

/// Text inputs owned by the pages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchField {
    Weather,
    Dogs,
    Movies,
    Year,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    route: Route,
    home_selection: usize,
    /// Domain containers (MVI pattern).
    weather: WeatherState,
    dogs: DogState,
    movies: MovieState,
    weather_search: SearchBar,
    dog_search: SearchBar,
    movie_search: SearchBar,
    year_input: SearchBar,
    breed_cursor: usize,
    movie_focus: MovieFocus,
    default_query: String,
    temperature_unit: &'static str,
    loader: Loader,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut app = Self {
            should_quit: false,
            route: Route::Home,
            home_selection: 0,
            weather: WeatherState::default(),
            dogs: DogState::default(),
            movies: MovieState::default(),
            weather_search: SearchBar::new("Enter city name (e.g., London, Tokyo, New York)"),
            dog_search: SearchBar::new("Search for a dog breed..."),
            movie_search: SearchBar::new("Search for movies, TV shows, or episodes..."),
            year_input: SearchBar::digits("e.g., 2023", 4),
            breed_cursor: 0,
            movie_focus: MovieFocus::Search,
            default_query: config.movies.default_query.clone(),
            temperature_unit: temperature_unit(&config.weather.units),
            loader: Loader::default(),
            command_sender: None,
            last_command_error: None,
        };
        dispatch_mvi!(
            app,
            dogs,
            DogReducer,
            DogIntent::SetPageSize {
                per_page: config.dogs.images_per_page,
            }
        );
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn weather(&self) -> &WeatherState {
        &self.weather
    }

    pub fn dogs(&self) -> &DogState {
        &self.dogs
    }

    pub fn movies(&self) -> &MovieState {
        &self.movies
    }

    pub fn home_selection(&self) -> usize {
        self.home_selection
    }

    pub fn breed_cursor(&self) -> usize {
        self.breed_cursor
    }

    pub fn movie_focus(&self) -> MovieFocus {
        self.movie_focus
    }

    pub fn default_query(&self) -> &str {
        &self.default_query
    }

    /// Suffix for temperatures in the configured unit system.
    pub fn temperature_unit(&self) -> &'static str {
        self.temperature_unit
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn search_bar(&self, field: SearchField) -> &SearchBar {
        match field {
            SearchField::Weather => &self.weather_search,
            SearchField::Dogs => &self.dog_search,
            SearchField::Movies => &self.movie_search,
            SearchField::Year => &self.year_input,
        }
    }

    pub fn search_bar_mut(&mut self, field: SearchField) -> &mut SearchBar {
        match field {
            SearchField::Weather => &mut self.weather_search,
            SearchField::Dogs => &mut self.dog_search,
            SearchField::Movies => &mut self.movie_search,
            SearchField::Year => &mut self.year_input,
        }
    }

    /// Input that receives typed characters on the current page.
    pub fn focused_field(&self) -> Option<SearchField> {
        match self.route {
            Route::Home => None,
            Route::Weather => Some(SearchField::Weather),
            Route::Dogs => Some(SearchField::Dogs),
            Route::Movies => match self.movie_focus {
                MovieFocus::Search => Some(SearchField::Movies),
                MovieFocus::Year => Some(SearchField::Year),
                MovieFocus::Kind => None,
            },
        }
    }

    // -- Navigation ---------------------------------------------------------

    /// Show `route` at startup, running its mount effects.
    pub fn start(&mut self, route: Route) {
        self.route = route;
        self.enter(route);
    }

    /// Switch pages. The page being left is reset; the new page refetches.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::info!(from = ?self.route, to = ?route, "Navigate");
        self.leave(self.route);
        self.route = route;
        self.enter(route);
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::Home => {}
            Route::Weather => {
                dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Reset);
                self.weather_search.clear();
            }
            Route::Dogs => {
                dispatch_mvi!(self, dogs, DogReducer, DogIntent::Reset);
                self.dog_search.clear();
                self.breed_cursor = 0;
            }
            Route::Movies => {
                dispatch_mvi!(self, movies, MovieReducer, MovieIntent::Reset);
                self.movie_search.clear();
                self.year_input.clear();
                self.movie_focus = MovieFocus::Search;
            }
        }
    }

    fn enter(&mut self, route: Route) {
        match route {
            Route::Dogs => self.load_breeds(),
            Route::Movies => self.search_movies(),
            Route::Home | Route::Weather => {}
        }
    }

    pub fn move_home_selection(&mut self, direction: i32) {
        self.home_selection = wrap_index(self.home_selection, HOME_CARDS.len(), direction);
    }

    pub fn open_home_card(&mut self, index: usize) {
        if let Some(route) = HOME_CARDS.get(index).copied() {
            self.home_selection = index;
            self.navigate(route);
        }
    }

    // -- Weather ------------------------------------------------------------

    pub fn submit_weather(&mut self, city: &str) {
        let before = self.weather.latest;
        dispatch_mvi!(
            self,
            weather,
            WeatherReducer,
            WeatherIntent::Search {
                city: city.to_string(),
            }
        );
        if self.weather.latest == before {
            return;
        }
        let city = self.weather.city.clone().unwrap_or_default();
        self.send_command(UiCommand::FetchWeather {
            token: self.weather.latest,
            city,
        });
    }

    // -- Dogs ---------------------------------------------------------------

    pub fn load_breeds(&mut self) {
        dispatch_mvi!(self, dogs, DogReducer, DogIntent::LoadBreeds);
        self.send_command(UiCommand::FetchBreeds {
            token: self.dogs.breeds_token,
        });
    }

    pub fn filter_breeds(&mut self, query: &str) {
        dispatch_mvi!(
            self,
            dogs,
            DogReducer,
            DogIntent::Filter {
                query: query.to_string(),
            }
        );
        self.breed_cursor = 0;
    }

    pub fn move_breed_cursor(&mut self, direction: i32) {
        let len = self.dogs.filtered_breeds().len();
        self.breed_cursor = wrap_index(self.breed_cursor, len, direction);
    }

    /// Breed under the cursor in the filtered list.
    pub fn highlighted_breed(&self) -> Option<String> {
        self.dogs
            .filtered_breeds()
            .get(self.breed_cursor)
            .map(|breed| breed.to_string())
    }

    pub fn select_highlighted_breed(&mut self) {
        if let Some(breed) = self.highlighted_breed() {
            self.select_breed(&breed);
        }
    }

    pub fn select_breed(&mut self, breed: &str) {
        dispatch_mvi!(
            self,
            dogs,
            DogReducer,
            DogIntent::Select {
                breed: breed.to_string(),
            }
        );
        self.send_command(UiCommand::FetchBreedImages {
            token: self.dogs.images_token,
            breed: breed.to_string(),
        });
    }

    pub fn set_dog_page(&mut self, page: usize) {
        dispatch_mvi!(self, dogs, DogReducer, DogIntent::SetPage { page });
    }

    pub fn navigate_dog_page(&mut self, nav: PageNav) {
        let pager = Paginator::new(self.dogs.current_page, self.dogs.total_pages());
        if let Some(page) = pager.target(nav) {
            self.set_dog_page(page);
        }
    }

    // -- Movies -------------------------------------------------------------

    pub fn set_movie_query(&mut self, query: &str) {
        let before = self.movies.search_key();
        dispatch_mvi!(
            self,
            movies,
            MovieReducer,
            MovieIntent::SetQuery {
                query: query.to_string(),
            }
        );
        self.sync_movie_search(before);
    }

    pub fn set_movie_page(&mut self, page: u32) {
        let before = self.movies.search_key();
        dispatch_mvi!(self, movies, MovieReducer, MovieIntent::SetPage { page });
        self.sync_movie_search(before);
    }

    pub fn navigate_movie_page(&mut self, nav: PageNav) {
        let pager = Paginator::new(
            self.movies.current_page as usize,
            self.movies.total_pages as usize,
        );
        if let Some(page) = pager.target(nav) {
            self.set_movie_page(page as u32);
        }
    }

    pub fn update_movie_filter(&mut self, update: FilterUpdate) {
        let before = self.movies.search_key();
        dispatch_mvi!(
            self,
            movies,
            MovieReducer,
            MovieIntent::UpdateFilter(update)
        );
        self.sync_movie_search(before);
    }

    pub fn toggle_movie_filters(&mut self) {
        dispatch_mvi!(self, movies, MovieReducer, MovieIntent::ToggleFilters);
        if !self.movies.filters.show_filters {
            self.movie_focus = MovieFocus::Search;
        }
    }

    pub fn cycle_movie_focus(&mut self, direction: i32) {
        if !self.movies.filters.show_filters {
            self.movie_focus = MovieFocus::Search;
            return;
        }
        const ORDER: [MovieFocus; 3] = [MovieFocus::Search, MovieFocus::Kind, MovieFocus::Year];
        let current = ORDER
            .iter()
            .position(|f| *f == self.movie_focus)
            .unwrap_or(0);
        self.movie_focus = ORDER[wrap_index(current, ORDER.len(), direction)];
    }

    pub fn cycle_movie_kind(&mut self, direction: i32) {
        let kind = self.movies.filters.kind;
        let next = if direction.is_negative() {
            kind.previous()
        } else {
            kind.next()
        };
        self.update_movie_filter(FilterUpdate::Kind(next));
    }

    /// Re-search when query, page, year or type changed.
    fn sync_movie_search(&mut self, before: SearchKey) {
        if self.movies.search_key() != before {
            self.search_movies();
        }
    }

    fn search_movies(&mut self) {
        dispatch_mvi!(self, movies, MovieReducer, MovieIntent::Search);
        let query = self.movies.query_for(&self.default_query);
        self.send_command(UiCommand::SearchMovies {
            token: self.movies.latest,
            query,
        });
    }

    // -- Completions --------------------------------------------------------

    pub fn on_fetched(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Weather { token, result } => {
                if token != self.weather.latest {
                    tracing::debug!(%token, latest = %self.weather.latest, "Dropping stale weather reply");
                }
                let intent = match result {
                    Ok(reading) => WeatherIntent::Loaded { token, reading },
                    Err(err) => {
                        tracing::warn!(error_type = err.error_type(), error = %err, "Weather fetch failed");
                        WeatherIntent::Failed {
                            token,
                            message: err.user_message(),
                        }
                    }
                };
                dispatch_mvi!(self, weather, WeatherReducer, intent);
            }
            FetchOutcome::Breeds { token, result } => {
                let intent = match result {
                    Ok(breeds) => DogIntent::BreedsLoaded { token, breeds },
                    Err(err) => {
                        tracing::warn!(error_type = err.error_type(), error = %err, "Breed directory fetch failed");
                        DogIntent::BreedsFailed {
                            token,
                            message: err.user_message(),
                        }
                    }
                };
                dispatch_mvi!(self, dogs, DogReducer, intent);
                self.clamp_breed_cursor();
            }
            FetchOutcome::BreedImages {
                token,
                breed,
                result,
            } => {
                if token != self.dogs.images_token {
                    tracing::debug!(%token, %breed, "Dropping stale breed images");
                }
                let intent = match result {
                    Ok(images) => DogIntent::ImagesLoaded { token, images },
                    Err(err) => {
                        tracing::warn!(error_type = err.error_type(), error = %err, %breed, "Breed images fetch failed");
                        DogIntent::ImagesFailed {
                            token,
                            message: err.user_message(),
                        }
                    }
                };
                dispatch_mvi!(self, dogs, DogReducer, intent);
            }
            FetchOutcome::Movies { token, result } => {
                if token != self.movies.latest {
                    tracing::debug!(%token, latest = %self.movies.latest, "Dropping stale movie page");
                }
                let intent = match result {
                    Ok(page) => MovieIntent::Loaded { token, page },
                    Err(err) => {
                        tracing::warn!(error_type = err.error_type(), error = %err, "Movie search failed");
                        MovieIntent::Failed {
                            token,
                            message: err.user_message(),
                        }
                    }
                };
                dispatch_mvi!(self, movies, MovieReducer, intent);
            }
        }
    }

    /// True while the visible page waits on a fetch.
    pub fn is_busy(&self) -> bool {
        match self.route {
            Route::Home => false,
            Route::Weather => self.weather.is_loading(),
            Route::Dogs => self.dogs.is_loading(),
            Route::Movies => self.movies.is_loading(),
        }
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.loader.advance();
        }
    }

    fn clamp_breed_cursor(&mut self) {
        let len = self.dogs.filtered_breeds().len();
        if self.breed_cursor >= len {
            self.breed_cursor = len.saturating_sub(1);
        }
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.command_sender else {
            self.fail_command(command, "Background worker is not running".to_string());
            return;
        };
        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
            }
            Err(err) => {
                let message = format!("Failed to dispatch request: {err}");
                self.fail_command(err.into_inner(), message);
            }
        }
    }

    /// Settle the container of a command that never reached the worker.
    fn fail_command(&mut self, command: UiCommand, message: String) {
        tracing::error!(command = command.kind(), %message, "Command not dispatched");
        self.last_command_error = Some(message.clone());
        match command {
            UiCommand::FetchWeather { token, .. } => {
                dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Failed { token, message });
            }
            UiCommand::FetchBreeds { token } => {
                dispatch_mvi!(self, dogs, DogReducer, DogIntent::BreedsFailed { token, message });
            }
            UiCommand::FetchBreedImages { token, .. } => {
                dispatch_mvi!(self, dogs, DogReducer, DogIntent::ImagesFailed { token, message });
            }
            UiCommand::SearchMovies { token, .. } => {
                dispatch_mvi!(self, movies, MovieReducer, MovieIntent::Failed { token, message });
            }
        }
    }
}

fn temperature_unit(units: &str) -> &'static str {
    match units {
        "imperial" => "°F",
        "standard" => " K",
        _ => "°C",
    }
}

/// Step `current` by `direction` through `len` slots, wrapping at both ends.
fn wrap_index(current: usize, len: usize, direction: i32) -> usize {
    if len == 0 {
        return 0;
    }
    let current = current.min(len - 1);
    if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let mut app = App::new(&Config::default());
        let (tx, rx) = mpsc::channel(16);
        app.set_command_sender(tx);
        (app, rx)
    }

    #[test]
    fn wrap_index_wraps_both_ways() {
        assert_eq!(wrap_index(0, 3, -1), 2);
        assert_eq!(wrap_index(2, 3, 1), 0);
        assert_eq!(wrap_index(1, 3, 1), 2);
        assert_eq!(wrap_index(5, 0, 1), 0);
    }

    #[test]
    fn missing_worker_fails_the_request() {
        let mut app = App::new(&Config::default());
        app.submit_weather("Paris");
        assert_eq!(
            app.weather().error(),
            Some("Background worker is not running")
        );
        assert!(app.last_command_error().is_some());
    }

    #[test]
    fn blank_weather_search_sends_nothing() {
        let (mut app, mut rx) = make_app();
        app.submit_weather("   ");
        assert!(rx.try_recv().is_err());
        assert!(app.weather().reading.is_idle());
    }

    #[test]
    fn full_channel_fails_the_request() {
        let mut app = App::new(&Config::default());
        let (tx, _rx) = mpsc::channel(1);
        app.set_command_sender(tx);
        app.submit_weather("Paris");
        app.submit_weather("Oslo");
        assert!(app.weather().error().unwrap().contains("Failed to dispatch"));
    }

    #[test]
    fn focused_field_follows_route_and_focus() {
        let (mut app, _rx) = make_app();
        assert_eq!(app.focused_field(), None);
        app.navigate(Route::Movies);
        assert_eq!(app.focused_field(), Some(SearchField::Movies));
        app.toggle_movie_filters();
        app.cycle_movie_focus(1);
        assert_eq!(app.focused_field(), None);
        app.cycle_movie_focus(1);
        assert_eq!(app.focused_field(), Some(SearchField::Year));
    }
}
