//! Adapters for the three upstream HTTP APIs.
//!
//! Each adapter sits behind an `async_trait` port so the command worker can
//! hold `Arc<dyn ...>` handles and tests can swap in fakes.

pub mod dogs;
pub mod error;
pub mod http;
pub mod movies;
pub mod weather;

pub use dogs::{DogCeoClient, DogSource};
pub use error::ApiError;
pub use http::build_client;
pub use movies::{
    MediaType, MovieQuery, MovieSearchPage, MovieSource, MovieSummary, OmdbClient,
    RESULTS_PER_PAGE,
};
pub use weather::{Condition, OpenWeatherClient, WeatherReading, WeatherSource};
