//! Background command worker.
//!
//! Receives `UiCommand`s from the UI thread, runs each fetch as its own
//! tokio task and hands the tagged outcome back. No ordering is enforced
//! here: containers drop completions whose token is no longer the latest.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::{
    build_client, ApiError, DogCeoClient, DogSource, MovieSearchPage, MovieSource, OmdbClient,
    OpenWeatherClient, WeatherReading, WeatherSource,
};
use crate::config::Config;
use crate::ui::app::UiCommand;
use crate::ui::fetch::RequestToken;

/// Result of one fetch, tagged with the token it was issued under.
#[derive(Debug)]
pub enum FetchOutcome {
    Weather {
        token: RequestToken,
        result: Result<WeatherReading, ApiError>,
    },
    Breeds {
        token: RequestToken,
        result: Result<Vec<String>, ApiError>,
    },
    BreedImages {
        token: RequestToken,
        breed: String,
        result: Result<Vec<String>, ApiError>,
    },
    Movies {
        token: RequestToken,
        result: Result<MovieSearchPage, ApiError>,
    },
}

/// Adapter handles used by the worker.
#[derive(Clone)]
pub struct Sources {
    pub weather: Arc<dyn WeatherSource>,
    pub dogs: Arc<dyn DogSource>,
    pub movies: Arc<dyn MovieSource>,
}

impl Sources {
    /// Build the real HTTP adapters sharing one client.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let client = build_client(&config.http)?;
        Ok(Self {
            weather: Arc::new(OpenWeatherClient::new(client.clone(), &config.weather)),
            dogs: Arc::new(DogCeoClient::new(client.clone(), &config.dogs)),
            movies: Arc::new(OmdbClient::new(client, &config.movies)),
        })
    }
}

/// Run one command to completion.
pub async fn execute(sources: &Sources, command: UiCommand) -> FetchOutcome {
    match command {
        UiCommand::FetchWeather { token, city } => FetchOutcome::Weather {
            token,
            result: sources.weather.current(&city).await,
        },
        UiCommand::FetchBreeds { token } => FetchOutcome::Breeds {
            token,
            result: sources.dogs.breeds().await,
        },
        UiCommand::FetchBreedImages { token, breed } => {
            let result = sources.dogs.breed_images(&breed).await;
            FetchOutcome::BreedImages {
                token,
                breed,
                result,
            }
        }
        UiCommand::SearchMovies { token, query } => FetchOutcome::Movies {
            token,
            result: sources.movies.search(&query).await,
        },
    }
}

/// Serve commands until the channel closes.
///
/// `deliver` returns `false` once the UI has gone away.
pub async fn run<F>(mut commands: mpsc::Receiver<UiCommand>, sources: Sources, deliver: F)
where
    F: Fn(FetchOutcome) -> bool + Send + Sync + 'static,
{
    let deliver = Arc::new(deliver);
    while let Some(command) = commands.recv().await {
        tracing::debug!(command = command.kind(), token = %command.token(), "Dispatching fetch");
        let sources = sources.clone();
        let deliver = Arc::clone(&deliver);
        tokio::spawn(async move {
            let outcome = execute(&sources, command).await;
            if !deliver(outcome) {
                tracing::debug!("UI closed before fetch completed");
            }
        });
    }
    tracing::debug!("Command channel closed, worker stopping");
}
