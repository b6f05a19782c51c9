mod credentials;
mod loader;
mod types;

pub use credentials::{resolve_api_keys, SecureString, OMDB_KEY_ENV, WEATHER_KEY_ENV};
pub use loader::ConfigError;
pub use types::{Config, DogsConfig, HttpConfig, MoviesConfig, WeatherConfig};
