use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub dogs: DogsConfig,
    #[serde(default)]
    pub movies: MoviesConfig,
}

/// Settings shared by every upstream HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// OpenWeatherMap current-conditions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL without path (e.g., "https://api.openweathermap.org").
    #[serde(default = "default_weather_url")]
    pub base_url: String,
    /// API key. Falls back to `OPENWEATHER_API_KEY` when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Unit system: "metric", "imperial" or "standard".
    #[serde(default = "default_units")]
    pub units: String,
}

/// dog.ceo image endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogsConfig {
    #[serde(default = "default_dogs_url")]
    pub base_url: String,
    /// Images shown per page in the gallery.
    #[serde(default = "default_images_per_page")]
    pub images_per_page: usize,
}

/// OMDb search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoviesConfig {
    #[serde(default = "default_movies_url")]
    pub base_url: String,
    /// API key. Falls back to `OMDB_API_KEY` when absent.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Query issued when the user has not searched for anything yet.
    #[serde(default = "default_query")]
    pub default_query: String,
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_units() -> String {
    "metric".to_string()
}

fn default_dogs_url() -> String {
    "https://dog.ceo/api".to_string()
}

fn default_images_per_page() -> usize {
    12
}

fn default_movies_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_query() -> String {
    "popular".to_string()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_url(),
            api_key: None,
            units: default_units(),
        }
    }
}

impl Default for DogsConfig {
    fn default() -> Self {
        Self {
            base_url: default_dogs_url(),
            images_per_page: default_images_per_page(),
        }
    }
}

impl Default for MoviesConfig {
    fn default() -> Self {
        Self {
            base_url: default_movies_url(),
            api_key: None,
            default_query: default_query(),
        }
    }
}
