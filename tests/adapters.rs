//! HTTP adapters against a local mock upstream.

mod common;

use apiscope::api::{
    build_client, ApiError, DogCeoClient, DogSource, MediaType, MovieQuery, MovieSource,
    OmdbClient, OpenWeatherClient, WeatherSource,
};
use common::config_for;
use common::mock_backend::{MockBackend, MockResponse};

const PARIS: &str = r#"{
    "name": "Paris",
    "sys": {"country": "FR"},
    "main": {"temp": 18.4, "feels_like": 17.9, "temp_min": 16.0, "temp_max": 20.1,
             "pressure": 1012, "humidity": 64},
    "wind": {"speed": 4.1},
    "clouds": {"all": 40},
    "visibility": 10000,
    "weather": [{"main": "Clouds", "description": "scattered clouds", "icon": "03d"}]
}"#;

fn weather_client(mock: &MockBackend) -> OpenWeatherClient {
    let config = config_for(&mock.base_url());
    OpenWeatherClient::new(build_client(&config.http).unwrap(), &config.weather)
}

fn dog_client(mock: &MockBackend) -> DogCeoClient {
    let config = config_for(&mock.base_url());
    DogCeoClient::new(build_client(&config.http).unwrap(), &config.dogs)
}

fn movie_client(mock: &MockBackend) -> OmdbClient {
    let config = config_for(&mock.base_url());
    OmdbClient::new(build_client(&config.http).unwrap(), &config.movies)
}

fn query(title: &str, page: u32) -> MovieQuery {
    MovieQuery {
        title: title.to_string(),
        page,
        year: None,
        kind: MediaType::All,
    }
}

// -- Weather ------------------------------------------------------------------

#[tokio::test]
async fn weather_reading_is_normalized() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(PARIS)).await;

    let reading = weather_client(&mock).current("Paris").await.unwrap();
    assert_eq!(reading.location, "Paris");
    assert_eq!(reading.country, "FR");
    assert_eq!(reading.humidity, 64);
    assert_eq!(reading.wind_kmh(), 15);
    assert_eq!(reading.visibility_km(), Some(10.0));

    let request = mock.last_request().await;
    assert_eq!(request.path, "/data/2.5/weather");
    assert_eq!(request.param("q"), Some("Paris"));
    assert_eq!(request.param("units"), Some("metric"));
    assert_eq!(request.param("appid"), Some("weather-test-key"));
}

#[tokio::test]
async fn city_with_spaces_is_encoded() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(PARIS)).await;

    weather_client(&mock).current("New York").await.unwrap();
    assert_eq!(mock.last_request().await.param("q"), Some("New York"));
}

#[tokio::test]
async fn unknown_city_is_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "city not found"))
        .await;

    let err = weather_client(&mock).current("Atlantis").await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.user_message(), "City 'Atlantis' not found");
}

#[tokio::test]
async fn rejected_key_maps_to_friendly_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(401, "Invalid API key"))
        .await;

    let err = weather_client(&mock).current("Paris").await.unwrap_err();
    assert!(matches!(err, ApiError::Upstream { status: 401, .. }));
    assert!(err.user_message().contains("401"));
}

#[tokio::test]
async fn missing_weather_key_skips_the_network() {
    let mock = MockBackend::start().await;
    let mut config = config_for(&mock.base_url());
    config.weather.api_key = None;
    let client = OpenWeatherClient::new(build_client(&config.http).unwrap(), &config.weather);

    let err = client.current("Paris").await.unwrap_err();
    assert!(matches!(err, ApiError::NotConfigured { .. }));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let mut config = config_for("http://127.0.0.1:9");
    config.http.connect_timeout_seconds = 1;
    let client = OpenWeatherClient::new(build_client(&config.http).unwrap(), &config.weather);

    let err = client.current("Paris").await.unwrap_err();
    assert_eq!(err.error_type(), "network_failure");
}

// -- Dogs ---------------------------------------------------------------------

#[tokio::test]
async fn breed_directory_is_sorted_top_level_names() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"message": {"hound": ["afghan", "basset"], "akita": [], "boxer": []},
            "status": "success"}"#,
    ))
    .await;

    let breeds = dog_client(&mock).breeds().await.unwrap();
    assert_eq!(breeds, vec!["akita", "boxer", "hound"]);
    assert_eq!(mock.last_request().await.path, "/api/breeds/list/all");
}

#[tokio::test]
async fn breed_images_are_returned_in_order() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"message": ["https://img/1.jpg", "https://img/2.jpg"], "status": "success"}"#,
    ))
    .await;

    let images = dog_client(&mock).breed_images("hound").await.unwrap();
    assert_eq!(images, vec!["https://img/1.jpg", "https://img/2.jpg"]);
    assert_eq!(mock.last_request().await.path, "/api/breed/hound/images");
}

#[tokio::test]
async fn unknown_breed_is_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::with_status(
        404,
        r#"{"status": "error", "message": "Breed not found (master breed does not exist)",
            "code": 404}"#,
    ))
    .await;

    let err = dog_client(&mock).breed_images("dragon").await.unwrap_err();
    assert_eq!(err.user_message(), "Breed 'dragon' not found");
}

// -- Movies -------------------------------------------------------------------

#[tokio::test]
async fn search_sends_title_and_page() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"Search": [
              {"Title": "Batman Begins", "Year": "2005", "imdbID": "tt0372784",
               "Type": "movie", "Poster": "https://img/bb.jpg"},
              {"Title": "Batman", "Year": "1989", "imdbID": "tt0096895",
               "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "42", "Response": "True"}"#,
    ))
    .await;

    let page = movie_client(&mock).search(&query("batman", 2)).await.unwrap();
    assert_eq!(page.movies.len(), 2);
    assert_eq!(page.total_results, 42);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.movies[1].poster, None);

    let request = mock.last_request().await;
    assert_eq!(request.path, "/");
    assert_eq!(request.param("s"), Some("batman"));
    assert_eq!(request.param("page"), Some("2"));
    assert_eq!(request.param("apikey"), Some("omdb-test-key"));
    assert_eq!(request.param("y"), None);
    assert_eq!(request.param("type"), None);
}

#[tokio::test]
async fn filters_become_query_params() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"Search": [], "totalResults": "0", "Response": "True"}"#,
    ))
    .await;

    let mut q = query("office", 1);
    q.year = Some("2005".to_string());
    q.kind = MediaType::Series;
    movie_client(&mock).search(&q).await.unwrap();

    let request = mock.last_request().await;
    assert_eq!(request.param("y"), Some("2005"));
    assert_eq!(request.param("type"), Some("series"));
}

#[tokio::test]
async fn no_matches_is_an_empty_page() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"Response": "False", "Error": "Movie not found!"}"#,
    ))
    .await;

    let page = movie_client(&mock)
        .search(&query("zzzzqqq", 1))
        .await
        .unwrap();
    assert!(page.movies.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn omdb_error_envelope_is_upstream_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"Response": "False", "Error": "Too many results."}"#,
    ))
    .await;

    let err = movie_client(&mock).search(&query("a", 1)).await.unwrap_err();
    assert!(matches!(err, ApiError::Upstream { status: 400, .. }));
    assert!(err.to_string().contains("Too many results."));
}

#[tokio::test]
async fn missing_omdb_key_is_not_configured() {
    let mock = MockBackend::start().await;
    let mut config = config_for(&mock.base_url());
    config.movies.api_key = None;
    let client = OmdbClient::new(build_client(&config.http).unwrap(), &config.movies);

    let err = client.search(&query("batman", 1)).await.unwrap_err();
    assert!(err.to_string().contains("OMDB_API_KEY"));
    assert!(mock.captured_requests().await.is_empty());
}
