//! OpenWeatherMap current-conditions adapter.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::http::{endpoint, get_text, snippet};
use crate::config::{SecureString, WeatherConfig, WEATHER_KEY_ENV};

/// Current conditions for one city, normalized from the upstream schema.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReading {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Relative humidity in percent.
    pub humidity: u32,
    /// Pressure in hPa.
    pub pressure: u32,
    /// Wind speed in m/s (metric units).
    pub wind_speed: f64,
    /// Cloud cover in percent.
    pub cloudiness: u32,
    /// Visibility in meters, when reported.
    pub visibility: Option<u32>,
    pub description: String,
    /// Icon code such as "10d".
    pub icon: String,
}

/// Broad condition family derived from the icon code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Storm,
    Snow,
    Mist,
}

impl WeatherReading {
    pub fn wind_kmh(&self) -> i64 {
        (self.wind_speed * 3.6).round() as i64
    }

    pub fn visibility_km(&self) -> Option<f64> {
        self.visibility.map(|meters| f64::from(meters) / 1000.0)
    }

    pub fn condition(&self) -> Condition {
        match self.icon.get(..2) {
            Some("01") => Condition::Clear,
            Some("09") | Some("10") => Condition::Rain,
            Some("11") => Condition::Storm,
            Some("13") => Condition::Snow,
            Some("50") => Condition::Mist,
            _ => Condition::Clouds,
        }
    }
}

/// Port for weather lookups.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReading, ApiError>;
}

pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    units: String,
    api_key: Option<SecureString>,
}

impl OpenWeatherClient {
    pub fn new(client: Client, config: &WeatherConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            units: config.units.clone(),
            api_key: config.api_key.clone().map(SecureString::new),
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReading, ApiError> {
        let Some(api_key) = &self.api_key else {
            return Err(ApiError::NotConfigured {
                service: "OpenWeatherMap",
                hint: WEATHER_KEY_ENV,
            });
        };

        let url = endpoint(
            &self.base_url,
            "data/2.5/weather",
            &[
                ("q", city),
                ("units", self.units.as_str()),
                ("appid", api_key.expose()),
            ],
        )?;
        let (status, body) = get_text(&self.client, "weather", url).await?;

        if status.as_u16() == 404 {
            return Err(ApiError::NotFound {
                what: format!("City '{city}'"),
            });
        }
        if !status.is_success() {
            let message = serde_json::from_str::<RawError>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| snippet(&body));
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let raw: RawWeather =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(raw.into_reading())
    }
}

#[derive(Debug, Deserialize)]
struct RawError {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWeather {
    name: String,
    #[serde(default)]
    sys: RawSys,
    main: RawMain,
    #[serde(default)]
    wind: RawWind,
    #[serde(default)]
    clouds: RawClouds,
    visibility: Option<u32>,
    #[serde(default)]
    weather: Vec<RawCondition>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RawWind {
    speed: f64,
}

#[derive(Debug, Default, Deserialize)]
struct RawClouds {
    all: u32,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    description: String,
    icon: String,
}

impl RawWeather {
    fn into_reading(self) -> WeatherReading {
        let (description, icon) = self
            .weather
            .into_iter()
            .next()
            .map(|c| (c.description, c.icon))
            .unwrap_or_default();

        WeatherReading {
            location: self.name,
            country: self.sys.country.unwrap_or_default(),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            humidity: self.main.humidity.round() as u32,
            pressure: self.main.pressure.round() as u32,
            wind_speed: self.wind.speed,
            cloudiness: self.clouds.all,
            visibility: self.visibility,
            description,
            icon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = r#"{
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 14.6, "feels_like": 13.9, "temp_min": 13.1, "temp_max": 15.8,
                 "pressure": 1012, "humidity": 82},
        "visibility": 9000,
        "wind": {"speed": 4.12, "deg": 230},
        "clouds": {"all": 75},
        "sys": {"country": "FR"},
        "name": "Paris",
        "cod": 200
    }"#;

    #[test]
    fn parses_owm_payload() {
        let raw: RawWeather = serde_json::from_str(PARIS).unwrap();
        let reading = raw.into_reading();
        assert_eq!(reading.location, "Paris");
        assert_eq!(reading.country, "FR");
        assert_eq!(reading.humidity, 82);
        assert_eq!(reading.pressure, 1012);
        assert_eq!(reading.description, "light rain");
        assert_eq!(reading.condition(), Condition::Rain);
        assert_eq!(reading.wind_kmh(), 15);
        assert_eq!(reading.visibility_km(), Some(9.0));
    }

    #[test]
    fn missing_conditions_fall_back_to_clouds() {
        let raw: RawWeather = serde_json::from_str(
            r#"{"name": "Nowhere", "main": {"temp": 1, "feels_like": 1, "temp_min": 1,
                "temp_max": 1, "pressure": 1000, "humidity": 50}}"#,
        )
        .unwrap();
        let reading = raw.into_reading();
        assert_eq!(reading.icon, "");
        assert_eq!(reading.condition(), Condition::Clouds);
        assert_eq!(reading.visibility_km(), None);
        assert_eq!(reading.country, "");
    }

    #[test]
    fn icon_prefix_maps_to_condition() {
        let mut reading: WeatherReading =
            serde_json::from_str::<RawWeather>(PARIS).unwrap().into_reading();
        for (icon, expected) in [
            ("01n", Condition::Clear),
            ("03d", Condition::Clouds),
            ("09d", Condition::Rain),
            ("11d", Condition::Storm),
            ("13n", Condition::Snow),
            ("50d", Condition::Mist),
        ] {
            reading.icon = icon.to_string();
            assert_eq!(reading.condition(), expected, "icon {icon}");
        }
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = OpenWeatherClient::new(Client::new(), &WeatherConfig::default());
        let err = client.current("Paris").await.unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured { .. }));
    }
}
