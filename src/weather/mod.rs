//! Weather proxy client
//!
//! Fetches current conditions from OpenWeatherMap for a coordinate. The
//! API key comes from config; without one the HTTP layer reports the
//! panels as unconfigured instead of calling out.

use crate::constants::api::OPENWEATHER_URL;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Current conditions at a point, trimmed for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Temperature in whole degrees Celsius
    pub temp: i64,
    /// Feels-like temperature in whole degrees Celsius
    pub feels_like: i64,
    /// Relative humidity in percent
    pub humidity: i64,
    /// Pressure in hPa
    pub pressure: i64,
    /// Wind speed in m/s, one decimal
    pub wind_speed: f64,
    /// Condition description ("light rain")
    pub description: String,
    /// Condition icon code ("10d")
    pub icon: String,
    /// Cloud cover in percent
    pub clouds: i64,
}

/// OpenWeatherMap current-weather response (relevant fields only)
#[derive(Debug, Deserialize)]
struct OwmResponse {
    main: OwmMain,
    weather: Vec<OwmCondition>,
    wind: OwmWind,
    clouds: OwmClouds,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    humidity: i64,
    pressure: i64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: i64,
}

/// OpenWeatherMap client
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: String,
}

impl WeatherClient {
    /// Create a client with the given API key (may be empty)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Whether a usable API key is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fetch current conditions for a coordinate (metric units)
    pub async fn fetch(&self, coords: Coordinates) -> Result<WeatherData> {
        if !self.is_configured() {
            return Err(Error::Weather("API key not configured".to_string()));
        }

        let url = format!(
            "{}?lat={}&lon={}&units=metric&appid={}",
            OPENWEATHER_URL, coords.lat, coords.lon, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Weather(format!("Weather request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Weather(format!(
                "Weather API returned status: {}",
                response.status()
            )));
        }

        let raw: OwmResponse = response
            .json()
            .await
            .map_err(|e| Error::Weather(format!("Failed to parse weather response: {}", e)))?;

        parse_weather(raw)
    }
}

/// Trim a raw response to the display fields, rounding as the UI expects
fn parse_weather(raw: OwmResponse) -> Result<WeatherData> {
    let condition = raw
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| Error::Weather("No condition in weather response".to_string()))?;

    Ok(WeatherData {
        temp: raw.main.temp.round() as i64,
        feels_like: raw.main.feels_like.round() as i64,
        humidity: raw.main.humidity,
        pressure: raw.main.pressure,
        wind_speed: (raw.wind.speed * 10.0).round() / 10.0,
        description: condition.description,
        icon: condition.icon,
        clouds: raw.clouds.all,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> OwmResponse {
        serde_json::from_value(serde_json::json!({
            "main": {
                "temp": 21.64,
                "feels_like": 21.08,
                "humidity": 52,
                "pressure": 1017
            },
            "weather": [
                {"description": "scattered clouds", "icon": "03d"}
            ],
            "wind": {"speed": 3.57},
            "clouds": {"all": 40}
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_weather_rounding() {
        let data = parse_weather(sample_response()).unwrap();

        assert_eq!(data.temp, 22);
        assert_eq!(data.feels_like, 21);
        assert_eq!(data.humidity, 52);
        assert_eq!(data.pressure, 1017);
        assert_eq!(data.wind_speed, 3.6);
        assert_eq!(data.description, "scattered clouds");
        assert_eq!(data.icon, "03d");
        assert_eq!(data.clouds, 40);
    }

    #[test]
    fn test_parse_weather_no_condition() {
        let raw: OwmResponse = serde_json::from_value(serde_json::json!({
            "main": {"temp": 0.0, "feels_like": 0.0, "humidity": 0, "pressure": 0},
            "weather": [],
            "wind": {"speed": 0.0},
            "clouds": {"all": 0}
        }))
        .unwrap();

        assert!(parse_weather(raw).is_err());
    }

    #[test]
    fn test_is_configured() {
        assert!(!WeatherClient::new("").is_configured());
        assert!(WeatherClient::new("abc123").is_configured());
    }

    #[tokio::test]
    async fn test_fetch_without_key_errors() {
        let client = WeatherClient::new("");
        let result = client.fetch(Coordinates::new(0.0, 0.0)).await;
        assert!(matches!(result, Err(Error::Weather(_))));
    }

    #[test]
    fn test_weather_data_serialization() {
        let data = parse_weather(sample_response()).unwrap();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: WeatherData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, data);
    }
}
